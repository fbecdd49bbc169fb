//! Host screen for the double-triangle layout.
//!
//! Lays out two labelled panels in a [`TriangleLayout`], renders them into an
//! in-memory framebuffer, prints a coarse text preview and replays a scripted
//! touch sequence. Each click is reported as a "toast" through `log`.
//!
//! Run with `RUST_LOG=debug` to also see the layout's own measurement and
//! dispatch logging.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{error, info};

use double_triangle::framebuffer::FrameBuffer;
use double_triangle::ui::styling::{DIVIDER_COLOR, LEFT_PANEL_COLOR, RIGHT_PANEL_COLOR};
use double_triangle::ui::{
    Drawable, LayoutParams, MeasureSpec, Padding, Panel, TouchEvent, TouchPoint, Touchable,
    TriangleClickListener, TriangleLayout,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Side of each square panel.
const PANEL_SIZE_PX: u32 = 160;

/// Pixels per preview character.
const PREVIEW_STEP_PX: usize = 8;

/// Logs a toast for every click, like the host screen of a phone app.
struct Toaster;

impl TriangleClickListener<Panel, Panel> for Toaster {
    fn on_left_triangle_click(&mut self, view: &Panel) {
        info!("Toast: leftTriangleOnClick ({})", view.label());
    }

    fn on_right_triangle_click(&mut self, view: &Panel) {
        info!("Toast: rightTriangleOnClick ({})", view.label());
    }
}

/// Print the framebuffer at reduced resolution.
fn print_preview(fb: &FrameBuffer) {
    for y in (0..DISPLAY_HEIGHT_PX as usize).step_by(PREVIEW_STEP_PX) {
        let row: String = (0..DISPLAY_WIDTH_PX as usize)
            .step_by(PREVIEW_STEP_PX)
            .map(|x| match fb.pixel(Point::new(x as i32, y as i32)) {
                Some(c) if c == LEFT_PANEL_COLOR => 'L',
                Some(c) if c == RIGHT_PANEL_COLOR => 'R',
                Some(c) if c == DIVIDER_COLOR => '/',
                Some(c) if c == Rgb565::BLACK => '.',
                _ => '#',
            })
            .collect();
        println!("{row}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!(
        "double-triangle demo starting ({}x{})",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX
    );

    let mut layout = TriangleLayout::new(
        Panel::new("Left", LEFT_PANEL_COLOR),
        LayoutParams::fixed(PANEL_SIZE_PX, PANEL_SIZE_PX),
        Panel::new("Right", RIGHT_PANEL_COLOR),
        LayoutParams::fixed(PANEL_SIZE_PX, PANEL_SIZE_PX),
    )
    .with_padding(Padding::all(8));
    layout.set_click_listener(Toaster);

    let size = layout.measure(
        MeasureSpec::AtMost(DISPLAY_WIDTH_PX),
        MeasureSpec::AtMost(DISPLAY_HEIGHT_PX),
    );
    let origin = Point::new(
        (DISPLAY_WIDTH_PX.saturating_sub(size.width) / 2) as i32,
        (DISPLAY_HEIGHT_PX.saturating_sub(size.height) / 2) as i32,
    );
    layout.layout(origin);

    let mut fb = FrameBuffer::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    if let Err(e) = layout.draw(&mut fb) {
        error!("Draw error: {:?}", e);
        return;
    }
    layout.mark_clean();
    if let Some(area) = fb.take_dirty() {
        info!(
            "Rendered {}x{} at ({}, {})",
            area.size.width, area.size.height, area.top_left.x, area.top_left.y
        );
    }
    print_preview(&fb);

    // Touch coordinates are relative to the layout's top-left corner
    let inner = PANEL_SIZE_PX as i32;
    let script = [
        ("tap upper-left half", vec![press(30, 30), release(32, 31)]),
        (
            "tap lower-right half",
            vec![press(inner - 20, inner - 20), release(inner - 20, inner - 20)],
        ),
        (
            "drag across the divider",
            vec![press(30, 30), drag(80, 80), release(inner - 20, inner - 20)],
        ),
        ("tap in the padding", vec![press(2, 2), release(2, 2)]),
    ];

    for (name, events) in script {
        info!("Gesture: {name}");
        for event in events {
            layout.handle_touch(event);
        }
    }
}

fn press(x: i32, y: i32) -> TouchEvent {
    TouchEvent::Press(TouchPoint::new(x, y))
}

fn drag(x: i32, y: i32) -> TouchEvent {
    TouchEvent::Drag(TouchPoint::new(x, y))
}

fn release(x: i32, y: i32) -> TouchEvent {
    TouchEvent::Release(TouchPoint::new(x, y))
}
