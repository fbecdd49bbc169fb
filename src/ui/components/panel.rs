// src/ui/components/panel.rs
//! Solid panel with a centered label

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Text};

use crate::ui::core::{Drawable, Measurable};
use crate::ui::measure::{MeasureSpec, resolve_size};
use crate::ui::styling::WHITE;

/// Content child that fills its bounds with a color and centers a label.
///
/// The panel's content size is what it asks for under `WrapContent`; bounded
/// constraints clamp it and exact constraints override it.
///
/// # Examples
/// ```ignore
/// let panel = Panel::new("Left", LEFT_PANEL_COLOR)
///     .with_content_size(Size::new(120, 120));
/// ```
pub struct Panel {
    bounds: Rectangle,
    label: heapless::String<32>,
    background: Rgb565,
    foreground: Rgb565,
    content_size: Size,
    dirty: bool,
}

impl Panel {
    /// Create a panel sized to fit its label.
    ///
    /// Labels longer than 32 bytes are dropped.
    pub fn new(label: &str, background: Rgb565) -> Self {
        let mut label_string = heapless::String::new();
        label_string.push_str(label).ok();

        const HORIZONTAL_PADDING: u32 = 20;
        const VERTICAL_PADDING: u32 = 12;

        let font = &FONT_6X10;
        let text_width = (label_string.chars().count() as u32) * font.character_size.width;
        let content_size = Size::new(
            text_width + 2 * HORIZONTAL_PADDING,
            font.character_size.height + 2 * VERTICAL_PADDING,
        );

        Self {
            bounds: Rectangle::zero(),
            label: label_string,
            background,
            foreground: WHITE,
            content_size,
            dirty: true,
        }
    }

    /// Override the size the panel asks for under `WrapContent`.
    pub fn with_content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self.dirty = true;
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground = color;
        self.dirty = true;
        self
    }

    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size != size {
            self.content_size = size;
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }
}

impl Measurable for Panel {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            resolve_size(self.content_size.width, width),
            resolve_size(self.content_size.height, height),
        )
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }
}

impl Drawable for Panel {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(display)?;

        if !self.label.is_empty() {
            let text_style = MonoTextStyle::new(&FONT_6X10, self.foreground);
            Text::with_alignment(
                &self.label,
                self.bounds.center(),
                text_style,
                TextAlignment::Center,
            )
            .draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
