// src/ui/core.rs
//! Core UI traits and types for the double-triangle UI system

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::measure::MeasureSpec;

/// A touch coordinate in container-local space.
///
/// Coordinates are signed: touches that land left of or above the container
/// are still delivered and simply miss every region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when both axes are strictly closer than `slop` to `other`.
    pub fn is_within(&self, other: TouchPoint, slop: u32) -> bool {
        self.x.abs_diff(other.x) < slop && self.y.abs_diff(other.y) < slop
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Finger lifted at a point
    Release(TouchPoint),
}

/// Which triangular half of a [`TriangleLayout`](crate::ui::TriangleLayout) was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleSide {
    Left,
    Right,
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Event was consumed without firing a callback
    Handled,
    /// Event completed a tap and the listener for this side was invoked
    Clicked(TriangleSide),
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);
}

/// Trait for elements that take part in a measure and layout pass.
///
/// The parent calls [`measure`](Measurable::measure) with the constraints it
/// derived for the child, then [`set_bounds`](Measurable::set_bounds) with the
/// final placement in the parent's coordinate space.
pub trait Measurable {
    /// Resolve this element's size against the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Place the element.
    fn set_bounds(&mut self, bounds: Rectangle);
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}
