// src/ui/components/divider.rs
//! Diagonal divider line drawn over a [`TriangleLayout`](crate::ui::TriangleLayout)

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::ui::core::{Drawable, Measurable};
use crate::ui::measure::{MeasureSpec, default_size};

/// A content-less element that strokes one line from its bottom-left corner
/// to its top-right corner.
///
/// The divider has no intrinsic size: it takes whatever its constraints
/// offer. It never takes part in touch handling.
///
/// The stroke is not anti-aliased. A generic `DrawTarget<Color = Rgb565>`
/// only accepts opaque pixels, so there is nothing to blend the line's edges
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    bounds: Rectangle,
    color: Rgb565,
    stroke_width: u32,
    dirty: bool,
}

impl Divider {
    pub fn new(color: Rgb565, stroke_width: u32) -> Self {
        Self {
            bounds: Rectangle::zero(),
            color,
            stroke_width,
            dirty: true,
        }
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Line endpoints: bottom-left, then top-right.
    pub fn endpoints(&self) -> (Point, Point) {
        let Rectangle { top_left, size } = self.bounds;
        (
            Point::new(top_left.x, top_left.y + size.height as i32),
            Point::new(top_left.x + size.width as i32, top_left.y),
        )
    }
}

impl Measurable for Divider {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(default_size(0, width), default_size(0, height))
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }
}

impl Drawable for Divider {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.bounds.is_zero_sized() {
            return Ok(());
        }

        // Aliased stroke; RGB565 targets cannot blend partial coverage
        let (start, end) = self.endpoints();
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(self.color, self.stroke_width))
            .draw(display)?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::styling::DIVIDER_COLOR;

    #[test]
    fn test_divider_fills_bounded_constraints() {
        let mut divider = Divider::new(DIVIDER_COLOR, 4);
        assert_eq!(
            divider.measure(MeasureSpec::Exactly(100), MeasureSpec::AtMost(80)),
            Size::new(100, 80)
        );
        assert_eq!(
            divider.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::zero()
        );
    }

    #[test]
    fn test_line_runs_bottom_left_to_top_right() {
        let mut divider = Divider::new(DIVIDER_COLOR, 1);
        divider.set_bounds(Rectangle::new(Point::new(10, 10), Size::new(20, 20)));
        assert_eq!(
            divider.endpoints(),
            (Point::new(10, 30), Point::new(30, 10))
        );

        let mut fb = FrameBuffer::new(Size::new(40, 40));
        divider.draw(&mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(20, 20)), Some(DIVIDER_COLOR));
        assert_eq!(fb.pixel(Point::new(12, 12)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(28, 28)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_zero_sized_divider_draws_nothing() {
        let divider = Divider::new(DIVIDER_COLOR, 4);
        let mut fb = FrameBuffer::new(Size::new(8, 8));
        divider.draw(&mut fb).unwrap();
        assert_eq!(fb.take_dirty(), None);
    }

    #[test]
    fn test_set_bounds_marks_dirty_only_on_change() {
        let mut divider = Divider::new(DIVIDER_COLOR, 4);
        let bounds = Rectangle::new(Point::zero(), Size::new(5, 5));
        divider.set_bounds(bounds);
        divider.mark_clean();
        divider.set_bounds(bounds);
        assert!(!divider.is_dirty());
        divider.set_bounds(Rectangle::new(Point::zero(), Size::new(6, 6)));
        assert!(divider.is_dirty());
    }
}
