//! Heap-backed framebuffer with pixel read-back and change tracking.
//!
//! Drawing targets this RAM buffer instead of a panel. Hosts can read pixels
//! back (tests do) and query the bounding box of pixels changed since the
//! last [`FrameBuffer::take_dirty`].

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// In-memory `DrawTarget<Color = Rgb565>`.
///
/// Pixels outside the buffer are silently dropped, like a real panel.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a new framebuffer filled with black pixels.
    pub fn new(size: Size) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            dirty: None,
        }
    }

    /// Color at `point`, or `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Bounding box of changed pixels since the previous call, resetting it.
    pub fn take_dirty(&mut self) -> Option<Rectangle> {
        let rect = self.dirty.take()?.to_rectangle();
        trace!(
            "Dirty region {}x{} at ({}, {})",
            rect.size.width, rect.size.height, rect.top_left.x, rect.top_left.y
        );
        Some(rect)
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(4, 0), Rgb565::RED),
            Pixel(Point::new(1, 2), Rgb565::RED),
        ])
        .unwrap();

        assert_eq!(fb.pixel(Point::new(1, 2)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(4, 0)), None);
        assert_eq!(fb.pixel(Point::new(0, -1)), None);
    }

    #[test]
    fn test_dirty_region_tracks_changed_pixels_only() {
        let mut fb = FrameBuffer::new(Size::new(8, 8));
        assert_eq!(fb.take_dirty(), None);

        fb.draw_iter([
            Pixel(Point::new(2, 3), Rgb565::BLUE),
            Pixel(Point::new(5, 1), Rgb565::BLUE),
            Pixel(Point::new(7, 7), Rgb565::BLACK),
        ])
        .unwrap();

        assert_eq!(
            fb.take_dirty(),
            Some(Rectangle::new(Point::new(2, 1), Size::new(4, 3)))
        );
        assert_eq!(fb.take_dirty(), None);
    }
}
