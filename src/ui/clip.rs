// src/ui/clip.rs
//! Clipping a draw target to a triangular [`HitRegion`]
//!
//! embedded-graphics only ships rectangular clipping
//! (`DrawTargetExt::clipped`). [`RegionClipped`] wraps a target and drops
//! every pixel outside the region before forwarding the rest to the parent.
//!
//! The clip lives exactly as long as the borrow of the parent target, so it
//! is scoped to whatever is drawn through it and cannot leak into later
//! drawing.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::geometry::HitRegion;

/// Draw target wrapper that only forwards pixels inside a region.
pub struct RegionClipped<'a, T>
where
    T: DrawTarget,
{
    parent: &'a mut T,
    region: HitRegion,
}

impl<'a, T> RegionClipped<'a, T>
where
    T: DrawTarget,
{
    pub fn new(parent: &'a mut T, region: HitRegion) -> Self {
        Self { parent, region }
    }
}

impl<T> Dimensions for RegionClipped<'_, T>
where
    T: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        self.region
            .clip()
            .intersection(&self.parent.bounding_box())
    }
}

impl<T> DrawTarget for RegionClipped<'_, T>
where
    T: DrawTarget,
{
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let region = self.region;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .filter(move |pixel| region.contains(pixel.0)),
        )
    }
}

/// Extension trait adding region clipping to every draw target.
pub trait ClipToRegion: DrawTarget + Sized {
    /// Borrow this target with everything outside `region` discarded.
    fn clipped_to_region(&mut self, region: HitRegion) -> RegionClipped<'_, Self>;
}

impl<T> ClipToRegion for T
where
    T: DrawTarget,
{
    fn clipped_to_region(&mut self, region: HitRegion) -> RegionClipped<'_, Self> {
        RegionClipped::new(self, region)
    }
}
