//! Triangle layout configuration
//!
//! Defaults are the fixed values the widget ships with. Hosts that keep
//! their UI description on flash can store the config as postcard bytes and
//! decode it with [`TriangleLayoutConfig::from_bytes`].

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use super::constants::{DIVIDER_COLOR_RGB, DIVIDER_STROKE_PX, TAP_SLOP_PX};
use super::{LayoutError, LayoutResult};
use crate::ui::styling::rgb888_to_rgb565;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleLayoutConfig {
    /// Press/release distance below which a gesture is a tap
    pub tap_slop_px: u32,
    /// Divider stroke width
    pub divider_stroke_px: u32,
    /// Divider color as packed 0xRRGGBB
    pub divider_color_rgb: u32,
}

impl Default for TriangleLayoutConfig {
    fn default() -> Self {
        Self {
            tap_slop_px: TAP_SLOP_PX,
            divider_stroke_px: DIVIDER_STROKE_PX,
            divider_color_rgb: DIVIDER_COLOR_RGB,
        }
    }
}

impl TriangleLayoutConfig {
    pub fn from_bytes(bytes: &[u8]) -> LayoutResult<Self> {
        postcard::from_bytes(bytes).map_err(LayoutError::Config)
    }

    pub fn to_bytes(&self) -> LayoutResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(LayoutError::Config)
    }

    pub fn divider_color(&self) -> Rgb565 {
        rgb888_to_rgb565(self.divider_color_rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::DIVIDER_COLOR;

    #[test]
    fn test_default_config_uses_fixed_values() {
        let config = TriangleLayoutConfig::default();
        assert_eq!(config.tap_slop_px, 25);
        assert_eq!(config.divider_stroke_px, 4);
        assert_eq!(config.divider_color(), DIVIDER_COLOR);
    }

    #[test]
    fn test_config_decodes_stored_bytes() {
        let stored = TriangleLayoutConfig {
            tap_slop_px: 10,
            divider_stroke_px: 2,
            divider_color_rgb: 0xFF0000,
        }
        .to_bytes()
        .unwrap();

        let config = TriangleLayoutConfig::from_bytes(&stored).unwrap();
        assert_eq!(config.tap_slop_px, 10);
        assert_eq!(config.divider_stroke_px, 2);
        assert_eq!(config.divider_color(), Rgb565::new(31, 0, 0));
    }

    #[test]
    fn test_truncated_bytes_are_rejected() {
        let err = TriangleLayoutConfig::from_bytes(&[]).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }
}
