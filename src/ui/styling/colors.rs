//! Color definitions
//!
//! All colors are RGB565, the native format of the small SPI panels this
//! widget targets.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

/// Divider line color - light gray (#CCCCCC)
pub const DIVIDER_COLOR: Rgb565 = Rgb565::new(0xCC >> 3, 0xCC >> 2, 0xCC >> 3);

/// Default fill for the left content panel - muted teal
pub const LEFT_PANEL_COLOR: Rgb565 = Rgb565::new(38 >> 3, 128 >> 2, 120 >> 3);

/// Default fill for the right content panel - warm orange
pub const RIGHT_PANEL_COLOR: Rgb565 = Rgb565::new(200 >> 3, 120 >> 2, 60 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Convert a packed `0xRRGGBB` value to RGB565, ignoring any alpha byte.
pub const fn rgb888_to_rgb565(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}
