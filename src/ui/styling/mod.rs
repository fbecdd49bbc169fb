//! Styling primitives for the double-triangle UI
//!
//! - [`colors`] - RGB565 color constants for the divider and content panels
//! - [`layout`] - Four-edge padding, also used for child margins

pub mod colors;
pub mod layout;

pub use colors::{DIVIDER_COLOR, LEFT_PANEL_COLOR, RIGHT_PANEL_COLOR, WHITE, rgb888_to_rgb565};
pub use layout::Padding;
