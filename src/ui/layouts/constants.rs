//! Constants for the triangle layout

/// Largest per-axis distance, exclusive, between press and release that
/// still counts as a tap
pub const TAP_SLOP_PX: u32 = 25;

/// Divider stroke width in pixels
pub const DIVIDER_STROKE_PX: u32 = 4;

/// Divider color as packed 0xRRGGBB
pub const DIVIDER_COLOR_RGB: u32 = 0xCCCCCC;
