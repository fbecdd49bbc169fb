// src/ui/mod.rs
//! Double-triangle UI system
//!
//! This module provides:
//! - Core traits for drawable, measurable and touchable elements
//! - Measurement constraints and per-child layout parameters
//! - Triangle geometry and hit regions
//! - Region clipping for draw targets
//! - The [`TriangleLayout`] container and its content components

pub mod clip;
pub mod components;
pub mod core;
pub mod geometry;
pub mod layouts;
pub mod measure;
pub mod styling;

// Re-export commonly used items
pub use clip::{ClipToRegion, RegionClipped};
pub use components::{Divider, Panel};
pub use self::core::{Drawable, Measurable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use geometry::{HitRegion, TriangleGeometry, TrianglePath};
pub use layouts::{
    LayoutError, LayoutResult, TriangleClickListener, TriangleLayout, TriangleLayoutConfig,
    TriangleSide,
};
pub use measure::{Dimension, LayoutParams, MeasureSpec};
pub use styling::Padding;
