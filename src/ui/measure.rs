// src/ui/measure.rs
//! Measurement constraints and per-child layout parameters
//!
//! A parent measures each child by handing it one [`MeasureSpec`] per axis.
//! The spec is derived from the parent's own incoming spec, the space the
//! parent reserves (padding plus the child's margins) and the size the child
//! asked for in its [`LayoutParams`].
//!
//! # Examples
//!
//! ```ignore
//! let params = LayoutParams::fixed(100, 100).with_margin(Padding::all(4));
//! let spec = child_measure_spec(MeasureSpec::AtMost(320), 8, params.width);
//! assert_eq!(spec, MeasureSpec::Exactly(100));
//! ```

use serde::{Deserialize, Serialize};

use crate::ui::styling::Padding;

/// Constraint a parent imposes on one axis of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The child must be exactly this many pixels
    Exactly(u32),
    /// The child may be at most this many pixels
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Pixel size carried by the spec, 0 for `Unspecified`.
    pub fn size(&self) -> u32 {
        match self {
            MeasureSpec::Exactly(n) | MeasureSpec::AtMost(n) => *n,
            MeasureSpec::Unspecified => 0,
        }
    }
}

/// Size a child requests along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// As large as the parent allows
    MatchParent,
    /// Just large enough for the child's content
    WrapContent,
    /// Fixed size in pixels
    Fixed(u32),
}

/// Layout metadata attached to each child of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
    /// Outer spacing around the child
    pub margin: Padding,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: Dimension::MatchParent,
            height: Dimension::MatchParent,
            margin: Padding::default(),
        }
    }
}

impl LayoutParams {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margin: Padding::default(),
        }
    }

    /// Fixed-size child with no margins.
    pub fn fixed(width: u32, height: u32) -> Self {
        Self::new(Dimension::Fixed(width), Dimension::Fixed(height))
    }

    pub fn with_margin(mut self, margin: Padding) -> Self {
        self.margin = margin;
        self
    }
}

/// Resolve a desired size against a spec.
///
/// `Exactly` wins outright, `AtMost` clamps, `Unspecified` keeps the desired size.
pub fn resolve_size(desired: u32, spec: MeasureSpec) -> u32 {
    match spec {
        MeasureSpec::Exactly(n) => n,
        MeasureSpec::AtMost(n) => desired.min(n),
        MeasureSpec::Unspecified => desired,
    }
}

/// Size for an element without intrinsic content.
///
/// Takes all the space a bounded spec offers and `min` otherwise.
pub fn default_size(min: u32, spec: MeasureSpec) -> u32 {
    match spec {
        MeasureSpec::Exactly(n) | MeasureSpec::AtMost(n) => n,
        MeasureSpec::Unspecified => min,
    }
}

/// Derive the spec for one axis of a child.
///
/// # Parameters
/// - `parent`: the parent's incoming spec for this axis
/// - `reserved`: space the parent keeps for itself on this axis (padding plus
///   the child's margins)
/// - `requested`: the child's requested dimension
pub fn child_measure_spec(parent: MeasureSpec, reserved: u32, requested: Dimension) -> MeasureSpec {
    let available = parent.size().saturating_sub(reserved);

    match (parent, requested) {
        (_, Dimension::Fixed(n)) => MeasureSpec::Exactly(n),
        (MeasureSpec::Exactly(_), Dimension::MatchParent) => MeasureSpec::Exactly(available),
        (MeasureSpec::Exactly(_), Dimension::WrapContent) => MeasureSpec::AtMost(available),
        (MeasureSpec::AtMost(_), _) => MeasureSpec::AtMost(available),
        (MeasureSpec::Unspecified, _) => MeasureSpec::Unspecified,
    }
}
