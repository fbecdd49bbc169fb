// src/ui/layouts/mod.rs
//! Layout components for arranging UI elements

use thiserror_no_std::Error;

pub mod config;
pub mod constants;
pub mod triangle;

pub use crate::ui::core::TriangleSide;
pub use config::TriangleLayoutConfig;
pub use triangle::{TriangleClickListener, TriangleLayout};

/// Error types for layout construction and configuration
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A triangle layout was declared with the wrong number of children
    #[error("Triangle layout needs exactly two children, found {found}")]
    ChildCount {
        /// Number of children supplied
        found: usize,
    },

    /// Configuration bytes could not be decoded
    #[error("Invalid layout configuration: {0}")]
    Config(postcard::Error),
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
