//! Layout primitives for consistent spacing
//!
//! [`Padding`] describes four-edge spacing. Containers use it for the space
//! between their border and their children; [`LayoutParams`] reuse it for
//! child margins.
//!
//! [`LayoutParams`]: crate::ui::measure::LayoutParams

use serde::{Deserialize, Serialize};

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Different vertical (12px) and horizontal (16px)
/// let p = Padding::symmetric(12, 16);
///
/// // Individual control: top=8, right=16, bottom=8, left=16
/// let p = Padding::new(8, 16, 8, 16);
///
/// // Calculate total space consumed
/// let total_width = p.horizontal();  // left + right
/// let total_height = p.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding (pixels)
    pub top: u32,

    /// Right padding (pixels)
    pub right: u32,

    /// Bottom padding (pixels)
    pub bottom: u32,

    /// Left padding (pixels)
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_totals() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
        assert_eq!(Padding::symmetric(5, 7), Padding::new(5, 7, 5, 7));
        assert_eq!(Padding::all(3).horizontal(), 6);
    }
}
