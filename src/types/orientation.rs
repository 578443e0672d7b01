//! Spatial Orientation Type.
//!
//! This module provides an enum for representing 2D orientation
//! (horizontal/vertical), used when laying out along a primary axis or when
//! mirroring geometry across the main diagonal.
//!
//! # Examples
//!
//! ```
//! use geom::types::Orientation;
//!
//! let current_orientation = Orientation::Horizontal;
//! assert!(current_orientation.is_horizontal());
//! assert_eq!(current_orientation.flip(), Orientation::Vertical);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a general orientation in 2D space, either Horizontal or Vertical.
///
/// This is often used to pick which axis a computation runs along, for
/// example when deciding whether a rectangle should be transposed before
/// fitting content into it.
///
/// # Examples
///
/// ```
/// use geom::types::Orientation;
///
/// let panel_orientation = Orientation::Vertical;
/// if panel_orientation.is_vertical() {
///     // Arrange items in a column
/// }
/// assert_eq!(format!("{}", panel_orientation), "vertical");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Represents a horizontal orientation (e.g., along the x-axis).
    #[default]
    Horizontal,
    /// Represents a vertical orientation (e.g., along the y-axis).
    Vertical,
}

impl Orientation {
    /// Checks if this orientation is `Horizontal`.
    ///
    /// # Returns
    ///
    /// `true` if the orientation is `Horizontal`, `false` otherwise.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Checks if this orientation is `Vertical`.
    ///
    /// # Returns
    ///
    /// `true` if the orientation is `Vertical`, `false` otherwise.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Returns the orthogonal orientation.
    ///
    /// - `Horizontal` flips to `Vertical`.
    /// - `Vertical` flips to `Horizontal`.
    ///
    /// # Returns
    ///
    /// The flipped `Orientation`.
    ///
    /// # Examples
    /// ```
    /// use geom::types::Orientation;
    /// assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
    /// assert_eq!(Orientation::Vertical.flip(), Orientation::Horizontal);
    /// ```
    pub fn flip(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    /// Formats the `Orientation` as a lowercase string (e.g., "horizontal", "vertical").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json; // For testing serde

    #[test]
    fn test_orientation_is_horizontal() {
        assert!(Orientation::Horizontal.is_horizontal());
        assert!(!Orientation::Vertical.is_horizontal());
    }

    #[test]
    fn test_orientation_is_vertical() {
        assert!(Orientation::Vertical.is_vertical());
        assert!(!Orientation::Horizontal.is_vertical());
    }

    #[test]
    fn test_orientation_default() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }

    #[test]
    fn test_orientation_flip() {
        assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.flip(), Orientation::Horizontal);
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(format!("{}", Orientation::Horizontal), "horizontal");
        assert_eq!(format!("{}", Orientation::Vertical), "vertical");
    }

    #[test]
    fn test_orientation_serde() {
        let horizontal = Orientation::Horizontal;
        let serialized_h = serde_json::to_string(&horizontal).unwrap();
        // Default serde representation for simple enums is just the variant name as a string
        assert_eq!(serialized_h, "\"Horizontal\"");
        let deserialized_h: Orientation = serde_json::from_str(&serialized_h).unwrap();
        assert_eq!(deserialized_h, Orientation::Horizontal);

        let vertical = Orientation::Vertical;
        let serialized_v = serde_json::to_string(&vertical).unwrap();
        assert_eq!(serialized_v, "\"Vertical\"");
        let deserialized_v: Orientation = serde_json::from_str(&serialized_v).unwrap();
        assert_eq!(deserialized_v, Orientation::Vertical);
    }
}
