//! Error handling for the geometry library.
//!
//! This module defines the error types returned by fallible operations in
//! this crate, using the `thiserror` crate for ergonomic error definition.
//!
//! The only fallible operations in the library are the validating rectangle
//! constructors ([`Rect::new`] and [`Rect::from_xywh`]); everything else is
//! total. Both return [`GeometryError`] on failure.
//!
//! [`Rect::new`]: crate::types::Rect::new
//! [`Rect::from_xywh`]: crate::types::Rect::from_xywh

use thiserror::Error;

/// Error type for geometry construction.
///
/// Rectangles store their corners rather than origin plus extents, and the
/// extent type `S` may be unsigned while the coordinate type `T` is signed.
/// Validation therefore happens at construction: corners that would give an
/// unsigned extent type a negative width or height are rejected with this
/// error instead of silently wrapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A validating rectangle constructor received corners with
    /// `x2 < x1` or `y2 < y1` while the extent type is unsigned.
    #[error("Negative unsigned rect dimension")]
    NegativeExtent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_geometry_error_negative_extent_display() {
        let err = GeometryError::NegativeExtent;
        assert_eq!(format!("{}", err), "Negative unsigned rect dimension");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_geometry_error_is_copy_and_comparable() {
        let err = GeometryError::NegativeExtent;
        let copy = err;
        assert_eq!(err, copy);
    }
}
