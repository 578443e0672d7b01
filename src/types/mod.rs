//! Core geometric data types.
//!
//! This module consolidates the 2D primitives of the crate and re-exports
//! them from its submodules for easier access. Key categories include:
//!
//! - **Points**: The generic [`Point`] and its [`PointI`], [`PointU`] and [`PointF`] aliases.
//! - **Sizes**: The generic [`Size`] with aspect-ratio fitting, plus the free [`scale_factor`] helper.
//! - **Rectangles**: The corner-stored [`Rect`] with its aliases and the free
//!   [`clamp`], [`fit_rect`], [`intersect`] and [`unite`] helpers.
//! - **Orientation**: The [`Orientation`] enum.
//! - **Mip chains**: Level arithmetic such as [`mip_levels`] and [`mip_size`].
//!
//! All value types are serializable and deserializable using Serde.

// Declare submodules
pub mod mip;
pub mod orientation;
pub mod point;
pub mod rect;
pub mod size;

// Re-export public types for easier access
pub use mip::{mip_levels, mip_levels_trimmed, mip_size, nearest_mip_level};
pub use orientation::Orientation;
pub use point::{Point, PointF, PointI, PointU};
pub use rect::{clamp, fit_rect, intersect, intersect_opt, unite, Rect, RectF, RectI, RectN, RectU};
pub use size::{scale_factor, Size, SizeF, SizeI, SizeU};
