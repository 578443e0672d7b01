//! # Geometry Library (`geom`)
//!
//! `geom` is a foundational library of 2D geometric primitives for
//! pixel-oriented code such as window placement, image scaling and texture
//! mip chains.
//!
//! ## Purpose
//!
//! The primary purpose of this crate is to offer a small, well-tested and
//! ergonomic toolkit for raster geometry. This includes:
//!
//! - **Core Data Types**: Generic, `Copy` value types for geometry
//!   ([`Point`], [`Size`], [`Rect`]) over any numeric representation, with
//!   `i32`, `u32` and `f32` aliases for the common cases.
//! - **Normalized Rectangles**: Rectangles carry a separate extent type, so
//!   [`RectN`] can combine signed `i32` coordinates with `u32` extents and
//!   reject negative spans at construction.
//! - **Composition Helpers**: Free functions for clamping points into
//!   bounds, aspect-preserving fitting ([`fit_rect`]) and optional-aware
//!   intersection and union combinators.
//! - **Mip Chain Arithmetic**: Level counting and per-level sizing for
//!   image pyramids ([`mip_levels`], [`mip_size`], [`nearest_mip_level`]).
//! - **Error Handling**: A unified error system through the
//!   [`GeometryError`] enum for the few fallible constructions.
//!
//! ## Key Features
//!
//! - **Strong Typing**: Coordinate and extent representations are type
//!   parameters, not conventions, so mixing them is a compile error.
//! - **Plain Value Semantics**: Every type is `Copy`, comparable and
//!   serializable with Serde.
//! - **Deliberate Edge Behavior**: Point containment is half-open while
//!   rectangle containment and clamping are closed; integer centers
//!   truncate; pivot scaling rounds halves away from zero.
//!
//! ## Usage
//!
//! Add `geom` as a dependency in your `Cargo.toml`. Key types are
//! re-exported at the crate root for ease of use.
//!
//! ```rust
//! use geom::{clamp, fit_rect, Point, RectN, Size};
//!
//! # fn main() -> Result<(), geom::GeometryError> {
//! // Center a 4:3 image inside a square viewport.
//! let viewport = RectN::new(0, 0, 200, 200)?;
//! let image = fit_rect(Size::new(400u32, 300), &viewport);
//! assert_eq!(image.size(), Size::new(200u32, 150));
//!
//! // Pin a cursor position to the viewport, far edges included.
//! let cursor = clamp(Point::new(250, -10), &viewport);
//! assert_eq!(cursor, Point::new(200, 0));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod types;

// Re-export key types for convenience
pub use error::GeometryError;
pub use types::{
    clamp, fit_rect, intersect, intersect_opt, mip_levels, mip_levels_trimmed, mip_size,
    nearest_mip_level, scale_factor, unite, Orientation, Point, PointF, PointI, PointU, Rect,
    RectF, RectI, RectN, RectU, Size, SizeF, SizeI, SizeU,
};
