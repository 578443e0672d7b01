//! Axis-aligned rectangles stored as two corner pairs.

use num_traits::{AsPrimitive, Bounded, Num, PrimInt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::error::GeometryError;
use crate::types::point::Point;
use crate::types::size::Size;

// --- Generic Rect<T, S> ---

/// Represents a 2D axis-aligned rectangle stored as its top-left and
/// bottom-right corners.
///
/// The stored state is the corner coordinates, not origin plus extents;
/// widths and heights are computed on demand as `x2 - x1` and `y2 - y1` and
/// reported in the extent type `S`. With an unsigned `S` the validating
/// constructors reject corners that would make an extent negative; see
/// [`Rect::new`].
///
/// # Type Parameters
///
/// * `T`: The numeric type for the corner coordinates (e.g., `i32`, `f32`).
/// * `S`: The numeric type for reported extents, defaulting to `T`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy, S: Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy, S: Num + Copy"
))]
pub struct Rect<T: Num + Copy, S: Num + Copy = T> {
    x1: T,
    y1: T,
    x2: T,
    y2: T,
    #[serde(skip)]
    extent: PhantomData<S>,
}

// Implement Eq and Hash if T supports them
impl<T: Num + Copy + Eq, S: Num + Copy> Eq for Rect<T, S> {}
impl<T: Num + Copy + std::hash::Hash, S: Num + Copy> std::hash::Hash for Rect<T, S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x1.hash(state);
        self.y1.hash(state);
        self.x2.hash(state);
        self.y2.hash(state);
    }
}

impl<T: Num + Copy, S: Num + Copy> Rect<T, S> {
    // An unsigned extent type has a non-negative minimum; this is the
    // runtime stand-in for a compile-time signedness test.
    fn extent_is_unsigned() -> bool
    where
        S: Bounded + PartialOrd,
    {
        S::min_value() >= S::zero()
    }

    /// Creates a rectangle from its corner coordinates.
    ///
    /// When the extent type `S` is unsigned, corners with `x2 < x1` or
    /// `y2 < y1` are rejected with [`GeometryError::NegativeExtent`]. Signed
    /// extent types accept any corner order.
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Result<Self, GeometryError>
    where
        T: PartialOrd,
        S: Bounded + PartialOrd,
    {
        if Self::extent_is_unsigned() && (x2 < x1 || y2 < y1) {
            return Err(GeometryError::NegativeExtent);
        }
        Ok(Rect {
            x1,
            y1,
            x2,
            y2,
            extent: PhantomData,
        })
    }

    /// Creates a rectangle from an origin and extents, validating like
    /// [`Rect::new`].
    ///
    /// The far corner is `origin + extent` with the extents converted to `T`
    /// by `as`-cast semantics, so an extent large enough to wrap a signed `T`
    /// negative is rejected.
    pub fn from_xywh(x: T, y: T, w: S, h: S) -> Result<Self, GeometryError>
    where
        T: PartialOrd + 'static,
        S: Bounded + PartialOrd + AsPrimitive<T>,
    {
        Self::new(x, y, x + w.as_(), y + h.as_())
    }

    /// Creates a rectangle from an origin point and a size. Does not
    /// validate.
    pub fn from_origin_size(origin: Point<T>, size: Size<S>) -> Self
    where
        T: 'static,
        S: AsPrimitive<T>,
    {
        Rect {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x + size.width.as_(),
            y2: origin.y + size.height.as_(),
            extent: PhantomData,
        }
    }

    /// Creates a rectangle from its top-left and bottom-right points.
    ///
    /// The points are stored verbatim; an inverted pair is neither
    /// normalized nor rejected.
    pub fn from_points(origin: Point<T>, dest: Point<T>) -> Self {
        Rect {
            x1: origin.x,
            y1: origin.y,
            x2: dest.x,
            y2: dest.y,
            extent: PhantomData,
        }
    }

    /// Creates a rectangle of the given size with its origin at (0, 0).
    pub fn from_size(size: Size<S>) -> Self
    where
        T: 'static,
        S: AsPrimitive<T>,
    {
        Self::from_origin_size(Point::new(T::zero(), T::zero()), size)
    }

    /// Returns the x-coordinate of the left edge.
    pub fn left(&self) -> T {
        self.x1
    }

    /// Returns the y-coordinate of the top edge.
    pub fn top(&self) -> T {
        self.y1
    }

    /// Returns the x-coordinate of the right edge.
    pub fn right(&self) -> T {
        self.x2
    }

    /// Returns the y-coordinate of the bottom edge.
    pub fn bottom(&self) -> T {
        self.y2
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Point<T> {
        Point::new(self.x1, self.y1)
    }

    /// Returns the top-right corner.
    pub fn top_right(&self) -> Point<T> {
        Point::new(self.x2, self.y1)
    }

    /// Returns the bottom-left corner.
    pub fn bottom_left(&self) -> Point<T> {
        Point::new(self.x1, self.y2)
    }

    /// Returns the bottom-right corner.
    pub fn bottom_right(&self) -> Point<T> {
        Point::new(self.x2, self.y2)
    }

    /// Returns the origin (top-left corner).
    pub fn origin(&self) -> Point<T> {
        self.top_left()
    }

    /// Returns the terminus (bottom-right corner).
    pub fn terminus(&self) -> Point<T> {
        self.bottom_right()
    }

    /// Calculates the width, converted to the extent type with `as`-cast
    /// semantics.
    pub fn width(&self) -> S
    where
        T: AsPrimitive<S>,
        S: 'static,
    {
        (self.x2 - self.x1).as_()
    }

    /// Calculates the height, converted to the extent type with `as`-cast
    /// semantics.
    pub fn height(&self) -> S
    where
        T: AsPrimitive<S>,
        S: 'static,
    {
        (self.y2 - self.y1).as_()
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Size<S>
    where
        T: AsPrimitive<S>,
        S: 'static,
    {
        Size::new(self.width(), self.height())
    }

    /// Calculates the center point. Integer types truncate toward the
    /// origin corner for odd extents.
    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point::new(
            self.x1 + (self.x2 - self.x1) / two,
            self.y1 + (self.y2 - self.y1) / two,
        )
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.x2 == self.x1 || self.y2 == self.y1
    }

    /// Checks if a coordinate pair lies inside the rectangle. The left and
    /// top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, x: T, y: T) -> bool
    where
        T: PartialOrd,
    {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }

    /// Checks if a point lies inside the rectangle, with the same edge
    /// conventions as [`Rect::contains`].
    pub fn contains_point(&self, pt: Point<T>) -> bool
    where
        T: PartialOrd,
    {
        self.contains(pt.x, pt.y)
    }

    /// Checks if another rectangle lies entirely inside this one. All edges
    /// are inclusive, unlike the half-open point containment.
    pub fn contains_rect(&self, inner: &Rect<T, S>) -> bool
    where
        T: PartialOrd,
    {
        inner.x1 >= self.x1 && inner.y1 >= self.y1 && inner.x2 <= self.x2 && inner.y2 <= self.y2
    }

    /// Sets the width, keeping the left edge fixed.
    pub fn set_width(&mut self, width: S)
    where
        T: 'static,
        S: AsPrimitive<T>,
    {
        self.x2 = self.x1 + width.as_();
    }

    /// Sets the height, keeping the top edge fixed.
    pub fn set_height(&mut self, height: S)
    where
        T: 'static,
        S: AsPrimitive<T>,
    {
        self.y2 = self.y1 + height.as_();
    }

    /// Resizes the rectangle, keeping the origin fixed.
    pub fn resize(&mut self, size: Size<S>)
    where
        T: 'static,
        S: AsPrimitive<T>,
    {
        self.x2 = self.x1 + size.width.as_();
        self.y2 = self.y1 + size.height.as_();
    }

    /// Moves the left edge to `x`, preserving the width.
    pub fn move_left(&mut self, x: T) {
        self.x2 = x + (self.x2 - self.x1);
        self.x1 = x;
    }

    /// Moves the top edge to `y`, preserving the height.
    pub fn move_top(&mut self, y: T) {
        self.y2 = y + (self.y2 - self.y1);
        self.y1 = y;
    }

    /// Moves the right edge to `x`, preserving the width.
    pub fn move_right(&mut self, x: T) {
        self.x1 = x - (self.x2 - self.x1);
        self.x2 = x;
    }

    /// Moves the bottom edge to `y`, preserving the height.
    pub fn move_bottom(&mut self, y: T) {
        self.y1 = y - (self.y2 - self.y1);
        self.y2 = y;
    }

    /// Moves the origin to (`x`, `y`), preserving both extents.
    pub fn move_to(&mut self, x: T, y: T) {
        self.x2 = x + (self.x2 - self.x1);
        self.y2 = y + (self.y2 - self.y1);
        self.x1 = x;
        self.y1 = y;
    }

    /// Moves the rectangle so its center lands on (`cx`, `cy`).
    ///
    /// The half-extents divide in the extent type, so integer rectangles
    /// with odd extents truncate; the extents themselves are preserved.
    pub fn move_center(&mut self, cx: T, cy: T)
    where
        T: AsPrimitive<S>,
        S: AsPrimitive<T> + 'static,
    {
        let two = S::one() + S::one();
        let w = self.width();
        let h = self.height();
        self.x1 = cx - (w / two).as_();
        self.y1 = cy - (h / two).as_();
        self.x2 = self.x1 + w.as_();
        self.y2 = self.y1 + h.as_();
    }

    /// Returns the rectangle translated by (`dx`, `dy`).
    pub fn translated(&self, dx: T, dy: T) -> Rect<T, S> {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
            extent: PhantomData,
        }
    }

    /// Translates the rectangle in place by (`dx`, `dy`).
    pub fn translate(&mut self, dx: T, dy: T) {
        *self = self.translated(dx, dy);
    }

    /// Returns the rectangle with each corner coordinate offset
    /// individually.
    pub fn adjusted(&self, dx1: T, dy1: T, dx2: T, dy2: T) -> Rect<T, S> {
        Rect {
            x1: self.x1 + dx1,
            y1: self.y1 + dy1,
            x2: self.x2 + dx2,
            y2: self.y2 + dy2,
            extent: PhantomData,
        }
    }

    /// Offsets each corner coordinate individually, in place.
    pub fn adjust(&mut self, dx1: T, dy1: T, dx2: T, dy2: T) {
        *self = self.adjusted(dx1, dy1, dx2, dy2);
    }

    /// Returns the rectangle grown outward by `d` on every side.
    pub fn expanded(&self, d: T) -> Rect<T, S> {
        Rect {
            x1: self.x1 - d,
            y1: self.y1 - d,
            x2: self.x2 + d,
            y2: self.y2 + d,
            extent: PhantomData,
        }
    }

    /// Returns the rectangle shrunk inward by `d` on every side.
    pub fn shrinked(&self, d: T) -> Rect<T, S> {
        Rect {
            x1: self.x1 + d,
            y1: self.y1 + d,
            x2: self.x2 - d,
            y2: self.y2 - d,
            extent: PhantomData,
        }
    }

    /// Returns the bounding box of this rectangle and `other`.
    ///
    /// An empty rectangle does not contribute: the other operand is
    /// returned as-is.
    pub fn united(&self, other: &Rect<T, S>) -> Rect<T, S>
    where
        T: PartialOrd,
    {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x1 = if self.x1 < other.x1 { self.x1 } else { other.x1 };
        let y1 = if self.y1 < other.y1 { self.y1 } else { other.y1 };
        let x2 = if self.x2 > other.x2 { self.x2 } else { other.x2 };
        let y2 = if self.y2 > other.y2 { self.y2 } else { other.y2 };
        Rect {
            x1,
            y1,
            x2,
            y2,
            extent: PhantomData,
        }
    }

    /// Extends this rectangle in place to the bounding box with `other`.
    pub fn unite(&mut self, other: &Rect<T, S>)
    where
        T: PartialOrd,
    {
        *self = self.united(other);
    }

    /// Calculates the intersection with `other`, or `None` if they do not
    /// overlap. Touching edges do not count as overlap.
    pub fn intersected(&self, other: &Rect<T, S>) -> Option<Rect<T, S>>
    where
        T: PartialOrd,
    {
        if other.x1 >= self.x2 || other.x2 <= self.x1 || other.y1 >= self.y2 || other.y2 <= self.y1
        {
            return None;
        }
        let x1 = if self.x1 > other.x1 { self.x1 } else { other.x1 };
        let y1 = if self.y1 > other.y1 { self.y1 } else { other.y1 };
        let x2 = if self.x2 < other.x2 { self.x2 } else { other.x2 };
        let y2 = if self.y2 < other.y2 { self.y2 } else { other.y2 };
        Some(Rect {
            x1,
            y1,
            x2,
            y2,
            extent: PhantomData,
        })
    }

    /// Returns the rectangle with every corner coordinate scaled by the
    /// ratio `num / denom`, multiplying before dividing with truncating
    /// integer arithmetic. The result reports extents in `T`.
    pub fn scaled(&self, num: T, denom: T) -> Rect<T>
    where
        T: PrimInt,
    {
        Rect {
            x1: self.x1 * num / denom,
            y1: self.y1 * num / denom,
            x2: self.x2 * num / denom,
            y2: self.y2 * num / denom,
            extent: PhantomData,
        }
    }

    /// Scales the rectangle in place by `f` about the pivot `center`.
    ///
    /// Each edge's distance to the pivot is scaled in `f32` and rounded to
    /// the nearest integer, halves away from zero, before converting back to
    /// `T` with `as`-cast semantics.
    pub fn scale(&mut self, f: f32, center: Point<i32>)
    where
        T: AsPrimitive<f32>,
        f32: AsPrimitive<T>,
        i32: AsPrimitive<T>,
    {
        let cx = center.x as f32;
        let cy = center.y as f32;
        self.x1 = center.x.as_() - ((cx - self.x1.as_()) * f).round().as_();
        self.x2 = center.x.as_() + ((self.x2.as_() - cx) * f).round().as_();
        self.y1 = center.y.as_() - ((cy - self.y1.as_()) * f).round().as_();
        self.y2 = center.y.as_() + ((self.y2.as_() - cy) * f).round().as_();
    }

    /// Mirrors the rectangle across the main diagonal by swapping the x and
    /// y coordinates of both corners.
    pub fn transpose(&mut self) {
        mem::swap(&mut self.x1, &mut self.y1);
        mem::swap(&mut self.x2, &mut self.y2);
    }

    /// Returns the rectangle mirrored across the main diagonal.
    pub fn transposed(&self) -> Rect<T, S> {
        let mut r = *self;
        r.transpose();
        r
    }

    /// Converts the rectangle to different coordinate and extent types,
    /// with `as`-cast semantics per corner coordinate. Does not validate.
    pub fn cast<T2, S2>(self) -> Rect<T2, S2>
    where
        T: AsPrimitive<T2>,
        T2: Num + Copy + 'static,
        S2: Num + Copy,
    {
        Rect {
            x1: self.x1.as_(),
            y1: self.y1.as_(),
            x2: self.x2.as_(),
            y2: self.y2.as_(),
            extent: PhantomData,
        }
    }
}

impl<T, S> fmt::Display for Rect<T, S>
where
    T: Num + Copy + AsPrimitive<S> + fmt::Display,
    S: Num + Copy + 'static + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.top_left(), self.bottom_right(), self.size())
    }
}

// --- Free helpers ---

/// Intersects an optional rectangle with a rectangle. An absent `a` acts as
/// the neutral element: the result is `b`.
pub fn intersect<T, S>(a: Option<Rect<T, S>>, b: Rect<T, S>) -> Option<Rect<T, S>>
where
    T: Num + Copy + PartialOrd,
    S: Num + Copy,
{
    match a {
        None => Some(b),
        Some(a) => a.intersected(&b),
    }
}

/// Intersects two optional rectangles. Either absent side acts as the
/// neutral element, so two absent sides stay absent.
pub fn intersect_opt<T, S>(a: Option<Rect<T, S>>, b: Option<Rect<T, S>>) -> Option<Rect<T, S>>
where
    T: Num + Copy + PartialOrd,
    S: Num + Copy,
{
    match (a, b) {
        (None, b) => b,
        (Some(a), None) => Some(a),
        (Some(a), Some(b)) => a.intersected(&b),
    }
}

/// Unites an optional rectangle with a rectangle. An absent `a` yields `b`.
pub fn unite<T, S>(a: Option<Rect<T, S>>, b: Rect<T, S>) -> Rect<T, S>
where
    T: Num + Copy + PartialOrd,
    S: Num + Copy,
{
    match a {
        None => b,
        Some(a) => a.united(&b),
    }
}

/// Clamps a point into `bounds`, inclusive of all four edges. A clamped
/// point can therefore land on the right or bottom edge, which half-open
/// point containment reports as outside.
pub fn clamp<T, S>(pt: Point<T>, bounds: &Rect<T, S>) -> Point<T>
where
    T: Num + Copy + PartialOrd,
    S: Num + Copy,
{
    let mut pt = pt;
    if pt.x < bounds.left() {
        pt.x = bounds.left();
    }
    if pt.x > bounds.right() {
        pt.x = bounds.right();
    }
    if pt.y < bounds.top() {
        pt.y = bounds.top();
    }
    if pt.y > bounds.bottom() {
        pt.y = bounds.bottom();
    }
    pt
}

/// Fits `size` into `bounds` preserving its aspect ratio and centers the
/// result, with the centering offsets truncating in `T`.
pub fn fit_rect<T, S>(size: Size<S>, bounds: &Rect<T, S>) -> Rect<T, S>
where
    T: Num + Copy + AsPrimitive<S> + 'static,
    S: Num + Copy + AsPrimitive<T> + AsPrimitive<f32> + 'static,
    f32: AsPrimitive<S>,
{
    let fitted = size.fitted(bounds.size());
    let two = T::one() + T::one();
    let org = Point::new(
        bounds.left() + AsPrimitive::<T>::as_(bounds.width() - fitted.width) / two,
        bounds.top() + AsPrimitive::<T>::as_(bounds.height() - fitted.height) / two,
    );
    Rect::from_origin_size(org, fitted)
}

// --- Aliases ---

/// A rectangle with `i32` coordinates and extents.
pub type RectI = Rect<i32>;
/// A rectangle with `u32` coordinates and extents.
pub type RectU = Rect<u32>;
/// A rectangle with `f32` coordinates and extents.
pub type RectF = Rect<f32>;
/// A normalized rectangle: `i32` coordinates with `u32` extents.
pub type RectN = Rect<i32, u32>;
