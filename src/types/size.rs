//! 2D sizes with generic dimensions.

use num_traits::{AsPrimitive, Num};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::types::point::Point;

// --- Generic Size<T> ---

/// Represents a 2D size (width and height) with generic dimensions.
///
/// Width and height are non-negative by convention for signed `T`; the
/// unsigned instantiations forbid negatives structurally.
///
/// # Type Parameters
///
/// * `T`: The numeric type for the dimensions (e.g., `u32`, `f32`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Size<T: Num + Copy> {
    /// The width component of the size.
    pub width: T,
    /// The height component of the size.
    pub height: T,
}

// Implement Eq and Hash if T supports them
impl<T: Num + Copy + Eq> Eq for Size<T> {}
impl<T: Num + Copy + std::hash::Hash> std::hash::Hash for Size<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl<T: Num + Copy> Size<T> {
    /// Creates a new size with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Creates a size from a point, mapping `x` to width and `y` to height.
    pub fn from_point(point: Point<T>) -> Self {
        Size {
            width: point.x,
            height: point.y,
        }
    }

    /// Converts the size to a point, mapping width to `x` and height to `y`.
    pub fn to_point(self) -> Point<T> {
        Point {
            x: self.width,
            y: self.height,
        }
    }

    /// Converts the size to a different dimension type, with `as`-cast
    /// semantics per dimension.
    pub fn cast<U>(self) -> Size<U>
    where
        T: AsPrimitive<U>,
        U: Num + Copy + 'static,
    {
        Size::new(self.width.as_(), self.height.as_())
    }

    /// Returns the largest size with this size's aspect ratio that fits
    /// inside `bounds`.
    ///
    /// The two candidate scale factors are compared in `f32` and the tighter
    /// one wins; the scaled dimension converts back to `T` with `as`-cast
    /// semantics. A zero dimension yields an infinite factor, which simply
    /// loses the comparison.
    pub fn fitted(self, bounds: Size<T>) -> Size<T>
    where
        T: AsPrimitive<f32>,
        f32: AsPrimitive<T>,
    {
        let zw = bounds.width.as_() / self.width.as_();
        let zh = bounds.height.as_() / self.height.as_();
        if zw < zh {
            Size::new(bounds.width, (self.height.as_() * zw).as_())
        } else {
            Size::new((self.width.as_() * zh).as_(), bounds.height)
        }
    }
}

impl Size<f32> {
    /// Rounds both dimensions to the nearest integer, halves away from zero.
    pub fn round(self) -> Size<u32> {
        Size::new(self.width.round() as u32, self.height.round() as u32)
    }
}

/// Calculates the per-axis ratio of two sizes as an `f32` point.
pub fn scale_factor<T>(numer: Size<T>, denom: Size<T>) -> Point<f32>
where
    T: Num + Copy + AsPrimitive<f32>,
{
    Point::new(
        numer.width.as_() / denom.width.as_(),
        numer.height.as_() / denom.height.as_(),
    )
}

impl<T: Num + Copy> From<[T; 2]> for Size<T> {
    fn from(value: [T; 2]) -> Self {
        Size {
            width: value[0],
            height: value[1],
        }
    }
}

// --- Operators ---

impl<T: Num + Copy + Add<Output = T>> Add for Size<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Size {
            width: self.width + other.width,
            height: self.height + other.height,
        }
    }
}

impl<T: Num + Copy + Add<Output = T>> Add<T> for Size<T> {
    type Output = Self;
    fn add(self, scalar: T) -> Self {
        Size {
            width: self.width + scalar,
            height: self.height + scalar,
        }
    }
}

impl<T: Num + Copy + Add<Output = T>> AddAssign for Size<T> {
    fn add_assign(&mut self, other: Self) {
        self.width = self.width + other.width;
        self.height = self.height + other.height;
    }
}

impl<T: Num + Copy + Add<Output = T>> AddAssign<T> for Size<T> {
    fn add_assign(&mut self, scalar: T) {
        self.width = self.width + scalar;
        self.height = self.height + scalar;
    }
}

impl<T: Num + Copy + Sub<Output = T>> Sub for Size<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Size {
            width: self.width - other.width,
            height: self.height - other.height,
        }
    }
}

impl<T: Num + Copy + Sub<Output = T>> Sub<T> for Size<T> {
    type Output = Self;
    fn sub(self, scalar: T) -> Self {
        Size {
            width: self.width - scalar,
            height: self.height - scalar,
        }
    }
}

impl<T: Num + Copy + Sub<Output = T>> SubAssign for Size<T> {
    fn sub_assign(&mut self, other: Self) {
        self.width = self.width - other.width;
        self.height = self.height - other.height;
    }
}

impl<T: Num + Copy + Sub<Output = T>> SubAssign<T> for Size<T> {
    fn sub_assign(&mut self, scalar: T) {
        self.width = self.width - scalar;
        self.height = self.height - scalar;
    }
}

// Multiplication accepts any arithmetic multiplier type; the arithmetic runs
// in the multiplier's type and the result converts back with `as`-cast
// semantics, so float factors scale integer sizes without pre-truncation.
impl<T, U> Mul<U> for Size<T>
where
    T: Num + Copy + AsPrimitive<U>,
    U: Num + Copy + 'static + AsPrimitive<T>,
{
    type Output = Self;
    fn mul(self, scalar: U) -> Self {
        Size {
            width: (self.width.as_() * scalar).as_(),
            height: (self.height.as_() * scalar).as_(),
        }
    }
}

impl<T, U> MulAssign<U> for Size<T>
where
    T: Num + Copy + AsPrimitive<U>,
    U: Num + Copy + 'static + AsPrimitive<T>,
{
    fn mul_assign(&mut self, scalar: U) {
        self.width = (self.width.as_() * scalar).as_();
        self.height = (self.height.as_() * scalar).as_();
    }
}

impl<T: Num + Copy + Div<Output = T>> Div<T> for Size<T> {
    type Output = Self;
    fn div(self, scalar: T) -> Self {
        Size {
            width: self.width / scalar,
            height: self.height / scalar,
        }
    }
}

impl<T: Num + Copy + Div<Output = T>> DivAssign<T> for Size<T> {
    fn div_assign(&mut self, scalar: T) {
        self.width = self.width / scalar;
        self.height = self.height / scalar;
    }
}

impl<T: Num + Copy + fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}×{}]", self.width, self.height)
    }
}

// --- Aliases ---

/// A size with `i32` dimensions.
pub type SizeI = Size<i32>;
/// A size with `u32` dimensions.
pub type SizeU = Size<u32>;
/// A size with `f32` dimensions.
pub type SizeF = Size<f32>;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // --- Type Assertions ---
    assert_impl_all!(Size<u32>: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Serialize, Send, Sync);
    assert_impl_all!(Size<f32>: std::fmt::Debug, Clone, Copy, PartialEq, Default, Serialize, Send, Sync); // No Eq/Hash for f32

    #[test]
    fn size_new_and_dimensions() {
        let s_u32 = Size::new(100u32, 200);
        assert_eq!(s_u32.width, 100);
        assert_eq!(s_u32.height, 200);

        let s_f32 = Size::new(10.5, 20.5);
        assert_eq!(s_f32.width, 10.5);
        assert_eq!(s_f32.height, 20.5);
    }

    #[test]
    fn size_default() {
        let s_u32: Size<u32> = Default::default();
        assert_eq!(s_u32, Size::new(0, 0));
    }

    #[test]
    fn size_add_sub() {
        let a = Size::new(10, 20);
        let b = Size::new(1, 2);
        assert_eq!(a + b, Size::new(11, 22));
        assert_eq!(a - b, Size::new(9, 18));
        assert_eq!(a + 5, Size::new(15, 25));
        assert_eq!(a - 5, Size::new(5, 15));

        let mut s = Size::new(10, 20);
        s += Size::new(1, 2);
        assert_eq!(s, Size::new(11, 22));
        s -= Size::new(1, 2);
        assert_eq!(s, Size::new(10, 20));
        s += 10;
        assert_eq!(s, Size::new(20, 30));
        s -= 5;
        assert_eq!(s, Size::new(15, 25));
    }

    #[test]
    fn size_mul_runs_in_multiplier_type() {
        // Float factor over an integer size scales before truncating back.
        assert_eq!(Size::new(400u32, 300) * 0.5f32, Size::new(200, 150));
        assert_eq!(Size::new(4u32, 6) * 1.5f32, Size::new(6, 9));
        assert_eq!(Size::new(5u32, 5) * 0.5f32, Size::new(2, 2));
        assert_eq!(Size::new(4i32, 6) * 2, Size::new(8, 12));

        let mut s = Size::new(10u32, 20);
        s *= 2.5f32;
        assert_eq!(s, Size::new(25, 50));
    }

    #[test]
    fn size_scalar_div() {
        assert_eq!(Size::new(8, 6) / 2, Size::new(4, 3));
        assert_eq!(Size::new(8.0, 6.0) / 2.0, Size::new(4.0, 3.0));

        let mut s = Size::new(8, 6);
        s /= 2;
        assert_eq!(s, Size::new(4, 3));
    }

    #[test]
    fn size_from_array() {
        assert_eq!(Size::from([3, 4]), Size::new(3, 4));
        let s: Size<u32> = [5, 6].into();
        assert_eq!(s, Size::new(5, 6));
    }

    #[test]
    fn size_point_conversions() {
        let p = Point::new(3, 4);
        assert_eq!(Size::from_point(p), Size::new(3, 4));
        assert_eq!(Size::new(3, 4).to_point(), p);
    }

    #[test]
    fn size_cast_truncates() {
        assert_eq!(Size::new(1.9f32, 2.1).cast::<u32>(), Size::new(1, 2));
        assert_eq!(Size::new(3u32, 4).cast::<f32>(), Size::new(3.0, 4.0));
    }

    #[test]
    fn size_round_half_away_from_zero() {
        assert_eq!(Size::new(0.5f32, 2.5).round(), Size::new(1u32, 3));
        assert_eq!(Size::new(2.4f32, 2.6).round(), Size::new(2u32, 3));
    }

    #[test]
    fn size_fitted_picks_tighter_axis() {
        assert_eq!(Size::new(400u32, 300).fitted(Size::new(200, 200)), Size::new(200, 150));
        assert_eq!(Size::new(300u32, 400).fitted(Size::new(200, 200)), Size::new(150, 200));
        assert_eq!(Size::new(100u32, 100).fitted(Size::new(50, 50)), Size::new(50, 50));
        assert_eq!(Size::new(4.0f32, 3.0).fitted(Size::new(2.0, 2.0)), Size::new(2.0, 1.5));
    }

    #[test]
    fn size_fitted_preserves_aspect_ratio() {
        let s = Size::new(400.0f32, 300.0);
        let f = s.fitted(Size::new(123.0, 456.0));
        assert!((f.width / f.height - s.width / s.height).abs() < 1e-6);
    }

    #[test]
    fn size_fitted_truncates_scaled_dimension() {
        // 3:2 into a square: the free dimension lands on 1.33 and truncates.
        assert_eq!(Size::new(3u32, 2).fitted(Size::new(2, 2)), Size::new(2, 1));
    }

    #[test]
    fn size_fitted_with_zero_width() {
        // The zero dimension makes its factor infinite, so the other axis
        // drives the fit.
        assert_eq!(Size::new(0u32, 10).fitted(Size::new(5, 5)), Size::new(0, 5));
    }

    #[test]
    fn scale_factor_per_axis_ratio() {
        let z = scale_factor(Size::new(200u32, 150), Size::new(400, 300));
        assert_eq!(z, Point::new(0.5, 0.5));

        let z = scale_factor(Size::new(1u32, 1), Size::new(3, 3));
        assert!((z.x - 1.0 / 3.0).abs() < 1e-6);
        assert!((z.y - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn size_display_format() {
        assert_eq!(format!("{}", Size::new(3, 4)), "[3×4]");
        assert_eq!(format!("{}", Size::new(1.5, 2.5)), "[1.5×2.5]");
    }

    #[test]
    fn size_serde() {
        let s = Size::<u32>::new(3, 4);
        let serialized = serde_json::to_string(&s).unwrap();
        let deserialized: Size<u32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(s, deserialized);
    }
}
