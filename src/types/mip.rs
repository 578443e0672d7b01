//! Mip chain arithmetic for image pyramids.
//!
//! A mip chain starts at a base size and halves both axes per level until
//! the shorter axis reaches one texel. These helpers count, trim and walk
//! such chains with plain unsigned integer arithmetic.

use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::mem;

use crate::types::size::Size;

/// Counts the mip levels of a full chain over `base`, including the base
/// level itself. The shorter axis bounds the chain.
///
/// A zero-sized base has no levels.
///
/// # Examples
///
/// ```
/// use geom::types::{mip_levels, Size};
/// assert_eq!(mip_levels(Size::new(256u32, 256)), 9);
/// ```
pub fn mip_levels<T>(base: Size<T>) -> u32
where
    T: PrimInt + Unsigned,
{
    (mem::size_of::<T>() << 3) as u32 - base.width.min(base.height).leading_zeros()
}

/// Counts the mip levels of a chain over `base` with the `trim` finest
/// levels cut off. A chain too short to trim keeps a single level.
pub fn mip_levels_trimmed<T>(base: Size<T>, trim: u32) -> u32
where
    T: PrimInt + Unsigned,
{
    let l = mip_levels(base);
    if l > trim + 1 {
        l - trim
    } else {
        1
    }
}

/// Calculates the size of mip level `level` in a chain over `base`, with
/// truncating division per axis.
///
/// A `level` of at least the bit width of `T` overflows the shift.
pub fn mip_size<T>(base: Size<T>, level: u32) -> Size<T>
where
    T: PrimInt + Unsigned,
{
    let cell = T::one() << level as usize;
    Size::new(base.width / cell, base.height / cell)
}

/// Picks the coarsest mip level of a chain over `base` that still covers
/// `request` on both axes.
///
/// A request at least as large as the base on either axis picks the base
/// level. A zero `request` axis divides by zero.
pub fn nearest_mip_level<T>(base: Size<T>, request: Size<T>) -> u32
where
    T: PrimInt + Unsigned + AsPrimitive<u32>,
{
    if request.width >= base.width || request.height >= base.height {
        return 0;
    }
    let z: u32 = (base.width / request.width)
        .min(base.height / request.height)
        .as_();
    32 - z.leading_zeros() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Size::new(256u32, 256), 9)]
    #[case(Size::new(256u32, 128), 8)]
    #[case(Size::new(128u32, 256), 8)]
    #[case(Size::new(1u32, 1), 1)]
    #[case(Size::new(0u32, 64), 0)]
    fn mip_levels_bound_by_shorter_axis(#[case] base: Size<u32>, #[case] expected: u32) {
        assert_eq!(mip_levels(base), expected);
    }

    #[test]
    fn mip_levels_agree_across_integer_widths() {
        assert_eq!(
            mip_levels(Size::new(256u64, 256)),
            mip_levels(Size::new(256u32, 256))
        );
        assert_eq!(mip_levels(Size::new(65_536u64, 65_536)), 17);
    }

    #[rstest]
    #[case(Size::new(256u32, 256), 0, 9)]
    #[case(Size::new(256u32, 256), 3, 6)]
    #[case(Size::new(4u32, 4), 1, 2)]
    #[case(Size::new(4u32, 4), 2, 1)]
    #[case(Size::new(4u32, 4), 5, 1)]
    fn mip_levels_trimmed_keeps_at_least_one(
        #[case] base: Size<u32>,
        #[case] trim: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(mip_levels_trimmed(base, trim), expected);
    }

    #[rstest]
    #[case(Size::new(256u32, 256), 0, Size::new(256u32, 256))]
    #[case(Size::new(256u32, 256), 2, Size::new(64u32, 64))]
    #[case(Size::new(256u32, 128), 3, Size::new(32u32, 16))]
    #[case(Size::new(5u32, 3), 1, Size::new(2u32, 1))]
    #[case(Size::new(1u32, 1), 1, Size::new(0u32, 0))]
    fn mip_size_halves_with_truncation(
        #[case] base: Size<u32>,
        #[case] level: u32,
        #[case] expected: Size<u32>,
    ) {
        assert_eq!(mip_size(base, level), expected);
    }

    #[rstest]
    #[case(Size::new(256u32, 256), Size::new(64u32, 64), 2)]
    #[case(Size::new(256u32, 256), Size::new(1u32, 1), 8)]
    #[case(Size::new(256u32, 256), Size::new(255u32, 255), 0)]
    #[case(Size::new(1024u32, 512), Size::new(100u32, 100), 2)]
    #[case(Size::new(256u32, 256), Size::new(256u32, 256), 0)]
    #[case(Size::new(256u32, 256), Size::new(300u32, 10), 0)]
    fn nearest_mip_level_covers_the_request(
        #[case] base: Size<u32>,
        #[case] request: Size<u32>,
        #[case] expected: u32,
    ) {
        assert_eq!(nearest_mip_level(base, request), expected);
    }
}
