use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingSub};
use sampling::source::Source;

const TWO_POW_32: f64 = 4294967296.0;
const TWO_POW_64: f64 = 18446744073709551616.0;

/// A real number modulo 1 stored as a `BITS`-wide wrapping integer `v`,
/// standing for `v / 2^BITS mod 1`.
///
/// The torus is a `Z`-module, not a ring: besides the group operations the
/// only product is [`Torus::mul_int`], by a signed integer of the same width.
pub trait Torus:
    Copy
    + Default
    + Eq
    + Debug
    + Pod
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Integer coefficients of the polynomials multiplied against this torus type.
    type Int: PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + Pod + Default + Debug + Send + Sync;

    const BITS: u32;
    const ZERO: Self;

    /// Wrapping product `p * self`.
    fn mul_int(self, p: Self::Int) -> Self;

    /// Wrap-around distance between `self` and `other`, in `[0, 0.5]`.
    fn dist(self, other: Self) -> f64;

    /// Maps the fractional part of `x` onto the torus, rounding to the nearest
    /// representable value.
    fn from_f64(x: f64) -> Self;

    /// Returns the centred representative in `[-0.5, 0.5)`.
    fn to_f64(self) -> f64;

    /// Draws a uniformly distributed torus value.
    fn uniform(source: &mut Source) -> Self;
}

/// 32-bit torus value.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
pub struct Torus32(pub i32);

/// 64-bit torus value.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
pub struct Torus64(pub i64);

impl Torus for Torus32 {
    type Int = i32;

    const BITS: u32 = 32;
    const ZERO: Self = Torus32(0);

    #[inline(always)]
    fn mul_int(self, p: i32) -> Self {
        Torus32(self.0.wrapping_mul(p))
    }

    #[inline(always)]
    fn dist(self, other: Self) -> f64 {
        (self.0.wrapping_sub(other.0) as f64).abs() / TWO_POW_32
    }

    fn from_f64(x: f64) -> Self {
        let frac: f64 = x - x.floor();
        Torus32((frac * TWO_POW_32).round() as i64 as i32)
    }

    fn to_f64(self) -> f64 {
        self.0 as f64 / TWO_POW_32
    }

    #[inline(always)]
    fn uniform(source: &mut Source) -> Self {
        Torus32(source.next_i32())
    }
}

impl Torus for Torus64 {
    type Int = i64;

    const BITS: u32 = 64;
    const ZERO: Self = Torus64(0);

    #[inline(always)]
    fn mul_int(self, p: i64) -> Self {
        Torus64(self.0.wrapping_mul(p))
    }

    #[inline(always)]
    fn dist(self, other: Self) -> f64 {
        (self.0.wrapping_sub(other.0) as f64).abs() / TWO_POW_64
    }

    fn from_f64(x: f64) -> Self {
        let frac: f64 = x - x.floor();
        // i128 keeps 2^64 (frac rounding up to 1) representable before the wrap.
        Torus64((frac * TWO_POW_64).round() as i128 as i64)
    }

    fn to_f64(self) -> f64 {
        self.0 as f64 / TWO_POW_64
    }

    #[inline(always)]
    fn uniform(source: &mut Source) -> Self {
        Torus64(source.next_i64())
    }
}

impl Add for Torus32 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Torus32(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Torus32 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Torus32(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Torus32 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Torus32(self.0.wrapping_neg())
    }
}

impl AddAssign for Torus32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0)
    }
}

impl SubAssign for Torus32 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0)
    }
}

impl Add for Torus64 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Torus64(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Torus64 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Torus64(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Torus64 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Torus64(self.0.wrapping_neg())
    }
}

impl AddAssign for Torus64 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0)
    }
}

impl SubAssign for Torus64 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0)
    }
}
