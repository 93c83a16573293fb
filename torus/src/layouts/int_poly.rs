use bytemuck::Pod;
use num_traits::{PrimInt, Signed};
use rand::{Rng, RngCore, seq::SliceRandom};
use sampling::source::Source;

use crate::layouts::{ZnxInfos, ZnxView, ZnxViewMut, ZnxZero};

/// A polynomial of `Z[X]/(X^N + 1)` with `N` signed integer coefficients.
///
/// This is the left operand of the external product. No bound is enforced on
/// the coefficients: keeping products within range is up to the caller, and
/// out-of-range values simply wrap in the torus width they are multiplied against.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct IntPolynomial<I> {
    pub coefs: Vec<I>,
}

impl<I: PrimInt + Signed + Pod> IntPolynomial<I> {
    /// Allocates the zero polynomial of degree `n`.
    pub fn alloc(n: usize) -> Self {
        Self {
            coefs: vec![I::zero(); n],
        }
    }

    pub fn from_coefs(coefs: Vec<I>) -> Self {
        Self { coefs }
    }

    /// Fills with ternary values `{-1, 0, 1}` where each non-zero entry appears
    /// with total probability `prob` (split equally between `-1` and `+1`).
    ///
    /// # Panics
    ///
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn fill_ternary_prob(&mut self, prob: f64, source: &mut Source) {
        assert!((0.0..=1.0).contains(&prob), "invalid prob: {prob}");
        self.coefs.iter_mut().for_each(|x: &mut I| {
            *x = if source.random_bool(prob) {
                random_sign(source)
            } else {
                I::zero()
            }
        });
    }

    /// Fills with exactly `hw` non-zero ternary values `{-1, +1}` at uniformly
    /// random positions; the remaining `N - hw` coefficients are zero.
    ///
    /// # Panics
    ///
    /// Panics if `hw > N`.
    pub fn fill_ternary_hw(&mut self, hw: usize, source: &mut Source) {
        assert!(hw <= self.coefs.len(), "hw: {} > n: {}", hw, self.coefs.len());
        self.coefs.fill(I::zero());
        self.coefs[..hw]
            .iter_mut()
            .for_each(|x: &mut I| *x = random_sign(source));
        self.coefs.shuffle(source);
    }

    /// Fills with binary values `{0, 1}` where each entry is `1` with probability `prob`.
    ///
    /// # Panics
    ///
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn fill_binary_prob(&mut self, prob: f64, source: &mut Source) {
        assert!((0.0..=1.0).contains(&prob), "invalid prob: {prob}");
        self.coefs.iter_mut().for_each(|x: &mut I| {
            *x = if source.random_bool(prob) {
                I::one()
            } else {
                I::zero()
            }
        });
    }

    /// Returns the squared euclidean norm of the coefficient vector.
    pub fn norm_sq2(&self) -> f64 {
        self.coefs
            .iter()
            .map(|x: &I| {
                let x: f64 = x.to_f64().unwrap_or(0.0);
                x * x
            })
            .sum()
    }
}

fn random_sign<I: PrimInt + Signed>(source: &mut Source) -> I {
    if source.next_u32() & 1 == 1 { I::one() } else { -I::one() }
}

impl<I: Copy + std::fmt::Debug> ZnxInfos for IntPolynomial<I> {
    fn n(&self) -> usize {
        self.coefs.len()
    }
}

impl<I: Copy + std::fmt::Debug> ZnxView for IntPolynomial<I> {
    type Scalar = I;

    fn raw(&self) -> &[I] {
        &self.coefs
    }
}

impl<I: Copy + std::fmt::Debug> ZnxViewMut for IntPolynomial<I> {
    fn raw_mut(&mut self) -> &mut [I] {
        &mut self.coefs
    }
}

impl<I: PrimInt> ZnxZero for IntPolynomial<I> {
    fn zero(&mut self) {
        self.coefs.fill(I::zero())
    }
}
