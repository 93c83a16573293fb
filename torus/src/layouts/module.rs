use std::marker::PhantomData;

use thiserror::Error;
use tracing::debug;

use crate::{
    KARATSUBA_THRESHOLD,
    layouts::{IntPolynomial, Torus, TorusPolynomial},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    #[error("ring degree must be non-zero")]
    ZeroDegree,
    #[error("ring degree n={0} is too large: the unreduced product buffer overflows usize")]
    DegreeOverflow(usize),
}

/// Ring parameters of `T[X]/(X^N + 1)`: the degree `N`, the torus width `T`
/// and the tuning of the multiplication kernels.
///
/// Every operation of the crate is invoked on a `Module`, and every
/// polynomial passed to it must have degree `N`. A `Module` is immutable and
/// can be shared between threads; per-call temporaries are supplied through a
/// [`crate::layouts::Scratch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module<T: Torus> {
    n: usize,
    karatsuba_threshold: usize,
    _marker: PhantomData<T>,
}

impl<T: Torus> Module<T> {
    /// Creates a module of degree `n` with the default Karatsuba cut-off.
    ///
    /// # Panics
    ///
    /// Panics if `n` is rejected by [`Module::try_new`].
    pub fn new(n: usize) -> Self {
        match Self::try_new(n) {
            Ok(module) => module,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a module of degree `n`. A power of two is conventional but
    /// not required.
    pub fn try_new(n: usize) -> Result<Self, ModuleError> {
        if n == 0 {
            return Err(ModuleError::ZeroDegree);
        }
        if n.checked_mul(2)
            .and_then(|x| x.checked_mul(size_of::<T>()))
            .is_none()
        {
            return Err(ModuleError::DegreeOverflow(n));
        }
        debug!(n, torus_bits = T::BITS, karatsuba_threshold = KARATSUBA_THRESHOLD, "module created");
        Ok(Self {
            n,
            karatsuba_threshold: KARATSUBA_THRESHOLD,
            _marker: PhantomData,
        })
    }

    /// Sets the half size at or below which the Karatsuba kernel falls back
    /// to the schoolbook convolution. Results are unaffected; the scratch
    /// requirement changes accordingly.
    pub fn with_karatsuba_threshold(mut self, threshold: usize) -> Self {
        self.karatsuba_threshold = threshold;
        self
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn karatsuba_threshold(&self) -> usize {
        self.karatsuba_threshold
    }

    /// Allocates a zero [`TorusPolynomial`] of degree `N`.
    pub fn torus_poly_alloc(&self) -> TorusPolynomial<T> {
        TorusPolynomial::alloc(self.n)
    }

    /// Allocates a zero [`IntPolynomial`] of degree `N`.
    pub fn int_poly_alloc(&self) -> IntPolynomial<T::Int> {
        IntPolynomial::alloc(self.n)
    }
}
