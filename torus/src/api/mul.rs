//! External products `IntPolynomial x TorusPolynomial -> TorusPolynomial`
//! in `T[X]/(X^N + 1)`.
//!
//! The schoolbook and Karatsuba kernels are exact and return identical results.

use crate::layouts::{Scratch, Torus, ZnxView, ZnxViewMut};

pub trait TorusPolyMulNaive<T: Torus> {
    /// res = a * b mod (X^N + 1), by schoolbook multiplication.
    fn torus_poly_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyMulNaiveTmpBytes {
    /// Returns the minimum number of bytes necessary for the accumulating
    /// schoolbook products.
    fn torus_poly_mul_naive_tmp_bytes(&self) -> usize;
}

pub trait TorusPolyAddMulNaive<T: Torus> {
    /// res += a * b mod (X^N + 1), by schoolbook multiplication.
    fn torus_poly_add_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolySubMulNaive<T: Torus> {
    /// res -= a * b mod (X^N + 1), by schoolbook multiplication.
    fn torus_poly_sub_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyMulKaratsubaTmpBytes {
    /// Returns the minimum number of bytes necessary for the Karatsuba
    /// products: the unreduced `2N - 1` product plus the temporaries of every
    /// recursion level.
    fn torus_poly_mul_karatsuba_tmp_bytes(&self) -> usize;
}

pub trait TorusPolyMulKaratsuba<T: Torus> {
    /// res = a * b mod (X^N + 1), by Karatsuba multiplication.
    ///
    /// # Panics
    ///
    /// Panics if `scratch` holds fewer than
    /// [`TorusPolyMulKaratsubaTmpBytes::torus_poly_mul_karatsuba_tmp_bytes`] bytes.
    fn torus_poly_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyAddMulKaratsuba<T: Torus> {
    /// res += a * b mod (X^N + 1), by Karatsuba multiplication.
    fn torus_poly_add_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolySubMulKaratsuba<T: Torus> {
    /// res -= a * b mod (X^N + 1), by Karatsuba multiplication.
    fn torus_poly_sub_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>;
}
