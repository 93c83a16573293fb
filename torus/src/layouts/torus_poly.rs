use crate::layouts::{Torus, ZnxInfos, ZnxView, ZnxViewMut, ZnxZero};

/// An element of `T[X]/(X^N + 1)`: `N` torus coefficients.
///
/// Operations naming a `TorusPolynomial` as `res` overwrite or accumulate
/// into it in place.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct TorusPolynomial<T: Torus> {
    pub coefs: Vec<T>,
}

impl<T: Torus> TorusPolynomial<T> {
    /// Allocates the zero polynomial of degree `n`.
    pub fn alloc(n: usize) -> Self {
        Self {
            coefs: vec![T::ZERO; n],
        }
    }

    pub fn from_coefs(coefs: Vec<T>) -> Self {
        Self { coefs }
    }

    /// Builds a polynomial from real coefficients, each reduced modulo 1.
    pub fn from_f64(coefs: &[f64]) -> Self {
        Self {
            coefs: coefs.iter().map(|x| T::from_f64(*x)).collect(),
        }
    }
}

impl<T: Torus> ZnxInfos for TorusPolynomial<T> {
    fn n(&self) -> usize {
        self.coefs.len()
    }
}

impl<T: Torus> ZnxView for TorusPolynomial<T> {
    type Scalar = T;

    fn raw(&self) -> &[T] {
        &self.coefs
    }
}

impl<T: Torus> ZnxViewMut for TorusPolynomial<T> {
    fn raw_mut(&mut self) -> &mut [T] {
        &mut self.coefs
    }
}

impl<T: Torus> ZnxZero for TorusPolynomial<T> {
    fn zero(&mut self) {
        self.coefs.fill(T::ZERO)
    }
}
