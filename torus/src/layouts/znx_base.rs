use std::fmt::Debug;

/// Shape of a polynomial container.
pub trait ZnxInfos {
    /// Returns the ring degree `N` of the polynomial in `R[X]/(X^N + 1)`.
    fn n(&self) -> usize;
}

/// Read-only view into a polynomial container's coefficients.
///
/// Coefficient `i` is the coefficient of `X^i`.
pub trait ZnxView: ZnxInfos {
    type Scalar: Copy + Debug;

    /// Returns the `N` coefficients.
    fn raw(&self) -> &[Self::Scalar];

    /// Returns the coefficient of `X^i`.
    fn at(&self, i: usize) -> Self::Scalar {
        assert!(i < self.n(), "i: {} >= self.n(): {}", i, self.n());
        self.raw()[i]
    }
}

/// Mutable view into a polynomial container's coefficients.
pub trait ZnxViewMut: ZnxView {
    /// Returns the `N` coefficients mutably.
    fn raw_mut(&mut self) -> &mut [Self::Scalar];

    /// Returns a mutable reference to the coefficient of `X^i`.
    fn at_mut(&mut self, i: usize) -> &mut Self::Scalar {
        assert!(i < self.n(), "i: {} >= self.n(): {}", i, self.n());
        &mut self.raw_mut()[i]
    }
}

/// Zero-fill of a polynomial container.
pub trait ZnxZero {
    fn zero(&mut self);
}
