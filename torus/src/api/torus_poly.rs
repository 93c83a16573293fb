use sampling::source::Source;

use crate::layouts::{Torus, ZnxView, ZnxViewMut};

pub trait TorusPolyFillUniform<T: Torus> {
    /// Fills `res` with independent uniformly distributed torus values.
    fn torus_poly_fill_uniform<R>(&self, res: &mut R, source: &mut Source)
    where
        R: ZnxViewMut<Scalar = T>;
}

pub trait TorusPolyAddNormal<T: Torus> {
    /// Adds to every coefficient of `res` a centred Gaussian sample of standard
    /// deviation `sigma`, resampling any draw whose magnitude exceeds `bound`.
    /// Both `sigma` and `bound` are expressed in torus units.
    fn torus_poly_add_normal<R>(&self, res: &mut R, sigma: f64, bound: f64, source: &mut Source)
    where
        R: ZnxViewMut<Scalar = T>;
}

pub trait TorusPolyCopy<T: Torus> {
    /// Copies `a` into `res`.
    fn torus_poly_copy<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolyAdd<T: Torus> {
    /// res = a + b
    fn torus_poly_add<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyAddInplace<T: Torus> {
    /// res += a
    fn torus_poly_add_inplace<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolySub<T: Torus> {
    /// res = a - b
    fn torus_poly_sub<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolySubInplace<T: Torus> {
    /// res -= a
    fn torus_poly_sub_inplace<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolyNegate<T: Torus> {
    /// res = -a
    fn torus_poly_negate<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolyNegateInplace<T: Torus> {
    /// res = -res
    fn torus_poly_negate_inplace<R>(&self, res: &mut R)
    where
        R: ZnxViewMut<Scalar = T>;
}

pub trait TorusPolyAddScaled<T: Torus> {
    /// res = a + p * b
    ///
    /// `res` and `a` are distinct by construction; use
    /// [`TorusPolyAddScaledInplace`] to accumulate into an existing polynomial.
    fn torus_poly_add_scaled<R, A, B>(&self, res: &mut R, a: &A, p: T::Int, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyAddScaledInplace<T: Torus> {
    /// res += p * a
    fn torus_poly_add_scaled_inplace<R, A>(&self, res: &mut R, p: T::Int, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolySubScaled<T: Torus> {
    /// res = a - p * b
    fn torus_poly_sub_scaled<R, A, B>(&self, res: &mut R, a: &A, p: T::Int, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolySubScaledInplace<T: Torus> {
    /// res -= p * a
    fn torus_poly_sub_scaled_inplace<R, A>(&self, res: &mut R, p: T::Int, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolyNormInfDist<T: Torus> {
    /// Returns `max_i dist(a[i], b[i])`, the largest wrap-around distance
    /// between matching coefficients, in `[0, 0.5]`.
    fn torus_poly_norm_inf_dist<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>;
}

pub trait TorusPolyRotate<T: Torus> {
    /// res = X^p * a mod (X^N + 1), for any `p` (taken modulo 2N).
    fn torus_poly_rotate<R, A>(&self, p: i64, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}

pub trait TorusPolyMulXpMinusOne<T: Torus> {
    /// res = (X^p - 1) * a mod (X^N + 1)
    fn torus_poly_mul_xp_minus_one<R, A>(&self, p: i64, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>;
}
