use crate::{
    Source,
    api::{
        TorusPolyAdd, TorusPolyAddInplace, TorusPolyAddNormal, TorusPolyAddScaled, TorusPolyAddScaledInplace, TorusPolyCopy,
        TorusPolyFillUniform, TorusPolyMulXpMinusOne, TorusPolyNegate, TorusPolyNegateInplace, TorusPolyNormInfDist,
        TorusPolyRotate, TorusPolySub, TorusPolySubInplace, TorusPolySubScaled, TorusPolySubScaledInplace,
    },
    layouts::{Module, Torus, ZnxView, ZnxViewMut},
    reference::tpoly::{
        tpoly_add_inplace_ref, tpoly_add_normal_ref, tpoly_add_ref, tpoly_add_scaled_inplace_ref, tpoly_add_scaled_ref,
        tpoly_copy_ref, tpoly_fill_uniform_ref, tpoly_mul_xp_minus_one_ref, tpoly_negate_inplace_ref, tpoly_negate_ref,
        tpoly_norm_inf_dist_ref, tpoly_rotate_ref, tpoly_sub_inplace_ref, tpoly_sub_ref, tpoly_sub_scaled_inplace_ref,
        tpoly_sub_scaled_ref,
    },
};

impl<T: Torus> TorusPolyFillUniform<T> for Module<T> {
    fn torus_poly_fill_uniform<R>(&self, res: &mut R, source: &mut Source)
    where
        R: ZnxViewMut<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        tpoly_fill_uniform_ref(res.raw_mut(), source);
    }
}

impl<T: Torus> TorusPolyAddNormal<T> for Module<T> {
    fn torus_poly_add_normal<R>(&self, res: &mut R, sigma: f64, bound: f64, source: &mut Source)
    where
        R: ZnxViewMut<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert!(sigma >= 0.0, "invalid sigma: {sigma}");
        assert!(bound > 0.0 || (bound == 0.0 && sigma == 0.0), "invalid bound: {bound} for sigma: {sigma}");
        tpoly_add_normal_ref(res.raw_mut(), sigma, bound, source);
    }
}

impl<T: Torus> TorusPolyCopy<T> for Module<T> {
    fn torus_poly_copy<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_copy_ref(res.raw_mut(), a.raw());
    }
}

impl<T: Torus> TorusPolyAdd<T> for Module<T> {
    fn torus_poly_add<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_add_ref(res.raw_mut(), a.raw(), b.raw());
    }
}

impl<T: Torus> TorusPolyAddInplace<T> for Module<T> {
    fn torus_poly_add_inplace<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_add_inplace_ref(res.raw_mut(), a.raw());
    }
}

impl<T: Torus> TorusPolySub<T> for Module<T> {
    fn torus_poly_sub<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_sub_ref(res.raw_mut(), a.raw(), b.raw());
    }
}

impl<T: Torus> TorusPolySubInplace<T> for Module<T> {
    fn torus_poly_sub_inplace<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_sub_inplace_ref(res.raw_mut(), a.raw());
    }
}

impl<T: Torus> TorusPolyNegate<T> for Module<T> {
    fn torus_poly_negate<R, A>(&self, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_negate_ref(res.raw_mut(), a.raw());
    }
}

impl<T: Torus> TorusPolyNegateInplace<T> for Module<T> {
    fn torus_poly_negate_inplace<R>(&self, res: &mut R)
    where
        R: ZnxViewMut<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        tpoly_negate_inplace_ref(res.raw_mut());
    }
}

impl<T: Torus> TorusPolyAddScaled<T> for Module<T> {
    fn torus_poly_add_scaled<R, A, B>(&self, res: &mut R, a: &A, p: T::Int, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_add_scaled_ref(res.raw_mut(), a.raw(), p, b.raw());
    }
}

impl<T: Torus> TorusPolyAddScaledInplace<T> for Module<T> {
    fn torus_poly_add_scaled_inplace<R, A>(&self, res: &mut R, p: T::Int, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_add_scaled_inplace_ref(res.raw_mut(), p, a.raw());
    }
}

impl<T: Torus> TorusPolySubScaled<T> for Module<T> {
    fn torus_poly_sub_scaled<R, A, B>(&self, res: &mut R, a: &A, p: T::Int, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_sub_scaled_ref(res.raw_mut(), a.raw(), p, b.raw());
    }
}

impl<T: Torus> TorusPolySubScaledInplace<T> for Module<T> {
    fn torus_poly_sub_scaled_inplace<R, A>(&self, res: &mut R, p: T::Int, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_sub_scaled_inplace_ref(res.raw_mut(), p, a.raw());
    }
}

impl<T: Torus> TorusPolyNormInfDist<T> for Module<T> {
    fn torus_poly_norm_inf_dist<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: ZnxView<Scalar = T>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_norm_inf_dist_ref(a.raw(), b.raw())
    }
}

impl<T: Torus> TorusPolyRotate<T> for Module<T> {
    fn torus_poly_rotate<R, A>(&self, p: i64, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_rotate_ref(p, res.raw_mut(), a.raw());
    }
}

impl<T: Torus> TorusPolyMulXpMinusOne<T> for Module<T> {
    fn torus_poly_mul_xp_minus_one<R, A>(&self, p: i64, res: &mut R, a: &A)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        tpoly_mul_xp_minus_one_ref(p, res.raw_mut(), a.raw());
    }
}
