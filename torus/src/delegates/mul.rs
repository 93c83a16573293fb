use tracing::instrument;

use crate::{
    align_bytes,
    api::{
        TakeSlice, TorusPolyAddMulKaratsuba, TorusPolyAddMulNaive, TorusPolyMulKaratsuba, TorusPolyMulKaratsubaTmpBytes,
        TorusPolyMulNaive, TorusPolyMulNaiveTmpBytes, TorusPolySubMulKaratsuba, TorusPolySubMulNaive,
    },
    layouts::{Module, Scratch, Torus, ZnxView, ZnxViewMut},
    reference::tpoly::{
        tpoly_add_inplace_ref, tpoly_karatsuba_ref, tpoly_karatsuba_tmp_bytes, tpoly_mul_naive_ref, tpoly_negacyclic_fold_add_ref,
        tpoly_negacyclic_fold_ref, tpoly_negacyclic_fold_sub_ref, tpoly_sub_inplace_ref,
    },
};

impl<T: Torus> TorusPolyMulNaive<T> for Module<T> {
    fn torus_poly_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        tpoly_mul_naive_ref(res.raw_mut(), a.raw(), b.raw());
    }
}

impl<T: Torus> TorusPolyMulNaiveTmpBytes for Module<T> {
    fn torus_poly_mul_naive_tmp_bytes(&self) -> usize {
        align_bytes(self.n() * size_of::<T>())
    }
}

impl<T: Torus> TorusPolyAddMulNaive<T> for Module<T> {
    fn torus_poly_add_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        let (tmp, _) = scratch.take_slice::<T>(self.n());
        tpoly_mul_naive_ref(tmp, a.raw(), b.raw());
        tpoly_add_inplace_ref(res.raw_mut(), tmp);
    }
}

impl<T: Torus> TorusPolySubMulNaive<T> for Module<T> {
    fn torus_poly_sub_mul_naive<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        let (tmp, _) = scratch.take_slice::<T>(self.n());
        tpoly_mul_naive_ref(tmp, a.raw(), b.raw());
        tpoly_sub_inplace_ref(res.raw_mut(), tmp);
    }
}

impl<T: Torus> TorusPolyMulKaratsubaTmpBytes for Module<T> {
    fn torus_poly_mul_karatsuba_tmp_bytes(&self) -> usize {
        align_bytes((2 * self.n() - 1) * size_of::<T>()) + tpoly_karatsuba_tmp_bytes::<T>(self.n(), self.karatsuba_threshold())
    }
}

impl<T: Torus> Module<T> {
    /// Computes the unreduced product of `a` and `b` in a buffer taken from
    /// `scratch` and hands it to `fold`.
    fn karatsuba_with<A, B, F>(&self, a: &A, b: &B, scratch: &mut Scratch, fold: F)
    where
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
        F: FnOnce(&[T]),
    {
        assert_eq!(a.n(), self.n());
        assert_eq!(b.n(), self.n());
        let (prod, scratch) = scratch.take_slice::<T>(2 * self.n() - 1);
        tpoly_karatsuba_ref(self.karatsuba_threshold(), prod, a.raw(), b.raw(), scratch);
        fold(prod);
    }
}

impl<T: Torus> TorusPolyMulKaratsuba<T> for Module<T> {
    #[instrument(level = "trace", skip_all, fields(n = self.n()))]
    fn torus_poly_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        self.karatsuba_with(a, b, scratch, |prod| tpoly_negacyclic_fold_ref(res.raw_mut(), prod));
    }
}

impl<T: Torus> TorusPolyAddMulKaratsuba<T> for Module<T> {
    #[instrument(level = "trace", skip_all, fields(n = self.n()))]
    fn torus_poly_add_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        self.karatsuba_with(a, b, scratch, |prod| tpoly_negacyclic_fold_add_ref(res.raw_mut(), prod));
    }
}

impl<T: Torus> TorusPolySubMulKaratsuba<T> for Module<T> {
    #[instrument(level = "trace", skip_all, fields(n = self.n()))]
    fn torus_poly_sub_mul_karatsuba<R, A, B>(&self, res: &mut R, a: &A, b: &B, scratch: &mut Scratch)
    where
        R: ZnxViewMut<Scalar = T>,
        A: ZnxView<Scalar = T::Int>,
        B: ZnxView<Scalar = T>,
    {
        assert_eq!(res.n(), self.n());
        self.karatsuba_with(a, b, scratch, |prod| tpoly_negacyclic_fold_sub_ref(res.raw_mut(), prod));
    }
}
