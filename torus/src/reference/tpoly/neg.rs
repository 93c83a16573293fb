use crate::layouts::Torus;

#[inline(always)]
pub fn tpoly_negate_ref<T: Torus>(res: &mut [T], src: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), src.len());
    }

    for i in 0..res.len() {
        res[i] = -src[i]
    }
}

#[inline(always)]
pub fn tpoly_negate_inplace_ref<T: Torus>(res: &mut [T]) {
    for value in res {
        *value = -*value
    }
}
