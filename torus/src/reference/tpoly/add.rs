use crate::layouts::Torus;

#[inline(always)]
pub fn tpoly_add_ref<T: Torus>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] + b[i];
    }
}

pub fn tpoly_add_inplace_ref<T: Torus>(res: &mut [T], a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] += a[i];
    }
}

pub fn tpoly_copy_ref<T: Torus>(res: &mut [T], a: &[T]) {
    res.copy_from_slice(a);
}
