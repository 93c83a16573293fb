use crate::layouts::Torus;

#[inline(always)]
pub fn tpoly_sub_ref<T: Torus>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] - b[i];
    }
}

pub fn tpoly_sub_inplace_ref<T: Torus>(res: &mut [T], a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] -= a[i];
    }
}
