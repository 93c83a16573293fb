use itertools::izip;

use crate::layouts::Torus;

/// res = a + p * b
pub fn tpoly_add_scaled_ref<T: Torus>(res: &mut [T], a: &[T], p: T::Int, b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, a, b)| *r = *a + b.mul_int(p));
}

/// res += p * a
pub fn tpoly_add_scaled_inplace_ref<T: Torus>(res: &mut [T], p: T::Int, a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    izip!(res.iter_mut(), a.iter()).for_each(|(r, a)| *r += a.mul_int(p));
}

/// res = a - p * b
pub fn tpoly_sub_scaled_ref<T: Torus>(res: &mut [T], a: &[T], p: T::Int, b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, a, b)| *r = *a - b.mul_int(p));
}

/// res -= p * a
pub fn tpoly_sub_scaled_inplace_ref<T: Torus>(res: &mut [T], p: T::Int, a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    izip!(res.iter_mut(), a.iter()).for_each(|(r, a)| *r -= a.mul_int(p));
}
