use itertools::izip;

use crate::layouts::Torus;

/// Returns the largest coefficient-wise wrap-around distance between `a` and `b`.
pub fn tpoly_norm_inf_dist_ref<T: Torus>(a: &[T], b: &[T]) -> f64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    izip!(a.iter(), b.iter()).fold(0.0, |acc: f64, (a, b)| acc.max(a.dist(*b)))
}
