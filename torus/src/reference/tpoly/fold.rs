use crate::layouts::Torus;

// The unreduced product `prod` of two degree-(N-1) polynomials has 2N - 1
// coefficients. Reduction modulo X^N + 1 maps X^(N+i) to -X^i.

/// res = prod mod (X^N + 1)
pub fn tpoly_negacyclic_fold_ref<T: Torus>(res: &mut [T], prod: &[T]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(prod.len(), 2 * n - 1);
    }

    for i in 0..n - 1 {
        res[i] = prod[i] - prod[n + i];
    }
    res[n - 1] = prod[n - 1];
}

/// res += prod mod (X^N + 1)
pub fn tpoly_negacyclic_fold_add_ref<T: Torus>(res: &mut [T], prod: &[T]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(prod.len(), 2 * n - 1);
    }

    for i in 0..n - 1 {
        res[i] += prod[i] - prod[n + i];
    }
    res[n - 1] += prod[n - 1];
}

/// res -= prod mod (X^N + 1)
pub fn tpoly_negacyclic_fold_sub_ref<T: Torus>(res: &mut [T], prod: &[T]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(prod.len(), 2 * n - 1);
    }

    for i in 0..n - 1 {
        res[i] -= prod[i] - prod[n + i];
    }
    res[n - 1] -= prod[n - 1];
}
