use crate::layouts::Torus;

/// Unreduced schoolbook product: `res[k] = sum_{i + j = k} a[i] * b[j]`.
///
/// `a` and `b` have the same length `s` and `res` has length `2s - 1`.
pub fn tpoly_convolve_ref<T: Torus>(res: &mut [T], a: &[T::Int], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
        assert_eq!(res.len(), 2 * a.len() - 1);
    }

    res.fill(T::ZERO);
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            res[i + j] += bj.mul_int(*ai);
        }
    }
}

/// res = a * b mod (X^N + 1), with the reduction folded into the accumulation.
pub fn tpoly_mul_naive_ref<T: Torus>(res: &mut [T], a: &[T::Int], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        let mut acc: T = T::ZERO;
        for j in 0..=i {
            acc += b[i - j].mul_int(a[j]);
        }
        for j in i + 1..n {
            acc -= b[n + i - j].mul_int(a[j]);
        }
        res[i] = acc;
    }
}
