use crate::{
    layouts::Torus,
    reference::tpoly::{tpoly_negate_ref, tpoly_sub_inplace_ref},
};

/// res = X^p * src mod (X^N + 1)
///
/// `p` is reduced modulo `2N`; `N` need not be a power of two.
pub fn tpoly_rotate_ref<T: Torus>(p: i64, res: &mut [T], src: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), src.len());
    }

    let n: usize = res.len();
    let p_2n: usize = p.rem_euclid(2 * n as i64) as usize;

    // X^N = -1: shifts by N or more flip the sign of both halves.
    let (shift, neg_first) = if p_2n < n { (p_2n, true) } else { (p_2n - n, false) };

    let (dst1, dst2) = res.split_at_mut(shift);
    let (src1, src2) = src.split_at(n - shift);

    if neg_first {
        tpoly_negate_ref(dst1, src2);
        dst2.copy_from_slice(src1);
    } else {
        dst1.copy_from_slice(src2);
        tpoly_negate_ref(dst2, src1);
    }
}

/// res = (X^p - 1) * src mod (X^N + 1)
pub fn tpoly_mul_xp_minus_one_ref<T: Torus>(p: i64, res: &mut [T], src: &[T]) {
    tpoly_rotate_ref(p, res, src);
    tpoly_sub_inplace_ref(res, src);
}
