use itertools::izip;
use num_traits::WrappingAdd;

use crate::{
    align_bytes,
    api::TakeSlice,
    layouts::{Scratch, Torus},
    reference::tpoly::tpoly_convolve_ref,
};

/// Returns the scratch bytes [`tpoly_karatsuba_ref`] needs for operands of
/// length `size`: three temporaries per recursion level, summed down the
/// recursion since sibling calls reuse the same tail.
pub fn tpoly_karatsuba_tmp_bytes<T: Torus>(size: usize, threshold: usize) -> usize {
    let h: usize = size / 2;
    if h <= threshold || !size.is_multiple_of(2) {
        return 0;
    }
    align_bytes(h * size_of::<T::Int>())
        + align_bytes(h * size_of::<T>())
        + align_bytes(size * size_of::<T>())
        + tpoly_karatsuba_tmp_bytes::<T>(h, threshold)
}

/// Unreduced product of `a` and `b` (both of length `s`) into `res`
/// (length `2s - 1`), computed by Karatsuba recursion.
///
/// Sub-products whose half size is at most `threshold`, or whose size is odd,
/// are computed by [`tpoly_convolve_ref`]. The result is identical to
/// [`tpoly_convolve_ref`] for every input.
///
/// # Panics
///
/// Panics if `scratch` holds fewer than [`tpoly_karatsuba_tmp_bytes`] bytes.
pub fn tpoly_karatsuba_ref<T: Torus>(threshold: usize, res: &mut [T], a: &[T::Int], b: &[T], scratch: &mut Scratch) {
    let size: usize = a.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(b.len(), size);
        assert_eq!(res.len(), 2 * size - 1);
    }

    let h: usize = size / 2;
    if h <= threshold || !size.is_multiple_of(2) {
        tpoly_convolve_ref(res, a, b);
        return;
    }

    let (a_sum, scratch) = scratch.take_slice::<T::Int>(h);
    let (b_sum, scratch) = scratch.take_slice::<T>(h);
    let (mid, scratch) = scratch.take_slice::<T>(size);

    let (a_lo, a_hi) = a.split_at(h);
    let (b_lo, b_hi) = b.split_at(h);

    izip!(a_sum.iter_mut(), a_lo.iter(), a_hi.iter()).for_each(|(s, lo, hi)| *s = WrappingAdd::wrapping_add(lo, hi));
    izip!(b_sum.iter_mut(), b_lo.iter(), b_hi.iter()).for_each(|(s, lo, hi)| *s = *lo + *hi);

    // lo * lo -> res[0..size-1], hi * hi -> res[size..2*size-1]
    {
        let (res_lo, res_hi) = res.split_at_mut(size);
        tpoly_karatsuba_ref(threshold, &mut res_lo[..size - 1], a_lo, b_lo, scratch);
        tpoly_karatsuba_ref(threshold, res_hi, a_hi, b_hi, scratch);
    }

    // (lo + hi) * (lo + hi) -> mid[0..size-1]
    tpoly_karatsuba_ref(threshold, &mut mid[..size - 1], a_sum, b_sum, scratch);

    res[size - 1] = T::ZERO;

    {
        let (res_lo, res_hi) = res.split_at(size);
        izip!(mid[..size - 1].iter_mut(), res_lo.iter(), res_hi.iter()).for_each(|(m, lo, hi)| *m -= *lo + *hi);
    }

    izip!(res[h..h + size - 1].iter_mut(), mid.iter()).for_each(|(r, m)| *r += *m);
}
