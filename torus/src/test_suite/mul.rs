use num_traits::One;

use crate::{
    DEFAULTALIGN, Source,
    api::{
        ScratchAvailable, ScratchFromBytes, ScratchOwnedAlloc, ScratchOwnedBorrow, TorusPolyAdd, TorusPolyAddMulKaratsuba,
        TorusPolyAddMulNaive, TorusPolyFillUniform, TorusPolyMulKaratsuba, TorusPolyMulKaratsubaTmpBytes, TorusPolyMulNaive,
        TorusPolyMulNaiveTmpBytes, TorusPolyRotate, TorusPolySub, TorusPolySubMulKaratsuba, TorusPolySubMulNaive,
    },
    layouts::{IntPolynomial, Module, Scratch, ScratchOwned, Torus, TorusPolynomial, ZnxView, ZnxViewMut},
    test_suite::fill_int_bounded,
};

pub fn test_torus_poly_mul_karatsuba_vs_naive<T: Torus>(module: &Module<T>) {
    let mut source: Source = Source::new([0u8; 32]);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.torus_poly_mul_karatsuba_tmp_bytes());

    let mut a: IntPolynomial<T::Int> = module.int_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut have: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut want: TorusPolynomial<T> = module.torus_poly_alloc();

    for bound in [1, 2, 1 << 10, 1 << 16] {
        fill_int_bounded::<T>(&mut a, bound, &mut source);
        module.torus_poly_fill_uniform(&mut b, &mut source);

        module.torus_poly_mul_naive(&mut want, &a, &b);
        module.torus_poly_mul_karatsuba(&mut have, &a, &b, scratch.borrow());
        assert_eq!(have, want, "bound={bound}");
    }

    a.fill_ternary_hw(module.n() / 2, &mut source);
    module.torus_poly_mul_naive(&mut want, &a, &b);
    module.torus_poly_mul_karatsuba(&mut have, &a, &b, scratch.borrow());
    assert_eq!(have, want);
}

pub fn test_torus_poly_add_sub_mul<T: Torus>(module: &Module<T>) {
    let mut source: Source = Source::new([1u8; 32]);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(
        module
            .torus_poly_mul_karatsuba_tmp_bytes()
            .max(module.torus_poly_mul_naive_tmp_bytes()),
    );

    let mut a: IntPolynomial<T::Int> = module.int_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut before: TorusPolynomial<T> = module.torus_poly_alloc();
    fill_int_bounded::<T>(&mut a, 1 << 8, &mut source);
    module.torus_poly_fill_uniform(&mut b, &mut source);
    module.torus_poly_fill_uniform(&mut before, &mut source);

    let mut prod: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_mul_naive(&mut prod, &a, &b);

    let mut want: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_add(&mut want, &before, &prod);

    let mut have: TorusPolynomial<T> = before.clone();
    module.torus_poly_add_mul_karatsuba(&mut have, &a, &b, scratch.borrow());
    assert_eq!(have, want);

    let mut have: TorusPolynomial<T> = before.clone();
    module.torus_poly_add_mul_naive(&mut have, &a, &b, scratch.borrow());
    assert_eq!(have, want);

    module.torus_poly_sub(&mut want, &before, &prod);

    let mut have: TorusPolynomial<T> = before.clone();
    module.torus_poly_sub_mul_karatsuba(&mut have, &a, &b, scratch.borrow());
    assert_eq!(have, want);

    let mut have: TorusPolynomial<T> = before.clone();
    module.torus_poly_sub_mul_naive(&mut have, &a, &b, scratch.borrow());
    assert_eq!(have, want);
}

/// Multiplying by the monomial `X^k` is a rotation by `k`.
pub fn test_torus_poly_mul_monomial<T: Torus>(module: &Module<T>) {
    let n: usize = module.n();
    let mut source: Source = Source::new([2u8; 32]);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.torus_poly_mul_karatsuba_tmp_bytes());

    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut b, &mut source);

    let mut want: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut have: TorusPolynomial<T> = module.torus_poly_alloc();

    for k in [0, 1, n / 2, n - 1] {
        let mut a: IntPolynomial<T::Int> = module.int_poly_alloc();
        *a.at_mut(k) = T::Int::one();
        module.torus_poly_rotate(k as i64, &mut want, &b);

        module.torus_poly_mul_karatsuba(&mut have, &a, &b, scratch.borrow());
        assert_eq!(have, want, "k={k}");
        module.torus_poly_mul_naive(&mut have, &a, &b);
        assert_eq!(have, want, "k={k}");
    }
}

pub fn test_torus_poly_mul_all_ones_by_zero<T: Torus>(module: &Module<T>) {
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.torus_poly_mul_karatsuba_tmp_bytes());

    let a: IntPolynomial<T::Int> = IntPolynomial::from_coefs(vec![T::Int::one(); module.n()]);
    let b: TorusPolynomial<T> = module.torus_poly_alloc();

    let mut res: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut res, &mut Source::new([3u8; 32]));
    module.torus_poly_mul_karatsuba(&mut res, &a, &b, scratch.borrow());
    assert!(res.raw().iter().all(|x| *x == T::ZERO));

    module.torus_poly_fill_uniform(&mut res, &mut Source::new([4u8; 32]));
    module.torus_poly_mul_naive(&mut res, &a, &b);
    assert!(res.raw().iter().all(|x| *x == T::ZERO));
}

/// A scratch region of exactly the advertised size suffices, and bytes
/// around it are left untouched.
pub fn test_torus_poly_mul_karatsuba_scratch_bounds<T: Torus>(module: &Module<T>) {
    const GUARD: u8 = 0xA5;

    let bytes: usize = module.torus_poly_mul_karatsuba_tmp_bytes();
    let mut buf: Vec<u8> = vec![GUARD; bytes + 3 * DEFAULTALIGN];
    let start: usize = buf.as_ptr().align_offset(DEFAULTALIGN) + DEFAULTALIGN;
    let end: usize = start + bytes;

    let mut source: Source = Source::new([5u8; 32]);
    let mut a: IntPolynomial<T::Int> = module.int_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    fill_int_bounded::<T>(&mut a, 1 << 12, &mut source);
    module.torus_poly_fill_uniform(&mut b, &mut source);

    let mut have: TorusPolynomial<T> = module.torus_poly_alloc();
    {
        let scratch: &mut Scratch = Scratch::from_bytes(&mut buf[start..end]);
        assert_eq!(scratch.available(), bytes);
        module.torus_poly_mul_karatsuba(&mut have, &a, &b, scratch);
    }

    let mut want: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_mul_naive(&mut want, &a, &b);
    assert_eq!(have, want);

    assert!(buf[..start].iter().all(|x| *x == GUARD));
    assert!(buf[end..].iter().all(|x| *x == GUARD));
}

/// A scratch region too small for the unreduced product panics.
pub fn test_torus_poly_mul_karatsuba_undersized_scratch<T: Torus>(module: &Module<T>) {
    let bytes: usize = (2 * module.n() - 1) * size_of::<T>() - 1;
    let mut buf: Vec<u8> = vec![0u8; bytes + DEFAULTALIGN];
    let start: usize = buf.as_ptr().align_offset(DEFAULTALIGN);
    let scratch: &mut Scratch = Scratch::from_bytes(&mut buf[start..start + bytes]);

    let a: IntPolynomial<T::Int> = module.int_poly_alloc();
    let b: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut res: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_mul_karatsuba(&mut res, &a, &b, scratch);
}
