use itertools::izip;
use num_traits::{NumCast, WrappingAdd};

use crate::{
    Source,
    api::{
        TorusPolyAdd, TorusPolyAddInplace, TorusPolyAddNormal, TorusPolyAddScaled, TorusPolyAddScaledInplace, TorusPolyCopy,
        TorusPolyFillUniform, TorusPolyMulXpMinusOne, TorusPolyNegate, TorusPolyNegateInplace, TorusPolyNormInfDist,
        TorusPolyRotate, TorusPolySub, TorusPolySubInplace, TorusPolySubScaled, TorusPolySubScaledInplace,
    },
    layouts::{Module, Torus, TorusPolynomial, ZnxView, ZnxZero},
};

fn int<T: Torus>(x: i64) -> T::Int {
    <T::Int as NumCast>::from(x).unwrap_or_default()
}

pub fn test_torus_poly_add_scaled<T: Torus>(module: &Module<T>) {
    let mut source: Source = Source::new([0u8; 32]);

    let mut a: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut a, &mut source);
    module.torus_poly_fill_uniform(&mut b, &mut source);

    for p in [-3, 0, 1, 7, 1 << 20] {
        let p: T::Int = int::<T>(p);
        let mut res: TorusPolynomial<T> = module.torus_poly_alloc();
        module.torus_poly_add_scaled(&mut res, &a, p, &b);
        izip!(res.raw().iter(), a.raw().iter(), b.raw().iter()).for_each(|(r, a, b)| assert_eq!(*r, *a + b.mul_int(p)));

        module.torus_poly_sub_scaled(&mut res, &a, p, &b);
        izip!(res.raw().iter(), a.raw().iter(), b.raw().iter()).for_each(|(r, a, b)| assert_eq!(*r, *a - b.mul_int(p)));
    }

    // Two in-place accumulations with p1 then p2 equal one with p1 + p2.
    let p1: T::Int = int::<T>(12345);
    let p2: T::Int = int::<T>(-678);
    let mut twice: TorusPolynomial<T> = a.clone();
    module.torus_poly_add_scaled_inplace(&mut twice, p1, &b);
    module.torus_poly_add_scaled_inplace(&mut twice, p2, &b);
    let mut once: TorusPolynomial<T> = a.clone();
    module.torus_poly_add_scaled_inplace(&mut once, p1.wrapping_add(&p2), &b);
    assert_eq!(twice, once);

    module.torus_poly_sub_scaled_inplace(&mut twice, p1, &b);
    module.torus_poly_sub_scaled_inplace(&mut twice, p2, &b);
    assert_eq!(twice, a);
}

pub fn test_torus_poly_add_sub_negate<T: Torus>(module: &Module<T>) {
    let mut source: Source = Source::new([1u8; 32]);

    let mut a: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut a, &mut source);
    module.torus_poly_fill_uniform(&mut b, &mut source);

    let mut sum: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_add(&mut sum, &a, &b);
    let mut diff: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_sub(&mut diff, &sum, &b);
    assert_eq!(diff, a);

    let mut acc: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_copy(&mut acc, &a);
    assert_eq!(acc, a);
    module.torus_poly_add_inplace(&mut acc, &b);
    assert_eq!(acc, sum);
    module.torus_poly_sub_inplace(&mut acc, &a);
    assert_eq!(acc, b);

    // a - b == a + (-b)
    let mut neg_b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_negate(&mut neg_b, &b);
    module.torus_poly_sub(&mut diff, &a, &b);
    module.torus_poly_add(&mut sum, &a, &neg_b);
    assert_eq!(diff, sum);

    module.torus_poly_negate_inplace(&mut neg_b);
    assert_eq!(neg_b, b);

    neg_b.zero();
    assert!(neg_b.raw().iter().all(|x| *x == T::ZERO));
}

pub fn test_torus_poly_norm_inf_dist<T: Torus>(module: &Module<T>) {
    let mut source: Source = Source::new([2u8; 32]);

    let mut a: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut a, &mut source);
    module.torus_poly_fill_uniform(&mut b, &mut source);

    assert_eq!(module.torus_poly_norm_inf_dist(&a, &a), 0.0);
    let d_ab: f64 = module.torus_poly_norm_inf_dist(&a, &b);
    assert_eq!(d_ab, module.torus_poly_norm_inf_dist(&b, &a));
    assert!((0.0..=0.5).contains(&d_ab));

    // Bounded noise stays within its bound, including across the wrap point.
    let bound: f64 = 1.0 / 64.0;
    let mut noisy: TorusPolynomial<T> = a.clone();
    module.torus_poly_add_normal(&mut noisy, bound / 4.0, bound, &mut source);
    let d: f64 = module.torus_poly_norm_inf_dist(&a, &noisy);
    assert!(d <= bound + 1e-9, "d={d} > bound={bound}");
    assert!(d > 0.0);
}

pub fn test_torus_poly_rotate<T: Torus>(module: &Module<T>) {
    let n: i64 = module.n() as i64;
    let mut source: Source = Source::new([3u8; 32]);

    let mut a: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut a, &mut source);

    let mut tmp: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut res: TorusPolynomial<T> = module.torus_poly_alloc();

    for p in [-2 * n - 1, -n, -1, 0, 1, n / 2, n, n + 3, 5 * n - 1] {
        module.torus_poly_rotate(p, &mut tmp, &a);
        module.torus_poly_rotate(-p, &mut res, &tmp);
        assert_eq!(res, a, "p={p}");

        // (X^p - 1) * a == X^p * a - a
        module.torus_poly_mul_xp_minus_one(p, &mut res, &a);
        module.torus_poly_sub_inplace(&mut tmp, &a);
        assert_eq!(res, tmp, "p={p}");
    }

    // X^N == -1
    module.torus_poly_rotate(n, &mut res, &a);
    module.torus_poly_negate(&mut tmp, &a);
    assert_eq!(res, tmp);

    // X^1 applied N times equals X^N.
    module.torus_poly_copy(&mut tmp, &a);
    for _ in 0..n {
        module.torus_poly_rotate(1, &mut res, &tmp);
        std::mem::swap(&mut res, &mut tmp);
    }
    module.torus_poly_negate(&mut res, &a);
    assert_eq!(res, tmp);
}

pub fn test_torus_poly_fill_uniform<T: Torus>(module: &Module<T>) {
    let mut a: TorusPolynomial<T> = module.torus_poly_alloc();
    let mut b: TorusPolynomial<T> = module.torus_poly_alloc();
    module.torus_poly_fill_uniform(&mut a, &mut Source::new([4u8; 32]));
    module.torus_poly_fill_uniform(&mut b, &mut Source::new([4u8; 32]));
    assert_eq!(a, b);
    module.torus_poly_fill_uniform(&mut b, &mut Source::new([5u8; 32]));
    assert_ne!(a, b);
}
