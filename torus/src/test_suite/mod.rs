pub mod mul;
pub mod torus_poly;

use num_traits::NumCast;
use rand::RngCore;

use crate::{
    Source,
    layouts::{IntPolynomial, Torus},
};

/// Instantiates one `#[test]` per listed generic test function, each receiving
/// a [`crate::layouts::Module`] of the given torus type and degree.
#[macro_export]
macro_rules! torus_test_suite {
    (
        mod $modname:ident,
        torus = $torus:ty,
        n = $n:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        $crate::torus_test_suite! {
            mod $modname,
            torus = $torus,
            n = $n,
            karatsuba_threshold = $crate::KARATSUBA_THRESHOLD,
            tests = { $( $(#[$attr])* $test_name => $impl ),+ }
        }
    };
    (
        mod $modname:ident,
        torus = $torus:ty,
        n = $n:expr,
        karatsuba_threshold = $threshold:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::layouts::Module;

            fn module() -> Module<$torus> {
                Module::<$torus>::new($n).with_karatsuba_threshold($threshold)
            }

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&module());
                }
            )+
        }
    };
}

/// Fills `a` with integers drawn uniformly from `[-bound, bound]`.
pub(crate) fn fill_int_bounded<T: Torus>(a: &mut IntPolynomial<T::Int>, bound: u32, source: &mut Source) {
    a.coefs.iter_mut().for_each(|x| {
        let v: i64 = (source.next_u32() % (2 * bound + 1)) as i64 - bound as i64;
        *x = <T::Int as NumCast>::from(v).unwrap_or_default();
    });
}
