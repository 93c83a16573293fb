use rand_distr::{Distribution, StandardNormal};

use crate::{Source, layouts::Torus};

pub fn tpoly_fill_uniform_ref<T: Torus>(res: &mut [T], source: &mut Source) {
    res.iter_mut().for_each(|x| *x = T::uniform(source))
}

/// Adds to each coefficient a sample of `N(0, sigma^2)` rejected above `bound`,
/// both in torus units.
pub fn tpoly_add_normal_ref<T: Torus>(res: &mut [T], sigma: f64, bound: f64, source: &mut Source) {
    res.iter_mut().for_each(|x| {
        let mut z: f64 = StandardNormal.sample(source);
        while (sigma * z).abs() > bound {
            z = StandardNormal.sample(source);
        }
        *x += T::from_f64(sigma * z)
    })
}
