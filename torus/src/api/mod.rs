mod mul;
mod scratch;
mod torus_poly;

pub use mul::*;
pub use scratch::*;
pub use torus_poly::*;
