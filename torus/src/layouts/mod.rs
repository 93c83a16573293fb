mod int_poly;
mod module;
mod scratch;
mod torus;
mod torus_poly;
mod znx_base;

pub use int_poly::*;
pub use module::*;
pub use scratch::*;
pub use torus::*;
pub use torus_poly::*;
pub use znx_base::*;
