mod add;
mod dist;
mod fold;
mod karatsuba;
mod mul_naive;
mod neg;
mod random;
mod rotate;
mod scaled;
mod sub;

pub use add::*;
pub use dist::*;
pub use fold::*;
pub use karatsuba::*;
pub use mul_naive::*;
pub use neg::*;
pub use random::*;
pub use rotate::*;
pub use scaled::*;
pub use sub::*;
