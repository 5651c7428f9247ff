pub mod factory;
pub mod pair;

pub use factory::*;
pub use pair::*;
