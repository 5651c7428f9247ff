#![allow(ambiguous_glob_reexports)]

pub mod create_pair;
pub mod fee_settings;
pub mod initialize_factory;
pub mod manage_liquidity;
pub mod reserves;
pub mod swap;

pub use create_pair::*;
pub use fee_settings::*;
pub use initialize_factory::*;
pub use manage_liquidity::*;
pub use reserves::*;
pub use swap::*;
