#![allow(ambiguous_glob_reexports)]

pub mod approve;
pub mod burn;
pub mod initialize_ledger;
pub mod mint_to;
pub mod open_holding;
pub mod permit;
pub mod transfer;
pub mod transfer_from;

pub use approve::*;
pub use burn::*;
pub use initialize_ledger::*;
pub use mint_to::*;
pub use open_holding::*;
pub use permit::*;
pub use transfer::*;
pub use transfer_from::*;
