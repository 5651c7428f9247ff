use anchor_lang::prelude::*;

/// Emitted on every balance movement. Mints come from, and burns go to, the null identity.
#[event]
pub struct Transfer {
    pub ledger: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Approval {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}
