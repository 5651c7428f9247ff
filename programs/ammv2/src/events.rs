use anchor_lang::prelude::*;

#[event]
pub struct PairCreated {
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,
    pub pair: Pubkey,
    /// Number of registered pairs, this one included
    pub index: u64,
}

/// Emitted whenever cached reserves change
#[event]
pub struct Sync {
    pub pair: Pubkey,
    pub reserve_a: u64,
    pub reserve_b: u64,
}

#[event]
pub struct SharesMinted {
    pub pair: Pubkey,
    pub sender: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
}

#[event]
pub struct SharesBurned {
    pub pair: Pubkey,
    pub sender: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub to: Pubkey,
}

#[event]
pub struct SwapExecuted {
    pub pair: Pubkey,
    pub sender: Pubkey,
    pub amount_a_in: u64,
    pub amount_b_in: u64,
    pub amount_a_out: u64,
    pub amount_b_out: u64,
    pub to: Pubkey,
}

#[event]
pub struct FeeRecipientUpdated {
    pub factory: Pubkey,
    pub previous: Option<Pubkey>,
    pub fee_recipient: Option<Pubkey>,
}

#[event]
pub struct FeeAuthorityUpdated {
    pub factory: Pubkey,
    pub previous: Pubkey,
    pub fee_authority: Pubkey,
}
