#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod permit;
pub mod state;


use instructions::*;

declare_id!("HFq9YxbYf2w8a4d5bFWeJe4mMvCVym1Z4rKoyvVVDQfr");

#[program]
pub mod pool_token {
    use super::*;

    /// Create a ledger whose supply is controlled by the signing `authority`
    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        name: String,
        symbol: String,
        decimals: u8,
        chain_id: u64,
    ) -> Result<()> {
        instructions::initialize_ledger::process(ctx, name, symbol, decimals, chain_id)
    }

    /// Open an empty holding for any identity, the null identity included
    pub fn open_holding(ctx: Context<OpenHolding>) -> Result<()> {
        instructions::open_holding::process(ctx)
    }

    pub fn mint_to(ctx: Context<MintTo>, amount: u64) -> Result<()> {
        instructions::mint_to::process(ctx, amount)
    }

    pub fn burn(ctx: Context<Burn>, amount: u64) -> Result<()> {
        instructions::burn::process(ctx, amount)
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer::process(ctx, amount)
    }

    /// Set the allowance of `spender` over the owner's holding, overwriting any previous value
    pub fn approve(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
        instructions::approve::process(ctx, amount)
    }

    /// Move tokens on the owner's behalf; an allowance of u64::MAX is never decremented
    pub fn transfer_from(ctx: Context<TransferTokensFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from::process(ctx, amount)
    }

    /// Grant an allowance with an off-chain ed25519 signature from the owner.
    /// The signature must be verified by an ed25519 program instruction placed
    /// immediately before this one in the same transaction.
    pub fn permit(
        ctx: Context<Permit>,
        value: u64,
        deadline: i64,
        signature: [u8; 64],
    ) -> Result<()> {
        instructions::permit::process(ctx, value, deadline, signature)
    }
}
