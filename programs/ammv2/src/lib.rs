#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod callback;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;
pub mod transfers;


use instructions::*;
use state::Reserves;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod amm_v2 {
    use super::*;

    /// Create the factory with the identity allowed to manage the protocol fee
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        fee_authority: Pubkey,
        chain_id: u64,
    ) -> Result<()> {
        instructions::initialize_factory::process(ctx, fee_authority, chain_id)
    }

    /// Create the unique pair for two assets, given in either order
    pub fn create_pair(ctx: Context<CreatePair>) -> Result<()> {
        instructions::create_pair::process(ctx)
    }

    /// Turn the protocol fee on by naming a recipient, or off with `None`
    pub fn set_fee_recipient(
        ctx: Context<UpdateFeeSettings>,
        fee_recipient: Option<Pubkey>,
    ) -> Result<()> {
        instructions::fee_settings::set_fee_recipient(ctx, fee_recipient)
    }

    pub fn set_fee_authority(ctx: Context<UpdateFeeSettings>, fee_authority: Pubkey) -> Result<()> {
        instructions::fee_settings::set_fee_authority(ctx, fee_authority)
    }

    /// Mint shares for assets sent to the vaults since the last update
    pub fn mint(ctx: Context<MintShares>) -> Result<()> {
        instructions::manage_liquidity::mint(ctx)
    }

    /// Burn the shares held by the pair and pay out both assets
    pub fn burn(ctx: Context<BurnShares>) -> Result<()> {
        instructions::manage_liquidity::burn(ctx)
    }

    /// Swap by requesting outputs; non-empty `data` triggers a flash-swap callback
    pub fn swap<'info>(
        ctx: Context<'_, '_, '_, 'info, SwapTokens<'info>>,
        amount_a_out: u64,
        amount_b_out: u64,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::swap::process(ctx, amount_a_out, amount_b_out, data)
    }

    pub fn sync(ctx: Context<SyncReserves>) -> Result<()> {
        instructions::reserves::sync(ctx)
    }

    pub fn skim(ctx: Context<SkimExcess>) -> Result<()> {
        instructions::reserves::skim(ctx)
    }

    /// Reserves and last update time, returned as instruction return data
    pub fn get_reserves(ctx: Context<GetReserves>) -> Result<Reserves> {
        instructions::reserves::get_reserves(ctx)
    }
}
