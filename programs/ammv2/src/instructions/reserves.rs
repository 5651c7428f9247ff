use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::AmmError;
use crate::events::Sync;
use crate::state::{Pair, Reserves};
use crate::transfers;

/// Overwrite the cached reserves with the current vault balances
pub fn sync(ctx: Context<SyncReserves>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let balance_a = ctx.accounts.vault_a.amount;
    let balance_b = ctx.accounts.vault_b.amount;

    let pair = &mut ctx.accounts.pair;
    pair.lock()?;
    pair.update(balance_a, balance_b, now)?;
    pair.unlock();

    emit!(Sync {
        pair: pair.key(),
        reserve_a: pair.reserve_a,
        reserve_b: pair.reserve_b,
    });
    Ok(())
}

/// Send vault balances above the cached reserves to the recipient
pub fn skim(ctx: Context<SkimExcess>) -> Result<()> {
    ctx.accounts.pair.lock()?;
    ctx.accounts
        .pair
        .check_recipient(&ctx.accounts.recipient_a.owner)?;
    // Anything above the cached reserves
    let excess_a = Pair::excess(ctx.accounts.vault_a.amount, ctx.accounts.pair.reserve_a)?;
    let excess_b = Pair::excess(ctx.accounts.vault_b.amount, ctx.accounts.pair.reserve_b)?;

    {
        let accounts = &ctx.accounts;
        let seeds = accounts.pair.seeds();
        let signer_seeds = &[&seeds[..]];
        let pair_info = accounts.pair.to_account_info();

        transfers::pay_out(
            &accounts.token_program,
            &accounts.vault_a,
            &accounts.mint_a,
            &accounts.recipient_a,
            pair_info.clone(),
            signer_seeds,
            excess_a,
        )?;
        transfers::pay_out(
            &accounts.token_program,
            &accounts.vault_b,
            &accounts.mint_b,
            &accounts.recipient_b,
            pair_info,
            signer_seeds,
            excess_b,
        )?;
    }
    ctx.accounts.pair.unlock();

    msg!("Skimmed {} / {}", excess_a, excess_b);
    Ok(())
}

pub fn get_reserves(ctx: Context<GetReserves>) -> Result<Reserves> {
    Ok(ctx.accounts.pair.get_reserves())
}

#[derive(Accounts)]
pub struct SyncReserves<'info> {
    #[account(mut, has_one = vault_a, has_one = vault_b)]
    pub pair: Box<Account<'info, Pair>>,

    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,
}

#[derive(Accounts)]
pub struct SkimExcess<'info> {
    #[account(
        mut,
        has_one = vault_a,
        has_one = vault_b,
        has_one = token_program,
    )]
    pub pair: Box<Account<'info, Pair>>,

    #[account(address = pair.asset_a)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    #[account(address = pair.asset_b)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_a,
        constraint = recipient_a.key() != vault_a.key() @ AmmError::InvalidTo,
    )]
    pub recipient_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_b,
        constraint = recipient_b.owner == recipient_a.owner @ AmmError::InvalidTo,
        constraint = recipient_b.key() != vault_b.key() @ AmmError::InvalidTo,
    )]
    pub recipient_b: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct GetReserves<'info> {
    pub pair: Account<'info, Pair>,
}
