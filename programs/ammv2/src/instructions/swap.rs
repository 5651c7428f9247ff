use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::callback::{invoke_swap_callback, SwapCallbackArgs};
use crate::errors::AmmError;
use crate::events::{SwapExecuted, Sync};
use crate::state::Pair;
use crate::transfers;

/// Optimistic swap: send the requested outputs first, optionally hand
/// control to the caller's program, then require that the vault balances
/// pay for the outputs under the fee-adjusted constant product.
pub fn process<'info>(
    ctx: Context<'_, '_, '_, 'info, SwapTokens<'info>>,
    amount_a_out: u64,
    amount_b_out: u64,
    data: Vec<u8>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let to = ctx.accounts.recipient_a.owner;

    // Validate request before anything leaves the vaults
    ctx.accounts.pair.lock()?;
    ctx.accounts
        .pair
        .check_swap_request(amount_a_out, amount_b_out, &to)?;

    // Optimistic transfer of the outputs
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
            amount_a_out,
        )?;
        transfers::pay_out(
            &accounts.token_program,
            &accounts.vault_b,
            &accounts.mint_b,
            &accounts.recipient_b,
            pair_info,
            signer_seeds,
            amount_b_out,
        )?;
    }

    if !data.is_empty() {
        let program = ctx
            .accounts
            .callback_program
            .as_ref()
            .ok_or(AmmError::MissingCallbackProgram)?
            .to_account_info();

        // Persist the lock so any re-entry into this pair sees it
        ctx.accounts.pair.exit(&crate::ID)?;

        msg!("Invoking swap callback on {}", program.key);
        invoke_swap_callback(
            &program,
            ctx.remaining_accounts,
            &SwapCallbackArgs {
                sender: ctx.accounts.sender.key(),
                amount_a_out,
                amount_b_out,
                data,
            },
        )?;
    }

    // Re-read balances and enforce the fee-adjusted invariant
    ctx.accounts.vault_a.reload()?;
    ctx.accounts.vault_b.reload()?;
    let balance_a = ctx.accounts.vault_a.amount;
    let balance_b = ctx.accounts.vault_b.amount;

    let pair = &mut ctx.accounts.pair;
    let (amount_a_in, amount_b_in) =
        pair.verify_swap(amount_a_out, amount_b_out, balance_a, balance_b)?;
    pair.update(balance_a, balance_b, now)?;
    pair.unlock();

    msg!(
        "Swap completed - in: {} / {}, out: {} / {}",
        amount_a_in,
        amount_b_in,
        amount_a_out,
        amount_b_out
    );
    emit!(Sync {
        pair: pair.key(),
        reserve_a: pair.reserve_a,
        reserve_b: pair.reserve_b,
    });
    emit!(SwapExecuted {
        pair: pair.key(),
        sender: ctx.accounts.sender.key(),
        amount_a_in,
        amount_b_in,
        amount_a_out,
        amount_b_out,
        to,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SwapTokens<'info> {
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

    /// Recipient's account for asset A; its owner is the swap recipient
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

    /// CHECK: any program implementing `swap_callback`; invoked only when data is supplied
    pub callback_program: Option<UncheckedAccount<'info>>,

    pub sender: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
