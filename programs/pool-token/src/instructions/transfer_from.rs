use anchor_lang::prelude::*;

use crate::constants::ALLOWANCE_SEED;
use crate::errors::TokenError;
use crate::events::Transfer;
use crate::instructions::transfer::move_balance;
use crate::state::{Allowance, Holding};

#[derive(Accounts)]
pub struct TransferTokensFrom<'info> {
    pub spender: Signer<'info>,

    #[account(mut)]
    pub from: Account<'info, Holding>,

    #[account(mut, constraint = to.ledger == from.ledger @ TokenError::LedgerMismatch)]
    pub to: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, from.ledger.as_ref(), from.owner.as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,
}

pub fn process(ctx: Context<TransferTokensFrom>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    accounts.allowance.spend(amount)?;
    move_balance(&mut accounts.from, &mut accounts.to, amount)?;

    emit!(Transfer {
        ledger: accounts.from.ledger,
        from: accounts.from.owner,
        to: accounts.to.owner,
        amount,
    });
    Ok(())
}
