use anchor_lang::prelude::*;

use crate::errors::TokenError;
use crate::events::Transfer;
use crate::state::{Holding, TokenLedger};

/// Burns from the authority's own holding.
#[derive(Accounts)]
pub struct Burn<'info> {
    #[account(mut, has_one = authority @ TokenError::Unauthorized)]
    pub ledger: Account<'info, TokenLedger>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = ledger @ TokenError::LedgerMismatch,
        constraint = from.owner == authority.key() @ TokenError::Unauthorized
    )]
    pub from: Account<'info, Holding>,
}

pub fn process(ctx: Context<Burn>, amount: u64) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let from = ctx.accounts.from.owner;
    ctx.accounts.ledger.burn(&mut ctx.accounts.from, amount)?;

    emit!(Transfer {
        ledger: ledger_key,
        from,
        to: Pubkey::default(),
        amount,
    });
    Ok(())
}
