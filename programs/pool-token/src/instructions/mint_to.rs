use anchor_lang::prelude::*;

use crate::errors::TokenError;
use crate::events::Transfer;
use crate::state::{Holding, TokenLedger};

#[derive(Accounts)]
pub struct MintTo<'info> {
    #[account(mut, has_one = authority @ TokenError::Unauthorized)]
    pub ledger: Account<'info, TokenLedger>,

    pub authority: Signer<'info>,

    #[account(mut, has_one = ledger @ TokenError::LedgerMismatch)]
    pub to: Account<'info, Holding>,
}

pub fn process(ctx: Context<MintTo>, amount: u64) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let to = ctx.accounts.to.owner;
    ctx.accounts.ledger.mint(&mut ctx.accounts.to, amount)?;

    emit!(Transfer {
        ledger: ledger_key,
        from: Pubkey::default(),
        to,
        amount,
    });
    Ok(())
}
