use anchor_lang::prelude::*;

use crate::errors::TokenError;
use crate::events::Transfer;
use crate::state::Holding;

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ TokenError::Unauthorized)]
    pub from: Account<'info, Holding>,

    #[account(mut, constraint = to.ledger == from.ledger @ TokenError::LedgerMismatch)]
    pub to: Account<'info, Holding>,
}

pub fn process(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    move_balance(&mut accounts.from, &mut accounts.to, amount)?;

    emit!(Transfer {
        ledger: accounts.from.ledger,
        from: accounts.from.owner,
        to: accounts.to.owner,
        amount,
    });
    Ok(())
}

/// Moves balance between two holdings that may be the same account.
/// A self-transfer only checks the balance covers `amount`.
pub(crate) fn move_balance(
    from: &mut Account<Holding>,
    to: &mut Account<Holding>,
    amount: u64,
) -> Result<()> {
    if from.key() == to.key() {
        require!(from.balance >= amount, TokenError::InsufficientBalance);
        return Ok(());
    }
    from.send(to, amount)
}
