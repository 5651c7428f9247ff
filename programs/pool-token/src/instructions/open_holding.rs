use anchor_lang::prelude::*;

use crate::constants::HOLDING_SEED;
use crate::state::{Holding, TokenLedger};

#[derive(Accounts)]
pub struct OpenHolding<'info> {
    pub ledger: Account<'info, TokenLedger>,

    /// CHECK: any identity may hold tokens, including the null identity
    pub owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process(ctx: Context<OpenHolding>) -> Result<()> {
    let holding = &mut ctx.accounts.holding;
    holding.ledger = ctx.accounts.ledger.key();
    holding.owner = ctx.accounts.owner.key();
    holding.balance = 0;
    holding.nonce = 0;
    holding.bump = ctx.bumps.holding;
    Ok(())
}
