use anchor_lang::prelude::*;

use crate::constants::ALLOWANCE_SEED;
use crate::events::Approval;
use crate::state::{Allowance, TokenLedger};

#[derive(Accounts)]
pub struct ApproveSpender<'info> {
    pub ledger: Account<'info, TokenLedger>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: any identity may be granted an allowance
    pub spender: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, ledger.key().as_ref(), owner.key().as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub system_program: Program<'info, System>,
}

pub fn process(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
    let ledger = ctx.accounts.ledger.key();
    let owner = ctx.accounts.owner.key();
    let spender = ctx.accounts.spender.key();

    let allowance = &mut ctx.accounts.allowance;
    allowance.ledger = ledger;
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.amount = amount;
    allowance.bump = ctx.bumps.allowance;

    emit!(Approval {
        ledger,
        owner,
        spender,
        amount,
    });
    Ok(())
}
