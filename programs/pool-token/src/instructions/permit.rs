use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::get_instruction_relative;

use crate::constants::{ALLOWANCE_SEED, HOLDING_SEED};
use crate::errors::TokenError;
use crate::events::Approval;
use crate::permit::{permit_digest, verify_ed25519_instruction, SIGNATURE_LEN};
use crate::state::{Allowance, Holding, TokenLedger};

#[derive(Accounts)]
pub struct Permit<'info> {
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        has_one = ledger @ TokenError::LedgerMismatch,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), owner_holding.owner.as_ref()],
        bump = owner_holding.bump
    )]
    pub owner_holding: Account<'info, Holding>,

    /// CHECK: any identity may be granted an allowance
    pub spender: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, ledger.key().as_ref(), owner_holding.owner.as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    /// Anyone may submit the owner's signature
    #[account(mut)]
    pub relayer: Signer<'info>,

    /// CHECK: instructions sysvar, used to read the preceding ed25519 instruction
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process(
    ctx: Context<Permit>,
    value: u64,
    deadline: i64,
    signature: [u8; SIGNATURE_LEN],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(now <= deadline, TokenError::Expired);

    let ledger = ctx.accounts.ledger.key();
    let spender = ctx.accounts.spender.key();
    let holding = &mut ctx.accounts.owner_holding;
    let owner = holding.owner;

    // Rebuild what the owner signed
    let digest = permit_digest(
        &ctx.accounts.ledger.domain_separator,
        &owner,
        &spender,
        value,
        holding.nonce,
        deadline,
    );
    let ed25519_ix = get_instruction_relative(-1, &ctx.accounts.instructions)?;
    verify_ed25519_instruction(&ed25519_ix, &owner, &digest, &signature)?;
    // Consume the nonce so the signature cannot be replayed
    let nonce = holding.use_nonce()?;

    let allowance = &mut ctx.accounts.allowance;
    allowance.ledger = ledger;
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.amount = value;
    allowance.bump = ctx.bumps.allowance;

    msg!("Permit nonce {} consumed for {}", nonce, owner);
    emit!(Approval {
        ledger,
        owner,
        spender,
        amount: value,
    });
    Ok(())
}
