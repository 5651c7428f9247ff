use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::TokenError;
use crate::permit::domain_separator;
use crate::state::TokenLedger;

#[derive(Accounts)]
#[instruction(name: String, symbol: String)]
pub struct InitializeLedger<'info> {
    /// Ledger PDA, one per authority and symbol
    #[account(
        init,
        payer = payer,
        space = 8 + TokenLedger::INIT_SPACE,
        seeds = [LEDGER_SEED, authority.key().as_ref(), symbol.as_bytes()],
        bump
    )]
    pub ledger: Account<'info, TokenLedger>,

    /// Mint and burn authority for the new ledger
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process(
    ctx: Context<InitializeLedger>,
    name: String,
    symbol: String,
    decimals: u8,
    chain_id: u64,
) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, TokenError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, TokenError::SymbolTooLong);

    let ledger_key = ctx.accounts.ledger.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.domain_separator = domain_separator(&name, chain_id, &ledger_key);
    ledger.name = name;
    ledger.symbol = symbol;
    ledger.decimals = decimals;
    ledger.total_supply = 0;
    ledger.chain_id = chain_id;
    ledger.bump = ctx.bumps.ledger;

    msg!(
        "Ledger {} initialized: {} ({}), {} decimals",
        ledger_key,
        ledger.name,
        ledger.symbol,
        ledger.decimals
    );
    Ok(())
}
