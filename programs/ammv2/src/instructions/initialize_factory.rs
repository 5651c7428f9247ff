use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::state::Factory;

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// Singleton factory PDA
    #[account(
        init,
        payer = payer,
        space = 8 + Factory::INIT_SPACE,
        seeds = [FACTORY_SEED],
        bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process(
    ctx: Context<InitializeFactory>,
    fee_authority: Pubkey,
    chain_id: u64,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.fee_authority = fee_authority;
    factory.fee_recipient = None;
    factory.chain_id = chain_id;
    factory.all_pairs_length = 0;
    factory.bump = ctx.bumps.factory;

    msg!(
        "Factory initialized with fee authority {} on chain {}",
        fee_authority,
        chain_id
    );
    Ok(())
}
