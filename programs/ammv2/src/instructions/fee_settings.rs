use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::events::{FeeAuthorityUpdated, FeeRecipientUpdated};
use crate::state::Factory;

/// Shared by both fee setters; the signer is checked against the stored authority
#[derive(Accounts)]
pub struct UpdateFeeSettings<'info> {
    #[account(mut, seeds = [FACTORY_SEED], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    pub fee_authority: Signer<'info>,
}

pub fn set_fee_recipient(
    ctx: Context<UpdateFeeSettings>,
    fee_recipient: Option<Pubkey>,
) -> Result<()> {
    let caller = ctx.accounts.fee_authority.key();
    let factory = &mut ctx.accounts.factory;
    let previous = factory.set_fee_recipient(&caller, fee_recipient)?;

    msg!("Protocol fee {}", if factory.fee_on() { "on" } else { "off" });
    emit!(FeeRecipientUpdated {
        factory: factory.key(),
        previous,
        fee_recipient: factory.fee_recipient,
    });
    Ok(())
}

pub fn set_fee_authority(ctx: Context<UpdateFeeSettings>, fee_authority: Pubkey) -> Result<()> {
    let caller = ctx.accounts.fee_authority.key();
    let factory = &mut ctx.accounts.factory;
    let previous = factory.set_fee_authority(&caller, fee_authority)?;

    emit!(FeeAuthorityUpdated {
        factory: factory.key(),
        previous,
        fee_authority,
    });
    Ok(())
}
