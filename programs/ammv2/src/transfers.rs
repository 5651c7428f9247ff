//! CPIs signed by the pair PDA: paying assets out of its vaults and
//! minting or burning its shares.
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use pool_token::program::PoolToken;

pub fn pay_out<'info>(
    token_program: &Interface<'info, TokenInterface>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    to: &InterfaceAccount<'info, TokenAccount>,
    pair: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: pair,
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
}

pub fn mint_shares<'info>(
    share_program: &Program<'info, PoolToken>,
    share_ledger: AccountInfo<'info>,
    to: AccountInfo<'info>,
    pair: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    pool_token::cpi::mint_to(
        CpiContext::new_with_signer(
            share_program.to_account_info(),
            pool_token::cpi::accounts::MintTo {
                ledger: share_ledger,
                authority: pair,
                to,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Burns shares out of the pair's own holding
pub fn burn_shares<'info>(
    share_program: &Program<'info, PoolToken>,
    share_ledger: AccountInfo<'info>,
    pair_shares: AccountInfo<'info>,
    pair: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    pool_token::cpi::burn(
        CpiContext::new_with_signer(
            share_program.to_account_info(),
            pool_token::cpi::accounts::Burn {
                ledger: share_ledger,
                authority: pair,
                from: pair_shares,
            },
            signer_seeds,
        ),
        amount,
    )
}
