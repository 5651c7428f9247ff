use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use pool_token::program::PoolToken;
use pool_token::state::{Holding, TokenLedger};

use crate::constants::FACTORY_SEED;
use crate::errors::AmmError;
use crate::events::{SharesBurned, SharesMinted, Sync};
use crate::state::{Factory, Pair};
use crate::transfers;

/// Mint shares for whatever the caller sent to the vaults since the last
/// reserve update. Assets must be transferred in the same transaction.
pub fn mint(ctx: Context<MintShares>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let fee_on = ctx.accounts.factory.fee_on();
    let total_supply = ctx.accounts.share_ledger.total_supply;
    let balance_a = ctx.accounts.vault_a.amount;
    let balance_b = ctx.accounts.vault_b.amount;

    // Deposit is whatever the vaults hold above the reserves
    ctx.accounts.pair.lock()?;
    let deposit = ctx
        .accounts
        .pair
        .deposit(balance_a, balance_b, total_supply, fee_on, now)?;

    msg!(
        "Deposit measured - A: {}, B: {}, shares: {}, protocol shares: {}",
        deposit.amount_a,
        deposit.amount_b,
        deposit.liquidity,
        deposit.fee_shares
    );

    {
        let accounts = &ctx.accounts;
        let seeds = accounts.pair.seeds();
        let signer_seeds = &[&seeds[..]];
        let pair_info = accounts.pair.to_account_info();
        let ledger_info = accounts.share_ledger.to_account_info();

        // Protocol shares accrued since the last liquidity event
        if deposit.fee_shares > 0 {
            let fee_shares = accounts
                .fee_shares
                .as_ref()
                .ok_or(AmmError::MissingFeeRecipient)?;
            transfers::mint_shares(
                &accounts.share_program,
                ledger_info.clone(),
                fee_shares.to_account_info(),
                pair_info.clone(),
                signer_seeds,
                deposit.fee_shares,
            )?;
        }
        transfers::mint_shares(
            &accounts.share_program,
            ledger_info.clone(),
            accounts.locked_shares.to_account_info(),
            pair_info.clone(),
            signer_seeds,
            deposit.locked_shares,
        )?;
        transfers::mint_shares(
            &accounts.share_program,
            ledger_info,
            accounts.recipient_shares.to_account_info(),
            pair_info,
            signer_seeds,
            deposit.liquidity,
        )?;
    }

    let pair = &mut ctx.accounts.pair;
    pair.unlock();

    emit!(Sync {
        pair: pair.key(),
        reserve_a: pair.reserve_a,
        reserve_b: pair.reserve_b,
    });
    emit!(SharesMinted {
        pair: pair.key(),
        sender: ctx.accounts.sender.key(),
        amount_a: deposit.amount_a,
        amount_b: deposit.amount_b,
    });
    Ok(())
}

/// Burn every share the pair currently holds and pay out the pro-rata
/// assets. Shares must be transferred to the pair in the same transaction.
pub fn burn(ctx: Context<BurnShares>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let fee_on = ctx.accounts.factory.fee_on();
    let total_supply = ctx.accounts.share_ledger.total_supply;
    let liquidity = ctx.accounts.pair_shares.balance;

    ctx.accounts.pair.lock()?;
    let withdrawal = ctx.accounts.pair.withdrawal(
        liquidity,
        ctx.accounts.vault_a.amount,
        ctx.accounts.vault_b.amount,
        total_supply,
        fee_on,
    )?;

    msg!(
        "Withdrawal measured - shares: {}, A: {}, B: {}, protocol shares: {}",
        withdrawal.liquidity,
        withdrawal.amount_a,
        withdrawal.amount_b,
        withdrawal.fee_shares
    );

    {
        let accounts = &ctx.accounts;
        let seeds = accounts.pair.seeds();
        let signer_seeds = &[&seeds[..]];
        let pair_info = accounts.pair.to_account_info();
        let ledger_info = accounts.share_ledger.to_account_info();

        if withdrawal.fee_shares > 0 {
            let fee_shares = accounts
                .fee_shares
                .as_ref()
                .ok_or(AmmError::MissingFeeRecipient)?;
            transfers::mint_shares(
                &accounts.share_program,
                ledger_info.clone(),
                fee_shares.to_account_info(),
                pair_info.clone(),
                signer_seeds,
                withdrawal.fee_shares,
            )?;
        }
        // Burn returned shares, then pay out both assets
        transfers::burn_shares(
            &accounts.share_program,
            ledger_info,
            accounts.pair_shares.to_account_info(),
            pair_info.clone(),
            signer_seeds,
            withdrawal.liquidity,
        )?;
        transfers::pay_out(
            &accounts.token_program,
            &accounts.vault_a,
            &accounts.mint_a,
            &accounts.recipient_a,
            pair_info.clone(),
            signer_seeds,
            withdrawal.amount_a,
        )?;
        transfers::pay_out(
            &accounts.token_program,
            &accounts.vault_b,
            &accounts.mint_b,
            &accounts.recipient_b,
            pair_info,
            signer_seeds,
            withdrawal.amount_b,
        )?;
    }

    // Update pool state
    ctx.accounts.vault_a.reload()?;
    ctx.accounts.vault_b.reload()?;
    let balance_a = ctx.accounts.vault_a.amount;
    let balance_b = ctx.accounts.vault_b.amount;

    let pair = &mut ctx.accounts.pair;
    pair.settle(balance_a, balance_b, fee_on, now)?;
    pair.unlock();

    emit!(Sync {
        pair: pair.key(),
        reserve_a: pair.reserve_a,
        reserve_b: pair.reserve_b,
    });
    emit!(SharesBurned {
        pair: pair.key(),
        sender: ctx.accounts.sender.key(),
        amount_a: withdrawal.amount_a,
        amount_b: withdrawal.amount_b,
        to: ctx.accounts.recipient_a.owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct MintShares<'info> {
    /// Factory, read for the protocol fee switch
    #[account(seeds = [FACTORY_SEED], bump = factory.bump)]
    pub factory: Box<Account<'info, Factory>>,

    #[account(
        mut,
        has_one = factory,
        has_one = vault_a,
        has_one = vault_b,
        has_one = share_ledger,
    )]
    pub pair: Box<Account<'info, Pair>>,

    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub share_ledger: Box<Account<'info, TokenLedger>>,

    /// Receives the minted shares
    #[account(
        mut,
        constraint = recipient_shares.ledger == share_ledger.key() @ AmmError::InvalidShareHolding,
    )]
    pub recipient_shares: Box<Account<'info, Holding>>,

    /// Null identity's holding, credited on the first deposit
    #[account(
        mut,
        constraint = locked_shares.ledger == share_ledger.key() @ AmmError::InvalidShareHolding,
        constraint = locked_shares.owner == Pubkey::default() @ AmmError::InvalidShareHolding,
    )]
    pub locked_shares: Box<Account<'info, Holding>>,

    /// Fee recipient's holding, needed only when protocol shares accrue
    #[account(
        mut,
        constraint = fee_shares.ledger == share_ledger.key() @ AmmError::InvalidShareHolding,
        constraint = Some(fee_shares.owner) == factory.fee_recipient @ AmmError::InvalidShareHolding,
    )]
    pub fee_shares: Option<Account<'info, Holding>>,

    pub sender: Signer<'info>,

    pub share_program: Program<'info, PoolToken>,
}

#[derive(Accounts)]
pub struct BurnShares<'info> {
    #[account(seeds = [FACTORY_SEED], bump = factory.bump)]
    pub factory: Box<Account<'info, Factory>>,

    #[account(
        mut,
        has_one = factory,
        has_one = vault_a,
        has_one = vault_b,
        has_one = share_ledger,
        has_one = token_program,
    )]
    pub pair: Box<Account<'info, Pair>>,

    #[account(address = pair.asset_a)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    #[account(address = pair.asset_b)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub share_ledger: Box<Account<'info, TokenLedger>>,

    /// Shares sent back to the pair, all of which are burned
    #[account(
        mut,
        constraint = pair_shares.ledger == share_ledger.key() @ AmmError::InvalidShareHolding,
        constraint = pair_shares.owner == pair.key() @ AmmError::InvalidShareHolding,
    )]
    pub pair_shares: Box<Account<'info, Holding>>,

    #[account(
        mut,
        token::mint = mint_a,
        constraint = recipient_a.key() != vault_a.key() @ AmmError::InvalidTo,
    )]
    pub recipient_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Must belong to the same recipient as `recipient_a`
    #[account(
        mut,
        token::mint = mint_b,
        constraint = recipient_b.owner == recipient_a.owner @ AmmError::InvalidTo,
        constraint = recipient_b.key() != vault_b.key() @ AmmError::InvalidTo,
    )]
    pub recipient_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = fee_shares.ledger == share_ledger.key() @ AmmError::InvalidShareHolding,
        constraint = Some(fee_shares.owner) == factory.fee_recipient @ AmmError::InvalidShareHolding,
    )]
    pub fee_shares: Option<Account<'info, Holding>>,

    pub sender: Signer<'info>,

    pub share_program: Program<'info, PoolToken>,

    pub token_program: Interface<'info, TokenInterface>,
}
