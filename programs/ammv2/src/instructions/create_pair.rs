use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_spl::associated_token::{self, AssociatedToken, Create};
use anchor_spl::token_interface::{Mint, TokenInterface};
use pool_token::program::PoolToken;

use crate::constants::{
    FACTORY_SEED, PAIR_ENTRY_SEED, PAIR_SEED, SHARE_DECIMALS, SHARE_NAME, SHARE_SYMBOL,
};
use crate::errors::AmmError;
use crate::events::PairCreated;
use crate::pda::{share_ledger_address, sort_assets, vault_address};
use crate::state::{Factory, Pair, PairEntry};

/// Creates the pair for two assets passed in any order, together with its
/// vaults, its share ledger and the share holdings it needs from the start.
#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut, seeds = [FACTORY_SEED], bump = factory.bump)]
    pub factory: Box<Account<'info, Factory>>,

    /// CHECK: ordered against `asset_y`, then checked to be a mint of `token_program`
    pub asset_x: UncheckedAccount<'info>,

    /// CHECK: ordered against `asset_x`, then checked to be a mint of `token_program`
    pub asset_y: UncheckedAccount<'info>,

    /// CHECK: must be the empty canonical pair PDA; created in the handler
    #[account(mut)]
    pub pair: UncheckedAccount<'info>,

    /// CHECK: pair's associated token account for the lower asset, created by the ATA program
    #[account(mut)]
    pub vault_a: UncheckedAccount<'info>,

    /// CHECK: pair's associated token account for the higher asset, created by the ATA program
    #[account(mut)]
    pub vault_b: UncheckedAccount<'info>,

    /// CHECK: share ledger PDA, created by the pool-token program
    #[account(mut)]
    pub share_ledger: UncheckedAccount<'info>,

    /// CHECK: share holding of the pair itself, created by the pool-token program
    #[account(mut)]
    pub pair_shares: UncheckedAccount<'info>,

    /// CHECK: share holding of the null identity, created by the pool-token program
    #[account(mut)]
    pub locked_shares: UncheckedAccount<'info>,

    /// Next slot of the factory's pair list
    #[account(
        init,
        payer = payer,
        space = 8 + PairEntry::INIT_SPACE,
        seeds = [PAIR_ENTRY_SEED, factory.key().as_ref(), &factory.all_pairs_length.to_le_bytes()],
        bump
    )]
    pub pair_entry: Box<Account<'info, PairEntry>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub share_program: Program<'info, PoolToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn process(ctx: Context<CreatePair>) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let token_program_key = ctx.accounts.token_program.key();
    let (asset_a, asset_b) = sort_assets(ctx.accounts.asset_x.key, ctx.accounts.asset_y.key)?;

    let (pair_key, pair_bump) = Pubkey::find_program_address(
        &[PAIR_SEED, factory_key.as_ref(), asset_a.as_ref(), asset_b.as_ref()],
        ctx.program_id,
    );
    require_keys_eq!(
        ctx.accounts.pair.key(),
        pair_key,
        AmmError::PairAddressMismatch
    );
    require!(
        ctx.accounts.pair.data_is_empty() && *ctx.accounts.pair.owner != crate::ID,
        AmmError::PairExists
    );

    check_mint(&ctx.accounts.asset_x, &token_program_key)?;
    check_mint(&ctx.accounts.asset_y, &token_program_key)?;
    let (mint_a, mint_b) = if ctx.accounts.asset_x.key() == asset_a {
        (&ctx.accounts.asset_x, &ctx.accounts.asset_y)
    } else {
        (&ctx.accounts.asset_y, &ctx.accounts.asset_x)
    };

    let bump_bytes = [pair_bump];
    let pair_seeds: &[&[u8]] = &[
        PAIR_SEED,
        factory_key.as_ref(),
        asset_a.as_ref(),
        asset_b.as_ref(),
        &bump_bytes,
    ];
    let signer_seeds = &[pair_seeds];

    // Pair account
    create_program_account(
        &ctx.accounts.payer,
        &ctx.accounts.pair,
        &ctx.accounts.system_program,
        8 + Pair::INIT_SPACE,
        signer_seeds,
    )?;

    // Vaults, owned by the pair
    for (vault, mint) in [(&ctx.accounts.vault_a, mint_a), (&ctx.accounts.vault_b, mint_b)] {
        associated_token::create(CpiContext::new(
            ctx.accounts.associated_token_program.to_account_info(),
            Create {
                payer: ctx.accounts.payer.to_account_info(),
                associated_token: vault.to_account_info(),
                authority: ctx.accounts.pair.to_account_info(),
                mint: mint.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
            },
        ))?;
    }

    let (share_ledger, _) = share_ledger_address(&pair_key);
    let pair = Pair {
        factory: factory_key,
        asset_a,
        asset_b,
        vault_a: vault_address(&pair_key, &asset_a, &token_program_key),
        vault_b: vault_address(&pair_key, &asset_b, &token_program_key),
        share_ledger,
        token_program: token_program_key,
        bump: pair_bump,
        ..Pair::default()
    };
    {
        let mut data = ctx.accounts.pair.try_borrow_mut_data()?;
        pair.try_serialize(&mut &mut data[..])?;
    }

    // Share ledger with the pair as mint authority
    pool_token::cpi::initialize_ledger(
        CpiContext::new_with_signer(
            ctx.accounts.share_program.to_account_info(),
            pool_token::cpi::accounts::InitializeLedger {
                ledger: ctx.accounts.share_ledger.to_account_info(),
                authority: ctx.accounts.pair.to_account_info(),
                payer: ctx.accounts.payer.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            signer_seeds,
        ),
        SHARE_NAME.to_string(),
        SHARE_SYMBOL.to_string(),
        SHARE_DECIMALS,
        ctx.accounts.factory.chain_id,
    )?;

    // Holdings for shares returned before a burn and for locked minimum liquidity
    for (holding, owner) in [
        (&ctx.accounts.pair_shares, ctx.accounts.pair.to_account_info()),
        (&ctx.accounts.locked_shares, ctx.accounts.system_program.to_account_info()),
    ] {
        pool_token::cpi::open_holding(CpiContext::new(
            ctx.accounts.share_program.to_account_info(),
            pool_token::cpi::accounts::OpenHolding {
                ledger: ctx.accounts.share_ledger.to_account_info(),
                owner,
                holding: holding.to_account_info(),
                payer: ctx.accounts.payer.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
        ))?;
    }

    let index = ctx.accounts.factory.register_pair()?;
    let entry = &mut ctx.accounts.pair_entry;
    entry.factory = factory_key;
    entry.pair = pair_key;
    entry.asset_a = asset_a;
    entry.asset_b = asset_b;
    entry.index = index;
    entry.bump = ctx.bumps.pair_entry;

    msg!(
        "Pair {} created for {} / {} at index {}",
        pair_key,
        asset_a,
        asset_b,
        index
    );
    emit!(PairCreated {
        asset_a,
        asset_b,
        pair: pair_key,
        index: index + 1,
    });
    Ok(())
}

fn check_mint(asset: &AccountInfo, token_program: &Pubkey) -> Result<()> {
    require_keys_eq!(*asset.owner, *token_program, AmmError::InvalidMint);
    let data = asset.try_borrow_data()?;
    Mint::try_deserialize(&mut &data[..]).map_err(|_| error!(AmmError::InvalidMint))?;
    Ok(())
}

/// Creates a PDA owned by this program, also when someone pre-funded the address.
fn create_program_account<'info>(
    payer: &Signer<'info>,
    target: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.to_account_info(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.to_account_info(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: target.to_account_info(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Assign {
                account_to_assign: target.to_account_info(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
