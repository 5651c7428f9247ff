//! Address derivation shared by the instructions and by off-chain callers.
//! Every address here is a pure function of its inputs, so anyone can
//! locate a pair without reading chain state.
use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::{FACTORY_SEED, PAIR_ENTRY_SEED, PAIR_SEED, SHARE_SYMBOL};
use crate::errors::AmmError;

/// Orders two assets by address, rejecting identical or null ones
pub fn sort_assets(x: &Pubkey, y: &Pubkey) -> Result<(Pubkey, Pubkey)> {
    require_keys_neq!(*x, *y, AmmError::IdenticalAddresses);
    let (asset_a, asset_b) = if x < y { (*x, *y) } else { (*y, *x) };
    require_keys_neq!(asset_a, Pubkey::default(), AmmError::ZeroAddress);
    Ok((asset_a, asset_b))
}

pub fn factory_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FACTORY_SEED], &crate::ID)
}

/// Pair address for two assets in either order
pub fn pair_address(factory: &Pubkey, x: &Pubkey, y: &Pubkey) -> Result<(Pubkey, u8)> {
    let (asset_a, asset_b) = sort_assets(x, y)?;
    Ok(Pubkey::find_program_address(
        &[PAIR_SEED, factory.as_ref(), asset_a.as_ref(), asset_b.as_ref()],
        &crate::ID,
    ))
}

pub fn pair_entry_address(factory: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PAIR_ENTRY_SEED, factory.as_ref(), &index.to_le_bytes()],
        &crate::ID,
    )
}

/// Associated token account of the pair for `mint`
pub fn vault_address(pair: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(pair, mint, token_program)
}

pub fn share_ledger_address(pair: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            pool_token::constants::LEDGER_SEED,
            pair.as_ref(),
            SHARE_SYMBOL.as_bytes(),
        ],
        &pool_token::ID,
    )
}

pub fn share_holding_address(share_ledger: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            pool_token::constants::HOLDING_SEED,
            share_ledger.as_ref(),
            owner.as_ref(),
        ],
        &pool_token::ID,
    )
}
