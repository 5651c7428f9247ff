//! Flash-swap callback interface.
//!
//! Programs that want to receive outputs before paying expose an instruction
//! named `swap_callback` taking [`SwapCallbackArgs`]. The pair invokes it with
//! the swap's remaining accounts after the outputs have been sent.
use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

use crate::errors::AmmError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SwapCallbackArgs {
    pub sender: Pubkey,
    pub amount_a_out: u64,
    pub amount_b_out: u64,
    pub data: Vec<u8>,
}

/// Anchor global discriminator of `swap_callback`
pub fn swap_callback_discriminator() -> [u8; 8] {
    let preimage = hash(b"global:swap_callback").to_bytes();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&preimage[..8]);
    discriminator
}

pub fn swap_callback_instruction(
    program_id: Pubkey,
    accounts: &[AccountInfo],
    args: &SwapCallbackArgs,
) -> Result<Instruction> {
    let mut data = swap_callback_discriminator().to_vec();
    args.serialize(&mut data)
        .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotSerialize)?;

    let metas = accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();

    Ok(Instruction {
        program_id,
        accounts: metas,
        data,
    })
}

pub fn invoke_swap_callback<'info>(
    program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    args: &SwapCallbackArgs,
) -> Result<()> {
    require!(program.executable, AmmError::InvalidCallbackProgram);
    let ix = swap_callback_instruction(*program.key, accounts, args)?;

    let mut infos = accounts.to_vec();
    infos.push(program.clone());
    invoke(&ix, &infos)?;
    Ok(())
}
