//! Signed-approval support.
//!
//! A permit is an ed25519 signature by a holding's owner over
//! `sha256(0x19 0x01 || domain_separator || sha256(PERMIT_TYPE || fields))`.
//! The runtime checks the signature itself through the ed25519 native
//! program; this module rebuilds the digest and confirms the preceding
//! ed25519 instruction vouched for exactly this owner, message and signature.
use anchor_lang::prelude::*;
use anchor_lang::solana_program::{ed25519_program, hash::hashv, instruction::Instruction};

use crate::constants::{DOMAIN_TYPE, PERMIT_TYPE, VERSION};
use crate::errors::TokenError;

pub const PUBKEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

const OFFSETS_START: usize = 2;
const OFFSETS_LEN: usize = 14;
/// Instruction index meaning "data lives in this same instruction"
const CURRENT_INSTRUCTION: u16 = u16::MAX;

pub fn domain_separator(name: &str, chain_id: u64, ledger: &Pubkey) -> [u8; 32] {
    let type_hash = hashv(&[DOMAIN_TYPE]).to_bytes();
    let name_hash = hashv(&[name.as_bytes()]).to_bytes();
    let version_hash = hashv(&[VERSION.as_bytes()]).to_bytes();
    hashv(&[
        &type_hash,
        &name_hash,
        &version_hash,
        &chain_id.to_le_bytes(),
        crate::ID.as_ref(),
        ledger.as_ref(),
    ])
    .to_bytes()
}

pub fn permit_digest(
    domain_separator: &[u8; 32],
    owner: &Pubkey,
    spender: &Pubkey,
    value: u64,
    nonce: u64,
    deadline: i64,
) -> [u8; 32] {
    let type_hash = hashv(&[PERMIT_TYPE]).to_bytes();
    let struct_hash = hashv(&[
        &type_hash,
        owner.as_ref(),
        spender.as_ref(),
        &value.to_le_bytes(),
        &nonce.to_le_bytes(),
        &deadline.to_le_bytes(),
    ])
    .to_bytes();
    hashv(&[b"\x19\x01", domain_separator, &struct_hash]).to_bytes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SignatureOffsets {
    signature_offset: u16,
    signature_instruction_index: u16,
    public_key_offset: u16,
    public_key_instruction_index: u16,
    message_data_offset: u16,
    message_data_size: u16,
    message_instruction_index: u16,
}

impl SignatureOffsets {
    fn unpack(data: &[u8]) -> Result<Self> {
        let raw = data
            .get(OFFSETS_START..OFFSETS_START + OFFSETS_LEN)
            .ok_or(TokenError::InvalidSignature)?;
        let word = |i: usize| u16::from_le_bytes([raw[2 * i], raw[2 * i + 1]]);
        Ok(Self {
            signature_offset: word(0),
            signature_instruction_index: word(1),
            public_key_offset: word(2),
            public_key_instruction_index: word(3),
            message_data_offset: word(4),
            message_data_size: word(5),
            message_instruction_index: word(6),
        })
    }
}

fn field(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    data.get(start..start + len)
        .ok_or_else(|| error!(TokenError::InvalidSignature))
}

/// Confirms `ix` is a single-signature ed25519 verification of `message`
/// by `signer` with exactly `signature`, all carried inline. The null
/// identity never signs.
pub fn verify_ed25519_instruction(
    ix: &Instruction,
    signer: &Pubkey,
    message: &[u8],
    signature: &[u8; SIGNATURE_LEN],
) -> Result<()> {
    require_keys_neq!(*signer, Pubkey::default(), TokenError::InvalidSignature);
    require_keys_eq!(ix.program_id, ed25519_program::ID, TokenError::InvalidSignature);
    require!(ix.accounts.is_empty(), TokenError::InvalidSignature);

    let data = &ix.data;
    require!(data.first() == Some(&1), TokenError::InvalidSignature);

    let offsets = SignatureOffsets::unpack(data)?;
    require!(
        offsets.signature_instruction_index == CURRENT_INSTRUCTION
            && offsets.public_key_instruction_index == CURRENT_INSTRUCTION
            && offsets.message_instruction_index == CURRENT_INSTRUCTION,
        TokenError::InvalidSignature
    );

    let public_key = field(data, offsets.public_key_offset, PUBKEY_LEN)?;
    let signed = field(data, offsets.signature_offset, SIGNATURE_LEN)?;
    let signed_message = field(
        data,
        offsets.message_data_offset,
        offsets.message_data_size as usize,
    )?;

    require!(public_key == signer.as_ref(), TokenError::InvalidSignature);
    require!(signed == signature.as_slice(), TokenError::InvalidSignature);
    require!(signed_message == message, TokenError::InvalidSignature);
    Ok(())
}

/// Lays out an ed25519 program instruction the way wallets and the
/// native program's own helper do: offsets header, key, signature, message.
pub fn new_ed25519_instruction(
    signer: &Pubkey,
    message: &[u8],
    signature: &[u8; SIGNATURE_LEN],
) -> Instruction {
    let public_key_offset = OFFSETS_START + OFFSETS_LEN;
    let signature_offset = public_key_offset + PUBKEY_LEN;
    let message_offset = signature_offset + SIGNATURE_LEN;

    let mut data = Vec::with_capacity(message_offset + message.len());
    data.extend_from_slice(&[1, 0]);
    for word in [
        signature_offset as u16,
        CURRENT_INSTRUCTION,
        public_key_offset as u16,
        CURRENT_INSTRUCTION,
        message_offset as u16,
        message.len() as u16,
        CURRENT_INSTRUCTION,
    ] {
        data.extend_from_slice(&word.to_le_bytes());
    }
    data.extend_from_slice(signer.as_ref());
    data.extend_from_slice(signature);
    data.extend_from_slice(message);

    Instruction {
        program_id: ed25519_program::ID,
        accounts: vec![],
        data,
    }
}
