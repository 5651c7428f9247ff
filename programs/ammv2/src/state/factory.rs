use anchor_lang::prelude::*;

use crate::errors::AmmError;

/// Registry of pairs and holder of the protocol fee settings
#[account]
#[derive(InitSpace)]
pub struct Factory {
    /// May change the fee recipient and hand this role over
    pub fee_authority: Pubkey,
    /// Protocol fee is on exactly when this is set; never the null identity
    pub fee_recipient: Option<Pubkey>,
    /// Network identity handed to every share ledger for permit domains
    pub chain_id: u64,
    pub all_pairs_length: u64,
    pub bump: u8,
}

impl Factory {
    pub fn fee_on(&self) -> bool {
        matches!(self.fee_recipient, Some(recipient) if recipient != Pubkey::default())
    }

    /// Appends a pair and returns its zero-based index
    pub fn register_pair(&mut self) -> Result<u64> {
        let index = self.all_pairs_length;
        self.all_pairs_length = index.checked_add(1).ok_or(AmmError::MathOverflow)?;
        Ok(index)
    }

    /// Returns the previous recipient. The null identity switches the fee off.
    pub fn set_fee_recipient(
        &mut self,
        caller: &Pubkey,
        fee_recipient: Option<Pubkey>,
    ) -> Result<Option<Pubkey>> {
        require_keys_eq!(*caller, self.fee_authority, AmmError::Forbidden);
        let fee_recipient = fee_recipient.filter(|recipient| *recipient != Pubkey::default());
        Ok(std::mem::replace(&mut self.fee_recipient, fee_recipient))
    }

    /// Returns the previous authority
    pub fn set_fee_authority(&mut self, caller: &Pubkey, fee_authority: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*caller, self.fee_authority, AmmError::Forbidden);
        Ok(std::mem::replace(&mut self.fee_authority, fee_authority))
    }
}

/// One slot of the factory's ordered pair list
#[account]
#[derive(InitSpace)]
pub struct PairEntry {
    pub factory: Pubkey,
    pub pair: Pubkey,
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,
    pub index: u64,
    pub bump: u8,
}
