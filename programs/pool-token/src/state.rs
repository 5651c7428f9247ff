use anchor_lang::prelude::*;

use crate::errors::TokenError;

/// Supply record and metadata of one fungible token.
#[account]
#[derive(InitSpace)]
pub struct TokenLedger {
    /// Sole identity allowed to mint and burn
    pub authority: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u64,
    /// Network identity bound into permit signatures
    pub chain_id: u64,
    pub domain_separator: [u8; 32],
    pub bump: u8,
}

impl TokenLedger {
    pub fn mint(&mut self, to: &mut Holding, amount: u64) -> Result<()> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        to.credit(amount)
    }

    pub fn burn(&mut self, from: &mut Holding, amount: u64) -> Result<()> {
        from.debit(amount)?;
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }
}

/// Balance of one identity on one ledger, plus its permit nonce.
#[account]
#[derive(InitSpace)]
pub struct Holding {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub balance: u64,
    pub nonce: u64,
    pub bump: u8,
}

impl Holding {
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        Ok(())
    }

    /// Moves `amount` into `to`. Callers handle the self-transfer case,
    /// since both sides would alias the same account.
    pub fn send(&mut self, to: &mut Holding, amount: u64) -> Result<()> {
        require_keys_eq!(self.ledger, to.ledger, TokenError::LedgerMismatch);
        self.debit(amount)?;
        to.credit(amount)
    }

    /// Returns the current nonce and advances it
    pub fn use_nonce(&mut self) -> Result<u64> {
        let nonce = self.nonce;
        self.nonce = nonce.checked_add(1).ok_or(TokenError::Overflow)?;
        Ok(nonce)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Allowance {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    /// Allowance value that transfer_from never decrements
    pub const UNLIMITED: u64 = u64::MAX;

    pub fn spend(&mut self, amount: u64) -> Result<()> {
        if self.amount == Self::UNLIMITED {
            return Ok(());
        }
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        Ok(())
    }
}
