use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Insufficient allowance")]
    InsufficientAllowance,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Permit deadline has passed")]
    Expired,
    #[msg("Permit signature does not match owner and message")]
    InvalidSignature,
    #[msg("Holding belongs to a different ledger")]
    LedgerMismatch,
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("Name exceeds 32 bytes")]
    NameTooLong,
    #[msg("Symbol exceeds 10 bytes")]
    SymbolTooLong,
}
