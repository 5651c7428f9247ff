use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Pair is locked by an operation in progress")]
    Locked,
    #[msg("Signer is not the fee authority")]
    Forbidden,
    #[msg("Pair assets must be distinct")]
    IdenticalAddresses,
    #[msg("Pair asset cannot be the null identity")]
    ZeroAddress,
    #[msg("A pair already exists for these assets")]
    PairExists,
    #[msg("Pair account does not match the derived pair address")]
    PairAddressMismatch,
    #[msg("Asset is not a mint of the supplied token program")]
    InvalidMint,
    #[msg("Insufficient liquidity minted")]
    InsufficientLiquidityMinted,
    #[msg("Insufficient liquidity burned")]
    InsufficientLiquidityBurned,
    #[msg("Insufficient output amount")]
    InsufficientOutputAmount,
    #[msg("Insufficient input amount")]
    InsufficientInputAmount,
    #[msg("Insufficient liquidity")]
    InsufficientLiquidity,
    #[msg("Invalid recipient")]
    InvalidTo,
    #[msg("Constant product check failed")]
    K,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Share holding does not belong to this pair")]
    InvalidShareHolding,
    #[msg("Fee recipient share holding is required while the protocol fee is on")]
    MissingFeeRecipient,
    #[msg("Callback data supplied without a callback program")]
    MissingCallbackProgram,
    #[msg("Callback program is not executable")]
    InvalidCallbackProgram,
}
