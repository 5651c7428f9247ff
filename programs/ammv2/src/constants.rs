pub const FACTORY_SEED: &[u8] = b"factory";
pub const PAIR_SEED: &[u8] = b"pair";
pub const PAIR_ENTRY_SEED: &[u8] = b"pair_entry";

/// Shares locked to the null identity on the first deposit
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// Swap fee of 0.3%, charged on input amounts
pub const FEE_NUMERATOR: u64 = 3;
pub const FEE_DENOMINATOR: u64 = 1_000;

/// Protocol takes 1/6 of the growth in sqrt(k): rootK * 5 + rootKLast in the denominator
pub const PROTOCOL_FEE_DIVISOR: u128 = 5;

pub const SHARE_NAME: &str = "AMM V2 Shares";
pub const SHARE_SYMBOL: &str = "AMM-V2";
pub const SHARE_DECIMALS: u8 = 9;

/// Largest reserve a pair may record
pub const MAX_RESERVE: u128 = (1 << 112) - 1;

// Reserves are token amounts, so any vault balance fits the 112-bit bound.
const _: () = assert!(u64::MAX as u128 <= MAX_RESERVE);
