pub mod uq112x112;

use ethnum::U256;
use integer_sqrt::IntegerSquareRoot;

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};

/// Floor square root
pub fn sqrt(value: u128) -> u128 {
    value.integer_sqrt()
}

/// Product of two reserves, never overflows
pub fn product(x: u64, y: u64) -> u128 {
    x as u128 * y as u128
}

/// Fee-adjusted constant product check done in 256-bit words:
/// (balance_a*1000 - in_a*3) * (balance_b*1000 - in_b*3) >= reserve_a*reserve_b*1000^2.
///
/// `amount_in` must not exceed its balance, which holds for inputs derived
/// as `balance - (reserve - out)`.
pub fn k_holds(
    balance_a: u64,
    balance_b: u64,
    amount_a_in: u64,
    amount_b_in: u64,
    reserve_a: u64,
    reserve_b: u64,
) -> bool {
    let adjusted = |balance: u64, amount_in: u64| {
        U256::from(balance) * U256::from(FEE_DENOMINATOR)
            - U256::from(amount_in) * U256::from(FEE_NUMERATOR)
    };
    let scale = U256::from(FEE_DENOMINATOR) * U256::from(FEE_DENOMINATOR);

    adjusted(balance_a, amount_a_in) * adjusted(balance_b, amount_b_in)
        >= U256::from(product(reserve_a, reserve_b)) * scale
}
