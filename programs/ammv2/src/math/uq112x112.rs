//! Unsigned Q112.112 fixed point held in a 256-bit word.
//!
//! Reserves fit in 112 bits, so an encoded value occupies at most 224 bits and
//! the remaining headroom absorbs accumulation. Accumulators wrap on overflow;
//! consumers only ever look at differences, which wrapping preserves.
use ethnum::U256;

pub const RESOLUTION: u32 = 112;
pub const Q112: U256 = U256::from_words(0, 1 << RESOLUTION);

/// Lifts an integer into fixed point
pub fn encode(y: u64) -> U256 {
    U256::from(y) << RESOLUTION
}

/// Divides a fixed-point value by an integer, `None` on a zero divisor
pub fn uqdiv(x: U256, y: u64) -> Option<U256> {
    x.checked_div(U256::from(y))
}

/// Price of one unit of the `denominator` asset in the `numerator` asset
pub fn ratio(numerator: u64, denominator: u64) -> Option<U256> {
    uqdiv(encode(numerator), denominator)
}

/// Adds `price * elapsed` to an accumulator, wrapping at 2^256
pub fn accumulate(cumulative: U256, price: U256, elapsed: u32) -> U256 {
    cumulative.wrapping_add(price.wrapping_mul(U256::from(elapsed)))
}

/// Time-weighted average price between two accumulator observations
pub fn average(start: U256, end: U256, elapsed: u32) -> Option<U256> {
    end.wrapping_sub(start).checked_div(U256::from(elapsed))
}
