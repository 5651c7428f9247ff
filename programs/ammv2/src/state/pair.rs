use anchor_lang::prelude::*;
use ethnum::U256;

use crate::constants::{MINIMUM_LIQUIDITY, PAIR_SEED, PROTOCOL_FEE_DIVISOR};
use crate::errors::AmmError;
use crate::math::{self, uq112x112};

/// Pool of two assets. Reserves are cached vault balances and only change
/// through `update`; anything that reaches a vault in between is either
/// consumed by the next operation or skimmed.
#[account]
#[derive(Default, InitSpace)]
pub struct Pair {
    pub factory: Pubkey,
    /// Lower mint address of the two
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    /// Pool-token ledger whose authority is this pair
    pub share_ledger: Pubkey,
    pub token_program: Pubkey,

    pub reserve_a: u64,
    pub reserve_b: u64,
    /// Low 32 bits of the unix timestamp of the last reserve update
    pub block_timestamp_last: u32,
    /// Little-endian UQ112x112 accumulators of reserve_b/reserve_a and reserve_a/reserve_b
    pub price_a_cumulative_last: [u8; 32],
    pub price_b_cumulative_last: [u8; 32],
    /// reserve_a * reserve_b as of the last liquidity event, zero while the protocol fee is off
    pub k_last: u128,

    pub locked: bool,
    pub bump: u8,
}

/// Result of a mint once the deposit has been measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    pub amount_a: u64,
    pub amount_b: u64,
    pub fee_shares: u64,
    pub locked_shares: u64,
    pub liquidity: u64,
}

/// Result of a burn before the payout is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub fee_shares: u64,
    pub liquidity: u64,
    pub amount_a: u64,
    pub amount_b: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserves {
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub block_timestamp_last: u32,
}

impl Pair {
    pub fn seeds(&self) -> [&[u8]; 5] {
        [
            PAIR_SEED,
            self.factory.as_ref(),
            self.asset_a.as_ref(),
            self.asset_b.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn get_reserves(&self) -> Reserves {
        Reserves {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            block_timestamp_last: self.block_timestamp_last,
        }
    }

    pub fn price_a_cumulative(&self) -> U256 {
        U256::from_le_bytes(self.price_a_cumulative_last)
    }

    pub fn price_b_cumulative(&self) -> U256 {
        U256::from_le_bytes(self.price_b_cumulative_last)
    }

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, AmmError::Locked);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Accrues the price accumulators over the time since the last update,
    /// then caches the new balances as reserves.
    pub fn update(&mut self, balance_a: u64, balance_b: u64, now: i64) -> Result<()> {
        let block_timestamp = now as u32;
        let time_elapsed = block_timestamp.wrapping_sub(self.block_timestamp_last);

        if time_elapsed > 0 && self.reserve_a != 0 && self.reserve_b != 0 {
            let price_a = uq112x112::ratio(self.reserve_b, self.reserve_a)
                .ok_or(AmmError::InsufficientLiquidity)?;
            let price_b = uq112x112::ratio(self.reserve_a, self.reserve_b)
                .ok_or(AmmError::InsufficientLiquidity)?;
            self.price_a_cumulative_last =
                uq112x112::accumulate(self.price_a_cumulative(), price_a, time_elapsed)
                    .to_le_bytes();
            self.price_b_cumulative_last =
                uq112x112::accumulate(self.price_b_cumulative(), price_b, time_elapsed)
                    .to_le_bytes();
        }

        self.reserve_a = balance_a;
        self.reserve_b = balance_b;
        self.block_timestamp_last = block_timestamp;
        Ok(())
    }

    /// Shares owed to the fee recipient for the growth of sqrt(k) since the
    /// last liquidity event. Turning the fee off discards `k_last`.
    pub fn accrue_protocol_fee(&mut self, fee_on: bool, total_supply: u64) -> Result<u64> {
        let k_last = self.k_last;
        if !fee_on {
            self.k_last = 0;
            return Ok(0);
        }
        if k_last == 0 {
            return Ok(0);
        }

        let root_k = math::sqrt(math::product(self.reserve_a, self.reserve_b));
        let root_k_last = math::sqrt(k_last);
        if root_k <= root_k_last {
            return Ok(0);
        }

        let numerator = (total_supply as u128)
            .checked_mul(root_k - root_k_last)
            .ok_or(AmmError::MathOverflow)?;
        let denominator = root_k
            .checked_mul(PROTOCOL_FEE_DIVISOR)
            .and_then(|v| v.checked_add(root_k_last))
            .ok_or(AmmError::MathOverflow)?;
        u64::try_from(numerator / denominator).map_err(|_| error!(AmmError::MathOverflow))
    }

    /// Measures what arrived in the vaults since the last update and prices
    /// it in shares. Reserves are settled before returning.
    pub fn deposit(
        &mut self,
        balance_a: u64,
        balance_b: u64,
        total_supply: u64,
        fee_on: bool,
        now: i64,
    ) -> Result<Deposit> {
        let amount_a = balance_a
            .checked_sub(self.reserve_a)
            .ok_or(AmmError::InsufficientLiquidityMinted)?;
        let amount_b = balance_b
            .checked_sub(self.reserve_b)
            .ok_or(AmmError::InsufficientLiquidityMinted)?;

        let fee_shares = self.accrue_protocol_fee(fee_on, total_supply)?;
        let total_supply = total_supply
            .checked_add(fee_shares)
            .ok_or(AmmError::MathOverflow)?;

        let (liquidity, locked_shares) = if total_supply == 0 {
            let liquidity = math::sqrt(math::product(amount_a, amount_b))
                .checked_sub(MINIMUM_LIQUIDITY as u128)
                .ok_or(AmmError::InsufficientLiquidityMinted)?;
            (liquidity, MINIMUM_LIQUIDITY)
        } else {
            let by_a = share_of(amount_a, total_supply, self.reserve_a)?;
            let by_b = share_of(amount_b, total_supply, self.reserve_b)?;
            (by_a.min(by_b), 0)
        };
        require!(liquidity > 0, AmmError::InsufficientLiquidityMinted);
        let liquidity = u64::try_from(liquidity).map_err(|_| error!(AmmError::MathOverflow))?;

        self.settle(balance_a, balance_b, fee_on, now)?;
        Ok(Deposit {
            amount_a,
            amount_b,
            fee_shares,
            locked_shares,
            liquidity,
        })
    }

    /// Prices `liquidity` shares held by the pair against current balances.
    /// Reserves are untouched; call `settle` once the payout has left.
    pub fn withdrawal(
        &mut self,
        liquidity: u64,
        balance_a: u64,
        balance_b: u64,
        total_supply: u64,
        fee_on: bool,
    ) -> Result<Withdrawal> {
        let fee_shares = self.accrue_protocol_fee(fee_on, total_supply)?;
        let total_supply = total_supply
            .checked_add(fee_shares)
            .ok_or(AmmError::MathOverflow)?;

        let amount_a = share_of(liquidity, balance_a, total_supply)
            .map_err(|_| error!(AmmError::InsufficientLiquidityBurned))?;
        let amount_b = share_of(liquidity, balance_b, total_supply)
            .map_err(|_| error!(AmmError::InsufficientLiquidityBurned))?;
        require!(
            amount_a > 0 && amount_b > 0,
            AmmError::InsufficientLiquidityBurned
        );

        Ok(Withdrawal {
            fee_shares,
            liquidity,
            amount_a: u64::try_from(amount_a).map_err(|_| error!(AmmError::MathOverflow))?,
            amount_b: u64::try_from(amount_b).map_err(|_| error!(AmmError::MathOverflow))?,
        })
    }

    /// Commits post-operation balances and refreshes `k_last` when the fee is on
    pub fn settle(&mut self, balance_a: u64, balance_b: u64, fee_on: bool, now: i64) -> Result<()> {
        self.update(balance_a, balance_b, now)?;
        if fee_on {
            self.k_last = math::product(self.reserve_a, self.reserve_b);
        }
        Ok(())
    }

    /// Checks run before any output is sent
    pub fn check_swap_request(
        &self,
        amount_a_out: u64,
        amount_b_out: u64,
        to: &Pubkey,
    ) -> Result<()> {
        require!(
            amount_a_out > 0 || amount_b_out > 0,
            AmmError::InsufficientOutputAmount
        );
        require!(
            amount_a_out < self.reserve_a && amount_b_out < self.reserve_b,
            AmmError::InsufficientLiquidity
        );
        self.check_recipient(to)
    }

    /// Outputs may not be sent to either pooled asset's own identity
    pub fn check_recipient(&self, to: &Pubkey) -> Result<()> {
        require!(
            *to != self.asset_a && *to != self.asset_b,
            AmmError::InvalidTo
        );
        Ok(())
    }

    /// Derives the inputs from post-callback balances and enforces the
    /// fee-adjusted invariant. Returns `(amount_a_in, amount_b_in)`.
    pub fn verify_swap(
        &self,
        amount_a_out: u64,
        amount_b_out: u64,
        balance_a: u64,
        balance_b: u64,
    ) -> Result<(u64, u64)> {
        let kept_a = self
            .reserve_a
            .checked_sub(amount_a_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let kept_b = self
            .reserve_b
            .checked_sub(amount_b_out)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let amount_a_in = balance_a.saturating_sub(kept_a);
        let amount_b_in = balance_b.saturating_sub(kept_b);
        require!(
            amount_a_in > 0 || amount_b_in > 0,
            AmmError::InsufficientInputAmount
        );
        require!(
            math::k_holds(
                balance_a,
                balance_b,
                amount_a_in,
                amount_b_in,
                self.reserve_a,
                self.reserve_b
            ),
            AmmError::K
        );
        Ok((amount_a_in, amount_b_in))
    }

    /// Vault balance above the cached reserve
    pub fn excess(balance: u64, reserve: u64) -> Result<u64> {
        balance
            .checked_sub(reserve)
            .ok_or_else(|| error!(AmmError::MathOverflow))
    }
}

/// amount * numerator / denominator, floored
fn share_of(amount: u64, numerator: u64, denominator: u64) -> Result<u128> {
    (amount as u128 * numerator as u128)
        .checked_div(denominator as u128)
        .ok_or_else(|| error!(AmmError::InsufficientLiquidity))
}
