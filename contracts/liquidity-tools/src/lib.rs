#![no_std]

mod certora_specs;

#[cfg(test)]
extern crate std;

use liquidity_math::{
    amounts_for_liquidity, calculate_highest_liquidity, max_sqrt_price_x96, square_x96,
};
use liquidity_types::{LiquidityError, RangePosition};
use soroban_sdk::{contract, contractimpl, log, Env, U256};

#[contract]
pub struct LiquidityTools;

#[contractimpl]
impl LiquidityTools {
    /// Square a Q96 sqrt price into a Q96 price (rounds down)
    ///
    /// # Errors
    /// * `Overflow` - input above `max_sqrt_price_x96`
    pub fn square_x96(env: Env, sqrt_value_x96: U256) -> Result<U256, LiquidityError> {
        square_x96(&env, &sqrt_value_x96).map_err(|err| {
            log!(&env, "square_x96 failed", sqrt_value_x96);
            err
        })
    }

    /// Highest liquidity the balances can fund in `[sqrt_price_lower_x96, sqrt_price_upper_x96]`
    ///
    /// # Arguments
    /// * `sqrt_exchange_price_x96` - Rate used to value converting one token into the other
    /// * `sqrt_pool_price_x96` - Current pool price, selects the token mix of the position
    /// * `sqrt_price_lower_x96` / `sqrt_price_upper_x96` - Position band, lower < upper
    /// * `amount0` / `amount1` - Held balances
    ///
    /// # Errors
    /// * `WrongPriceBands` - lower >= upper
    /// * `Overflow` - a price above the bound or an intermediate out of range
    pub fn calculate_highest_liquidity(
        env: Env,
        sqrt_exchange_price_x96: U256,
        sqrt_pool_price_x96: U256,
        sqrt_price_lower_x96: U256,
        sqrt_price_upper_x96: U256,
        amount0: u128,
        amount1: u128,
    ) -> Result<u128, LiquidityError> {
        let result = calculate_highest_liquidity(
            &env,
            &sqrt_exchange_price_x96,
            &sqrt_pool_price_x96,
            &sqrt_price_lower_x96,
            &sqrt_price_upper_x96,
            amount0,
            amount1,
        );

        match result {
            Ok(liquidity) => match RangePosition::classify(
                &sqrt_pool_price_x96,
                &sqrt_price_lower_x96,
                &sqrt_price_upper_x96,
            ) {
                RangePosition::BelowRange => {
                    log!(&env, "highest liquidity below range", liquidity);
                }
                RangePosition::InRange => {
                    log!(&env, "highest liquidity in range", liquidity);
                }
                RangePosition::AboveRange => {
                    log!(&env, "highest liquidity above range", liquidity);
                }
            },
            Err(LiquidityError::WrongPriceBands) => {
                log!(&env, "wrong price bands", sqrt_price_lower_x96, sqrt_price_upper_x96);
            }
            Err(LiquidityError::Overflow) => {
                log!(&env, "liquidity overflow", amount0, amount1);
            }
        }

        result
    }

    /// Token amounts a position of `liquidity` holds at the pool price
    ///
    /// # Returns
    /// (amount0, amount1) - rounded down
    pub fn amounts_for_liquidity(
        env: Env,
        sqrt_pool_price_x96: U256,
        sqrt_price_lower_x96: U256,
        sqrt_price_upper_x96: U256,
        liquidity: u128,
    ) -> Result<(u128, u128), LiquidityError> {
        amounts_for_liquidity(
            &env,
            &sqrt_pool_price_x96,
            &sqrt_price_lower_x96,
            &sqrt_price_upper_x96,
            liquidity,
        )
    }

    /// Largest sqrt price accepted by every entry point
    pub fn max_sqrt_price_x96(env: Env) -> U256 {
        max_sqrt_price_x96(&env)
    }
}
