use crate::fixed_point::check_sqrt_price;
use crate::full_math::{mul_div, q96, to_u128};
use liquidity_types::{LiquidityError, RangePosition};
use soroban_sdk::{Env, U256};

/// Fail with `WrongPriceBands` unless lower < upper
pub fn check_price_band(
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
) -> Result<(), LiquidityError> {
    if sqrt_price_lower_x96 >= sqrt_price_upper_x96 {
        return Err(LiquidityError::WrongPriceBands);
    }
    Ok(())
}

/// Calculate liquidity from amount0
/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
///
/// `amount0` is taken as U256 so callers can pass capital that already
/// includes converted token1 and may exceed u128.
pub fn liquidity_for_amount0(
    env: &Env,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount0: &U256,
) -> Result<U256, LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;

    let intermediate = mul_div(env, sqrt_price_lower_x96, sqrt_price_upper_x96, &q96(env))?;
    mul_div(
        env,
        amount0,
        &intermediate,
        &sqrt_price_upper_x96.sub(sqrt_price_lower_x96),
    )
}

/// Calculate liquidity from amount1
/// L = amount1 / (sqrt_pb - sqrt_pa)
pub fn liquidity_for_amount1(
    env: &Env,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;

    mul_div(
        env,
        amount1,
        &q96(env),
        &sqrt_price_upper_x96.sub(sqrt_price_lower_x96),
    )
}

/// Calculate amount0 from liquidity
/// amount0 = L * (sqrt_pb - sqrt_pa) / (sqrt_pa * sqrt_pb) = L / sqrt_pa - L / sqrt_pb
///
/// A zero lower sqrt price needs unbounded token0 and fails with `Overflow`.
pub fn amount0_for_liquidity(
    env: &Env,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    liquidity: u128,
) -> Result<u128, LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;

    let liquidity = U256::from_u128(env, liquidity);
    let q = q96(env);
    let at_lower = mul_div(env, &liquidity, &q, sqrt_price_lower_x96)?;
    let at_upper = mul_div(env, &liquidity, &q, sqrt_price_upper_x96)?;
    to_u128(env, &at_lower.sub(&at_upper))
}

/// Calculate amount1 from liquidity
/// amount1 = L * (sqrt_pb - sqrt_pa)
pub fn amount1_for_liquidity(
    env: &Env,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    liquidity: u128,
) -> Result<u128, LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;

    let amount1 = mul_div(
        env,
        &U256::from_u128(env, liquidity),
        &sqrt_price_upper_x96.sub(sqrt_price_lower_x96),
        &q96(env),
    )?;
    to_u128(env, &amount1)
}

/// Get the token amounts a position of `liquidity` holds at the pool price
///
/// # Returns
/// (amount0, amount1) - rounded down
pub fn amounts_for_liquidity(
    env: &Env,
    sqrt_pool_price_x96: &U256,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    liquidity: u128,
) -> Result<(u128, u128), LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;
    check_sqrt_price(env, sqrt_pool_price_x96)?;
    check_sqrt_price(env, sqrt_price_lower_x96)?;
    check_sqrt_price(env, sqrt_price_upper_x96)?;

    match RangePosition::classify(sqrt_pool_price_x96, sqrt_price_lower_x96, sqrt_price_upper_x96) {
        RangePosition::BelowRange => {
            let amount0 =
                amount0_for_liquidity(env, sqrt_price_lower_x96, sqrt_price_upper_x96, liquidity)?;
            Ok((amount0, 0))
        }
        RangePosition::InRange => {
            let amount0 =
                amount0_for_liquidity(env, sqrt_pool_price_x96, sqrt_price_upper_x96, liquidity)?;
            let amount1 =
                amount1_for_liquidity(env, sqrt_price_lower_x96, sqrt_pool_price_x96, liquidity)?;
            Ok((amount0, amount1))
        }
        RangePosition::AboveRange => {
            let amount1 =
                amount1_for_liquidity(env, sqrt_price_lower_x96, sqrt_price_upper_x96, liquidity)?;
            Ok((0, amount1))
        }
    }
}
