use crate::fixed_point::{check_sqrt_price, square_x96};
use crate::full_math::{checked_add, checked_mul, mul_div, q96, to_u128};
use crate::liquidity_amounts::{check_price_band, liquidity_for_amount0, liquidity_for_amount1};
use liquidity_types::{LiquidityError, RangePosition};
use soroban_sdk::{Env, U256};

/// Highest liquidity that the two balances can fund once they are freely
/// re-split at the exchange price.
///
/// `sqrt_exchange_price_x96` only values the hypothetical conversion between
/// the held tokens; the pool price decides which tokens the position needs.
///
/// * Below range: all capital as token0, `amount0 + amount1 / exchange_price`
/// * In range: total value `V = amount0 * exchange_price + amount1` over the
///   value one unit of liquidity needs, `R = d0 * exchange_price + d1`
/// * Above range: all capital as token1, `amount1 + amount0 * exchange_price`
///
/// # Errors
/// * `WrongPriceBands` - lower >= upper, checked before any arithmetic
/// * `Overflow` - a sqrt price above the bound, a zero exchange price with
///   token1 to convert, or a result above u128
pub fn calculate_highest_liquidity(
    env: &Env,
    sqrt_exchange_price_x96: &U256,
    sqrt_pool_price_x96: &U256,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount0: u128,
    amount1: u128,
) -> Result<u128, LiquidityError> {
    check_price_band(sqrt_price_lower_x96, sqrt_price_upper_x96)?;
    check_sqrt_price(env, sqrt_pool_price_x96)?;
    check_sqrt_price(env, sqrt_price_lower_x96)?;
    check_sqrt_price(env, sqrt_price_upper_x96)?;

    let exchange_price_x96 = square_x96(env, sqrt_exchange_price_x96)?;
    let amount0 = U256::from_u128(env, amount0);
    let amount1 = U256::from_u128(env, amount1);

    let liquidity = match RangePosition::classify(
        sqrt_pool_price_x96,
        sqrt_price_lower_x96,
        sqrt_price_upper_x96,
    ) {
        RangePosition::BelowRange => {
            let usable0 = token1_into_token0(env, &exchange_price_x96, &amount0, &amount1)?;
            liquidity_for_amount0(env, sqrt_price_lower_x96, sqrt_price_upper_x96, &usable0)?
        }
        RangePosition::InRange => in_range_liquidity(
            env,
            &exchange_price_x96,
            sqrt_pool_price_x96,
            sqrt_price_lower_x96,
            sqrt_price_upper_x96,
            &amount0,
            &amount1,
        )?,
        RangePosition::AboveRange => {
            let usable1 = token0_into_token1(env, &exchange_price_x96, &amount0, &amount1)?;
            liquidity_for_amount1(env, sqrt_price_lower_x96, sqrt_price_upper_x96, &usable1)?
        }
    };

    to_u128(env, &liquidity)
}

/// amount0 + amount1 / exchange_price, in token0 units
fn token1_into_token0(
    env: &Env,
    exchange_price_x96: &U256,
    amount0: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    if *amount1 == U256::from_u32(env, 0) {
        return Ok(amount0.clone());
    }
    let converted = mul_div(env, amount1, &q96(env), exchange_price_x96)?;
    checked_add(env, amount0, &converted).ok_or(LiquidityError::Overflow)
}

/// amount1 + amount0 * exchange_price, in token1 units
fn token0_into_token1(
    env: &Env,
    exchange_price_x96: &U256,
    amount0: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    let converted = mul_div(env, amount0, exchange_price_x96, &q96(env))?;
    checked_add(env, amount1, &converted).ok_or(LiquidityError::Overflow)
}

/// floor(V / R) for a pool price inside the band
///
/// Measured in token1 first. When token0 is worth so much that V or R leaves
/// 256 bits, both sides are divided by the exchange price and measured in
/// token0 instead.
fn in_range_liquidity(
    env: &Env,
    exchange_price_x96: &U256,
    sqrt_pool_price_x96: &U256,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount0: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    in_range_token1_terms(
        env,
        exchange_price_x96,
        sqrt_pool_price_x96,
        sqrt_price_lower_x96,
        sqrt_price_upper_x96,
        amount0,
        amount1,
    )
    .or_else(|_| {
        in_range_token0_terms(
            env,
            exchange_price_x96,
            sqrt_pool_price_x96,
            sqrt_price_lower_x96,
            sqrt_price_upper_x96,
            amount0,
            amount1,
        )
    })
}

/// V = amount0 * e + amount1 * Q96, R = e * Q96 / sqrt_pool - e * Q96 / sqrt_upper + d1
///
/// d0 * exchange_price is expanded as a difference of two quotients so no
/// factor is ever a product of two sqrt prices.
fn in_range_token1_terms(
    env: &Env,
    exchange_price_x96: &U256,
    sqrt_pool_price_x96: &U256,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount0: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    let q = q96(env);

    let value0 = checked_mul(env, amount0, exchange_price_x96)
        .ok_or(LiquidityError::Overflow)?;
    let value1 = checked_mul(env, amount1, &q).ok_or(LiquidityError::Overflow)?;
    let value = checked_add(env, &value0, &value1).ok_or(LiquidityError::Overflow)?;

    let required0 = mul_div(env, exchange_price_x96, &q, sqrt_pool_price_x96)?
        .sub(&mul_div(env, exchange_price_x96, &q, sqrt_price_upper_x96)?);
    let required1 = sqrt_pool_price_x96.sub(sqrt_price_lower_x96);
    let required = checked_add(env, &required0, &required1).ok_or(LiquidityError::Overflow)?;

    // required1 > 0 in range
    Ok(value.div(&required))
}

/// V / e scaled by Q96 over R / e scaled by Q96^2, so the quotient is
/// rescaled by Q96 at the end
///
/// V / e = amount0 * Q96 + amount1 * Q96^2 / e
/// R / e = Q96^3 / sqrt_pool - Q96^3 / sqrt_upper + d1 * Q96^2 / e
fn in_range_token0_terms(
    env: &Env,
    exchange_price_x96: &U256,
    sqrt_pool_price_x96: &U256,
    sqrt_price_lower_x96: &U256,
    sqrt_price_upper_x96: &U256,
    amount0: &U256,
    amount1: &U256,
) -> Result<U256, LiquidityError> {
    let q = q96(env);
    let q_squared = q.mul(&q);

    let value0 = checked_mul(env, amount0, &q).ok_or(LiquidityError::Overflow)?;
    let value1 = mul_div(env, amount1, &q_squared, exchange_price_x96)?;
    let value = checked_add(env, &value0, &value1).ok_or(LiquidityError::Overflow)?;

    let required0 = mul_div(env, &q_squared, &q, sqrt_pool_price_x96)?
        .sub(&mul_div(env, &q_squared, &q, sqrt_price_upper_x96)?);
    let required1 = mul_div(
        env,
        &sqrt_pool_price_x96.sub(sqrt_price_lower_x96),
        &q_squared,
        exchange_price_x96,
    )?;
    let required = checked_add(env, &required0, &required1).ok_or(LiquidityError::Overflow)?;

    mul_div(env, &value, &q, &required)
}
