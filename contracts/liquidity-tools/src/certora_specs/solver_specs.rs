// ============================================================================
// HIGHEST LIQUIDITY SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. lower >= upper always fails with WrongPriceBands
// 2. Liquidity never decreases when either balance grows
// 3. Zero balances fund zero liquidity
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Env, U256};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use liquidity_types::LiquidityError;

/// RULE: Sanity check - a liquidity value is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_highest_liquidity(
    env: Env,
    exchange: u128,
    pool: u128,
    lower: u128,
    upper: u128,
    amount0: u128,
    amount1: u128,
) {
    let result = liquidity_math::calculate_highest_liquidity(
        &env,
        &U256::from_u128(&env, exchange),
        &U256::from_u128(&env, pool),
        &U256::from_u128(&env, lower),
        &U256::from_u128(&env, upper),
        amount0,
        amount1,
    );
    cvlr_satisfy!(result.is_ok());
}

/// RULE: Bad bands are rejected whatever the other inputs are
#[cfg(feature = "certora")]
#[rule]
pub fn bad_bands_rejected(
    env: Env,
    exchange: u128,
    pool: u128,
    lower: u128,
    upper: u128,
    amount0: u128,
    amount1: u128,
) {
    cvlr_assume!(lower >= upper);

    let result = liquidity_math::calculate_highest_liquidity(
        &env,
        &U256::from_u128(&env, exchange),
        &U256::from_u128(&env, pool),
        &U256::from_u128(&env, lower),
        &U256::from_u128(&env, upper),
        amount0,
        amount1,
    );
    cvlr_assert!(result == Err(LiquidityError::WrongPriceBands));
}

/// RULE: More token0 never yields less liquidity
#[cfg(feature = "certora")]
#[rule]
pub fn monotonic_in_amount0(
    env: Env,
    exchange: u128,
    pool: u128,
    lower: u128,
    upper: u128,
    amount0: u128,
    extra0: u128,
    amount1: u128,
) {
    cvlr_assume!(lower < upper);
    cvlr_assume!(amount0 <= u128::MAX - extra0);

    let exchange = U256::from_u128(&env, exchange);
    let pool = U256::from_u128(&env, pool);
    let lower = U256::from_u128(&env, lower);
    let upper = U256::from_u128(&env, upper);

    let base = liquidity_math::calculate_highest_liquidity(
        &env, &exchange, &pool, &lower, &upper, amount0, amount1,
    );
    let more = liquidity_math::calculate_highest_liquidity(
        &env, &exchange, &pool, &lower, &upper, amount0 + extra0, amount1,
    );

    if let (Ok(base), Ok(more)) = (base, more) {
        cvlr_assert!(more >= base);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
