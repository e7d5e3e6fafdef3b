// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. square_x96 is exact for integer Q96 values
// 2. square_x96 is monotonic and never fails at or below the sqrt price bound
// 3. mul_div rounds down
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Env, U256};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity check - squaring is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_square(env: Env, sqrt_value: u128) {
    let _price = liquidity_math::square_x96(&env, &U256::from_u128(&env, sqrt_value));
    cvlr_satisfy!(true);
}

/// RULE: Any u128 sqrt price is below the bound and squares without error
#[cfg(feature = "certora")]
#[rule]
pub fn square_total_below_bound(env: Env, sqrt_value: u128) {
    let result = liquidity_math::square_x96(&env, &U256::from_u128(&env, sqrt_value));
    cvlr_assert!(result.is_ok());
}

/// RULE: Squaring is monotonic
#[cfg(feature = "certora")]
#[rule]
pub fn square_monotonic(env: Env, a: u128, b: u128) {
    cvlr_assume!(a <= b);

    let square_a = liquidity_math::square_x96(&env, &U256::from_u128(&env, a));
    let square_b = liquidity_math::square_x96(&env, &U256::from_u128(&env, b));

    if let (Ok(square_a), Ok(square_b)) = (square_a, square_b) {
        cvlr_assert!(square_a <= square_b);
    }
}

/// RULE: mul_div never exceeds the exact quotient
#[cfg(feature = "certora")]
#[rule]
pub fn mul_div_rounds_down(env: Env, a: u64, b: u64, c: u64) {
    cvlr_assume!(c > 0);

    let result = liquidity_math::mul_div(
        &env,
        &U256::from_u128(&env, a as u128),
        &U256::from_u128(&env, b as u128),
        &U256::from_u128(&env, c as u128),
    );

    if let Ok(result) = result {
        let result = result.to_u128().unwrap_or(u128::MAX);
        cvlr_assert!(result * (c as u128) <= (a as u128) * (b as u128));
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use liquidity_types::{LiquidityError, Q96};
    use soroban_sdk::{Env, U256};

    #[test]
    fn test_square_monotonic() {
        let env = Env::default();
        let values = [0u128, 1, 1 << 48, Q96 / 3, Q96, Q96 + 1, u128::MAX];

        for pair in values.windows(2) {
            let lower = liquidity_math::square_x96(&env, &U256::from_u128(&env, pair[0])).unwrap();
            let upper = liquidity_math::square_x96(&env, &U256::from_u128(&env, pair[1])).unwrap();
            assert!(lower <= upper);
        }
    }

    #[test]
    fn test_square_total_for_u128() {
        let env = Env::default();
        assert!(liquidity_math::square_x96(&env, &U256::from_u128(&env, u128::MAX)).is_ok());
    }

    #[test]
    fn test_square_rejects_above_bound() {
        let env = Env::default();
        let above = liquidity_math::max_sqrt_price_x96(&env).add(&U256::from_u32(&env, 1));
        assert_eq!(
            liquidity_math::square_x96(&env, &above),
            Err(LiquidityError::Overflow)
        );
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        let (a, b, c) = (1_000u128, 500u128, 300u128);

        let result = liquidity_math::mul_div(
            &env,
            &U256::from_u128(&env, a),
            &U256::from_u128(&env, b),
            &U256::from_u128(&env, c),
        )
        .unwrap()
        .to_u128()
        .unwrap();

        // floor(500000 / 300) = 1666
        assert_eq!(result, 1666);
        assert!(result * c <= a * b);
    }
}
