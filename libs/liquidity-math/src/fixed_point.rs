use crate::full_math::{mul_div, q96};
use liquidity_types::{LiquidityError, MAX_SQRT_PRICE_BITS};
use soroban_sdk::{Env, U256};

/// Largest accepted sqrt price: 2^MAX_SQRT_PRICE_BITS - 1
pub fn max_sqrt_price_x96(env: &Env) -> U256 {
    U256::from_u32(env, 1)
        .shl(MAX_SQRT_PRICE_BITS)
        .sub(&U256::from_u32(env, 1))
}

/// Reject sqrt prices above `max_sqrt_price_x96`
pub fn check_sqrt_price(env: &Env, sqrt_price_x96: &U256) -> Result<(), LiquidityError> {
    if *sqrt_price_x96 > max_sqrt_price_x96(env) {
        return Err(LiquidityError::Overflow);
    }
    Ok(())
}

/// Square a Q96 sqrt price into a Q96 price (rounds down)
/// price_x96 = sqrt_price_x96^2 / 2^96
///
/// The raw square of a 160-bit input needs 320 bits; `mul_div` splits it so
/// the result is the exact floor without leaving 256 bits.
pub fn square_x96(env: &Env, sqrt_price_x96: &U256) -> Result<U256, LiquidityError> {
    check_sqrt_price(env, sqrt_price_x96)?;
    mul_div(env, sqrt_price_x96, sqrt_price_x96, &q96(env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquidity_types::Q96;
    use soroban_sdk::Env;

    fn u(env: &Env, v: u128) -> U256 {
        U256::from_u128(env, v)
    }

    #[test]
    fn test_square_zero() {
        let env = Env::default();
        assert_eq!(square_x96(&env, &u(&env, 0)), Ok(u(&env, 0)));
    }

    #[test]
    fn test_square_one() {
        let env = Env::default();
        // 1.0 squared is 1.0
        assert_eq!(square_x96(&env, &u(&env, Q96)), Ok(u(&env, Q96)));
    }

    #[test]
    fn test_square_small_integers() {
        let env = Env::default();
        for k in 2u128..=16 {
            let expected = u(&env, k * k).mul(&u(&env, Q96));
            assert_eq!(square_x96(&env, &u(&env, k * Q96)), Ok(expected));
        }
    }

    #[test]
    fn test_square_fraction() {
        let env = Env::default();
        // 0.5^2 = 0.25
        assert_eq!(square_x96(&env, &u(&env, Q96 / 2)), Ok(u(&env, Q96 / 4)));
        // 2^-48 squared is 2^-96, one unit in Q96
        assert_eq!(square_x96(&env, &u(&env, 1u128 << 48)), Ok(u(&env, 1)));
        // Anything below that truncates to zero
        assert_eq!(square_x96(&env, &u(&env, (1u128 << 48) - 1)), Ok(u(&env, 0)));
    }

    #[test]
    fn test_square_truncates() {
        let env = Env::default();
        // (2^96 + 1)^2 / 2^96 = 2^96 + 2 + 2^-96 -> 2^96 + 2
        assert_eq!(
            square_x96(&env, &u(&env, Q96 + 1)),
            Ok(u(&env, Q96 + 2))
        );
    }

    #[test]
    fn test_square_max_bound() {
        let env = Env::default();
        let max = max_sqrt_price_x96(&env);
        // (2^160 - 1)^2 >> 96 = 2^224 - 2^65 + floor(1 / 2^96) = 2^224 - 2^65
        let two_pow_224 = u(&env, 1u128 << 112).mul(&u(&env, 1u128 << 112));
        let expected = two_pow_224.sub(&u(&env, 1u128 << 65));
        assert_eq!(square_x96(&env, &max), Ok(expected));
    }

    #[test]
    fn test_square_above_bound_fails() {
        let env = Env::default();
        let above = max_sqrt_price_x96(&env).add(&u(&env, 1));
        assert_eq!(square_x96(&env, &above), Err(LiquidityError::Overflow));
    }

    #[test]
    fn test_max_sqrt_price_bits() {
        let env = Env::default();
        // 2^160 - 1 = (2^64 - 1) * 2^96 + (2^96 - 1)
        let expected = u(&env, u64::MAX as u128)
            .mul(&u(&env, Q96))
            .add(&u(&env, Q96 - 1));
        assert_eq!(max_sqrt_price_x96(&env), expected);
    }

    #[test]
    fn test_check_sqrt_price() {
        let env = Env::default();
        let max = max_sqrt_price_x96(&env);
        assert_eq!(check_sqrt_price(&env, &max), Ok(()));
        assert_eq!(check_sqrt_price(&env, &u(&env, 0)), Ok(()));
        assert_eq!(
            check_sqrt_price(&env, &max.add(&u(&env, 1))),
            Err(LiquidityError::Overflow)
        );
    }
}
