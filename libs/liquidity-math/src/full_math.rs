use liquidity_types::{LiquidityError, Q96};
use soroban_sdk::{Env, U256};

/// Q96 (2^96) as U256
pub fn q96(env: &Env) -> U256 {
    U256::from_u128(env, Q96)
}

/// U256 max value (2^256 - 1)
pub fn u256_max(env: &Env) -> U256 {
    let q128 = U256::from_u128(env, 1u128 << 64).mul(&U256::from_u128(env, 1u128 << 64));
    U256::from_u128(env, u128::MAX)
        .mul(&q128)
        .add(&U256::from_u128(env, u128::MAX))
}

/// a * b, or None if the product does not fit in 256 bits
pub fn checked_mul(env: &Env, a: &U256, b: &U256) -> Option<U256> {
    let zero = U256::from_u32(env, 0);
    if *a == zero || *b == zero {
        return Some(zero);
    }
    if *a > u256_max(env).div(b) {
        return None;
    }
    Some(a.mul(b))
}

/// a + b, or None if the sum does not fit in 256 bits
pub fn checked_add(env: &Env, a: &U256, b: &U256) -> Option<U256> {
    if *a > u256_max(env).sub(b) {
        return None;
    }
    Some(a.add(b))
}

/// Multiply and divide with full precision (rounds down)
/// Returns floor(a * b / denominator)
///
/// The product is formed directly when it fits in 256 bits. Otherwise one
/// factor is split as `x = q * denominator + r`, which gives
/// `x * y / denominator = q * y + floor(r * y / denominator)` with smaller
/// partial products. When neither split fits, the 512-bit product is divided
/// by long division. Fails with `Overflow` only if the quotient needs more
/// than 256 bits or the denominator is zero.
pub fn mul_div(
    env: &Env,
    a: &U256,
    b: &U256,
    denominator: &U256,
) -> Result<U256, LiquidityError> {
    if *denominator == U256::from_u32(env, 0) {
        return Err(LiquidityError::Overflow);
    }

    if let Some(product) = checked_mul(env, a, b) {
        return Ok(product.div(denominator));
    }

    split_mul_div(env, b, a, denominator)
        .or_else(|| split_mul_div(env, a, b, denominator))
        .or_else(|| {
            let (high, low) = full_mul(env, a, b);
            div_wide(env, &high, &low, denominator)
        })
        .ok_or(LiquidityError::Overflow)
}

/// floor(x * y / denominator) computed as q * y + floor(r * y / denominator)
fn split_mul_div(env: &Env, x: &U256, y: &U256, denominator: &U256) -> Option<U256> {
    let quotient = x.div(denominator);
    let remainder = x.rem_euclid(denominator);

    let high = checked_mul(env, &quotient, y)?;
    let low = checked_mul(env, &remainder, y)?.div(denominator);
    checked_add(env, &high, &low)
}

/// 512-bit product of `a * b` as (high, low) 256-bit words
///
/// Built from four 128 x 128 bit partial products, each of which fits in 256 bits.
pub fn full_mul(env: &Env, a: &U256, b: &U256) -> (U256, U256) {
    let word = U256::from_u32(env, 1).shl(128);
    let (a_high, a_low) = (a.shr(128), a.rem_euclid(&word));
    let (b_high, b_low) = (b.shr(128), b.rem_euclid(&word));

    let low_low = a_low.mul(&b_low);
    let low_high = a_low.mul(&b_high);
    let high_low = a_high.mul(&b_low);
    let high_high = a_high.mul(&b_high);

    // Column sums stay below 4 * 2^128
    let middle = low_low
        .shr(128)
        .add(&low_high.rem_euclid(&word))
        .add(&high_low.rem_euclid(&word));
    let low = low_low
        .rem_euclid(&word)
        .add(&middle.rem_euclid(&word).shl(128));

    let upper = middle
        .shr(128)
        .add(&low_high.shr(128))
        .add(&high_low.shr(128))
        .add(&high_high.rem_euclid(&word));
    let high = upper
        .rem_euclid(&word)
        .add(&high_high.shr(128).add(&upper.shr(128)).shl(128));

    (high, low)
}

/// floor((high * 2^256 + low) / denominator), None if the quotient needs
/// more than 256 bits
///
/// Restoring long division, one bit of `low` per step. The running remainder
/// stays below the denominator.
fn div_wide(env: &Env, high: &U256, low: &U256, denominator: &U256) -> Option<U256> {
    if high >= denominator {
        return None;
    }

    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let top_bit = one.shl(255);

    let mut remainder = high.clone();
    let mut rest = low.clone();
    let mut quotient = zero.clone();

    for _ in 0..256 {
        let carry = remainder >= top_bit;
        let bit = if rest >= top_bit {
            rest = rest.sub(&top_bit);
            one.clone()
        } else {
            zero.clone()
        };
        rest = rest.shl(1);
        quotient = quotient.shl(1);

        if carry {
            // 2 * remainder >= 2^256 > denominator, so the step always subtracts
            remainder = remainder.sub(&denominator.sub(&remainder)).add(&bit);
            quotient = quotient.add(&one);
        } else {
            remainder = remainder.shl(1).add(&bit);
            if remainder >= *denominator {
                remainder = remainder.sub(denominator);
                quotient = quotient.add(&one);
            }
        }
    }

    Some(quotient)
}

/// Convert U256 to u128, Overflow if it does not fit
pub fn to_u128(env: &Env, value: &U256) -> Result<u128, LiquidityError> {
    if *value > U256::from_u128(env, u128::MAX) {
        return Err(LiquidityError::Overflow);
    }
    value.to_u128().ok_or(LiquidityError::Overflow)
}
