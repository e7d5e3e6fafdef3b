use soroban_sdk::U256;

/// Where the pool price sits relative to a position's band.
/// Decides which tokens the position holds at that price.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangePosition {
    /// Pool price at or below the lower bound - position is all token0
    BelowRange,
    /// Pool price strictly inside the band - position holds both tokens
    InRange,
    /// Pool price at or above the upper bound - position is all token1
    AboveRange,
}

impl RangePosition {
    /// Classify `sqrt_price_x96` against `[sqrt_price_lower_x96, sqrt_price_upper_x96]`.
    /// The band must already be validated (lower < upper).
    pub fn classify(
        sqrt_price_x96: &U256,
        sqrt_price_lower_x96: &U256,
        sqrt_price_upper_x96: &U256,
    ) -> Self {
        if sqrt_price_x96 <= sqrt_price_lower_x96 {
            RangePosition::BelowRange
        } else if sqrt_price_x96 < sqrt_price_upper_x96 {
            RangePosition::InRange
        } else {
            RangePosition::AboveRange
        }
    }
}
