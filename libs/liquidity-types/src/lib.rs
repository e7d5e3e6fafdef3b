#![no_std]

mod error;
mod range;

pub use error::*;
pub use range::*;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Bit width of the largest accepted sqrt price.
/// Matches the uint160 sqrt price slot of the reference AMM.
pub const MAX_SQRT_PRICE_BITS: u32 = 160;
