#![no_std]

pub mod fixed_point;
pub mod full_math;
pub mod highest_liquidity;
pub mod liquidity_amounts;

pub use fixed_point::*;
pub use full_math::*;
pub use highest_liquidity::*;
pub use liquidity_amounts::*;
