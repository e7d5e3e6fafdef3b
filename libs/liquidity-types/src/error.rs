use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityError {
    /// Lower sqrt price is not strictly below the upper one
    WrongPriceBands = 1,
    /// A value left the supported range (sqrt price bound, 256-bit
    /// intermediates, zero divisor or the output type)
    Overflow = 2,
}
