// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the LiquidityTools contract.
//
// - math_specs.rs   : Q96 squaring and wide mul_div
// - solver_specs.rs : Band validation and highest-liquidity properties
//
// USAGE:
// - Unit tests: cargo test -p liquidity-tools
// - Certora build: cargo build --features certora -p liquidity-tools
// - Verification: certoraSorobanProver liquidity_tools.conf
//
// ============================================================================

pub mod math_specs;
pub mod solver_specs;
