//! # fillable-core
//!
//! Remaining-fillable amount calculator for an order-watching service.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, exact fixed-point amounts)
//! - **Fillable**: The calculator and its per-check snapshot types
//!
//! The consuming order-validity checker supplies, per order per
//! balance-refresh cycle, three externally-observed quantities: the
//! transferable maker-asset amount, the transferable fee-asset amount,
//! and the order's unconsumed remainder. The calculator returns the
//! maker amount fillable right now. Fetching balances, validating
//! signatures, and scheduling the watch loop all live outside this
//! crate.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs always produce identical results
//! 2. **No Floating Point**: All math uses fixed-point arithmetic (10^18 scaling)
//! 3. **Purity**: The calculator holds no state, performs no I/O, and
//!    may be called concurrently without coordination
//! 4. **Totality**: The calculator never fails; checked helpers return
//!    `Option`, string conversion returns `Result`

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, exact fixed-point amounts
pub mod types;

/// Fillable-amount computation: calculator and snapshots
pub mod fillable;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use fillable::{compute_remaining_fillable, OrderRelevantState, TransferableFunds};
pub use types::{Address, Amount, AssetId, Order};
