//! Remaining-fillable amount calculator.
//!
//! ## Overview
//!
//! Given how much of an order remains unfilled and how much of the
//! maker's asset and fee asset the maker can actually transfer right
//! now, [`compute_remaining_fillable`] returns the maximum maker amount
//! a taker could fill at this moment. The order-validity checker calls
//! it once per order per balance-refresh cycle.
//!
//! ## Two Cases
//!
//! - **Independent fee asset** (the common case): delivering the maker
//!   asset and paying the fee draw from different balances, so the
//!   result is the min of three independent ceilings.
//! - **Shared fee asset**: the fee is denominated in the maker asset
//!   itself, so one balance funds both obligations and only two
//!   ceilings apply.
//!
//! ## Purity
//!
//! The calculator is a pure function: no I/O, no shared state, no
//! failure modes. Identical inputs always produce identical outputs,
//! and concurrent callers need no coordination.

use crate::types::amount::{mul_div_floor, Amount};
use crate::types::{AssetId, Order};

// ============================================================================
// Calculator
// ============================================================================

/// Compute the maker amount of `order` fillable right now.
///
/// # Arguments
///
/// * `order` - The declared order (immutable amounts and asset ids)
/// * `fee_asset` - The exchange's fee asset
/// * `transferable_maker_amount` - Maker asset the maker could transfer
///   now (min of balance and allowance)
/// * `transferable_fee_amount` - Fee asset the maker could transfer now
/// * `remaining_maker_amount` - Portion of `order.maker_asset_amount`
///   not yet consumed by fills or cancellation
///
/// Callers own the preconditions: amounts are base-unit snapshots and
/// `remaining_maker_amount` should not exceed the order total (see
/// [`crate::fillable::state::OrderRelevantState`], which clamps it).
///
/// # Example
///
/// ```
/// use fillable_core::fillable::compute_remaining_fillable;
/// use fillable_core::types::{Order, amount::whole};
///
/// let order = Order::new(
///     [0xaa; 20], [0x01; 20], [0x02; 20],
///     whole(50), whole(5), whole(1), 0, u64::MAX, 1,
/// );
/// let fee_asset = [0x03; 20];
///
/// // Maker balance is the binding ceiling
/// let fillable = compute_remaining_fillable(&order, fee_asset, whole(46), whole(5), whole(48));
/// assert_eq!(fillable, whole(46));
/// ```
pub fn compute_remaining_fillable(
    order: &Order,
    fee_asset: AssetId,
    transferable_maker_amount: Amount,
    transferable_fee_amount: Amount,
    remaining_maker_amount: Amount,
) -> Amount {
    if order.maker_asset == fee_asset {
        shared_pool_fillable(
            transferable_maker_amount,
            transferable_fee_amount,
            remaining_maker_amount,
        )
    } else {
        remaining_maker_amount
            .min(transferable_maker_amount)
            .min(fee_ceiling(order, transferable_fee_amount))
    }
}

/// Maker amount whose proportional fee the transferable fee balance
/// covers.
///
/// The order fixes the fee-to-maker exchange rate at
/// `maker_asset_amount / maker_fee`; the ceiling is that rate applied
/// to however much fee the maker can actually pay, floored. A zero-fee
/// order has no fee obligation, and a ceiling too large to represent
/// cannot bind; both are unbounded.
fn fee_ceiling(order: &Order, transferable_fee_amount: Amount) -> Amount {
    if order.charges_no_fee() {
        return Amount::MAX;
    }

    mul_div_floor(
        transferable_fee_amount,
        order.maker_asset_amount,
        order.maker_fee,
    )
    .unwrap_or(Amount::MAX)
}

/// Fillable amount when the fee asset is the maker asset itself.
///
/// Both transferable inputs describe facets of one underlying pool and
/// must never be summed. Taking their minimum means an inconsistent
/// caller can narrow the pool but never widen it.
fn shared_pool_fillable(
    transferable_maker_amount: Amount,
    transferable_fee_amount: Amount,
    remaining_maker_amount: Amount,
) -> Amount {
    let pool = transferable_maker_amount.min(transferable_fee_amount);
    remaining_maker_amount.min(pool)
}

// ============================================================================
// Unit Tests
// ============================================================================
