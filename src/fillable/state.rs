//! Caller-facing snapshot types for a fillability check.
//!
//! The watching service refreshes three externally-observed quantities
//! per order per cycle: the transferable maker-asset amount, the
//! transferable fee-asset amount, and the order's unconsumed remainder.
//! [`OrderRelevantState`] bundles one refresh cycle's inputs with the
//! computed outputs so consecutive snapshots can be diffed.

use crate::fillable::calculator::compute_remaining_fillable;
use crate::types::amount::{mul_div_floor, Amount};
use crate::types::{AssetId, Order};

// ============================================================================
// TransferableFunds
// ============================================================================

/// What the maker's account could transfer at the moment of the check.
///
/// Each field is the min of on-chain balance and the spending
/// authorization granted to the exchange, observed by the
/// balance/allowance oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferableFunds {
    /// Transferable amount of the order's maker asset
    pub maker: Amount,

    /// Transferable amount of the exchange fee asset
    pub fee: Amount,
}

impl TransferableFunds {
    /// Funds drawn from two independent balances
    pub fn new(maker: Amount, fee: Amount) -> Self {
        Self { maker, fee }
    }

    /// Funds drawn from a single shared balance
    ///
    /// When the fee asset is the maker asset, both fields describe
    /// facets of the same pool. This constructor keeps the two fields
    /// consistent so the pool can never be counted twice.
    pub fn shared(amount: Amount) -> Self {
        Self {
            maker: amount,
            fee: amount,
        }
    }
}

// ============================================================================
// OrderRelevantState
// ============================================================================

/// The product of one fillability check.
///
/// Inputs are carried alongside outputs: the watching service diffs
/// consecutive snapshots to decide whether an order's listing needs
/// updating.
///
/// ## Example
///
/// ```
/// use fillable_core::fillable::{OrderRelevantState, TransferableFunds};
/// use fillable_core::types::{Order, amount::whole};
///
/// let order = Order::new(
///     [0xaa; 20], [0x01; 20], [0x02; 20],
///     whole(50), whole(5), whole(1), 0, u64::MAX, 1,
/// );
///
/// let state = OrderRelevantState::evaluate(
///     &order,
///     [0x03; 20],
///     TransferableFunds::new(whole(46), whole(5)),
///     whole(48),
/// );
/// assert_eq!(state.fillable_maker_amount, whole(46));
/// assert!(state.is_fillable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRelevantState {
    /// Transferable maker-asset amount at check time
    pub transferable_maker_amount: Amount,

    /// Transferable fee-asset amount at check time
    pub transferable_fee_amount: Amount,

    /// Unconsumed order remainder, clamped to the order total
    pub remaining_maker_amount: Amount,

    /// Maker amount fillable right now
    pub fillable_maker_amount: Amount,

    /// Taker amount corresponding to `fillable_maker_amount` at the
    /// order's exchange rate
    pub fillable_taker_amount: Amount,
}

impl OrderRelevantState {
    /// Evaluate one fillability check.
    ///
    /// `remaining_maker_amount` above the order total is a caller
    /// defect; it is clamped here so every downstream quantity stays
    /// inside the order's declared bounds.
    pub fn evaluate(
        order: &Order,
        fee_asset: AssetId,
        funds: TransferableFunds,
        remaining_maker_amount: Amount,
    ) -> Self {
        let remaining = remaining_maker_amount.min(order.maker_asset_amount);

        let fillable_maker =
            compute_remaining_fillable(order, fee_asset, funds.maker, funds.fee, remaining);
        let fillable_taker = taker_equivalent(order, fillable_maker);

        Self {
            transferable_maker_amount: funds.maker,
            transferable_fee_amount: funds.fee,
            remaining_maker_amount: remaining,
            fillable_maker_amount: fillable_maker,
            fillable_taker_amount: fillable_taker,
        }
    }

    /// Whether any maker amount is fillable at all
    #[inline]
    pub fn is_fillable(&self) -> bool {
        self.fillable_maker_amount > 0
    }
}

/// Convert a maker amount to its taker equivalent at the order's rate.
///
/// floor(maker_amount * taker_asset_amount / maker_asset_amount). An
/// order promising no maker asset has no exchange rate; the taker
/// equivalent is zero, as is a product too wide to decompose.
fn taker_equivalent(order: &Order, maker_amount: Amount) -> Amount {
    if order.maker_asset_amount == 0 {
        return 0;
    }

    mul_div_floor(
        maker_amount,
        order.taker_asset_amount,
        order.maker_asset_amount,
    )
    .unwrap_or(0)
}

// ============================================================================
// Unit Tests
// ============================================================================
