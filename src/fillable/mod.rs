//! Fillable-amount computation for the order-watching service.
//!
//! ## Components
//!
//! - [`compute_remaining_fillable`]: the pure calculator deciding how
//!   much of an order's maker asset is fillable right now
//! - [`TransferableFunds`] / [`OrderRelevantState`]: the per-refresh
//!   input and output snapshots around it
//!
//! ## Example
//!
//! ```
//! use fillable_core::fillable::{OrderRelevantState, TransferableFunds};
//! use fillable_core::types::{Order, amount::whole};
//!
//! let order = Order::new(
//!     [0xaa; 20], [0x01; 20], [0x02; 20],
//!     whole(50), whole(5), whole(1), 0, u64::MAX, 1,
//! );
//!
//! // Fee funds are gone: nothing is fillable despite a full balance
//! let state = OrderRelevantState::evaluate(
//!     &order,
//!     [0x03; 20],
//!     TransferableFunds::new(whole(50), 0),
//!     whole(50),
//! );
//! assert!(!state.is_fillable());
//! ```

pub mod calculator;
pub mod state;

pub use calculator::compute_remaining_fillable;
pub use state::{OrderRelevantState, TransferableFunds};
