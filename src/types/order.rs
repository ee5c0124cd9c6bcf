//! Order type for the fillable-amount calculator.
//!
//! ## Immutability
//!
//! An [`Order`] is a value snapshot of what the maker promised at order
//! creation. Every field is fixed for the lifetime of the order; only
//! external state (fill history, balances, allowances) changes between
//! checks.
//!
//! ## SSZ Serialization
//!
//! Orders derive `SimpleSerialize` from ssz_rs for deterministic
//! encoding. The encoded bytes feed the SHA-256 order hash that
//! identifies an order across the watching service.
//!
//! ## Fixed-Point Representation
//!
//! Amounts are u128 base units scaled by 10^18 (see
//! [`crate::types::amount`]).

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::amount::Amount;

/// A 20-byte asset identifier (token contract address).
pub type AssetId = [u8; 20];

/// A 20-byte account identifier (maker address).
pub type Address = [u8; 20];

// ============================================================================
// Order struct
// ============================================================================

/// An exchange order as declared by its maker.
///
/// ## Fields
///
/// All amount fields use fixed-point base units (scaled by 10^18).
/// `maker_fee` is denominated in the exchange's fee asset, which is not
/// part of the order itself: the fee asset is exchange-wide and is
/// supplied to the calculator per call.
///
/// ## Example
///
/// ```
/// use fillable_core::types::{Order, amount::whole};
///
/// // Offer 50 maker tokens for 5 taker tokens, 1 fee token owed
/// let order = Order::new(
///     [0xaa; 20],             // maker
///     [0x01; 20],             // maker_asset
///     [0x02; 20],             // taker_asset
///     whole(50),              // maker_asset_amount
///     whole(5),               // taker_asset_amount
///     whole(1),               // maker_fee
///     0,                      // taker_fee
///     1_703_577_600,          // expiration (unix seconds)
///     42,                     // salt
/// );
/// assert!(!order.charges_no_fee());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Account that created the order and funds both obligations
    pub maker: Address,

    /// Asset the maker is offering
    pub maker_asset: AssetId,

    /// Asset the maker wants in return
    pub taker_asset: AssetId,

    /// Total maker amount promised at order creation (base units)
    pub maker_asset_amount: Amount,

    /// Total taker amount asked at order creation (base units)
    pub taker_asset_amount: Amount,

    /// Fee owed by the maker, denominated in the exchange fee asset
    pub maker_fee: Amount,

    /// Fee owed by the taker, denominated in the exchange fee asset
    pub taker_fee: Amount,

    /// Unix timestamp (seconds) after which the order is void
    pub expiration_unix_seconds: u64,

    /// Maker-chosen nonce distinguishing otherwise identical orders
    pub salt: u64,
}

impl Order {
    /// Create a new order
    ///
    /// # Arguments
    ///
    /// * `maker` - Account that created the order
    /// * `maker_asset` - Asset the maker is offering
    /// * `taker_asset` - Asset the maker wants in return
    /// * `maker_asset_amount` - Total maker amount (base units)
    /// * `taker_asset_amount` - Total taker amount (base units)
    /// * `maker_fee` - Maker fee in the exchange fee asset (base units)
    /// * `taker_fee` - Taker fee in the exchange fee asset (base units)
    /// * `expiration_unix_seconds` - Expiration timestamp (unix seconds)
    /// * `salt` - Maker-chosen nonce
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        maker: Address,
        maker_asset: AssetId,
        taker_asset: AssetId,
        maker_asset_amount: Amount,
        taker_asset_amount: Amount,
        maker_fee: Amount,
        taker_fee: Amount,
        expiration_unix_seconds: u64,
        salt: u64,
    ) -> Self {
        Self {
            maker,
            maker_asset,
            taker_asset,
            maker_asset_amount,
            taker_asset_amount,
            maker_fee,
            taker_fee,
            expiration_unix_seconds,
            salt,
        }
    }

    /// Check whether the order charges no maker fee
    ///
    /// A zero-fee order never has a binding fee ceiling.
    #[inline]
    pub fn charges_no_fee(&self) -> bool {
        self.maker_fee == 0
    }

    /// Check whether the order has expired as of `now_unix_seconds`
    ///
    /// An order is still live at exactly its expiration timestamp.
    #[inline]
    pub fn is_expired(&self, now_unix_seconds: u64) -> bool {
        self.expiration_unix_seconds < now_unix_seconds
    }

    /// Deterministic SSZ encoding of the order
    ///
    /// Returns `None` if serialization fails.
    pub fn ssz_bytes(&self) -> Option<Vec<u8>> {
        ssz_rs::serialize(self).ok()
    }

    /// SHA-256 hash of the SSZ-encoded order
    ///
    /// The hash identifies the order across the watching service: two
    /// orders hash identically iff every declared field matches.
    pub fn hash(&self) -> Option<[u8; 32]> {
        let bytes = self.ssz_bytes()?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        Some(hash)
    }

    /// Order hash as a hex string
    pub fn hash_hex(&self) -> Option<String> {
        Some(hex::encode(self.hash()?))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
