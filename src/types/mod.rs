//! Core data types for fillable-core
//!
//! All amounts use fixed-point representation (u128 base units scaled
//! by 10^18). Orders carry deterministic SSZ encoding for hashing.
//!
//! ## Types
//!
//! - [`Order`]: an exchange order as declared by its maker
//! - [`AssetId`] / [`Address`]: 20-byte asset and account identifiers
//! - [`amount`]: exact fixed-point amount arithmetic

mod order;
pub mod amount;

// Re-export all types at module level
pub use amount::Amount;
pub use order::{Address, AssetId, Order};
