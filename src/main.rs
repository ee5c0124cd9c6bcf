//! fillable-core - Binary Entry Point
//!
//! Small demonstration of a fillability check: builds a sample order,
//! evaluates it against a funds snapshot, and prints the result.

use fillable_core::types::amount::{from_base_units_trimmed, whole};
use fillable_core::{Order, OrderRelevantState, TransferableFunds};

fn main() {
    println!("===========================================");
    println!("  fillable-core - Order Watcher Core");
    println!("===========================================");
    println!();

    // Offer 50 maker tokens for 5 taker tokens, 1 fee token owed
    println!("Creating sample order...");
    let order = Order::new(
        [0xaa; 20],             // maker
        [0x01; 20],             // maker_asset
        [0x02; 20],             // taker_asset
        whole(50),              // maker_asset_amount
        whole(5),               // taker_asset_amount
        whole(1),               // maker_fee
        0,                      // taker_fee
        1_703_577_600,          // expiration (unix seconds)
        42,                     // salt
    );
    let fee_asset = [0x03; 20];

    println!("Order created:");
    println!("  Maker amount: {} tokens", from_base_units_trimmed(order.maker_asset_amount));
    println!("  Taker amount: {} tokens", from_base_units_trimmed(order.taker_asset_amount));
    println!("  Maker fee:    {} fee tokens", from_base_units_trimmed(order.maker_fee));
    match order.hash_hex() {
        Some(hash) => println!("  Order hash:   0x{}", hash),
        None => println!("  ERROR: failed to hash order"),
    }
    println!();

    // Partially filled by 2, maker balance short of the remainder
    println!("Checking fillability...");
    let state = OrderRelevantState::evaluate(
        &order,
        fee_asset,
        TransferableFunds::new(whole(46), whole(5)),
        whole(48),
    );

    println!("  Remaining:      {} tokens", from_base_units_trimmed(state.remaining_maker_amount));
    println!("  Transferable:   {} tokens", from_base_units_trimmed(state.transferable_maker_amount));
    println!("  Fee funds:      {} fee tokens", from_base_units_trimmed(state.transferable_fee_amount));
    println!("  Fillable maker: {} tokens", from_base_units_trimmed(state.fillable_maker_amount));
    println!("  Fillable taker: {} tokens", from_base_units_trimmed(state.fillable_taker_amount));
    println!("  Fillable:       {}", state.is_fillable());
}
