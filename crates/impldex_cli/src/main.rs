//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `impldex_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use impldex_core::{ImplementorTable, MergingSink, RegistryBridge};

fn main() {
    println!("impldex_core ping={}", impldex_core::ping());
    println!("impldex_core version={}", impldex_core::core_version());

    // Replays the out-of-order case the bridge exists for: one fragment
    // lands before the consumer initializes, one after.
    let mut bridge = RegistryBridge::new();
    bridge.submit(ImplementorTable::with_source(
        "cbox",
        vec!["impl<'a, D: ?Sized> Drop for CSemiBox<'a, D>".to_string()],
    ));

    let sink = MergingSink::new();
    bridge.bind(sink.handler());

    bridge.submit(ImplementorTable::with_source(
        "llvm",
        vec![
            "impl<'a> Drop for GenericValue<'a>".to_string(),
            "impl<'a> Drop for Symbols<'a>".to_string(),
        ],
    ));

    let snapshot = sink.snapshot();
    for (source, records) in snapshot.iter() {
        println!("source={source} records={}", records.len());
    }
}
