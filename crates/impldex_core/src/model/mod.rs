//! Implementor-table payload model.
//!
//! # Responsibility
//! - Define the named-table payload shape shared by fragments and consumers.
//! - Pin the serde wire format emitted by the documentation generator.
//!
//! # Invariants
//! - Records are opaque markup strings; core never parses their content.
//! - Per-source record order is preserved exactly as produced.

pub mod table;
