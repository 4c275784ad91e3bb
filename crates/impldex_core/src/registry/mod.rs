//! Deferred registration wiring between fragments and consumers.
//!
//! # Responsibility
//! - Buffer fragment payloads until a consumer binds a handler.
//! - Provide the reference merging consumer used by smoke wiring.
//!
//! # Invariants
//! - At most one payload is buffered at a time (last writer wins).
//! - Every operation performs at most one handler invocation.

pub mod bridge;
pub mod sink;
