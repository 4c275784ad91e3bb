//! Reference merging consumer for delivered implementor tables.
//!
//! # Responsibility
//! - Accumulate delivered tables into one registry snapshot keyed by source.
//! - Provide a ready-made handler closure for [`RegistryBridge::bind`].
//!
//! # Invariants
//! - Distinct sources union; a repeated source replaces its earlier records.
//! - Shared state relies on the single-threaded cooperative event model.
//!
//! [`RegistryBridge::bind`]: crate::registry::bridge::RegistryBridge::bind

use crate::model::table::ImplementorTable;
use std::cell::RefCell;
use std::rc::Rc;

/// Accumulating consumer that merges every delivered table.
///
/// Clones share one accumulated table, so a closure returned by
/// [`MergingSink::handler`] keeps feeding the sink it was created from
/// after the closure moved into the bridge.
#[derive(Debug, Clone, Default)]
pub struct MergingSink {
    merged: Rc<RefCell<ImplementorTable>>,
}

impl MergingSink {
    /// Creates a sink with an empty accumulated table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one delivered table into the accumulated snapshot.
    pub fn absorb(&self, table: ImplementorTable) {
        self.merged.borrow_mut().merge_from(table);
    }

    /// Returns a handler closure suitable for `RegistryBridge::bind`.
    pub fn handler(&self) -> impl FnMut(ImplementorTable) + 'static {
        let sink = self.clone();
        move |table| sink.absorb(table)
    }

    /// Returns a copy of the accumulated table.
    pub fn snapshot(&self) -> ImplementorTable {
        self.merged.borrow().clone()
    }

    /// Returns the number of sources accumulated so far.
    pub fn source_count(&self) -> usize {
        self.merged.borrow().source_count()
    }
}
