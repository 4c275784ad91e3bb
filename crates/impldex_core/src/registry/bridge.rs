//! Deferred registry bridge between fragment loads and one consumer.
//!
//! # Responsibility
//! - Resolve both submit-then-bind and bind-then-submit orderings to the
//!   same synchronous delivery outcome.
//! - Keep registration state an explicit tagged enum instead of a presence
//!   check on an ambient global.
//!
//! # Invariants
//! - Every operation performs at most one handler invocation.
//! - At most one table is buffered at a time; a later pre-bind submit
//!   overwrites the earlier one (last writer wins).
//! - `submit` and `bind` never fail and never block.

use crate::model::table::ImplementorTable;
use log::{debug, warn};

/// Consumer callback invoked with each delivered table.
pub type TableHandler = Box<dyn FnMut(ImplementorTable)>;

/// Observable registration phase for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePhase {
    /// No table buffered and no consumer bound.
    Empty,
    /// A table arrived before any consumer bound.
    Buffered,
    /// A consumer is bound; deliveries are synchronous.
    Bound,
}

#[derive(Default)]
enum BridgeSlot {
    #[default]
    Empty,
    Buffered(ImplementorTable),
    Bound(TableHandler),
}

/// Single-owner state cell coordinating fragment loads with one consumer.
///
/// The owner passes the bridge to both producer and consumer call sites;
/// there is no process-global instance. Fragment loads and consumer
/// initialization run as cooperatively scheduled events, so neither
/// operation needs to lock.
///
/// Known limitation: when several fragments submit before any consumer
/// binds, only the last table survives. Producers that need every table to
/// arrive must bind the consumer first or pre-merge their tables.
#[derive(Default)]
pub struct RegistryBridge {
    slot: BridgeSlot,
}

impl RegistryBridge {
    /// Creates a bridge with nothing buffered and no consumer bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current registration phase.
    pub fn phase(&self) -> BridgePhase {
        match self.slot {
            BridgeSlot::Empty => BridgePhase::Empty,
            BridgeSlot::Buffered(_) => BridgePhase::Buffered,
            BridgeSlot::Bound(_) => BridgePhase::Bound,
        }
    }

    /// Hands one table to the bound consumer, or buffers it until one binds.
    ///
    /// # Contract
    /// - Bound: the handler runs immediately and synchronously.
    /// - Not bound: the table is buffered, replacing any earlier buffered
    ///   table.
    /// - Table content is never inspected; a table the handler cannot
    ///   process is the handler's failure, not the bridge's.
    pub fn submit(&mut self, table: ImplementorTable) {
        match &mut self.slot {
            BridgeSlot::Bound(handler) => {
                debug!(
                    "event=registry_delivered module=bridge status=ok sources={}",
                    table.source_count()
                );
                handler(table);
            }
            BridgeSlot::Buffered(buffered) => {
                warn!(
                    "event=registry_buffer_dropped module=bridge status=ok dropped_sources={} sources={}",
                    buffered.source_count(),
                    table.source_count()
                );
                *buffered = table;
            }
            BridgeSlot::Empty => {
                debug!(
                    "event=registry_buffered module=bridge status=ok sources={}",
                    table.source_count()
                );
                self.slot = BridgeSlot::Buffered(table);
            }
        }
    }

    /// Binds the consumer handler, flushing a buffered table when present.
    ///
    /// # Contract
    /// - Buffered: the handler runs exactly once with the buffered table,
    ///   then owns all later deliveries.
    /// - Empty: the handler is stored without being invoked.
    /// - Already bound: the new handler replaces the old one (last bind
    ///   wins) with no invocation, since nothing remains buffered.
    pub fn bind<F>(&mut self, handler: F)
    where
        F: FnMut(ImplementorTable) + 'static,
    {
        let mut handler: TableHandler = Box::new(handler);
        match std::mem::take(&mut self.slot) {
            BridgeSlot::Buffered(table) => {
                debug!(
                    "event=registry_flushed module=bridge status=ok sources={}",
                    table.source_count()
                );
                handler(table);
            }
            BridgeSlot::Bound(_) => {
                debug!("event=registry_rebound module=bridge status=ok");
            }
            BridgeSlot::Empty => {
                debug!("event=registry_bound module=bridge status=ok");
            }
        }
        self.slot = BridgeSlot::Bound(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::{BridgePhase, RegistryBridge};
    use crate::model::table::ImplementorTable;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (
        Rc<RefCell<Vec<ImplementorTable>>>,
        impl FnMut(ImplementorTable) + 'static,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |table| sink.borrow_mut().push(table))
    }

    #[test]
    fn new_bridge_starts_empty() {
        let bridge = RegistryBridge::new();
        assert_eq!(bridge.phase(), BridgePhase::Empty);
    }

    #[test]
    fn submit_without_consumer_buffers_table() {
        let mut bridge = RegistryBridge::new();
        bridge.submit(ImplementorTable::with_source("cbox", vec!["ImplA".to_string()]));

        assert_eq!(bridge.phase(), BridgePhase::Buffered);
    }

    #[test]
    fn submit_while_bound_delivers_synchronously() {
        let (seen, handler) = recorder();
        let mut bridge = RegistryBridge::new();
        bridge.bind(handler);

        let table = ImplementorTable::with_source("llvm", vec!["ImplB".to_string()]);
        bridge.submit(table.clone());

        assert_eq!(seen.borrow().as_slice(), &[table]);
        assert_eq!(bridge.phase(), BridgePhase::Bound);
    }

    #[test]
    fn second_pre_bind_submit_replaces_buffered_table() {
        let (seen, handler) = recorder();
        let mut bridge = RegistryBridge::new();

        bridge.submit(ImplementorTable::with_source("cbox", vec!["first".to_string()]));
        let survivor = ImplementorTable::with_source("cbox", vec!["second".to_string()]);
        bridge.submit(survivor.clone());
        bridge.bind(handler);

        assert_eq!(seen.borrow().as_slice(), &[survivor]);
    }

    #[test]
    fn bind_on_empty_bridge_invokes_nothing() {
        let (seen, handler) = recorder();
        let mut bridge = RegistryBridge::new();
        bridge.bind(handler);

        assert!(seen.borrow().is_empty());
        assert_eq!(bridge.phase(), BridgePhase::Bound);
    }

    #[test]
    fn rebind_replaces_handler_without_invocation() {
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let mut bridge = RegistryBridge::new();

        bridge.bind(first);
        bridge.bind(second);
        assert!(first_seen.borrow().is_empty());
        assert!(second_seen.borrow().is_empty());

        bridge.submit(ImplementorTable::with_source("cbox", vec!["ImplA".to_string()]));
        assert!(first_seen.borrow().is_empty());
        assert_eq!(second_seen.borrow().len(), 1);
    }
}
