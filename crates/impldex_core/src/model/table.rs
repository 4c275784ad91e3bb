//! Named implementor table exchanged between fragments and consumers.
//!
//! # Responsibility
//! - Hold ordered markup records keyed by source identifier.
//! - Round-trip the generator wire shape (`{"source": ["record", ...]}`).
//!
//! # Invariants
//! - Record values stay opaque; nothing in core interprets markup.
//! - Records under one source keep their insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named table of pre-rendered implementor records.
///
/// Keys are source identifiers (crate names in the originating generator),
/// values are the ordered markup records filed under that source. One table
/// is the unit handed from a loaded fragment to the bound consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl ImplementorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-source table, the shape one fragment produces.
    pub fn with_source(source: impl Into<String>, records: Vec<String>) -> Self {
        let mut table = Self::new();
        table.set_records(source, records);
        table
    }

    /// Replaces all records filed under `source`.
    pub fn set_records(&mut self, source: impl Into<String>, records: Vec<String>) {
        self.entries.insert(source.into(), records);
    }

    /// Appends one record under `source`, creating the entry when absent.
    pub fn push_record(&mut self, source: impl Into<String>, record: impl Into<String>) {
        self.entries
            .entry(source.into())
            .or_default()
            .push(record.into());
    }

    /// Returns records filed under `source`, in insertion order.
    pub fn records(&self, source: &str) -> Option<&[String]> {
        self.entries.get(source).map(Vec::as_slice)
    }

    /// Returns source identifiers present in this table, sorted.
    pub fn sources(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the number of sources with an entry.
    pub fn source_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no source has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Folds `other` into `self`.
    ///
    /// Every source present in `other` replaces the records filed under the
    /// same source here; sources only present in `self` are kept. Each
    /// fragment carries the complete record list for its own source, so
    /// per-source replace is lossless for well-formed producers.
    pub fn merge_from(&mut self, other: ImplementorTable) {
        for (source, records) in other.entries {
            self.entries.insert(source, records);
        }
    }

    /// Iterates `(source, records)` entries in sorted source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(source, records)| (source.as_str(), records.as_slice()))
    }
}

impl IntoIterator for ImplementorTable {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ImplementorTable;

    #[test]
    fn with_source_files_records_under_one_key() {
        let table = ImplementorTable::with_source("cbox", vec!["ImplA".to_string()]);

        assert_eq!(table.source_count(), 1);
        assert_eq!(table.sources(), vec!["cbox"]);
        assert_eq!(table.records("cbox"), Some(&["ImplA".to_string()][..]));
        assert_eq!(table.records("llvm"), None);
    }

    #[test]
    fn push_record_keeps_insertion_order() {
        let mut table = ImplementorTable::new();
        table.push_record("llvm", "impl Drop for GenericValue");
        table.push_record("llvm", "impl Drop for Symbols");

        let records = table.records("llvm").expect("llvm records");
        assert_eq!(records[0], "impl Drop for GenericValue");
        assert_eq!(records[1], "impl Drop for Symbols");
    }

    #[test]
    fn set_records_replaces_existing_entry() {
        let mut table = ImplementorTable::with_source("cbox", vec!["old".to_string()]);
        table.set_records("cbox", vec!["new".to_string()]);

        assert_eq!(table.records("cbox"), Some(&["new".to_string()][..]));
    }

    #[test]
    fn new_table_is_empty_until_a_record_arrives() {
        let mut table = ImplementorTable::new();
        assert!(table.is_empty());
        assert_eq!(table.source_count(), 0);

        table.push_record("cbox", "ImplA");
        assert!(!table.is_empty());
    }

    #[test]
    fn into_iter_yields_owned_entries_in_source_order() {
        let mut table = ImplementorTable::new();
        table.set_records("llvm", vec!["ImplB".to_string()]);
        table.set_records("cbox", vec!["ImplA".to_string()]);

        let entries: Vec<(String, Vec<String>)> = table.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("cbox".to_string(), vec!["ImplA".to_string()]),
                ("llvm".to_string(), vec!["ImplB".to_string()]),
            ]
        );
    }

    #[test]
    fn merge_from_unions_sources_and_replaces_same_source() {
        let mut merged = ImplementorTable::with_source("cbox", vec!["stale".to_string()]);
        let mut incoming = ImplementorTable::with_source("cbox", vec!["fresh".to_string()]);
        incoming.set_records("llvm", vec!["impl Drop for Symbols".to_string()]);

        merged.merge_from(incoming);

        assert_eq!(merged.sources(), vec!["cbox", "llvm"]);
        assert_eq!(merged.records("cbox"), Some(&["fresh".to_string()][..]));
        assert_eq!(
            merged.records("llvm"),
            Some(&["impl Drop for Symbols".to_string()][..])
        );
    }
}
