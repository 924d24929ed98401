//! Frozen, sorted OID store backing one emulated device.

use crate::error::{Error, Result};
use crate::oid::Oid;
use crate::value::Value;
use crate::varbind::VarBind;

/// Immutable OID-to-value map with exact and next lookups.
///
/// Built once from a capture's records, then only read. Entries live in a
/// boxed slice sorted by [`Oid`] ordering (arc-by-arc numeric), and both
/// lookups are a binary search, so a store is safe to share across tasks
/// without locking.
///
/// # Example
///
/// ```rust
/// use snmposter::handler::OidStore;
/// use snmposter::{Oid, Value, VarBind, oid};
///
/// let store = OidStore::build([
///     VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::from("router1")),
///     VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::TimeTicks(12345)),
/// ])
/// .unwrap();
///
/// // A full walk starts from the empty OID.
/// let (first, _) = store.get_next(&Oid::empty()).unwrap();
/// assert_eq!(first, &oid!(1, 3, 6, 1, 2, 1, 1, 3, 0));
/// assert_eq!(store.get(&oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)), Some(&Value::from("router1")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OidStore {
    /// Sorted by OID, no duplicates.
    entries: Box<[(Oid, Value)]>,
}

impl OidStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records in any order.
    ///
    /// Fails with [`Error::DuplicateIdentifier`] if two records share an OID;
    /// no partial store is returned.
    pub fn build(records: impl IntoIterator<Item = VarBind>) -> Result<Self> {
        Self::build_unique(records).map_err(|oid| Error::DuplicateIdentifier { oid })
    }

    /// Like [`build`](Self::build), but hands back the first repeated OID.
    pub(crate) fn build_unique(
        records: impl IntoIterator<Item = VarBind>,
    ) -> std::result::Result<Self, Oid> {
        let mut entries: Vec<(Oid, Value)> = records
            .into_iter()
            .map(|vb| (vb.oid, vb.value))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(pair[0].0.clone());
        }

        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    /// Get the value for an exact OID match.
    pub fn get(&self, oid: &Oid) -> Option<&Value> {
        match self.entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => Some(&self.entries[idx].1),
            Err(_) => None,
        }
    }

    /// Get the entry with the smallest OID strictly greater than `oid`.
    ///
    /// Returns `None` when the walk has reached the end of the tree.
    pub fn get_next(&self, oid: &Oid) -> Option<(&Oid, &Value)> {
        let idx = match self.entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            // Exact match, return the next one
            Ok(idx) => idx + 1,
            // No exact match, return the entry at insertion point
            Err(idx) => idx,
        };
        self.entries.get(idx).map(|(o, v)| (o, v))
    }

    /// Get the first entry in OID order.
    pub fn first(&self) -> Option<(&Oid, &Value)> {
        self.entries.first().map(|(o, v)| (o, v))
    }

    /// Get the number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all OID-value pairs in ascending OID order.
    pub fn iter(&self) -> impl Iterator<Item = (&Oid, &Value)> {
        self.entries.iter().map(|(o, v)| (o, v))
    }

    /// All records in ascending OID order.
    pub fn all(&self) -> Vec<VarBind> {
        self.entries
            .iter()
            .map(|(o, v)| VarBind::new(o.clone(), v.clone()))
            .collect()
    }

    /// Iterate over the entries at or below `prefix`.
    ///
    /// An empty prefix walks the whole store.
    pub fn subtree<'a>(&'a self, prefix: &'a Oid) -> impl Iterator<Item = (&'a Oid, &'a Value)> {
        let start = self.entries.partition_point(|(o, _)| o < prefix);
        self.entries[start..]
            .iter()
            .take_while(move |(o, _)| o.starts_with(prefix))
            .map(|(o, v)| (o, v))
    }
}
