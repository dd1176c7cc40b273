//! Ordered in-memory table shared by the in-memory repositories.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tramita_core::Entity;

/// Rows keyed by ID with a sequence for new IDs.
pub(crate) struct Table<ID, T> {
    rows: RwLock<BTreeMap<ID, T>>,
    sequence: AtomicI64,
}

impl<ID, T> Table<ID, T>
where
    ID: Ord + Copy + From<i64>,
    T: Clone + Entity<ID>,
{
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    pub(crate) fn get(&self, id: ID) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    pub(crate) fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().values().find(|row| predicate(row)).cloned()
    }

    pub(crate) fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.read().values().any(predicate)
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// Inserts `row` under the next sequence ID unless `clashes` matches a
    /// stored row.
    ///
    /// The check, the ID assignment and the insert happen under one write
    /// lock, so a rejected row never consumes an ID.
    pub(crate) fn insert_unless(
        &self,
        mut row: T,
        assign_id: impl FnOnce(&mut T, ID),
        clashes: impl Fn(&T) -> bool,
    ) -> Result<T, T> {
        let mut rows = self.rows.write();
        if rows.values().any(|existing| clashes(existing)) {
            return Err(row);
        }
        let id = ID::from(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        assign_id(&mut row, id);
        rows.insert(id, row.clone());
        Ok(row)
    }

    /// Replaces the stored row with the same ID.
    ///
    /// Returns `Ok(None)` when no such row exists and `Err` when `clashes`
    /// matches another stored row.
    pub(crate) fn replace_unless(&self, row: T, clashes: impl Fn(&T) -> bool) -> Result<Option<T>, T> {
        let mut rows = self.rows.write();
        let id = *row.id();
        if !rows.contains_key(&id) {
            return Ok(None);
        }
        if rows
            .iter()
            .any(|(other_id, existing)| *other_id != id && clashes(existing))
        {
            return Err(row);
        }
        rows.insert(id, row.clone());
        Ok(Some(row))
    }

    pub(crate) fn remove(&self, id: ID) -> bool {
        self.rows.write().remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.read().len()
    }
}
