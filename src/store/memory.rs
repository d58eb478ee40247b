//! # In-Memory Contact Store
//!
//! Same contract as the SQLite store, kept in an ordered map. Used for
//! tests and anywhere a throwaway store is enough.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::ContactStore;
use crate::schema::{Contact, ContactId};

/// In-memory contact store
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    table: RwLock<ContactTable>,
}

#[derive(Debug, Default)]
struct ContactTable {
    /// Rows by id
    rows: BTreeMap<ContactId, Contact>,

    /// Last id handed out; never decreases
    last_id: ContactId,
}

impl MemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, ContactTable>> {
        self.table
            .read()
            .map_err(|_| StoreError::Persistence("contact table lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, ContactTable>> {
        self.table
            .write()
            .map_err(|_| StoreError::Persistence("contact table lock poisoned".to_string()))
    }
}

impl ContactStore for MemoryContactStore {
    fn create(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut table = self.write()?;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Persistence("error saving contact: id space exhausted".to_string()))?;
        table.last_id = id;

        let stored = contact.with_id(id);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn read_by_id(&self, id: ContactId) -> StoreResult<Contact> {
        self.read()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn read_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn update(&self, id: ContactId, patch: &Contact) -> StoreResult<Contact> {
        let mut current = self.read_by_id(id)?;
        current.overwrite_from(patch);

        let mut table = self.write()?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = current.clone();
                Ok(current)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn delete(&self, id: ContactId) -> StoreResult<()> {
        self.write()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = MemoryContactStore::new();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_ids_keep_growing_after_delete() {
        let store = MemoryContactStore::new();
        let a = store.create(&Contact::default()).unwrap();
        store.delete(a.id).unwrap();
        let b = store.create(&Contact::default()).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_update_ignores_patch_id() {
        let store = MemoryContactStore::new();
        let a = store.create(&Contact::default()).unwrap();
        let patch = Contact {
            id: 500,
            name: "Grace".to_string(),
            ..Contact::default()
        };

        let updated = store.update(a.id, &patch).unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Grace");
        assert_eq!(store.read_by_id(500), Err(StoreError::NotFound(500)));
    }
}
