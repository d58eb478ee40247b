//! # SQLite Contact Store
//!
//! Durable store over a single `rusqlite::Connection` guarded by a mutex.
//! The table is synchronized with the `Contact` shape when the store is
//! opened.

use std::fs;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::types::Type;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::ContactStore;
use crate::schema::{sync_schema, Contact, ContactId, SyncOutcome};

const SELECT_COLUMNS: &str = "SELECT id, name, phone, address, email, website, notes FROM contacts";

/// SQLite-backed contact store
pub struct SqliteContactStore {
    /// Connection guarded by a mutex
    connection: Mutex<Connection>,

    /// Changes made by the schema sync at open time
    synced: SyncOutcome,
}

impl SqliteContactStore {
    /// Open the database described by `config` and synchronize the schema
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        config.validate().map_err(StoreError::Persistence)?;

        let opened = if config.is_in_memory() {
            Connection::open_in_memory()
        } else {
            ensure_parent_dir(config)?;
            let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
            Connection::open_with_flags(&config.path, flags)
        };
        let connection =
            opened.map_err(|e| StoreError::persistence("failed to connect database", e))?;

        apply_pragmas(&connection, config)?;

        let synced = sync_schema(&connection)
            .map_err(|e| StoreError::persistence("failed to synchronize schema", e))?;

        Ok(Self {
            connection: Mutex::new(connection),
            synced,
        })
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Changes made by the schema sync when this store was opened
    pub fn sync_outcome(&self) -> &SyncOutcome {
        &self.synced
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| StoreError::Persistence("contact store mutex poisoned".to_string()))
    }
}

impl ContactStore for SqliteContactStore {
    fn create(&self, contact: &Contact) -> StoreResult<Contact> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO contacts (name, phone, address, email, website, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                contact.name,
                contact.phone,
                contact.address,
                contact.email,
                contact.website,
                contact.notes,
            ],
        )
        .map_err(|e| StoreError::persistence("error saving contact", e))?;

        let id = ContactId::try_from(conn.last_insert_rowid())
            .map_err(|e| StoreError::persistence("error saving contact", e))?;
        Ok(contact.with_id(id))
    }

    fn read_by_id(&self, id: ContactId) -> StoreResult<Contact> {
        let rowid = to_rowid(id)?;
        let conn = self.lock()?;
        conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            [rowid],
            map_contact_row,
        )
        .optional()
        .map_err(|e| StoreError::persistence(format!("cannot retrieve contact with id '{id}'"), e))?
        .ok_or(StoreError::NotFound(id))
    }

    fn read_all(&self) -> StoreResult<Vec<Contact>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .map_err(|e| StoreError::persistence("cannot list contacts", e))?;
        let contacts = stmt
            .query_map([], map_contact_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| StoreError::persistence("cannot list contacts", e))?;
        Ok(contacts)
    }

    fn update(&self, id: ContactId, patch: &Contact) -> StoreResult<Contact> {
        // Read and write take the lock separately; concurrent updates may
        // interleave between them and the last write wins.
        let mut current = self.read_by_id(id)?;
        current.overwrite_from(patch);

        let rowid = to_rowid(id)?;
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "UPDATE contacts
                 SET name = ?1, phone = ?2, address = ?3, email = ?4, website = ?5, notes = ?6
                 WHERE id = ?7",
                params![
                    current.name,
                    current.phone,
                    current.address,
                    current.email,
                    current.website,
                    current.notes,
                    rowid,
                ],
            )
            .map_err(|e| StoreError::persistence(format!("cannot update contact with id '{id}'"), e))?;

        match changed {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(current),
        }
    }

    fn delete(&self, id: ContactId) -> StoreResult<()> {
        let rowid = to_rowid(id)?;
        let conn = self.lock()?;
        let changed = conn
            .execute("DELETE FROM contacts WHERE id = ?1", [rowid])
            .map_err(|e| StoreError::persistence(format!("cannot delete contact with id '{id}'"), e))?;

        match changed {
            0 => Err(StoreError::NotFound(id)),
            1 => Ok(()),
            n => Err(StoreError::Persistence(format!(
                "cannot delete contact with id '{id}': {n} rows affected"
            ))),
        }
    }
}

/// SQLite rowids are signed; ids beyond `i64::MAX` cannot exist.
fn to_rowid(id: ContactId) -> StoreResult<i64> {
    i64::try_from(id).map_err(|_| StoreError::NotFound(id))
}

fn map_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let rowid: i64 = row.get(0)?;
    let id = ContactId::try_from(rowid)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))?;
    Ok(Contact {
        id,
        name: row.get(1)?,
        phone: row.get(2)?,
        address: row.get(3)?,
        email: row.get(4)?,
        website: row.get(5)?,
        notes: row.get(6)?,
    })
}

fn ensure_parent_dir(config: &StoreConfig) -> StoreResult<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::persistence("failed to create database directory", e))?;
        }
    }
    Ok(())
}

fn apply_pragmas(connection: &Connection, config: &StoreConfig) -> StoreResult<()> {
    if !config.is_in_memory() {
        connection
            .execute_batch(&format!(
                "PRAGMA journal_mode = {};",
                config.journal_mode.pragma_value()
            ))
            .map_err(|e| StoreError::persistence("failed to configure database", e))?;
    }
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|e| StoreError::persistence("failed to configure database", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JournalMode;
    use tempfile::TempDir;

    fn ada() -> Contact {
        Contact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Contact::default()
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        assert!(store.sync_outcome().created_table);

        let first = store.create(&ada().with_id(42)).unwrap();
        let second = store.create(&ada()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        let first = store.create(&ada()).unwrap();
        let second = store.create(&ada()).unwrap();

        store.delete(second.id).unwrap();
        let third = store.create(&ada()).unwrap();

        assert!(third.id > second.id);
        assert!(store.read_by_id(first.id).is_ok());
    }

    #[test]
    fn test_out_of_range_id_is_not_found() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        assert_eq!(
            store.read_by_id(u64::MAX),
            Err(StoreError::NotFound(u64::MAX))
        );
        assert_eq!(store.delete(u64::MAX), Err(StoreError::NotFound(u64::MAX)));
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::with_path(temp_dir.path().join("nested/contacts.db"));

        let created = {
            let store = SqliteContactStore::open(&config).unwrap();
            store.create(&ada()).unwrap()
        };

        let store = SqliteContactStore::open(&config).unwrap();
        assert!(store.sync_outcome().is_noop());
        assert_eq!(store.read_by_id(created.id).unwrap(), created);
    }

    #[test]
    fn test_open_with_rollback_journal() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig {
            journal_mode: JournalMode::Delete,
            ..StoreConfig::with_path(temp_dir.path().join("contacts.db"))
        };

        let store = SqliteContactStore::open(&config).unwrap();
        let mode: String = store
            .lock()
            .unwrap()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode, "delete");

        let created = store.create(&ada()).unwrap();
        assert_eq!(store.read_by_id(created.id).unwrap(), created);
        assert!(!temp_dir.path().join("contacts.db-wal").exists());
    }

    #[test]
    fn test_update_after_delete_is_not_found() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        let created = store.create(&ada()).unwrap();
        store.delete(created.id).unwrap();

        assert_eq!(
            store.update(created.id, &ada()),
            Err(StoreError::NotFound(created.id))
        );
        assert_eq!(store.delete(created.id), Err(StoreError::NotFound(created.id)));
    }
}
