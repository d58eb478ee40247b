//! # Contact Store
//!
//! The single point of contact with the relational engine. Every
//! operation returns an explicit outcome: success, `NotFound`, or
//! `Persistence`.
//!
//! # Concurrency
//!
//! One store handle is shared by every request. `update` is a
//! read-modify-write with no compare-and-swap: two concurrent updates of
//! the same id race and the last write wins in full. A delete racing a
//! read or update of the same id surfaces as `NotFound` for whichever
//! finishes second.

mod config;
mod errors;
mod memory;
mod sqlite;

pub use config::{JournalMode, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryContactStore;
pub use sqlite::SqliteContactStore;

use crate::schema::{Contact, ContactId};

/// CRUD operations on contacts
pub trait ContactStore: Send + Sync {
    /// Insert a new contact, ignoring `contact.id`; returns the stored record
    fn create(&self, contact: &Contact) -> StoreResult<Contact>;

    /// Fetch exactly one contact
    fn read_by_id(&self, id: ContactId) -> StoreResult<Contact>;

    /// Fetch every contact in the store's natural order
    fn read_all(&self) -> StoreResult<Vec<Contact>>;

    /// Overwrite all text fields of an existing contact from `patch`
    fn update(&self, id: ContactId, patch: &Contact) -> StoreResult<Contact>;

    /// Remove a contact permanently
    fn delete(&self, id: ContactId) -> StoreResult<()>;
}
