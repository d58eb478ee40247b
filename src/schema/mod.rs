//! Contact schema
//!
//! The resource's shape and identity rule, plus the relational table that
//! backs it.
//!
//! # Identity
//!
//! - `id` is assigned by the store on creation
//! - `id` is never altered by an update
//! - `id` is never reused after deletion

mod contact;
mod sync;

pub use contact::{Contact, ContactId};
pub use sync::{sync_schema, SyncOutcome, CONTACTS_TABLE, TEXT_COLUMNS};
