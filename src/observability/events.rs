//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in contactbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Contacts table synchronized with the schema
    SchemaSynced,
    /// Server bound and ready for requests
    Serving,
    /// Startup failed; the process exits
    BootFailed,

    // Contact writes
    /// Contact created
    ContactCreated,
    /// Contact overwritten
    ContactUpdated,
    /// Contact removed
    ContactDeleted,

    // Request failures
    /// Request refused: bad input or unknown id
    RequestRejected,
    /// Request failed inside the store
    RequestFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaSynced => "SCHEMA_SYNCED",
            Event::Serving => "SERVING",
            Event::BootFailed => "BOOT_FAILED",
            Event::ContactCreated => "CONTACT_CREATED",
            Event::ContactUpdated => "CONTACT_UPDATED",
            Event::ContactDeleted => "CONTACT_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns whether this event terminates the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
