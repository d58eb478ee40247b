//! Observability for contactbook
//!
//! Structured JSON-line logging of lifecycle and request events.
//!
//! # Usage
//!
//! ```ignore
//! use contactbook::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ContactCreated, &[("id", "1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Severity an event is logged at
///
/// Fatal events log at FATAL, request events at WARN or ERROR, everything
/// else at INFO.
pub fn severity_for(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::RequestFailed => Severity::Error,
        Event::RequestRejected => Severity::Warn,
        _ => Severity::Info,
    }
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let name = event.as_str();
    match severity_for(event) {
        Severity::Info => Logger::info(name, fields),
        Severity::Warn => Logger::warn(name, fields),
        Severity::Error => Logger::error(name, fields),
        Severity::Fatal => Logger::fatal(name, fields),
    }
}
