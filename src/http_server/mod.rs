//! # Contact HTTP Server Module
//!
//! Request dispatch and error translation for the contact API, combined
//! into a single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/contacts/` - List and create contacts
//! - `/contacts/:id` - Read, update and delete one contact

pub mod config;
pub mod contact_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use contact_routes::ContactState;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
