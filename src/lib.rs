//! contactbook - CRUD contact manager over HTTP on a relational store
//!
//! Layers, leaf-first:
//! - `schema`: the `Contact` record and its backing table
//! - `store`: CRUD against the table, explicit not-found outcomes
//! - `http_server`: request dispatch and error translation
//! - `cli`: configuration and boot

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
