//! Networking modules for the remote KokMaisa REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the credential store, `token` persists the bearer token,
//! `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod token;
pub mod types;
