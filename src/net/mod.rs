//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the raw endpoints, `bearer` holds the outbound
//! authorization header, `session_client` drives the session lifecycle,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod bearer;
pub mod session_client;
pub mod types;
