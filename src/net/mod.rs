//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the parent-facing endpoints, `admin` the admin-only ones,
//! `error` normalizes failures, and `types` defines the wire schema.

pub mod admin;
pub mod api;
pub mod error;
pub mod types;
