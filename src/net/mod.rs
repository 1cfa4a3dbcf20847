//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing and error classification, `auth` is the
//! authentication collaborator, `api` holds the per-endpoint service
//! calls, and `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod http;
pub mod types;
