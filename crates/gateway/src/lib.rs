//! REST client for the external client-directory backend.
//!
//! The backend exposes plain CRUD under `/api/v1`; this crate wraps it
//! with [`reqwest`] and maps transport failures and non-2xx responses into
//! a small error taxonomy. No authentication header is attached: login is
//! a local-only flag in the application layer.

pub mod api;

pub use api::{ClientApi, GatewayError};
