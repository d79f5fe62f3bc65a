//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller identified by a Bearer token.
//! - [`rbac::RequireOfficial`] -- requires `official` or `admin`.
//! - [`rbac::RequireAdmin`] -- requires `admin`.

pub mod auth;
pub mod rbac;
