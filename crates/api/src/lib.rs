//! CombatID API server library.
//!
//! Exposes config, state, error handling, auth extractors, handlers, and
//! routes so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
