//! Domain types, validation, and pure business logic for CombatID.
//!
//! This crate has no database or HTTP dependencies. Everything that needs
//! stored data takes it as pre-loaded input from the caller.

pub mod document;
pub mod eligibility;
pub mod error;
pub mod fighter;
pub mod pagination;
pub mod roles;
pub mod ruleset;
pub mod suspension;
pub mod types;
