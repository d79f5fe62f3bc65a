//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where the
//!   entity is mutable

pub mod commission;
pub mod document;
pub mod eligibility;
pub mod fighter;
pub mod ruleset;
pub mod suspension;
