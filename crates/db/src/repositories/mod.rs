//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod commission_repo;
pub mod document_repo;
pub mod eligibility_check_repo;
pub mod fighter_repo;
pub mod ruleset_repo;
pub mod suspension_repo;

pub use commission_repo::CommissionRepo;
pub use document_repo::DocumentRepo;
pub use eligibility_check_repo::EligibilityCheckRepo;
pub use fighter_repo::FighterRepo;
pub use ruleset_repo::RulesetRepo;
pub use suspension_repo::SuspensionRepo;
