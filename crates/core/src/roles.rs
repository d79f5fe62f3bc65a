//! Well-known role name constants.
//!
//! Roles arrive in the `role` claim of tokens issued by the identity provider.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_OFFICIAL: &str = "official";
pub const ROLE_VIEWER: &str = "viewer";

/// Whether the role may make commission decisions (review documents, issue
/// suspensions, manage rulesets, override eligibility).
pub fn is_commission_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_OFFICIAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_official_are_commission_roles() {
        assert!(is_commission_role(ROLE_ADMIN));
        assert!(is_commission_role(ROLE_OFFICIAL));
    }

    #[test]
    fn viewer_is_not_commission_role() {
        assert!(!is_commission_role(ROLE_VIEWER));
        assert!(!is_commission_role("Official"));
    }
}
