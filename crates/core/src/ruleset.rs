//! Ruleset disciplines, requirement conditions, and validation.
//!
//! A ruleset is the list of document requirements a commission enforces for
//! one discipline. Rulesets are versioned append-only: changing requirements
//! creates a new version and deactivates the previous one.

use serde::{Deserialize, Serialize};

use crate::document::validate_document_type;

// ---------------------------------------------------------------------------
// Disciplines
// ---------------------------------------------------------------------------

pub const DISCIPLINE_MMA: &str = "mma";
pub const DISCIPLINE_BOXING: &str = "boxing";
pub const DISCIPLINE_KICKBOXING: &str = "kickboxing";
pub const DISCIPLINE_MUAY_THAI: &str = "muay_thai";
pub const DISCIPLINE_BARE_KNUCKLE: &str = "bare_knuckle";

/// All valid disciplines.
pub const VALID_DISCIPLINES: &[&str] = &[
    DISCIPLINE_MMA,
    DISCIPLINE_BOXING,
    DISCIPLINE_KICKBOXING,
    DISCIPLINE_MUAY_THAI,
    DISCIPLINE_BARE_KNUCKLE,
];

/// Maximum number of requirements in a single ruleset version.
pub const MAX_REQUIREMENTS: usize = 100;

/// Maximum length of a ruleset or requirement name.
pub const MAX_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Requirement conditions
// ---------------------------------------------------------------------------

/// A machine-evaluable applicability condition on a requirement.
///
/// Stored as JSON text, e.g. `{"age_over": 35}` or `{"age_under": 18}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCondition {
    /// Applies only when the fighter's age is strictly greater than the value.
    AgeOver(i32),
    /// Applies only when the fighter's age is strictly less than the value.
    AgeUnder(i32),
}

impl RequirementCondition {
    /// Whether the requirement applies to a fighter of the given age.
    pub fn applies_to_age(&self, age: i32) -> bool {
        match *self {
            Self::AgeOver(threshold) => age > threshold,
            Self::AgeUnder(threshold) => age < threshold,
        }
    }
}

/// Parse a stored condition expression.
pub fn parse_condition(text: &str) -> Result<RequirementCondition, String> {
    serde_json::from_str(text).map_err(|e| format!("Invalid requirement condition: {e}"))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a discipline is one of the known values.
pub fn validate_discipline(discipline: &str) -> Result<(), String> {
    if VALID_DISCIPLINES.contains(&discipline) {
        Ok(())
    } else {
        Err(format!(
            "Invalid discipline '{discipline}'. Must be one of: {}",
            VALID_DISCIPLINES.join(", ")
        ))
    }
}

/// Validate a ruleset display name.
pub fn validate_ruleset_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Ruleset name must not be empty".to_string());
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "Ruleset name exceeds maximum length of {MAX_NAME_LENGTH}"
        ));
    }
    Ok(())
}

/// Validate a single requirement definition before it is stored.
///
/// `index` is the requirement's position in the submitted list and is used
/// only to make error messages point at the offending entry.
pub fn validate_requirement(
    index: usize,
    name: &str,
    document_type: &str,
    expiration_days: Option<i32>,
    condition: Option<&str>,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("requirements[{index}].name must not be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "requirements[{index}].name exceeds maximum length of {MAX_NAME_LENGTH}"
        ));
    }
    validate_document_type(document_type).map_err(|e| format!("requirements[{index}]: {e}"))?;
    if let Some(days) = expiration_days {
        if days <= 0 {
            return Err(format!(
                "requirements[{index}].expiration_days must be positive, got {days}"
            ));
        }
    }
    if let Some(text) = condition {
        parse_condition(text).map_err(|e| format!("requirements[{index}]: {e}"))?;
    }
    Ok(())
}

/// Validate the size of a requirement list.
pub fn validate_requirement_count(count: usize) -> Result<(), String> {
    if count > MAX_REQUIREMENTS {
        return Err(format!(
            "Too many requirements: {count} (max {MAX_REQUIREMENTS})"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- conditions -----------------------------------------------------------

    #[test]
    fn parse_age_over() {
        assert_eq!(
            parse_condition(r#"{"age_over": 35}"#).unwrap(),
            RequirementCondition::AgeOver(35)
        );
    }

    #[test]
    fn parse_age_under() {
        assert_eq!(
            parse_condition(r#"{"age_under": 18}"#).unwrap(),
            RequirementCondition::AgeUnder(18)
        );
    }

    #[test]
    fn parse_garbage_fails() {
        assert_matches!(parse_condition("age > 35"), Err(_));
        assert_matches!(parse_condition(r#"{"age_over": "old"}"#), Err(_));
        assert_matches!(parse_condition(r#"{"weight_over": 70}"#), Err(_));
        assert_matches!(parse_condition("{}"), Err(_));
    }

    #[test]
    fn age_over_is_strict() {
        let cond = RequirementCondition::AgeOver(35);
        assert!(!cond.applies_to_age(35));
        assert!(cond.applies_to_age(36));
    }

    #[test]
    fn age_under_is_strict() {
        let cond = RequirementCondition::AgeUnder(18);
        assert!(cond.applies_to_age(17));
        assert!(!cond.applies_to_age(18));
    }

    // -- validation -----------------------------------------------------------

    #[test]
    fn valid_disciplines_accepted() {
        for d in VALID_DISCIPLINES {
            assert!(validate_discipline(d).is_ok());
        }
    }

    #[test]
    fn unknown_discipline_rejected() {
        assert!(validate_discipline("sumo")
            .unwrap_err()
            .contains("Invalid discipline"));
    }

    #[test]
    fn blank_ruleset_name_rejected() {
        assert!(validate_ruleset_name("").is_err());
        assert!(validate_ruleset_name("NSAC MMA 2026").is_ok());
    }

    #[test]
    fn valid_requirement_accepted() {
        assert!(validate_requirement(
            0,
            "Annual physical",
            "physical_exam",
            Some(365),
            Some(r#"{"age_over": 35}"#)
        )
        .is_ok());
    }

    #[test]
    fn requirement_with_bad_type_points_at_index() {
        let err = validate_requirement(2, "Scan", "xray", None, None).unwrap_err();
        assert!(err.starts_with("requirements[2]"));
    }

    #[test]
    fn requirement_with_non_positive_window_rejected() {
        assert!(validate_requirement(0, "Physical", "physical_exam", Some(0), None).is_err());
        assert!(validate_requirement(0, "Physical", "physical_exam", Some(-30), None).is_err());
    }

    #[test]
    fn requirement_with_malformed_condition_rejected() {
        let err =
            validate_requirement(1, "MRI", "mri_scan", None, Some("{not json")).unwrap_err();
        assert!(err.contains("Invalid requirement condition"));
    }

    #[test]
    fn requirement_count_capped() {
        assert!(validate_requirement_count(MAX_REQUIREMENTS).is_ok());
        assert!(validate_requirement_count(MAX_REQUIREMENTS + 1).is_err());
        assert!(validate_requirement_count(0).is_ok());
    }
}
