//! Integration tests for eligibility check history, overrides, and the
//! fighter's denormalized status.

use chrono::{Days, NaiveDate, Utc};
use sqlx::PgPool;
use combatid_core::eligibility::RequirementResult;
use combatid_db::models::commission::CreateCommission;
use combatid_db::models::eligibility::{CreateEligibilityCheck, OverrideEligibility};
use combatid_db::models::fighter::CreateFighter;
use combatid_db::models::ruleset::CreateRuleset;
use combatid_db::models::suspension::CreateSuspension;
use combatid_db::repositories::{
    CommissionRepo, EligibilityCheckRepo, FighterRepo, RulesetRepo, SuspensionRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a fighter and an empty ruleset, returning `(fighter_id, ruleset_id)`.
async fn seed(pool: &PgPool) -> (i64, i64) {
    let fighter = FighterRepo::create(
        pool,
        &CreateFighter {
            first_name: "Marcus".to_string(),
            last_name: "Okafor".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 11, 20).unwrap(),
            nationality: None,
        },
    )
    .await
    .unwrap();

    let commission = CommissionRepo::create(
        pool,
        &CreateCommission {
            name: "California State Athletic Commission".to_string(),
            jurisdiction: Some("CA".to_string()),
        },
    )
    .await
    .unwrap();

    let ruleset = RulesetRepo::create(
        pool,
        &CreateRuleset {
            commission_id: commission.id,
            discipline: "boxing".to_string(),
            name: "Boxing".to_string(),
            requirements: vec![],
        },
    )
    .await
    .unwrap();

    (fighter.id, ruleset.ruleset.id)
}

fn check(fighter_id: i64, ruleset_id: i64, status: &str, score: i32) -> CreateEligibilityCheck {
    CreateEligibilityCheck {
        fighter_id,
        ruleset_id,
        status: status.to_string(),
        overall_score: score,
        valid_until: None,
        requirements: vec![RequirementResult {
            requirement_name: "Physical".to_string(),
            document_type: "physical_exam".to_string(),
            is_required: true,
            is_fulfilled: score == 100,
            document_id: None,
            document_expiration: None,
            note: None,
        }],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_round_trips_requirement_results(pool: PgPool) {
    let (fighter_id, ruleset_id) = seed(&pool).await;
    let created = EligibilityCheckRepo::create(&pool, &check(fighter_id, ruleset_id, "incomplete", 0))
        .await
        .unwrap();

    assert_eq!(created.status, "incomplete");
    assert!(!created.is_overridden);
    assert_eq!(created.requirements.0.len(), 1);
    assert_eq!(created.requirements.0[0].requirement_name, "Physical");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_is_most_recent_first(pool: PgPool) {
    let (fighter_id, ruleset_id) = seed(&pool).await;
    let first = EligibilityCheckRepo::create(&pool, &check(fighter_id, ruleset_id, "incomplete", 0))
        .await
        .unwrap();
    let second = EligibilityCheckRepo::create(&pool, &check(fighter_id, ruleset_id, "eligible", 100))
        .await
        .unwrap();

    let history = EligibilityCheckRepo::list_for_fighter(&pool, fighter_id, None, None)
        .await
        .unwrap();
    let ids: Vec<_> = history.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let latest = EligibilityCheckRepo::find_latest_for_fighter(&pool, fighter_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, second.id);

    assert_eq!(
        EligibilityCheckRepo::count_for_fighter(&pool, fighter_id)
            .await
            .unwrap(),
        2
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_override_preserves_results(pool: PgPool) {
    let (fighter_id, ruleset_id) = seed(&pool).await;
    let created = EligibilityCheckRepo::create(&pool, &check(fighter_id, ruleset_id, "incomplete", 0))
        .await
        .unwrap();

    let overridden = EligibilityCheckRepo::apply_override(
        &pool,
        created.id,
        &OverrideEligibility {
            status: "eligible".to_string(),
            overridden_by: 7,
            reason: "  Medical board waiver  ".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(overridden.status, "eligible");
    assert!(overridden.is_overridden);
    assert_eq!(overridden.overridden_by, Some(7));
    assert_eq!(overridden.override_reason.as_deref(), Some("Medical board waiver"));
    assert!(overridden.overridden_at.is_some());
    assert_eq!(overridden.overall_score, created.overall_score);
    assert_eq!(overridden.requirements.0, created.requirements.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fighter_status_denormalization(pool: PgPool) {
    let (fighter_id, _) = seed(&pool).await;
    assert!(FighterRepo::update_eligibility_status(&pool, fighter_id, "conditional")
        .await
        .unwrap());

    let fighter = FighterRepo::find_by_id(&pool, fighter_id).await.unwrap().unwrap();
    assert_eq!(fighter.eligibility_status.as_deref(), Some("conditional"));

    assert!(!FighterRepo::update_eligibility_status(&pool, 999_999, "eligible")
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_suspensions_exclude_lifted_and_elapsed(pool: PgPool) {
    let (fighter_id, _) = seed(&pool).await;
    let today = Utc::now().date_naive();
    let long_ago = today.checked_sub_days(Days::new(60)).unwrap();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    let suspension = |end_date| CreateSuspension {
        commission_id: None,
        reason: "Medical suspension".to_string(),
        start_date: long_ago,
        end_date,
    };

    let open_ended = SuspensionRepo::create(&pool, fighter_id, 1, &suspension(None))
        .await
        .unwrap();
    SuspensionRepo::create(&pool, fighter_id, 1, &suspension(Some(yesterday)))
        .await
        .unwrap();
    let ends_today = SuspensionRepo::create(&pool, fighter_id, 1, &suspension(Some(today)))
        .await
        .unwrap();

    let active = SuspensionRepo::list_active_for_fighter(&pool, fighter_id, today)
        .await
        .unwrap();
    let mut ids: Vec<i64> = active.iter().map(|s| s.id).collect();
    ids.sort();
    assert_eq!(ids, vec![open_ended.id, ends_today.id]);

    let lifted = SuspensionRepo::lift(&pool, open_ended.id, 2).await.unwrap().unwrap();
    assert_eq!(lifted.status, "lifted");
    assert!(SuspensionRepo::lift(&pool, open_ended.id, 2).await.unwrap().is_none());

    let active = SuspensionRepo::list_active_for_fighter(&pool, fighter_id, today)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, ends_today.id);
    assert_eq!(
        SuspensionRepo::list_for_fighter(&pool, fighter_id)
            .await
            .unwrap()
            .len(),
        3
    );
}
