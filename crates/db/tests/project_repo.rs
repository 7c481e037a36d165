//! Integration tests for the project repository.
//!
//! Require a PostgreSQL `DATABASE_URL`; run with `cargo test -- --ignored`.

use launchpad_db::models::project::{CreateProject, UpdateProject};
use launchpad_db::repositories::ProjectRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: "A tool for teams".to_string(),
        target_market: "Small agencies".to_string(),
        main_features: vec!["Boards".to_string(), "Reports".to_string()],
    }
}

const OWNER_A: i64 = 101;
const OWNER_B: i64 = 202;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_starts_as_draft(pool: PgPool) {
    let project = ProjectRepo::create(&pool, OWNER_A, &new_project("Task Flow"))
        .await
        .unwrap();
    assert_eq!(project.status, "draft");
    assert_eq!(project.user_id, OWNER_A);
    assert_eq!(project.main_features, ["Boards", "Reports"]);
    assert!(project.blueprint.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_is_owner_scoped_newest_first(pool: PgPool) {
    let first = ProjectRepo::create(&pool, OWNER_A, &new_project("First"))
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, OWNER_A, &new_project("Second"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, OWNER_B, &new_project("Other"))
        .await
        .unwrap();

    let listed = ProjectRepo::list_by_owner(&pool, OWNER_A).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, [second.id, first.id]);
    assert!(listed.iter().all(|p| p.user_id == OWNER_A));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_other_owner_cannot_read_update_or_delete(pool: PgPool) {
    let project = ProjectRepo::create(&pool, OWNER_A, &new_project("Private"))
        .await
        .unwrap();

    let found = ProjectRepo::find_by_id_for_owner(&pool, project.id, OWNER_B)
        .await
        .unwrap();
    assert!(found.is_none());

    let update = UpdateProject {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, OWNER_B, &update)
        .await
        .unwrap();
    assert!(updated.is_none());

    assert!(!ProjectRepo::delete(&pool, project.id, OWNER_B).await.unwrap());
    assert!(ProjectRepo::delete(&pool, project.id, OWNER_A).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, OWNER_A, &new_project("Partial"))
        .await
        .unwrap();

    let update = UpdateProject {
        blueprint: Some(json!({"concept": "A focused tool"})),
        status: Some("in_progress".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, OWNER_A, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Partial");
    assert_eq!(updated.status, "in_progress");
    assert_eq!(updated.blueprint, Some(json!({"concept": "A focused tool"})));
    assert!(updated.updated_at >= project.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_invalid_status_rejected_by_schema(pool: PgPool) {
    let project = ProjectRepo::create(&pool, OWNER_A, &new_project("Checked"))
        .await
        .unwrap();
    let update = UpdateProject {
        status: Some("shipped".to_string()),
        ..Default::default()
    };
    let result = ProjectRepo::update(&pool, project.id, OWNER_A, &update).await;
    assert!(result.is_err(), "CHECK constraint should reject unknown status");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_set_checklist_overwrites(pool: PgPool) {
    let project = ProjectRepo::create(&pool, OWNER_A, &new_project("Launch"))
        .await
        .unwrap();
    let checklist = json!([{"id": "task-0", "task": "Ship", "category": "Launch",
        "priority": "high", "completed": true}]);

    let stored = ProjectRepo::set_checklist(&pool, project.id, OWNER_A, &checklist)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.checklist, Some(checklist));
}
