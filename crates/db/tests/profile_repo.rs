//! Integration tests for the profile repository.
//!
//! Require a PostgreSQL `DATABASE_URL`; run with `cargo test -- --ignored`.

use launchpad_core::billing::SubscriptionStatus;
use launchpad_db::models::profile::{CreateProfile, UpdateProfile};
use launchpad_db::repositories::ProfileRepo;
use sqlx::PgPool;

fn new_profile(email: &str) -> CreateProfile {
    CreateProfile {
        email: email.to_string(),
        full_name: Some("Ada Lovelace".to_string()),
        avatar_url: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_bootstrap_health_check(pool: PgPool) {
    launchpad_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_and_update_settings(pool: PgPool) {
    let created = ProfileRepo::create(&pool, 1, &new_profile("ada@example.com"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(created.subscription_status.is_none());

    let update = UpdateProfile {
        avatar_url: Some("https://cdn.example.com/ada.png".to_string()),
        ..Default::default()
    };
    let updated = ProfileRepo::update_settings(&pool, 1, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(
        updated.avatar_url.as_deref(),
        Some("https://cdn.example.com/ada.png")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_subscription_lifecycle(pool: PgPool) {
    ProfileRepo::create(&pool, 5, &new_profile("grace@example.com"))
        .await
        .unwrap();

    let activated = ProfileRepo::activate_subscription(&pool, 5, "basic", Some("cus_123"))
        .await
        .unwrap();
    assert!(activated);

    let profile = ProfileRepo::find_by_id(&pool, 5).await.unwrap().unwrap();
    assert_eq!(profile.subscription_status.as_deref(), Some("active"));
    assert_eq!(profile.subscription_plan.as_deref(), Some("basic"));
    assert_eq!(profile.stripe_customer_id.as_deref(), Some("cus_123"));

    let touched =
        ProfileRepo::set_status_by_customer(&pool, "cus_123", SubscriptionStatus::Inactive)
            .await
            .unwrap();
    assert_eq!(touched, 1);

    let profile = ProfileRepo::find_by_id(&pool, 5).await.unwrap().unwrap();
    assert_eq!(profile.subscription_status.as_deref(), Some("inactive"));
    assert_eq!(profile.stripe_customer_id.as_deref(), Some("cus_123"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_activate_unknown_profile_touches_nothing(pool: PgPool) {
    let activated = ProfileRepo::activate_subscription(&pool, 999, "pro", None)
        .await
        .unwrap();
    assert!(!activated);
}
