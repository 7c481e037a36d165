//! Repository for the `profiles` table.

use launchpad_core::billing::SubscriptionStatus;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

const COLUMNS: &str = "id, email, full_name, avatar_url, subscription_status, \
    subscription_plan, stripe_customer_id, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert the profile row for `id`, returning it.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, email, full_name, avatar_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply account settings. Only non-`None` fields are written.
    pub async fn update_settings(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Mark a profile's subscription active after a completed checkout.
    ///
    /// The customer id is only overwritten when one is supplied. Returns
    /// `false` if no profile has this id.
    pub async fn activate_subscription(
        pool: &PgPool,
        id: DbId,
        plan: &str,
        stripe_customer_id: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE profiles SET
                subscription_status = $2,
                subscription_plan = $3,
                stripe_customer_id = COALESCE($4, stripe_customer_id),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(SubscriptionStatus::Active.as_str())
        .bind(plan)
        .bind(stripe_customer_id)
        .execute(pool)
        .await?;
        tracing::debug!(
            profile_id = id,
            plan,
            rows = result.rows_affected(),
            "Subscription activation written"
        );
        Ok(result.rows_affected() > 0)
    }

    /// Set the subscription status of every profile linked to a payment
    /// customer. Returns the number of rows touched.
    pub async fn set_status_by_customer(
        pool: &PgPool,
        stripe_customer_id: &str,
        status: SubscriptionStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE profiles SET subscription_status = $2, updated_at = NOW()
             WHERE stripe_customer_id = $1",
        )
        .bind(stripe_customer_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
        tracing::debug!(
            stripe_customer_id,
            status = status.as_str(),
            rows = result.rows_affected(),
            "Subscription status written"
        );
        Ok(result.rows_affected())
    }
}
