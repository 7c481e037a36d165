//! Payment-provider webhook.
//!
//! The signature is checked against the raw body before anything is parsed.
//! Once verified, the event is always acknowledged with 200 so the provider
//! does not retry; processing failures are logged instead.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use launchpad_core::billing::{find_plan, status_from_provider, DEFAULT_PLAN};
use launchpad_core::types::DbId;
use launchpad_core::webhook_signature::{self, SIGNATURE_HEADER};
use launchpad_db::repositories::ProfileRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const CHECKOUT_COMPLETED: &str = "checkout.session.completed";
const SUBSCRIPTION_UPDATED: &str = "customer.subscription.updated";
const SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: Value,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// A subscription-relevant action extracted from an event.
#[derive(Debug, PartialEq)]
pub enum SubscriptionChange {
    Activate {
        user_id: DbId,
        plan: String,
        customer: Option<String>,
    },
    SetStatus {
        customer: String,
        provider_status: String,
    },
}

/// Map an event onto the profile change it implies, if any.
pub fn subscription_change(event: &WebhookEvent) -> Option<SubscriptionChange> {
    let object = &event.data.object;
    let text = |value: &Value| value.as_str().map(str::to_string);

    match event.event_type.as_str() {
        CHECKOUT_COMPLETED => {
            let metadata = &object["metadata"];
            let raw_user = metadata["userId"].as_str().unwrap_or_default();
            let Ok(user_id) = raw_user.trim().parse::<DbId>() else {
                tracing::warn!(user_id = raw_user, "Checkout session has no usable userId");
                return None;
            };
            let raw_plan = metadata["plan"].as_str().unwrap_or_default().trim();
            let plan = match find_plan(raw_plan) {
                Some(plan) => plan.key,
                None => {
                    if !raw_plan.is_empty() {
                        tracing::warn!(plan = raw_plan, "Unknown plan in checkout, using default");
                    }
                    DEFAULT_PLAN
                }
            };
            Some(SubscriptionChange::Activate {
                user_id,
                plan: plan.to_string(),
                customer: text(&object["customer"]),
            })
        }
        SUBSCRIPTION_UPDATED | SUBSCRIPTION_DELETED => {
            let Some(customer) = text(&object["customer"]) else {
                tracing::warn!(event_type = %event.event_type, "Subscription event has no customer");
                return None;
            };
            Some(SubscriptionChange::SetStatus {
                customer,
                provider_status: text(&object["status"]).unwrap_or_default(),
            })
        }
        other => {
            tracing::info!(event_type = other, "Ignoring unhandled webhook event");
            None
        }
    }
}

/// POST /api/v1/stripe/webhook
pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<WebhookAck>> {
    let billing = &state.config.billing;
    let header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    webhook_signature::verify(
        &body,
        header,
        &billing.webhook_secret,
        chrono::Utc::now().timestamp(),
        billing.webhook_tolerance_secs,
    )
    .map_err(|e| {
        tracing::warn!(error = %e, "Webhook signature rejected");
        AppError::BadRequest("Webhook signature verification failed".to_string())
    })?;

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid webhook payload: {e}")))?;

    tracing::info!(event_type = %event.event_type, "Webhook received");

    if let Some(change) = subscription_change(&event) {
        apply(&state, change).await;
    }

    Ok(Json(WebhookAck { received: true }))
}

async fn apply(state: &AppState, change: SubscriptionChange) {
    match change {
        SubscriptionChange::Activate {
            user_id,
            plan,
            customer,
        } => match ProfileRepo::activate_subscription(
            &state.pool,
            user_id,
            &plan,
            customer.as_deref(),
        )
        .await
        {
            Ok(true) => tracing::info!(user_id, plan = %plan, "Subscription activated"),
            Ok(false) => tracing::warn!(user_id, "Checkout completed for unknown profile"),
            Err(e) => tracing::error!(user_id, error = %e, "Failed to activate subscription"),
        },
        SubscriptionChange::SetStatus {
            customer,
            provider_status,
        } => {
            let status = status_from_provider(&provider_status);
            match ProfileRepo::set_status_by_customer(&state.pool, &customer, status).await {
                Ok(rows) => tracing::info!(
                    customer = %customer,
                    provider_status = %provider_status,
                    status = status.as_str(),
                    rows,
                    "Subscription status updated",
                ),
                Err(e) => {
                    tracing::error!(customer = %customer, error = %e, "Failed to update subscription status")
                }
            }
        }
    }
}
