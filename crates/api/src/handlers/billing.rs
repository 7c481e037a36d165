use axum::Json;
use launchpad_core::billing::{SubscriptionPlan, PLANS};

use crate::response::DataResponse;

/// GET /api/v1/billing/plans
pub async fn plans() -> Json<DataResponse<&'static [SubscriptionPlan]>> {
    Json(DataResponse { data: &PLANS })
}
