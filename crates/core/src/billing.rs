//! Subscription plans and status labels.

use serde::Serialize;

use crate::labels::define_label_enum;

define_label_enum! {
    /// Subscription state mirrored onto `profiles.subscription_status`.
    SubscriptionStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

/// Plan recorded when a completed checkout carries no known plan key.
pub const DEFAULT_PLAN: &str = "pro";

/// A purchasable plan as shown on the billing page.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionPlan {
    pub key: &'static str,
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub price: u32,
    pub features: &'static [&'static str],
}

pub const PLANS: [SubscriptionPlan; 2] = [
    SubscriptionPlan {
        key: "basic",
        name: "Basic",
        price: 29,
        features: &[
            "Up to 3 projects",
            "AI Blueprint Generation",
            "Basic Wireframes",
            "Email Support",
        ],
    },
    SubscriptionPlan {
        key: "pro",
        name: "Pro",
        price: 79,
        features: &[
            "Unlimited projects",
            "Advanced AI Analysis",
            "Premium Wireframes",
            "Pitch Deck Generation",
            "Priority Support",
            "Freelancer Collaboration",
        ],
    },
];

/// Look up a plan by its key.
pub fn find_plan(key: &str) -> Option<&'static SubscriptionPlan> {
    PLANS.iter().find(|plan| plan.key == key)
}

/// Collapse a payment-provider subscription status onto ours.
///
/// Only the provider's `active` counts as active; `trialing`, `past_due`,
/// `canceled` and everything else map to inactive.
pub fn status_from_provider(provider_status: &str) -> SubscriptionStatus {
    if provider_status == "active" {
        SubscriptionStatus::Active
    } else {
        SubscriptionStatus::Inactive
    }
}
