//! Startup blueprint shape and the mock blueprint generator.
//!
//! A blueprint bundles a refined concept, a prioritized feature list, a
//! competitor analysis and a market analysis. It is stored as opaque JSONB on
//! the project row, so every field deserializes leniently with defaults.

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::labels::define_label_enum;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

define_label_enum! {
    /// Priority label shared by blueprint features, checklist items and
    /// AI tool reports.
    Priority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// The user's idea as submitted to the blueprint generator.
#[derive(Debug, Clone)]
pub struct IdeaBrief {
    pub project_name: String,
    pub description: String,
    pub target_market: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Blueprint {
    pub concept: String,
    pub features: Vec<BlueprintFeature>,
    pub competitors: Vec<Competitor>,
    pub market_analysis: Option<MarketAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintFeature {
    #[serde(default)]
    pub name: String,
    /// Read case-insensitively; missing or unknown labels become `medium`.
    #[serde(default = "default_priority", deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
}

fn default_priority() -> Priority {
    Priority::Medium
}

fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|label| label.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or_else(default_priority))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketAnalysis {
    pub target_audience: String,
    pub market_size: String,
    pub challenges: Vec<String>,
}

impl Blueprint {
    /// Read a stored or client-supplied blueprint field by field.
    ///
    /// A field with the wrong shape falls back to its default without
    /// affecting the others, and malformed entries in `features` or
    /// `competitors` are skipped.
    pub fn from_value_lenient(value: &Value) -> Self {
        Blueprint {
            concept: field(value, "concept"),
            features: entries(value, "features"),
            competitors: entries(value, "competitors"),
            market_analysis: value
                .get("marketAnalysis")
                .filter(|v| v.is_object())
                .map(MarketAnalysis::from_value_lenient),
        }
    }
}

impl MarketAnalysis {
    fn from_value_lenient(value: &Value) -> Self {
        MarketAnalysis {
            target_audience: field(value, "targetAudience"),
            market_size: field(value, "marketSize"),
            challenges: entries(value, "challenges"),
        }
    }
}

fn field<T: DeserializeOwned + Default>(value: &Value, key: &str) -> T {
    value
        .get(key)
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or_default()
}

fn entries<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| T::deserialize(v).ok()).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of leading features woven into the concept sentence.
pub const CONCEPT_FEATURE_COUNT: usize = 3;

/// Mock total addressable market range, in billions of dollars.
pub const MOCK_MARKET_SIZE_BILLIONS: std::ops::Range<f64> = 5.0..15.0;

/// Mock annual growth range, in percent.
pub const MOCK_GROWTH_PERCENT: std::ops::RangeInclusive<u32> = 15..=34;

const MOCK_CHALLENGES: [&str; 4] = [
    "Market saturation in some segments",
    "Customer acquisition costs",
    "Technology adoption barriers",
    "Regulatory compliance requirements",
];

// ---------------------------------------------------------------------------
// Mock generation
// ---------------------------------------------------------------------------

/// Priority of a feature by its position in the user's list.
///
/// The first two features are `high`, the next two `medium`, the rest `low`.
pub fn feature_priority(index: usize) -> Priority {
    match index {
        0 | 1 => Priority::High,
        2 | 3 => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Build a canned blueprint for the idea, randomizing the market figures.
pub fn mock_blueprint<R: Rng + ?Sized>(idea: &IdeaBrief, rng: &mut R) -> Blueprint {
    let lead_features = idea
        .features
        .iter()
        .take(CONCEPT_FEATURE_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let concept = format!(
        "{} is an innovative solution that addresses the needs of {}. {} The platform focuses on \
         delivering value through {}, creating a comprehensive solution for users.",
        idea.project_name, idea.target_market, idea.description, lead_features
    );

    let features = idea
        .features
        .iter()
        .enumerate()
        .map(|(index, name)| BlueprintFeature {
            name: name.clone(),
            priority: feature_priority(index),
            description: format!(
                "Implementation of {name} to enhance user experience and provide core functionality."
            ),
        })
        .collect();

    let market_size = rng.random_range(MOCK_MARKET_SIZE_BILLIONS);
    let growth = rng.random_range(MOCK_GROWTH_PERCENT);

    Blueprint {
        concept,
        features,
        competitors: mock_competitors(),
        market_analysis: Some(MarketAnalysis {
            target_audience: format!(
                "Primary audience consists of {} who are looking for efficient solutions to \
                 streamline their workflows and improve productivity.",
                idea.target_market
            ),
            market_size: format!(
                "${market_size:.1}B total addressable market with {growth}% annual growth rate."
            ),
            challenges: MOCK_CHALLENGES.iter().map(|c| c.to_string()).collect(),
        }),
    }
}

fn mock_competitors() -> Vec<Competitor> {
    let competitor = |name: &str, strengths: [&str; 3], weaknesses: [&str; 3]| Competitor {
        name: name.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        competitor(
            "Market Leader Inc",
            ["Established brand", "Large user base", "Strong funding"],
            ["Outdated technology", "Poor user experience", "High pricing"],
        ),
        competitor(
            "Startup Competitor",
            ["Modern interface", "Agile development", "Competitive pricing"],
            ["Limited features", "Small market share", "Scaling challenges"],
        ),
        competitor(
            "Enterprise Solution",
            ["Enterprise features", "Security compliance", "Integration capabilities"],
            ["Complex setup", "Expensive", "Poor mobile experience"],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
