//! Canned reports for the AI tools page.
//!
//! Every tool returns a tagged report (`"type": ...`). Scores are randomized
//! within a fixed band; everything else is static copy.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::blueprint::Priority;

/// Band for the idea-validator and pitch-optimizer scores.
pub const SCORE_RANGE: RangeInclusive<u8> = 7..=10;

/// Mock market size range, in billions of dollars.
const MARKET_SIZE_BILLIONS: std::ops::Range<f64> = 1.0..11.0;

/// Mock annual growth range, in percent.
const MARKET_GROWTH_PERCENT: RangeInclusive<u32> = 10..=29;

/// Known tool identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    IdeaValidator,
    MarketAnalyzer,
    FeaturePrioritizer,
    CompetitorResearch,
    PersonaGenerator,
    PitchOptimizer,
}

impl ToolId {
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "idea-validator" => Some(Self::IdeaValidator),
            "market-analyzer" => Some(Self::MarketAnalyzer),
            "feature-prioritizer" => Some(Self::FeaturePrioritizer),
            "competitor-research" => Some(Self::CompetitorResearch),
            "persona-generator" => Some(Self::PersonaGenerator),
            "pitch-optimizer" => Some(Self::PitchOptimizer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ToolReport {
    Validation {
        score: u8,
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        recommendations: Vec<String>,
    },
    Market {
        market_size: String,
        growth: String,
        segments: Vec<MarketSegment>,
        opportunities: Vec<String>,
    },
    Features {
        features: Vec<RankedFeature>,
    },
    Competitors {
        competitors: Vec<CompetitorProfile>,
    },
    Personas {
        personas: Vec<Persona>,
    },
    Pitch {
        score: u8,
        improvements: Vec<String>,
        strengths: Vec<String>,
    },
    Generic {
        message: String,
        insights: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSegment {
    pub name: String,
    pub size: String,
    pub growth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    pub name: String,
    pub priority: Priority,
    pub impact: u8,
    pub effort: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub name: String,
    pub market_share: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub age: String,
    pub role: String,
    pub goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub behavior: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Run a tool by id. Unknown ids produce a generic report naming the id.
pub fn run_tool<R: Rng + ?Sized>(tool_id: &str, rng: &mut R) -> ToolReport {
    match ToolId::parse(tool_id) {
        Some(ToolId::IdeaValidator) => ToolReport::Validation {
            score: rng.random_range(SCORE_RANGE),
            strengths: owned(&[
                "Clear problem identification",
                "Large target market",
                "Scalable solution",
                "Strong value proposition",
            ]),
            weaknesses: owned(&[
                "High competition",
                "Technical complexity",
                "Customer acquisition challenges",
            ]),
            recommendations: owned(&[
                "Focus on a specific niche first",
                "Build MVP to validate assumptions",
                "Research competitor pricing strategies",
                "Conduct user interviews",
            ]),
        },
        Some(ToolId::MarketAnalyzer) => {
            let size = rng.random_range(MARKET_SIZE_BILLIONS);
            let growth = rng.random_range(MARKET_GROWTH_PERCENT);
            let segment = |name: &str, size: &str, growth: &str| MarketSegment {
                name: name.to_string(),
                size: size.to_string(),
                growth: growth.to_string(),
            };
            ToolReport::Market {
                market_size: format!("${size:.1}B"),
                growth: format!("{growth}% annually"),
                segments: vec![
                    segment("Small Business", "40%", "12%"),
                    segment("Enterprise", "35%", "18%"),
                    segment("Startups", "25%", "20%"),
                ],
                opportunities: owned(&[
                    "Underserved SMB segment",
                    "Growing remote work trend",
                    "Increasing automation demand",
                    "Mobile-first approach gap",
                ]),
            }
        }
        Some(ToolId::FeaturePrioritizer) => {
            let ranked = |name: &str, priority, impact, effort| RankedFeature {
                name: name.to_string(),
                priority,
                impact,
                effort,
            };
            ToolReport::Features {
                features: vec![
                    ranked("User Authentication", Priority::High, 9, 6),
                    ranked("Core Dashboard", Priority::High, 8, 7),
                    ranked("Data Analytics", Priority::Medium, 7, 8),
                    ranked("Mobile App", Priority::Low, 6, 9),
                    ranked("API Integration", Priority::Medium, 8, 5),
                ],
            }
        }
        Some(ToolId::CompetitorResearch) => ToolReport::Competitors {
            competitors: vec![
                CompetitorProfile {
                    name: "Market Leader Co".to_string(),
                    market_share: "35%".to_string(),
                    strengths: owned(&["Brand recognition", "Large user base", "Funding"]),
                    weaknesses: owned(&["Outdated UI", "Poor customer service", "High pricing"]),
                },
                CompetitorProfile {
                    name: "Startup Rival".to_string(),
                    market_share: "15%".to_string(),
                    strengths: owned(&["Modern design", "Fast growth", "Innovation"]),
                    weaknesses: owned(&["Limited features", "Small team", "Funding constraints"]),
                },
            ],
        },
        Some(ToolId::PersonaGenerator) => ToolReport::Personas {
            personas: vec![
                Persona {
                    name: "Sarah the Entrepreneur".to_string(),
                    age: "28-35".to_string(),
                    role: "Startup Founder".to_string(),
                    goals: owned(&["Scale business", "Improve efficiency", "Reduce costs"]),
                    pain_points: owned(&[
                        "Time management",
                        "Resource constraints",
                        "Market uncertainty",
                    ]),
                    behavior: "Tech-savvy, data-driven, always learning".to_string(),
                },
                Persona {
                    name: "Mike the Manager".to_string(),
                    age: "35-45".to_string(),
                    role: "Operations Manager".to_string(),
                    goals: owned(&[
                        "Streamline processes",
                        "Team productivity",
                        "ROI improvement",
                    ]),
                    pain_points: owned(&["Manual processes", "Team coordination", "Reporting"]),
                    behavior: "Process-oriented, collaborative, results-focused".to_string(),
                },
            ],
        },
        Some(ToolId::PitchOptimizer) => ToolReport::Pitch {
            score: rng.random_range(SCORE_RANGE),
            improvements: owned(&[
                "Strengthen problem statement with specific data",
                "Add more compelling market size statistics",
                "Include customer testimonials or case studies",
                "Clarify revenue model and pricing strategy",
                "Add competitive differentiation slide",
            ]),
            strengths: owned(&[
                "Clear value proposition",
                "Strong team background",
                "Realistic financial projections",
            ]),
        },
        None => ToolReport::Generic {
            message: format!("{tool_id} analysis completed successfully!"),
            insights: owned(&[
                "Key insight 1 based on your input",
                "Key insight 2 with actionable recommendations",
                "Key insight 3 for next steps",
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn validator_score_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            match run_tool("idea-validator", &mut rng) {
                ToolReport::Validation { score, .. } => assert!(SCORE_RANGE.contains(&score)),
                other => panic!("unexpected report {other:?}"),
            }
        }
    }

    #[test]
    fn pitch_score_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            match run_tool("pitch-optimizer", &mut rng) {
                ToolReport::Pitch { score, .. } => assert!((7..=10).contains(&score)),
                other => panic!("unexpected report {other:?}"),
            }
        }
    }

    #[test]
    fn reports_are_tagged_with_camel_case_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let market = serde_json::to_value(run_tool("market-analyzer", &mut rng)).unwrap();
        assert_eq!(market["type"], "market");
        assert!(market["marketSize"].as_str().unwrap().starts_with('$'));
        assert_eq!(market["segments"].as_array().unwrap().len(), 3);

        let personas = serde_json::to_value(run_tool("persona-generator", &mut rng)).unwrap();
        assert_eq!(personas["type"], "personas");
        assert!(personas["personas"][0]["painPoints"].is_array());
    }

    #[test]
    fn unknown_tool_is_generic() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = serde_json::to_value(run_tool("swot-matrix", &mut rng)).unwrap();
        assert_eq!(report["type"], "generic");
        assert_eq!(report["message"], "swot-matrix analysis completed successfully!");
    }
}
