//! Pitch deck slides: the mock ten-slide deck and the plain-text export.

use serde::{Deserialize, Serialize};

use crate::blueprint::Blueprint;

/// One slide as stored in `projects.pitch_deck`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchDeckSlide {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub notes: String,
}

/// Slide titles, in presentation order.
pub const SLIDE_TITLES: [&str; 10] = [
    "Problem Statement",
    "Solution",
    "Market Opportunity",
    "Product Features",
    "Competition Analysis",
    "Business Model",
    "Go-to-Market Strategy",
    "Financial Projections",
    "Team & Roadmap",
    "Ask & Next Steps",
];

fn slide(title: &str, content: String, notes: &str) -> PitchDeckSlide {
    PitchDeckSlide {
        title: title.to_string(),
        content,
        notes: notes.to_string(),
    }
}

fn bullets(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Build the canned ten-slide deck, interpolating whatever the blueprint
/// provides and falling back to generic bullets where it is silent.
pub fn mock_pitch_deck(blueprint: &Blueprint, project_name: &str) -> Vec<PitchDeckSlide> {
    let market = blueprint.market_analysis.clone().unwrap_or_default();
    let audience = non_empty(&market.target_audience, "target market");
    let market_size = non_empty(&market.market_size, "Large market size");

    let features = if blueprint.features.is_empty() {
        "• Core features overview".to_string()
    } else {
        blueprint
            .features
            .iter()
            .map(|f| format!("• {}: {}", f.name, f.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let competition = if blueprint.competitors.is_empty() {
        "• Competitive landscape overview".to_string()
    } else {
        blueprint
            .competitors
            .iter()
            .map(|c| {
                let gap = c.weaknesses.first().map_or("Market gap", String::as_str);
                format!("• {}: {gap}", c.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    vec![
        slide(
            SLIDE_TITLES[0],
            format!(
                "• Current market challenges in {audience}\n{}",
                bullets(&[
                    "Existing solutions are inadequate",
                    "Opportunity for innovation",
                    "Market demand validation",
                ])
            ),
            "Start with a compelling problem that resonates with your audience",
        ),
        slide(
            SLIDE_TITLES[1],
            format!(
                "• {project_name} addresses these challenges\n{}",
                bullets(&[
                    "Unique value proposition",
                    "Key differentiators",
                    "Technology advantages",
                ])
            ),
            "Clearly articulate how your solution solves the problem",
        ),
        slide(
            SLIDE_TITLES[2],
            format!(
                "• {market_size}\n{}",
                bullets(&[
                    "Growing market trends",
                    "Target customer segments",
                    "Revenue potential",
                ])
            ),
            "Show the size and growth potential of your market",
        ),
        slide(
            SLIDE_TITLES[3],
            features,
            "Highlight your most important features and benefits",
        ),
        slide(
            SLIDE_TITLES[4],
            competition,
            "Show how you differentiate from existing solutions",
        ),
        slide(
            SLIDE_TITLES[5],
            bullets(&[
                "Revenue streams",
                "Pricing strategy",
                "Customer acquisition",
                "Scalability plan",
            ]),
            "Explain how you will make money and scale",
        ),
        slide(
            SLIDE_TITLES[6],
            bullets(&[
                "Launch strategy",
                "Marketing channels",
                "Partnership opportunities",
                "Customer acquisition plan",
            ]),
            "Detail your plan to reach customers and grow",
        ),
        slide(
            SLIDE_TITLES[7],
            bullets(&[
                "3-year revenue forecast",
                "Key metrics and KPIs",
                "Funding requirements",
                "Break-even analysis",
            ]),
            "Present realistic financial projections and metrics",
        ),
        slide(
            SLIDE_TITLES[8],
            bullets(&[
                "Founding team expertise",
                "Key hires planned",
                "Product roadmap",
                "Milestone timeline",
            ]),
            "Show you have the right team and clear execution plan",
        ),
        slide(
            SLIDE_TITLES[9],
            bullets(&[
                "Funding amount requested",
                "Use of funds",
                "Expected outcomes",
                "Timeline to next milestone",
            ]),
            "Clear ask and what you will achieve with investment",
        ),
    ]
}

/// Render a deck as the downloadable plain-text handout.
pub fn export_text(slides: &[PitchDeckSlide]) -> String {
    slides
        .iter()
        .map(|s| format!("{}\n\n{}\n\n---\n\n", s.title, s.content))
        .collect()
}

/// Attachment filename for an exported deck.
pub fn export_filename(project_name: &str) -> String {
    format!("{project_name}-pitch-deck.txt")
}
