//! Prompt text for the live generator.

use launchpad_core::blueprint::{Blueprint, IdeaBrief};
use launchpad_core::pitch_deck::SLIDE_TITLES;

/// The idea is interpolated once with `format!`, so user text is never
/// rescanned for placeholders.
pub fn blueprint_prompt(idea: &IdeaBrief) -> String {
    format!(
        r#"Create a comprehensive startup blueprint for "{name}".

Description: {description}
Target Market: {market}
Main Features: {features}

Generate a detailed analysis including:
1. Product concept refinement
2. Feature prioritization with high/medium/low priorities
3. 3 main competitors with strengths/weaknesses
4. Market analysis with target audience, market size, and challenges

Return as structured JSON with the following format:
{{
  "concept": "refined product concept",
  "features": [{{"name": "feature", "priority": "high|medium|low", "description": "desc"}}],
  "competitors": [{{"name": "competitor", "strengths": ["strength"], "weaknesses": ["weakness"]}}],
  "marketAnalysis": {{
    "targetAudience": "description",
    "marketSize": "size estimate",
    "challenges": ["challenge1", "challenge2"]
  }}
}}"#,
        name = idea.project_name,
        description = idea.description,
        market = idea.target_market,
        features = idea.features.join(", "),
    )
}

pub fn pitch_deck_prompt(blueprint: &Blueprint, project_name: &str) -> String {
    let blueprint_json =
        serde_json::to_string_pretty(blueprint).unwrap_or_else(|_| "{}".to_string());
    let slides = SLIDE_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {title}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Create a 10-slide pitch deck for "{project_name}" based on this blueprint:
{blueprint_json}

Generate slides for:
{slides}

Return as JSON array with format:
[{{"title": "slide title", "content": "bullet points", "notes": "presenter notes"}}]"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_prompt_interpolates_the_idea() {
        let prompt = blueprint_prompt(&IdeaBrief {
            project_name: "Task Flow".to_string(),
            description: "Plan less".to_string(),
            target_market: "Freelancers".to_string(),
            features: vec!["Boards".to_string(), "Reports".to_string()],
        });
        assert!(prompt.starts_with("Create a comprehensive startup blueprint for \"Task Flow\"."));
        assert!(prompt.contains("Main Features: Boards, Reports"));
        assert!(!prompt.contains('%'));
    }

    #[test]
    fn pitch_deck_prompt_lists_every_slide() {
        let prompt = pitch_deck_prompt(&Blueprint::default(), "Task Flow");
        assert!(prompt.contains("1. Problem Statement"));
        assert!(prompt.contains("10. Ask & Next Steps"));
        assert!(prompt.contains("\"concept\": \"\""));
    }

    #[test]
    fn user_text_is_not_rescanned_for_placeholders() {
        let prompt = blueprint_prompt(&IdeaBrief {
            project_name: "{description} %DESCRIPTION%".to_string(),
            description: "SECRET".to_string(),
            target_market: "Freelancers".to_string(),
            features: vec!["Boards".to_string()],
        });
        assert!(prompt.contains("blueprint for \"{description} %DESCRIPTION%\"."));
        assert_eq!(prompt.matches("SECRET").count(), 1);

        let deck = pitch_deck_prompt(
            &Blueprint {
                concept: "%SLIDES%".to_string(),
                ..Default::default()
            },
            "Acme",
        );
        assert_eq!(deck.matches("1. Problem Statement").count(), 1);
    }
}
