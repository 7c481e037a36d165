//! Project lifecycle labels, creation rules and progress.

use crate::error::CoreError;
use crate::labels::define_label_enum;
use crate::validation::RequiredFields;

define_label_enum! {
    /// Project status. Set to `draft` at creation; only ever changed by an
    /// explicit update.
    ProjectStatus {
        Draft => "draft",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

/// Progress contributed by each generated artifact, in percent.
pub const ARTIFACT_PROGRESS_STEP: u8 = 25;

/// Which of the four generated artifacts a project currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub blueprint: bool,
    pub wireframe: bool,
    pub pitch_deck: bool,
    pub checklist: bool,
}

impl GeneratedArtifacts {
    /// 0, 25, 50, 75 or 100.
    pub fn progress_percent(&self) -> u8 {
        [self.blueprint, self.wireframe, self.pitch_deck, self.checklist]
            .into_iter()
            .filter(|present| *present)
            .count() as u8
            * ARTIFACT_PROGRESS_STEP
    }
}

/// Trim feature names and drop blanks and repeats, keeping first-seen order.
pub fn normalize_features(features: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(features.len());
    for feature in features {
        let trimmed = feature.trim();
        if !trimmed.is_empty() && !seen.iter().any(|f| f == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}

/// Validate the fields of a new project and return the normalized feature
/// list.
///
/// At least one feature is required before a project may be created.
pub fn validate_new_project(
    name: &str,
    description: &str,
    target_market: &str,
    main_features: &[String],
) -> Result<Vec<String>, CoreError> {
    RequiredFields::new()
        .text("name", Some(name))
        .text("description", Some(description))
        .text("target_market", Some(target_market))
        .check()?;

    let features = normalize_features(main_features);
    if features.is_empty() {
        return Err(CoreError::Validation(
            "Please add at least one main feature".to_string(),
        ));
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn status_labels_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), *status);
        }
        assert_eq!(ProjectStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "shipped".parse::<ProjectStatus>().unwrap_err();
        assert!(err.to_string().contains("draft, in_progress, completed"));
    }

    #[test]
    fn progress_counts_quarters() {
        assert_eq!(GeneratedArtifacts::default().progress_percent(), 0);
        let half = GeneratedArtifacts {
            blueprint: true,
            pitch_deck: true,
            ..Default::default()
        };
        assert_eq!(half.progress_percent(), 50);
        let all = GeneratedArtifacts {
            blueprint: true,
            wireframe: true,
            pitch_deck: true,
            checklist: true,
        };
        assert_eq!(all.progress_percent(), 100);
    }

    #[test]
    fn features_are_trimmed_and_deduplicated() {
        let features = normalize_features(&strings(&[" Chat ", "Chat", "", "Search"]));
        assert_eq!(features, ["Chat", "Search"]);
    }

    #[test]
    fn empty_feature_list_is_rejected() {
        let result = validate_new_project("Acme", "An idea", "Makers", &[]);
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == "Please add at least one main feature"
        );
    }

    #[test]
    fn blank_only_features_are_rejected() {
        let result = validate_new_project("Acme", "An idea", "Makers", &strings(&["  "]));
        assert!(result.is_err());
    }

    #[test]
    fn missing_text_fields_are_named() {
        let result = validate_new_project("", "An idea", " ", &strings(&["Chat"]));
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == "Missing required fields: name, target_market"
        );
    }
}
