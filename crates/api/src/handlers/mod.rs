pub mod ai_tools;
pub mod billing;
pub mod checklist;
pub mod generation;
pub mod mvp;
pub mod pitch_deck;
pub mod profile;
pub mod project;
pub mod webhook;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderName;

/// `Content-Type` and `Content-Disposition` headers for a file download.
///
/// Characters that cannot appear in a quoted header filename are replaced
/// with `_`.
pub(crate) fn attachment_headers(
    content_type: &'static str,
    filename: &str,
) -> [(HeaderName, String); 2] {
    let safe: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    [
        (CONTENT_TYPE, content_type.to_string()),
        (CONTENT_DISPOSITION, format!("attachment; filename=\"{safe}\"")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_filename_is_sanitized() {
        let [(_, content_type), (_, disposition)] =
            attachment_headers("text/plain", "Café \"Pro\"-pitch-deck.txt");
        assert_eq!(content_type, "text/plain");
        assert_eq!(
            disposition,
            "attachment; filename=\"Caf_ _Pro_-pitch-deck.txt\""
        );
    }
}
