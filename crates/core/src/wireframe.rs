//! Wireframe references.
//!
//! There is no design-tool integration; every wireframe points at the same
//! placeholder image and only the display name varies.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_URL: &str = "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg";

pub const PLACEHOLDER_THUMBNAIL_URL: &str =
    "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=300";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    pub url: String,
    pub thumbnail: String,
    pub name: String,
}

pub fn mock_wireframe(project_name: &str) -> Wireframe {
    Wireframe {
        url: PLACEHOLDER_URL.to_string(),
        thumbnail: PLACEHOLDER_THUMBNAIL_URL.to_string(),
        name: format!("{project_name} Wireframe"),
    }
}
