//! MVP code scaffold generator.
//!
//! Turns an [`MvpConfig`] into boilerplate source files: React components, a
//! SQL schema, deployment configs and stylesheets. Every function here is a
//! deterministic template fill; the same config always yields the same text.

mod components;
mod database;
mod deployment;
mod styles;

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use components::{
    app_component, auth_hook, dashboard_component, database_client, header_component,
    home_component,
};
pub use database::{database_config_file, database_schema};
pub use deployment::{dockerfile, package_json, vercel_config};
pub use styles::{component_styles, global_styles};

/// Front-end stack used when the config names none.
pub const DEFAULT_TECH_STACK: &str = "react";

/// Database used when the config names none.
pub const DEFAULT_DATABASE: &str = "supabase";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Input / output shapes
// ---------------------------------------------------------------------------

/// Builder settings submitted from the MVP builder page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl MvpConfig {
    pub fn tech_stack(&self) -> &str {
        non_blank(self.tech_stack.as_deref()).unwrap_or(DEFAULT_TECH_STACK)
    }

    pub fn database(&self) -> &str {
        non_blank(self.database.as_deref()).unwrap_or(DEFAULT_DATABASE)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseFiles {
    pub schema: String,
    pub config: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentFiles {
    pub vercel: String,
    pub dockerfile: String,
    pub package_json: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedCode {
    pub components: Vec<GeneratedFile>,
    pub database: DatabaseFiles,
    pub deployment: DeploymentFiles,
    /// Stylesheet name to content, in emission order.
    pub styles: IndexMap<String, String>,
}

impl GeneratedCode {
    /// Flatten into `(path, content)` pairs laid out as a project tree.
    pub fn files(&self) -> Vec<(String, &str)> {
        let mut files: Vec<(String, &str)> = self
            .components
            .iter()
            .map(|f| (format!("src/{}", f.name), f.content.as_str()))
            .collect();

        files.push(("database/schema.sql".to_string(), self.database.schema.as_str()));
        files.push(("database/config.js".to_string(), self.database.config.as_str()));
        files.push(("vercel.json".to_string(), self.deployment.vercel.as_str()));
        files.push(("Dockerfile".to_string(), self.deployment.dockerfile.as_str()));
        files.push(("package.json".to_string(), self.deployment.package_json.as_str()));
        files.extend(
            self.styles
                .iter()
                .map(|(name, content)| (format!("src/styles/{name}"), content.as_str())),
        );
        files
    }
}

// ---------------------------------------------------------------------------
// Naming helpers
// ---------------------------------------------------------------------------

/// Lowercase with whitespace runs replaced by `-` (package names, routes).
pub fn kebab_slug(value: &str) -> String {
    WHITESPACE_RE.replace_all(&value.to_lowercase(), "-").into_owned()
}

/// Lowercase with whitespace runs replaced by `_` (SQL identifiers).
pub fn table_name(value: &str) -> String {
    WHITESPACE_RE.replace_all(&value.to_lowercase(), "_").into_owned()
}

/// Whitespace removed, case kept (component identifiers).
pub fn component_name(value: &str) -> String {
    WHITESPACE_RE.replace_all(value, "").into_owned()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate every scaffold file for the config.
pub fn generate(config: &MvpConfig) -> GeneratedCode {
    let name = config.name.as_str();
    let stack = config.tech_stack();
    let database = config.database();
    let features = config.features.as_slice();

    let file = |name: &str, content: String| GeneratedFile {
        name: name.to_string(),
        content,
    };

    let mut styles = IndexMap::new();
    styles.insert("globals.css".to_string(), global_styles());
    styles.insert("components.css".to_string(), component_styles());

    GeneratedCode {
        components: vec![
            file("App.jsx", app_component(name, stack, features)),
            file("components/Header.jsx", header_component(name)),
            file("components/Dashboard.jsx", dashboard_component(features)),
            file(
                "pages/Home.jsx",
                home_component(name, config.description.as_deref()),
            ),
            file("hooks/useAuth.js", auth_hook(database)),
            file("lib/database.js", database_client(database)),
        ],
        database: DatabaseFiles {
            schema: database_schema(features, database),
            config: database_config_file(database),
        },
        deployment: DeploymentFiles {
            vercel: vercel_config(name),
            dockerfile: dockerfile(),
            package_json: package_json(name, stack, database),
        },
        styles,
    }
}
