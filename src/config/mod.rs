//! Blog metadata management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide config handle
//! ├── starter        # Example config and init template
//! ├── util           # URL and config-file helpers
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[site]`       | Website, author, title, preview image, paging   |
//! | `[[socials]]`  | Ordered social-media links                      |

pub mod section;
pub mod starter;
pub mod types;
pub mod util;

pub use section::{SiteSettings, SocialLink, SocialPlatform, Socials};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config,
};

use section::social::SocialEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBlogConfig")]
pub struct BlogConfig {
    /// Site-wide metadata
    pub site: SiteSettings,

    /// Social links in render order
    pub socials: Socials,
}

/// File form of [`BlogConfig`], before link titles are derived.
#[derive(Deserialize)]
struct RawBlogConfig {
    #[serde(default)]
    site: SiteSettings,
    #[serde(default)]
    socials: Vec<SocialEntry>,
}

impl From<RawBlogConfig> for BlogConfig {
    fn from(raw: RawBlogConfig) -> Self {
        let socials = raw
            .socials
            .into_iter()
            .map(|entry| entry.resolve(&raw.site.title))
            .collect();
        Self {
            site: raw.site,
            socials,
        }
    }
}

impl BlogConfig {
    /// Load, check for unknown keys and validate a config file.
    ///
    /// Any validation error fails the load.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every problem in the configuration.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.socials.validate(&self.site.title, &mut diag);
        diag
    }

    /// Validate the configuration, returning all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // export
    // ========================================================================

    /// Export shape consumed by the site generator:
    /// `{ "SITE": { website, author, ... }, "SOCIALS": [{ name, href, linkTitle, active }] }`.
    pub fn to_export(&self) -> serde_json::Result<Value> {
        let mut root = Map::new();
        root.insert("SITE".into(), Value::Object(self.site.to_map()?));
        root.insert("SOCIALS".into(), serde_json::to_value(&self.socials)?);
        Ok(Value::Object(root))
    }

    /// Serialize back to `blog.toml` form (link titles written out).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> BlogConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\nauthor = \"Test\"\nwebsite = \"https://example.com/\"\n{extra}"
    );
    let (parsed, ignored) = BlogConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[site]
website = "https://example.com/"
author = "Example Author"
desc = "Musings of a software engineer."
title = "Example Blog"
ogImage = "og.jpg"
lightAndDarkMode = true
postPerPage = 3

[[socials]]
name = "Github"
href = "https://github.com/example"

[[socials]]
name = "LinkedIn"
href = "https://www.linkedin.com/in/example/"

[[socials]]
name = "Mail"
href = "mailto:hello@example.com"
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(BlogConfig::from_str("[site\ntitle = \"My Blog\"").is_err());
    }

    #[test]
    fn test_parse_sample() {
        let config = BlogConfig::from_str(SAMPLE).unwrap();
        assert_eq!(config.site.title, "Example Blog");
        assert_eq!(config.socials.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_site_section_fails_validation() {
        let config = BlogConfig::from_str("").unwrap();
        assert!(config.socials.is_empty());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Diagnostics(ref d) if d.len() == 3));
    }

    #[test]
    fn test_active_links_have_valid_hrefs_and_titles() {
        let config = BlogConfig::starter();
        for link in config.socials.iter().filter(|l| l.active) {
            assert!(url::Url::parse(&link.href).is_ok(), "{}", link.href);
            assert!(!link.link_title.is_empty());
            assert!(link.link_title.contains(&config.site.title));
        }
        assert!(config.site.post_per_page > 0);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = BlogConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_unknown_social_field_detected() {
        let content = "[site]\ntitle = \"T\"\n[[socials]]\nname = \"Github\"\nhref = \"https://github.com/x\"\nicon = \"gh.svg\"";
        let (_, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("icon")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = BlogConfig::parse_with_ignored(SAMPLE).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_rejects_zero_post_per_page() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, SAMPLE.replace("postPerPage = 3", "postPerPage = 0")).unwrap();

        let err = BlogConfig::load(&path).unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.errors()[0].location(), "site.postPerPage");
    }

    #[test]
    fn test_load_rejects_bad_active_href() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        let content = format!("{SAMPLE}\n[[socials]]\nname = \"Twitter\"\nhref = \"twitter.com/example\"\n");
        fs::write(&path, content).unwrap();

        let err = BlogConfig::load(&path).unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].location(), "socials[3].href");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = BlogConfig::load(&temp.path().join("blog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_repeated_loads_are_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, SAMPLE).unwrap();

        let first = serde_json::to_string(&BlogConfig::load(&path).unwrap().to_export().unwrap())
            .unwrap();
        let second = serde_json::to_string(&BlogConfig::load(&path).unwrap().to_export().unwrap())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_shape() {
        let export = BlogConfig::from_str(SAMPLE).unwrap().to_export().unwrap();

        let site = export["SITE"].as_object().unwrap();
        assert_eq!(site["ogImage"], "og.jpg");
        assert_eq!(site["lightAndDarkMode"], true);
        assert_eq!(site["postPerPage"], 3);

        let socials = export["SOCIALS"].as_array().unwrap();
        let names: Vec<&str> = socials.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Github", "LinkedIn", "Mail"]);
        assert_eq!(socials[0]["linkTitle"], " Example Blog on Github");
        assert_eq!(socials[2]["linkTitle"], "Send an email to Example Blog");
        assert_eq!(socials[1]["active"], true);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BlogConfig::starter();
        let written = config.to_toml().unwrap();
        assert!(written.contains("linkTitle"));
        assert_eq!(BlogConfig::from_str(&written).unwrap(), config);
    }

    #[test]
    fn test_explicit_link_title_overrides_derived() {
        let content = SAMPLE.replace(
            "href = \"https://github.com/example\"",
            "href = \"https://github.com/example\"\nlinkTitle = \"Example Blog source code\"",
        );
        let config = BlogConfig::from_str(&content).unwrap();
        assert_eq!(config.socials.as_slice()[0].link_title, "Example Blog source code");
        assert_eq!(config.socials.as_slice()[1].link_title, "Example Blog on LinkedIn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_link_title_without_site_title() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        let content = SAMPLE.replace(
            "href = \"https://github.com/example\"",
            "href = \"https://github.com/example\"\nlinkTitle = \"My code\"",
        );
        fs::write(&path, content).unwrap();

        let err = BlogConfig::load(&path).unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].location(), "socials[0].linkTitle");
    }
}
