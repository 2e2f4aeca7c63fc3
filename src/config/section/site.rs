//! `[site]` configuration.
//!
//! Blog-wide metadata read by the site generator for page headers, footers
//! and social previews.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://example.com/"
//! author = "Example Author"
//! desc = "Musings of a software engineer."
//! title = "Example Blog"
//! ogImage = "og.jpg"
//! lightAndDarkMode = true
//! postPerPage = 3
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;
use macros::Config;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site metadata shared by every rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "site")]
pub struct SiteSettings {
    /// Public URL of the blog, path used as prefix (e.g., "https://example.com/blog/").
    #[config(default = "https://example.com/")]
    pub website: String,

    /// Author name.
    #[config(default = "Example Author", inline_doc)]
    pub author: String,

    /// Site description.
    #[config(default = "Musings of a software engineer.", inline_doc)]
    pub desc: String,

    /// Display title, also interpolated into social link titles.
    #[config(default = "Example Blog")]
    pub title: String,

    /// Default social preview image filename.
    #[config(name = "ogImage", default = "og.jpg", inline_doc)]
    pub og_image: String,

    /// Enable the light/dark theme toggle.
    #[config(name = "lightAndDarkMode", inline_doc)]
    pub light_and_dark_mode: bool,

    /// Posts listed per page (positive).
    #[config(name = "postPerPage", inline_doc)]
    pub post_per_page: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            desc: String::new(),
            title: String::new(),
            og_image: String::new(),
            light_and_dark_mode: true,
            post_per_page: 3,
        }
    }
}

impl SiteSettings {
    /// Path component of `website`, slashes trimmed.
    ///
    /// `https://example.github.io/blog/` gives `blog`, a bare host gives `""`.
    pub fn path_prefix(&self) -> String {
        extract_url_path(&self.website).unwrap_or_default()
    }

    /// Convert to a plain key-value map using the exported key names.
    pub fn to_map(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "site settings serialized to a non-object value: {other}"
            ))),
        }
    }

    /// Rebuild settings from a map produced by [`SiteSettings::to_map`].
    pub fn from_map(map: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(map))
    }

    /// Validate site settings.
    ///
    /// # Checks
    /// - `title`, `author` and `website` are present
    /// - `website` is a valid http(s) URL with a host
    /// - `postPerPage` is positive
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.author, &self.author),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "required field is empty");
            }
        }

        if self.post_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.post_per_page,
                "must be a positive integer",
                format!("set {} = 3", Self::FIELDS.post_per_page.as_str()),
            );
        }

        self.validate_website(diag);
    }

    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        if self.website.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "required field is empty",
                "use format like https://example.com/",
            );
            return;
        }

        // Absolute http(s) URL with a host
        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                } else if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com/",
                );
            }
        }
    }
}
