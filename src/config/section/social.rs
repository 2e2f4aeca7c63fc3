//! `[[socials]]` configuration.
//!
//! Ordered outbound profile links rendered by the social-links widget.
//! File order is render order; the generator skips entries with
//! `active = false`.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/example"
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:hello@example.com"
//! linkTitle = "Write to Example Blog"
//! active = false
//! ```
//!
//! An explicit `linkTitle` must still mention `[site] title`.

use crate::config::{ConfigDiagnostic, ConfigDiagnostics};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Platform
// ============================================================================

/// Platforms the social-links widget has icons for.
///
/// Serialized with the exact spelling the generator expects (`"LinkedIn"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl SocialPlatform {
    pub const ALL: [Self; 20] = [
        Self::Github,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::Twitter,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Default link title for this platform.
    ///
    /// | Platform | Title                     |
    /// |----------|---------------------------|
    /// | Github   | `" {title} on Github"`    |
    /// | Mail     | `"Send an email to {title}"` |
    /// | others   | `"{title} on {platform}"` |
    ///
    /// The leading space of the Github title is part of the published format.
    pub fn link_title(&self, site_title: &str) -> String {
        match self {
            Self::Github => format!(" {site_title} on Github"),
            Self::Mail => format!("Send an email to {site_title}"),
            _ => format!("{site_title} on {}", self.as_str()),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Social Link
// ============================================================================

/// A single outbound profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "socials")]
pub struct SocialLink {
    /// Platform name (Github, LinkedIn, Mail, Twitter, WhatsApp, ...).
    #[config(default = "Github")]
    pub name: SocialPlatform,

    /// Destination: https URL, `mailto:` or `tel:` URI.
    #[config(default = "https://github.com/example")]
    pub href: String,

    /// Defaults to a title derived from `[site] title`.
    #[config(name = "linkTitle", hidden)]
    pub link_title: String,

    /// Render this link.
    #[config(default = "true", inline_doc)]
    pub active: bool,
}

impl SocialLink {
    /// Build an active link titled after the site.
    ///
    /// ```ignore
    /// let link = SocialLink::new("Example Blog", SocialPlatform::Github, "https://github.com/example");
    /// assert_eq!(link.link_title, " Example Blog on Github");
    /// ```
    pub fn new(site_title: &str, name: SocialPlatform, href: impl Into<String>) -> Self {
        Self {
            name,
            href: href.into(),
            link_title: name.link_title(site_title),
            active: true,
        }
    }

    pub fn with_link_title(mut self, link_title: impl Into<String>) -> Self {
        self.link_title = link_title.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Validate one entry at `index`.
    ///
    /// Inactive entries are never rendered, so their `href` is not checked.
    fn validate(&self, index: usize, site_title: &str, diag: &mut ConfigDiagnostics) {
        if self.link_title.trim().is_empty() {
            diag.push(
                ConfigDiagnostic::new(Self::FIELDS.link_title, "link title is empty").at(index),
            );
        } else if !self.link_title.contains(site_title) {
            diag.push(
                ConfigDiagnostic::new(
                    Self::FIELDS.link_title,
                    format!("'{}' does not mention the site title", self.link_title),
                )
                .at(index)
                .with_hint(format!(
                    "include \"{site_title}\" or remove linkTitle to use \"{}\"",
                    self.name.link_title(site_title)
                )),
            );
        }

        if !self.active {
            return;
        }

        match check_href(&self.href) {
            Ok(scheme) => {
                let expects_mailto = self.name == SocialPlatform::Mail;
                if expects_mailto != (scheme == "mailto") {
                    diag.warn(
                        ConfigDiagnostic::new(
                            Self::FIELDS.href,
                            format!("{} link uses a `{scheme}:` href", self.name),
                        )
                        .at(index),
                    );
                }
            }
            Err(message) => diag.push(
                ConfigDiagnostic::new(Self::FIELDS.href, message)
                    .at(index)
                    .with_hint("use https://..., mailto:name@host or tel:+123"),
            ),
        }
    }
}

/// Check an active link target, returning its scheme.
fn check_href(href: &str) -> Result<String, String> {
    let parsed = url::Url::parse(href).map_err(|e| format!("invalid URL '{href}': {e}"))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_none_or(str::is_empty) => {
            Err(format!("URL '{href}' has no host"))
        }
        "http" | "https" => Ok(parsed.scheme().to_string()),
        "mailto" if !parsed.path().contains('@') => {
            Err(format!("'{href}' is missing an email address"))
        }
        "tel" if parsed.path().trim().is_empty() => Err(format!("'{href}' is missing a number")),
        "mailto" | "tel" => Ok(parsed.scheme().to_string()),
        other => Err(format!("scheme '{other}' not supported")),
    }
}

// ============================================================================
// Social Link Collection
// ============================================================================

/// Ordered, read-only sequence of social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Socials(Vec<SocialLink>);

impl Socials {
    pub fn new(links: Vec<SocialLink>) -> Self {
        Self(links)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SocialLink> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SocialLink] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate every entry, reporting positions for `[[socials]]` tables.
    pub fn validate(&self, site_title: &str, diag: &mut ConfigDiagnostics) {
        for (index, link) in self.0.iter().enumerate() {
            link.validate(index, site_title, diag);
        }
    }
}

impl FromIterator<SocialLink> for Socials {
    fn from_iter<I: IntoIterator<Item = SocialLink>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Socials {
    type Item = &'a SocialLink;
    type IntoIter = std::slice::Iter<'a, SocialLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// File Form
// ============================================================================

/// `[[socials]]` entry as written in `blog.toml`; `linkTitle` is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SocialEntry {
    name: SocialPlatform,
    href: String,
    #[serde(default)]
    link_title: Option<String>,
    #[serde(default = "default_active")]
    active: bool,
}

const fn default_active() -> bool {
    true
}

impl SocialEntry {
    /// Resolve into a link, deriving the title from `site_title` if unset.
    pub(crate) fn resolve(self, site_title: &str) -> SocialLink {
        let link = SocialLink::new(site_title, self.name, self.href).with_active(self.active);
        match self.link_title {
            Some(title) => link.with_link_title(title),
            None => link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn error_locations(socials: &Socials) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        socials.validate("Blog", &mut diag);
        diag.errors().iter().map(|e| e.location()).collect()
    }

    #[test]
    fn test_github_title_interpolation() {
        let link = SocialLink::new(
            "Example Blog",
            SocialPlatform::Github,
            "https://github.com/example",
        );
        assert_eq!(link.link_title, " Example Blog on Github");
        assert!(link.active);
    }

    #[test]
    fn test_platform_titles() {
        assert_eq!(
            SocialPlatform::Mail.link_title("Example Blog"),
            "Send an email to Example Blog"
        );
        assert_eq!(
            SocialPlatform::LinkedIn.link_title("Example Blog"),
            "Example Blog on LinkedIn"
        );
        for platform in SocialPlatform::ALL {
            let title = platform.link_title("Example Blog");
            assert!(title.contains("Example Blog"), "{platform}: {title}");
        }
    }

    #[test]
    fn test_platform_spelling_matches_serde() {
        for platform in SocialPlatform::ALL {
            let json = serde_json::to_value(platform).unwrap();
            assert_eq!(json, serde_json::Value::from(platform.as_str()));
        }
    }

    #[test]
    fn test_parse_entries_in_order() {
        let config = test_parse_config(
            r#"
[[socials]]
name = "Twitter"
href = "https://twitter.com/example"

[[socials]]
name = "Mail"
href = "mailto:hello@example.com"
linkTitle = "Write to Test"
active = false
"#,
        );
        let socials = config.socials.as_slice();
        assert_eq!(socials.len(), 2);

        assert_eq!(socials[0].name, SocialPlatform::Twitter);
        assert_eq!(socials[0].link_title, "Test on Twitter");
        assert!(socials[0].active);

        assert_eq!(socials[1].name, SocialPlatform::Mail);
        assert_eq!(socials[1].link_title, "Write to Test");
        assert!(!socials[1].active);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let content = "[site]\ntitle = \"T\"\n[[socials]]\nname = \"Myspace\"\nhref = \"https://myspace.com\"";
        assert!(crate::config::BlogConfig::from_str(content).is_err());
    }

    #[test]
    fn test_valid_hrefs() {
        let socials: Socials = [
            (SocialPlatform::Github, "https://github.com/example"),
            (SocialPlatform::LinkedIn, "https://www.linkedin.com/in/example/"),
            (SocialPlatform::Mail, "mailto:hello@example.com"),
            (SocialPlatform::WhatsApp, "https://wa.me/+15555550100"),
            (SocialPlatform::Telegram, "tel:+15555550100"),
        ]
        .into_iter()
        .map(|(name, href)| SocialLink::new("Blog", name, href))
        .collect();

        assert!(error_locations(&socials).is_empty());
    }

    #[test]
    fn test_invalid_active_hrefs() {
        let socials: Socials = [
            "github.com/example",
            "ftp://example.com/file",
            "mailto:",
            "https://",
        ]
        .into_iter()
        .map(|href| SocialLink::new("Blog", SocialPlatform::Github, href))
        .collect();

        assert_eq!(
            error_locations(&socials),
            [
                "socials[0].href",
                "socials[1].href",
                "socials[2].href",
                "socials[3].href"
            ]
        );
    }

    #[test]
    fn test_inactive_href_not_checked() {
        let socials = Socials::new(vec![
            SocialLink::new("Blog", SocialPlatform::Reddit, "not a url").with_active(false),
        ]);
        assert!(error_locations(&socials).is_empty());
    }

    #[test]
    fn test_empty_link_title() {
        let socials = Socials::new(vec![
            SocialLink::new("Blog", SocialPlatform::Github, "https://github.com/example")
                .with_link_title(""),
        ]);
        assert_eq!(error_locations(&socials), ["socials[0].linkTitle"]);
    }

    #[test]
    fn test_explicit_title_must_mention_site_title() {
        let socials = Socials::new(vec![
            SocialLink::new("Blog", SocialPlatform::Github, "https://github.com/example")
                .with_link_title("Blog source code"),
            SocialLink::new("Blog", SocialPlatform::Github, "https://github.com/example")
                .with_link_title("My code"),
            SocialLink::new("Blog", SocialPlatform::Reddit, "not a url")
                .with_link_title("Old forum")
                .with_active(false),
        ]);
        assert_eq!(
            error_locations(&socials),
            ["socials[1].linkTitle", "socials[2].linkTitle"]
        );
    }

    #[test]
    fn test_mail_scheme_mismatch_warns() {
        let socials = Socials::new(vec![
            SocialLink::new("Blog", SocialPlatform::Mail, "https://example.com/contact"),
            SocialLink::new("Blog", SocialPlatform::Github, "mailto:me@example.com"),
        ]);
        let mut diag = ConfigDiagnostics::new();
        socials.validate("Blog", &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let link = SocialLink::new("Blog", SocialPlatform::WhatsApp, "https://wa.me/+1555");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "WhatsApp",
                "href": "https://wa.me/+1555",
                "linkTitle": "Blog on WhatsApp",
                "active": true
            })
        );
    }
}
