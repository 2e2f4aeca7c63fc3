//! Field paths used in config diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted `section.key` path of a `blog.toml` field, generated by
/// `#[derive(Config)]`.
///
/// Array-of-tables sections share one path for every entry; the entry
/// position travels separately on [`ConfigDiagnostic`](super::ConfigDiagnostic).
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "socials")]
/// pub struct SocialLink {
///     #[config(name = "linkTitle")]
///     pub link_title: String,
/// }
///
/// assert_eq!(SocialLink::FIELDS.link_title.as_str(), "socials.linkTitle");
/// diag.push(ConfigDiagnostic::new(SocialLink::FIELDS.link_title, "empty").at(2));
/// // reported as `socials[2].linkTitle`
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
