//! Proc macros for blogmeta.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site-wide metadata.
//! pub struct SiteSettings {
//!     /// Display title.
//!     pub title: String,
//!
//!     /// Posts listed per page.
//!     #[config(name = "postPerPage", default = "3")]
//!     pub post_per_page: u32,
//! }
//!
//! // Generates:
//! // - SiteSettings::FIELDS.post_per_page -> FieldPath("site.postPerPage")
//! // - SiteSettings::template() -> TOML string with comments
//! // - SiteSettings::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(name = "x")]` - Custom TOML key
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSettings` → `site`
//! - `SocialLinkConfig` → `social_link`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
