//! Blogmeta - site metadata and social links for a personal blog.
//!
//! The site generator reads a [`config::BlogConfig`] (or its JSON export)
//! to render headers, footers and the social-links widget.
//!
//! ```ignore
//! let config = BlogConfig::load(Path::new("blog.toml"))?;
//! let config = init_config(config)?;
//! for link in config.socials.iter().filter(|l| l.active) {
//!     render_icon(link.name, &link.href, &link.link_title);
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{BlogConfig, SiteSettings, SocialLink, SocialPlatform, Socials};
