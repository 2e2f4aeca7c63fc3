//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module   | TOML Section   | Purpose                              |
//! |----------|----------------|--------------------------------------|
//! | `site`   | `[site]`       | Title, author, URL, pagination       |
//! | `social` | `[[socials]]`  | Ordered social-media links           |

pub mod site;
pub mod social;

pub use site::SiteSettings;
pub use social::{SocialLink, SocialPlatform, Socials};
