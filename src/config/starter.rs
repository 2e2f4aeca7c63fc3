//! Built-in example configuration and the `blog.toml` template.
//!
//! `blogmeta init` writes [`generate_config_template`]; parsing that output
//! yields exactly [`BlogConfig::starter`].

use super::BlogConfig;
use super::section::{SiteSettings, SocialLink, SocialPlatform, Socials};

/// Example socials, in render order.
const STARTER_SOCIALS: [(SocialPlatform, &str); 5] = [
    (SocialPlatform::Github, "https://github.com/example"),
    (SocialPlatform::LinkedIn, "https://www.linkedin.com/in/example/"),
    (SocialPlatform::Mail, "mailto:hello@example.com"),
    (SocialPlatform::Twitter, "https://twitter.com/example"),
    (SocialPlatform::WhatsApp, "https://wa.me/+15555550100"),
];

impl BlogConfig {
    /// Example configuration used by `init` and in tests.
    pub fn starter() -> Self {
        let site = SiteSettings {
            website: "https://example.com/".into(),
            author: "Example Author".into(),
            desc: "Musings of a software engineer.".into(),
            title: "Example Blog".into(),
            og_image: "og.jpg".into(),
            ..SiteSettings::default()
        };
        let socials: Socials = STARTER_SOCIALS
            .iter()
            .map(|(name, href)| SocialLink::new(&site.title, *name, *href))
            .collect();

        Self { site, socials }
    }
}

/// Generate `blog.toml` content with comments.
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# blogmeta configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteSettings::template_with_header());
    out.push('\n');

    // Keys accepted by every [[socials]] entry, commented out
    out.push_str("# Social links, rendered in file order.\n");
    for line in SocialLink::template().lines() {
        if line.starts_with('#') {
            out.push_str(line);
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str("# linkTitle = \"...\"  # must mention [site] title, derived from it when omitted\n");

    for (name, href) in STARTER_SOCIALS {
        out.push_str("\n[[socials]]\n");
        out.push_str(&format!("name = {}\n", toml::Value::from(name.as_str())));
        out.push_str(&format!("href = {}\n", toml::Value::from(href)));
    }

    out
}
