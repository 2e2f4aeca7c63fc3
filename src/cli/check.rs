//! `check` command: validate and summarize the config.

use anyhow::Result;
use blogmeta::{BlogConfig, debug, log};

/// Log a one-screen summary of a validated config.
pub fn report(config: &BlogConfig) -> Result<()> {
    let site = &config.site;
    log!("check"; "{} by {} ({})", site.title, site.author, site.website);

    let prefix = site.path_prefix();
    if !prefix.is_empty() {
        debug!("check"; "pages served under /{}", prefix);
    }
    debug!(
        "check";
        "{} per page, light/dark toggle {}",
        plural_count(site.post_per_page as usize, "post"),
        if site.light_and_dark_mode { "on" } else { "off" }
    );

    let active = config.socials.iter().filter(|l| l.active).count();
    log!(
        "check";
        "{}, {} active",
        plural_count(config.socials.len(), "social link"),
        active
    );
    for link in &config.socials {
        debug!("check"; "{:<10} {} {}", link.name, link.href, if link.active { "" } else { "(inactive)" });
    }

    log!("check"; "config is valid");
    Ok(())
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "post")` -> `"1 post"`
/// - `plural_count(3, "post")` -> `"3 posts"`
fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
