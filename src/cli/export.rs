//! `export` command: JSON for the site generator.

use anyhow::{Context, Result};
use blogmeta::{BlogConfig, log};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Render `{ "SITE": ..., "SOCIALS": [...] }`.
pub fn render_export(config: &BlogConfig, pretty: bool) -> Result<String> {
    let export = config.to_export()?;
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}

/// Write the export to `output`, or stdout when `None`.
pub fn write_export(config: &BlogConfig, pretty: bool, output: Option<&Path>) -> Result<()> {
    let json = render_export(config, pretty)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
