//! Config file generation.
//!
//! Creates a commented `blog.toml` for a new blog.

use anyhow::{Context, Result, bail};
use blogmeta::config::starter::generate_config_template;
use blogmeta::log;
use std::{fs, path::Path};

/// Write the starter config to `root/config_name`.
///
/// If `dry_run` is true, only prints the config template to stdout.
/// An existing config file is never overwritten.
pub fn new_config(root: &Path, config_name: &Path, dry_run: bool) -> Result<()> {
    let content = generate_config_template();
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let path = root.join(config_name);
    if path.exists() {
        bail!("config file '{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogmeta::BlogConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-blog");
        new_config(&root, Path::new("blog.toml"), false).unwrap();

        let path = root.join("blog.toml");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[[socials]]"));
        assert_eq!(BlogConfig::load(&path).unwrap(), BlogConfig::starter());
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(new_config(temp.path(), Path::new("blog.toml"), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        new_config(temp.path(), Path::new("blog.toml"), true).unwrap();
        assert!(!temp.path().join("blog.toml").exists());
    }
}
