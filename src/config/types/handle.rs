//! Process-wide config handle.
//!
//! The validated config is stored once and shared as `Arc<BlogConfig>`.
//! There is no way to replace or mutate it afterwards.

use crate::config::{BlogConfig, ConfigError};
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<BlogConfig>> = OnceLock::new();

/// Read the global config, if it was initialized.
#[inline]
pub fn cfg() -> Option<Arc<BlogConfig>> {
    CONFIG.get().cloned()
}

/// Store the config for the rest of the process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call.
pub fn init_config(config: BlogConfig) -> Result<Arc<BlogConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching the global.
    #[test]
    fn test_init_once() {
        let first = init_config(BlogConfig::starter()).unwrap();
        let read = cfg().unwrap();
        assert!(Arc::ptr_eq(&first, &read));

        let second = init_config(BlogConfig::starter());
        assert!(matches!(second, Err(ConfigError::AlreadyInitialized)));
        assert!(Arc::ptr_eq(&first, &cfg().unwrap()));
    }
}
