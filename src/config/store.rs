//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::{Config, Theme};

/// Shared config container with interior mutability.
///
/// The UI thread reads it on every draw and writes it on theme toggles;
/// clones share the same underlying config.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Current theme preference.
    pub fn theme(&self) -> Theme {
        self.inner.read().expect("config lock poisoned").ui.theme
    }

    /// Set the theme and persist it to the config file.
    ///
    /// The in-memory value is updated before the write, so the session
    /// keeps the chosen theme even when persisting fails.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ConfigError> {
        let updated = {
            let mut guard = self.inner.write().expect("config lock poisoned");
            guard.ui.theme = theme;
            guard.clone()
        };
        updated.save_to(&self.path)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
