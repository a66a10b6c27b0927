//! Builder for creating and configuring Resolver instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Resolver;
use crate::{config::ResolverConfig, error::Result};

/// Builder for creating and configuring Resolver instances.
#[derive(Debug, Clone, Default)]
pub struct ResolverBuilder {
    config_path: Option<PathBuf>,
    collapse_threshold: Option<usize>,
}

impl ResolverBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/atelier/config.json` or
    /// `~/.config/atelier/config.json`, when that file exists.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the collapse threshold from the configuration file.
    pub fn with_collapse_threshold(mut self, threshold: usize) -> Self {
        self.collapse_threshold = Some(threshold);
        self
    }

    /// Builds the configured resolver.
    ///
    /// # Errors
    ///
    /// Returns `AtelierError::FileSystem` if an explicit configuration file
    /// cannot be read, and `AtelierError::Serialization` or
    /// `AtelierError::InvalidInput` if it is malformed.
    pub fn build(self) -> Result<Resolver> {
        let path = self.config_path.or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => {
                debug!("Loading resolver configuration from {}", path.display());
                ResolverConfig::load(&path)?
            }
            None => ResolverConfig::default(),
        };

        if let Some(threshold) = self.collapse_threshold {
            config.collapse_threshold = threshold;
        }

        Ok(Resolver::new(config))
    }

    /// Returns the default configuration file, if one exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("atelier").find_config_file("config.json")
    }
}
