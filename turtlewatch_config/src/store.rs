use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::schema::KeywordConfig;

/// Location of the persisted keyword vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordStore {
    path: PathBuf,
}

impl Default for KeywordStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl KeywordStore {
    /// Relative to the working directory, as the data-entry tool expects.
    pub const DEFAULT_PATH: &'static str = "config/keywords.json";

    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the built-in vocabulary if no config file exists yet.
    ///
    /// An existing file is never touched, so hand edits survive. Returns
    /// `true` when the file was created by this call.
    pub fn ensure_config(&self) -> Result<bool> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Keyword config already present at {}", self.path.display());
                return Ok(false);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let content = KeywordConfig::builtin().to_pretty_json()?;
        file.write_all(content.as_bytes())
            .map_err(|source| self.io_error(source))?;

        info!("Created default keyword config at {}", self.path.display());
        Ok(true)
    }

    /// Read and deserialize the config file.
    pub fn load_config(&self) -> Result<KeywordConfig> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let config: KeywordConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded keyword config: {} timestamp patterns, {} species, {} locations",
            config.timestamp_patterns.len(),
            config.species_keywords.len(),
            config.location_keywords.len()
        );
        Ok(config)
    }

    /// `ensure_config` followed by `load_config`, then a validation pass so
    /// broken patterns are reported at startup.
    pub fn open(&self) -> Result<KeywordConfig> {
        self.ensure_config()?;
        let config = self.load_config()?;
        config.validate()?;
        Ok(config)
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
