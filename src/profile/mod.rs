//! Installation profile management
//!
//! Loads and saves the persisted profile holding the raw network input and
//! the subvolume collection, in JSON or YAML.

pub mod schema;

use crate::error::ConfigError;
use crate::network::{NetworkConfig, NetworkInput, parse_network_config};
use crate::subvolume::SubvolumeCollection;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk format of a profile, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// `.yaml` and `.yml` are YAML, anything else is JSON
    #[must_use]
    #[inline]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Persisted installation profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Raw network input, in any supported generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic: Option<NetworkInput>,

    #[serde(default, skip_serializing_if = "SubvolumeCollection::is_empty")]
    pub subvolumes: SubvolumeCollection,
}

impl Profile {
    /// Default profile location under the user's configuration directory
    #[must_use]
    #[inline]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nicvol").join("profile.json"))
    }

    /// Load and validate a profile from file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not valid JSON/YAML or violates the profile schema
    pub fn load_from_file(system: &dyn System, path: &Path) -> Result<Self> {
        if !system.exists(path) {
            return Err(ConfigError::profile(format!(
                "Profile not found: {}\n\
                Create a profile or specify a different path with --profile",
                path.display()
            ))
            .into());
        }

        let content = system
            .read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;

        Self::parse(&content, ProfileFormat::from_path(path))
            .with_context(|| format!("Invalid profile: {}", path.display()))
    }

    /// Load the profile at `path`, or start an empty one if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be loaded
    #[inline]
    pub fn load_or_default(system: &dyn System, path: &Path) -> Result<Self> {
        if system.exists(path) {
            return Self::load_from_file(system, path);
        }
        debug!("No profile at {}, starting empty", path.display());
        Ok(Self::default())
    }

    /// Parse profile content, validating it against the schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content cannot be parsed in the given format
    /// - The document violates the profile schema
    pub fn parse(content: &str, format: ProfileFormat) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Value = match format {
            ProfileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::profile(format!("Failed to parse JSON profile: {e}")))?,
            ProfileFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::profile(format!("Failed to parse YAML profile: {e}")))?,
        };

        // A document holding only comments is an empty profile.
        let document = if document.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            document
        };

        schema::validate_against_schema(&document)
            .map_err(|e| ConfigError::profile(e.to_string()))?;

        let profile = serde_json::from_value(document)
            .map_err(|e| ConfigError::profile(format!("Failed to read profile: {e}")))?;
        Ok(profile)
    }

    /// Render the profile in the given format
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    #[inline]
    pub fn render(&self, format: ProfileFormat) -> Result<String> {
        let rendered = match format {
            ProfileFormat::Json => serde_json::to_string_pretty(self)?,
            ProfileFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(rendered)
    }

    /// Write the profile to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be serialized or written
    pub fn save(&self, system: &dyn System, path: &Path) -> Result<()> {
        let rendered = self.render(ProfileFormat::from_path(path))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            system
                .create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        system
            .write(path, rendered.as_bytes())
            .with_context(|| format!("Failed to write profile: {}", path.display()))?;
        debug!("Saved profile to {}", path.display());
        Ok(())
    }

    /// Parse the stored network input
    ///
    /// # Errors
    ///
    /// Returns an error if the network input has an unknown type or lacks a
    /// required address
    #[inline]
    pub fn network_config(&self) -> Result<Option<NetworkConfig>, ConfigError> {
        self.nic
            .as_ref()
            .map_or(Ok(None), parse_network_config)
    }

    /// Store `config` in the current input shape
    #[inline]
    pub fn set_network_config(&mut self, config: Option<&NetworkConfig>) {
        self.nic = config.map(|config| NetworkInput::from(config.to_input()));
    }
}
