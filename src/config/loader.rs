//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the accounting
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AccountingPolicy, PolicyFile, PolicyMetadata};

/// Loads and provides access to the accounting policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Policy metadata, overtime and wage settings
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {}", loader.metadata().name);
/// println!("Overtime after {} hours", loader.policy().overtime_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: PolicyMetadata,
    policy: AccountingPolicy,
    default_currency: String,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `policy.yaml` is missing
    /// - [`EngineError::ConfigParseError`] if it contains invalid YAML or misses a field
    /// - [`EngineError::InvalidPolicy`] if a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let policy = AccountingPolicy::from(&file);
        policy.validate()?;

        Ok(Self {
            metadata: file.policy,
            policy,
            default_currency: file.wages.default_currency,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the accounting policy.
    pub fn policy(&self) -> &AccountingPolicy {
        &self.policy
    }

    /// Returns the currency reported when compensation names none.
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }
}
