//! Registry configuration
//!
//! Controls how contexts are created: which groups and aliases exist up
//! front, whether adding an item may create an undefined group, and an
//! optional cap on the number of groups. Loadable from JSON:
//!
//! ```json
//! {
//!     "auto_create_groups": false,
//!     "max_groups": 64,
//!     "groups": [
//!         { "name": "SI", "aliases": ["International System"] },
//!         { "name": "US", "aliases": ["US Common System"] }
//!     ]
//! }
//! ```

use std::fs;
use std::path::Path;

use groupreg_core::GroupError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interner::NameInterner;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read registry configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid registry configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot seed group \"{name}\": {source}")]
    Seed {
        name: String,
        #[source]
        source: GroupError,
    },
}

/// A group interned when a context is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSeed {
    /// Primary name
    pub name: String,
    /// Aliases bound to the same group
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Configuration applied to every context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Whether adding an item to an undefined group creates the group
    pub auto_create_groups: bool,
    /// Maximum number of groups per context, unbounded when `None`
    pub max_groups: Option<usize>,
    /// Groups interned, in order, when a context is created
    pub groups: Vec<GroupSeed>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            auto_create_groups: true,
            max_groups: None,
            groups: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set whether adding an item may create undefined groups
    pub fn with_auto_create_groups(mut self, auto_create: bool) -> Self {
        self.auto_create_groups = auto_create;
        self
    }

    /// Cap the number of groups per context
    pub fn with_max_groups(mut self, max_groups: usize) -> Self {
        self.max_groups = Some(max_groups);
        self
    }

    /// Add a seed group with its aliases
    pub fn with_group<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.groups.push(GroupSeed {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Check that the seed groups can be interned under the configured cap
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seeded_names().map(drop)
    }

    /// A name table holding the seed groups and aliases, in order
    pub fn seeded_names(&self) -> Result<NameInterner, ConfigError> {
        let mut names = NameInterner::with_group_limit(self.max_groups);
        for group in &self.groups {
            let seed_error = |source| ConfigError::Seed {
                name: group.name.clone(),
                source,
            };
            let index = names.intern(&group.name, None).map_err(seed_error)?.index();
            for alias in &group.aliases {
                names.intern(alias, Some(index)).map_err(seed_error)?;
            }
        }
        Ok(names)
    }
}
