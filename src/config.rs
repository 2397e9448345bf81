//! Configuration management for the scaffold planner
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (scaffold.toml)
//! - Environment variables (SCAFFOLD_*)
//!
//! ## Example config file (scaffold.toml):
//! ```toml
//! [output]
//! entities_dir = "src/typeorm/entities"
//! type_definitions_dir = "src/graphql/types"
//! fixtures_dir = "events"
//! terraform_dir = "terraform"
//!
//! [scalars]
//! extra_personalized = ["Fancy", "Money"]
//!
//! [project]
//! default_author = "Platform Team"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classify::ScalarRegistry;
use crate::planner::OutputLayout;

/// Main configuration for the scaffold planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Output layout settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Scalar registry settings
    #[serde(default)]
    pub scalars: ScalarConfig,

    /// Project metadata fallbacks
    #[serde(default)]
    pub project: ProjectConfig,
}

/// Category directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Entity model directory
    #[serde(default = "default_entities_dir")]
    pub entities_dir: PathBuf,

    /// Type definition directory
    #[serde(default = "default_type_definitions_dir")]
    pub type_definitions_dir: PathBuf,

    /// CRUD fixture directory
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,

    /// Infrastructure file directory
    #[serde(default = "default_terraform_dir")]
    pub terraform_dir: PathBuf,
}

/// Personalized scalar settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalarConfig {
    /// Extra scalar names to treat as personalized, on top of the built-in set
    #[serde(default)]
    pub extra_personalized: Vec<String>,

    /// Drop the built-in personalized set entirely
    #[serde(default)]
    pub ignore_builtin: bool,
}

/// Project metadata fallbacks, used when the schema document omits fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Default author
    #[serde(default)]
    pub default_author: Option<String>,

    /// Default description
    #[serde(default)]
    pub default_description: Option<String>,
}

fn default_entities_dir() -> PathBuf {
    PathBuf::from("src/typeorm/entities")
}

fn default_type_definitions_dir() -> PathBuf {
    PathBuf::from("src/graphql/types")
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("events")
}

fn default_terraform_dir() -> PathBuf {
    PathBuf::from("terraform")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            entities_dir: default_entities_dir(),
            type_definitions_dir: default_type_definitions_dir(),
            fixtures_dir: default_fixtures_dir(),
            terraform_dir: default_terraform_dir(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["scaffold.toml", ".scaffold.toml", "config/scaffold.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "gamechanger", "scaffold") {
            let xdg_config = config_dir.config_dir().join("scaffold.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCAFFOLD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Build the output layout the planner uses
    pub fn layout(&self) -> OutputLayout {
        OutputLayout {
            entities_dir: self.output.entities_dir.clone(),
            type_definitions_dir: self.output.type_definitions_dir.clone(),
            fixtures_dir: self.output.fixtures_dir.clone(),
            terraform_dir: self.output.terraform_dir.clone(),
        }
    }

    /// Build the personalized-scalar registry
    pub fn scalar_registry(&self) -> ScalarRegistry {
        let base = if self.scalars.ignore_builtin {
            ScalarRegistry::empty()
        } else {
            ScalarRegistry::new()
        };
        base.with_extra(self.scalars.extra_personalized.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        let layout = config.layout();
        assert_eq!(layout.entities_dir, PathBuf::from("src/typeorm/entities"));
        assert_eq!(layout.fixtures_dir, PathBuf::from("events"));
    }

    #[test]
    fn test_scalar_registry_from_config() {
        let mut config = ScaffoldConfig::default();
        config.scalars.extra_personalized = vec!["Money".to_string()];

        let registry = config.scalar_registry();
        assert!(registry.contains("Money"));
        assert!(registry.contains("DateTime"));

        config.scalars.ignore_builtin = true;
        let registry = config.scalar_registry();
        assert!(registry.contains("Money"));
        assert!(!registry.contains("DateTime"));
    }

    #[test]
    fn test_serialize_config() {
        let config = ScaffoldConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[scalars]"));
    }
}
