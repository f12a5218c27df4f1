//! Optional TOML override for the built-in platform catalog:
//!
//! ```toml
//! [[platform]]
//! name = "Pixid"
//! color = "#96CEB4"
//! modules = ["Commandes", "Contrats", "RAV", "RA"]
//! ```

use crate::core::catalog::{Catalog, UNIVERSAL_MODULES};
use crate::domain::model::Platform;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_hex_color, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "platform")]
    pub platforms: Vec<PlatformEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub name: String,
    pub color: String,
    pub modules: Vec<String>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DeployError::ConfigError {
            field: "catalog".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Validates the entries and freezes them into an immutable catalog,
    /// keeping the file order as display order.
    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        Ok(Catalog::new(
            self.platforms
                .into_iter()
                .map(|entry| Platform {
                    name: entry.name,
                    color: entry.color,
                    modules: entry.modules,
                })
                .collect(),
        ))
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        if self.platforms.is_empty() {
            return Err(DeployError::ConfigError {
                field: "platform".to_string(),
                message: "Catalog file defines no platforms".to_string(),
            });
        }
        for entry in &self.platforms {
            validate_non_empty_string("platform.name", &entry.name)?;
            validate_hex_color("platform.color", &entry.color)?;
            if entry.modules.is_empty() {
                return Err(DeployError::ConfigError {
                    field: "platform.modules".to_string(),
                    message: format!("Platform '{}' lists no modules", entry.name),
                });
            }
            for module in &entry.modules {
                if !UNIVERSAL_MODULES.contains(&module.as_str()) {
                    return Err(DeployError::ConfigError {
                        field: "platform.modules".to_string(),
                        message: format!(
                            "Unknown module '{}' for platform '{}'. Known modules: {}",
                            module,
                            entry.name,
                            UNIVERSAL_MODULES.join(", ")
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_freezes_a_catalog() {
        let toml = r##"
            [[platform]]
            name = "Pixid"
            color = "#96CEB4"
            modules = ["Commandes", "Contrats"]

            [[platform]]
            name = "Baps"
            color = "#4ECDC4"
            modules = ["Heures"]
        "##;
        let catalog = CatalogFile::from_toml_str(toml).unwrap().into_catalog().unwrap();
        assert_eq!(catalog.platform_names(), vec!["Pixid", "Baps"]);
        assert_eq!(catalog.lookup("Baps").unwrap().modules, vec!["Heures"]);
    }

    #[test]
    fn rejects_unknown_module() {
        let toml = r##"
            [[platform]]
            name = "Pixid"
            color = "#96CEB4"
            modules = ["Paie"]
        "##;
        let err = CatalogFile::from_toml_str(toml).unwrap().into_catalog().unwrap_err();
        assert!(matches!(err, DeployError::ConfigError { .. }));
    }

    #[test]
    fn rejects_bad_color_and_empty_catalog() {
        let bad_color = r##"
            [[platform]]
            name = "Pixid"
            color = "96CEB4"
            modules = ["Commandes"]
        "##;
        assert!(CatalogFile::from_toml_str(bad_color)
            .unwrap()
            .into_catalog()
            .is_err());

        let empty = CatalogFile { platforms: vec![] };
        assert!(empty.into_catalog().is_err());
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(matches!(
            CatalogFile::from_toml_str("not [ valid"),
            Err(DeployError::ConfigError { .. })
        ));
    }
}
