use crate::domain::model::Platform;
use crate::utils::error::{DeployError, Result};

/// The six canonical module labels, in display order.
pub const UNIVERSAL_MODULES: [&str; 6] =
    ["Commandes", "Contrats", "Heures", "RAV", "RA", "Factures"];

/// Static registry of platforms. Built once at startup, read-only afterwards.
/// Insertion order is the display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    platforms: Vec<Platform>,
}

impl Catalog {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// The platform table shipped with the tool.
    pub fn builtin() -> Self {
        Self::new(vec![
            platform("Temporaris", "#FF6B6B", &["Commandes", "Contrats", "Heures", "Factures"]),
            platform("Baps", "#4ECDC4", &["Commandes", "Heures", "RAV", "Factures"]),
            platform("Pilott", "#45B7D1", &["Contrats", "Heures", "RA", "Factures"]),
            platform("Pixid", "#96CEB4", &["Commandes", "Contrats", "RAV", "RA"]),
            platform("PeoPulse", "#FECA57", &["Heures", "RAV", "RA", "Factures"]),
            platform("Fieldglass", "#FD79A8", &["Commandes", "Contrats", "Heures", "Factures"]),
            platform("Beeline", "#A29BFE", &["Commandes", "Heures", "RA", "Factures"]),
            platform("Instant", "#74B9FF", &["Contrats", "Heures", "RAV", "Factures"]),
        ])
    }

    pub fn lookup(&self, name: &str) -> Result<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| DeployError::UnknownPlatformError {
                name: name.to_string(),
            })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn universal_modules() -> &'static [&'static str] {
        &UNIVERSAL_MODULES
    }
}

fn platform(name: &str, color: &str, modules: &[&str]) -> Platform {
    Platform {
        name: name.to_string(),
        color: color.to_string(),
        modules: modules.iter().map(|m| m.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_platforms_support_subset_of_universal_modules() {
        let catalog = Catalog::builtin();
        assert!(!catalog.platforms().is_empty());
        for platform in catalog.platforms() {
            assert!(!platform.modules.is_empty(), "{} has no modules", platform.name);
            for module in &platform.modules {
                assert!(
                    UNIVERSAL_MODULES.contains(&module.as_str()),
                    "{} lists unknown module {}",
                    platform.name,
                    module
                );
            }
        }
    }

    #[test]
    fn platform_names_keep_insertion_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.platform_names(),
            vec![
                "Temporaris",
                "Baps",
                "Pilott",
                "Pixid",
                "PeoPulse",
                "Fieldglass",
                "Beeline",
                "Instant"
            ]
        );
    }

    #[test]
    fn lookup_known_platform() {
        let catalog = Catalog::builtin();
        let pixid = catalog.lookup("Pixid").unwrap();
        assert_eq!(pixid.color, "#96CEB4");
        assert_eq!(pixid.modules, vec!["Commandes", "Contrats", "RAV", "RA"]);
    }

    #[test]
    fn lookup_unknown_platform_fails() {
        let catalog = Catalog::builtin();
        let err = catalog.lookup("DoesNotExist").unwrap_err();
        assert!(matches!(
            err,
            DeployError::UnknownPlatformError { ref name } if name == "DoesNotExist"
        ));
    }
}
