pub mod catalog_file;

use crate::domain::model::DeploymentRequest;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "deploygen")]
#[command(about = "Generates deployment runbooks and notification emails")]
pub struct CliConfig {
    #[arg(long, help = "Target platform, e.g. Pixid")]
    pub platform: Option<String>,

    #[arg(long, help = "Client display name")]
    pub client: Option<String>,

    #[arg(long, help = "Client SIRET number")]
    pub siret: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Modules to deploy, comma-separated")]
    pub modules: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "TOML file overriding the built-in platform catalog")]
    pub catalog: Option<String>,

    #[arg(long, help = "List known platforms and their modules, then exit")]
    pub list_platforms: bool,

    #[arg(long, help = "Generate the notification email only, no PDF")]
    pub email_only: bool,

    #[arg(long, help = "Print a JSON summary instead of the email body")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the deployment request from the flags. Missing flags surface
    /// as configuration errors; content validation happens in the assembler.
    pub fn request(&self) -> Result<DeploymentRequest> {
        let platform = validation::validate_required_field("platform", &self.platform)?;
        let client = validation::validate_required_field("client", &self.client)?;
        let siret = validation::validate_required_field("siret", &self.siret)?;
        Ok(DeploymentRequest {
            platform: platform.clone(),
            client: client.clone(),
            siret: siret.clone(),
            modules: self.modules.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("output_path", &self.output_path)?;
        if let Some(siret) = &self.siret {
            // Same cap as the form field.
            validation::validate_max_length("siret", siret, 17)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            platform: Some("Pixid".to_string()),
            client: Some("Acme SA".to_string()),
            siret: Some("123 456 789 00012".to_string()),
            modules: vec!["Commandes".to_string()],
            output_path: "./output".to_string(),
            catalog: None,
            list_platforms: false,
            email_only: false,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn request_requires_platform_client_and_siret() {
        assert!(base_config().request().is_ok());

        let mut config = base_config();
        config.platform = None;
        assert!(config.request().is_err());

        let mut config = base_config();
        config.client = None;
        assert!(config.request().is_err());
    }

    #[test]
    fn validate_caps_siret_length() {
        let mut config = base_config();
        config.siret = Some("123 456 789 000123".to_string());
        assert!(config.validate().is_err());
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn modules_flag_parses_comma_delimited() {
        let config = CliConfig::parse_from([
            "deploygen",
            "--platform",
            "Pixid",
            "--client",
            "Acme SA",
            "--siret",
            "123",
            "--modules",
            "Commandes,Contrats",
        ]);
        assert_eq!(config.modules, vec!["Commandes", "Contrats"]);
    }
}
