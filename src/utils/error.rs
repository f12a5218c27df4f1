use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Unknown platform: {name}")]
    UnknownPlatformError { name: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Module '{module}' is not supported by platform '{platform}'")]
    ModuleNotSupportedError { module: String, platform: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

impl DeployError {
    /// Message shown to the operator, matching the tone of the form UI.
    pub fn user_message(&self) -> String {
        match self {
            DeployError::UnknownPlatformError { name } => {
                format!("Plateforme inconnue : {}", name)
            }
            DeployError::ValidationError { .. } => {
                "Veuillez remplir tous les champs (client, SIRET, modules)".to_string()
            }
            DeployError::ModuleNotSupportedError { module, platform } => {
                format!(
                    "Le module '{}' n'est pas disponible pour la plateforme '{}'",
                    module, platform
                )
            }
            DeployError::RenderError { message } => {
                format!("La génération du PDF a échoué : {}", message)
            }
            DeployError::ConfigError { field, message } => {
                format!("Configuration invalide ({}) : {}", field, message)
            }
            DeployError::IoError(e) => format!("Erreur d'écriture du fichier : {}", e),
            DeployError::CsvError(e) => format!("Erreur d'export de l'historique : {}", e),
        }
    }

    /// User errors (bad request or bad config) exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::UnknownPlatformError { .. }
            | DeployError::ValidationError { .. }
            | DeployError::ModuleNotSupportedError { .. }
            | DeployError::ConfigError { .. } => 2,
            DeployError::RenderError { .. }
            | DeployError::IoError(_)
            | DeployError::CsvError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
