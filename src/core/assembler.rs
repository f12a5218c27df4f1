//! Pure content assembly: fills the notification email template and builds
//! the renderer-agnostic runbook model from one deployment request.

use crate::domain::model::{ChecklistRow, ClientBlock, DocumentModel, ModuleRow, Platform};
use crate::utils::error::{DeployError, Result};
use chrono::Local;

pub const STATUS_TO_DEPLOY: &str = "À déployer";
pub const OWNER_UNASSIGNED: &str = "À assigner";

const DEPLOYMENT_STEPS: [&str; 9] = [
    "1. Vérification des prérequis techniques",
    "2. Création des environnements (Test/Production)",
    "3. Configuration des modules sélectionnés",
    "4. Import des données initiales",
    "5. Création des comptes utilisateurs",
    "6. Tests de validation",
    "7. Formation des utilisateurs clés",
    "8. Mise en production",
    "9. Support post-déploiement (2 semaines)",
];

const CHECKLIST_TASKS: [&str; 7] = [
    "Environnement de test créé",
    "Modules configurés",
    "Données importées",
    "Utilisateurs créés",
    "Tests validés",
    "Formation effectuée",
    "Go-Live approuvé",
];

/// Fills the fixed notification email template.
///
/// Pure: identical arguments always yield byte-identical output.
pub fn render_email(
    platform: &Platform,
    client: &str,
    siret: &str,
    modules: &[String],
) -> Result<String> {
    check_request(platform, client, siret, modules)?;

    let modules_str = modules.join(", ");
    Ok(format!(
        "Objet: Déploiement {platform} - {client}\n\
         \n\
         Bonjour,\n\
         \n\
         Nous vous confirmons le déploiement de la plateforme {platform} pour le client suivant :\n\
         \n\
         **Informations client :**\n\
         - Nom : {client}\n\
         - SIRET : {siret}\n\
         \n\
         **Modules à déployer :**\n\
         {modules_str}\n\
         \n\
         **Prochaines étapes :**\n\
         1. Création des accès utilisateurs\n\
         2. Configuration des modules sélectionnés\n\
         3. Formation des utilisateurs\n\
         4. Tests de validation\n\
         \n\
         L'équipe de déploiement se tient à votre disposition pour toute question.\n\
         \n\
         Cordialement,\n\
         L'équipe Déploiement\n",
        platform = platform.name,
        client = client,
        siret = siret,
        modules_str = modules_str,
    ))
}

/// Builds the runbook document model. Deterministic except for the embedded
/// generation date (DD/MM/YYYY).
pub fn build_document_model(
    platform: &Platform,
    client: &str,
    siret: &str,
    modules: &[String],
) -> Result<DocumentModel> {
    check_request(platform, client, siret, modules)?;

    let date = Local::now().format("%d/%m/%Y").to_string();
    Ok(DocumentModel {
        title: format!("Procédure de Déploiement {}", platform.name),
        client: ClientBlock {
            name: client.to_string(),
            siret: siret.to_string(),
            date,
        },
        modules: modules
            .iter()
            .map(|module| ModuleRow {
                module: module.clone(),
                status: STATUS_TO_DEPLOY.to_string(),
                owner: OWNER_UNASSIGNED.to_string(),
            })
            .collect(),
        steps: DEPLOYMENT_STEPS.iter().map(|s| s.to_string()).collect(),
        checklist: CHECKLIST_TASKS
            .iter()
            .map(|task| ChecklistRow {
                task: task.to_string(),
                date: String::new(),
                owner: String::new(),
            })
            .collect(),
    })
}

/// Presence checks plus the subset check against the platform's supported set.
/// The form layer only offers valid choices, but the contract is enforced here
/// too so the functions never emit malformed output.
fn check_request(
    platform: &Platform,
    client: &str,
    siret: &str,
    modules: &[String],
) -> Result<()> {
    if client.trim().is_empty() {
        return Err(DeployError::ValidationError {
            message: "client name is empty".to_string(),
        });
    }
    if siret.trim().is_empty() {
        return Err(DeployError::ValidationError {
            message: "SIRET is empty".to_string(),
        });
    }
    if modules.is_empty() {
        return Err(DeployError::ValidationError {
            message: "no module selected".to_string(),
        });
    }
    for module in modules {
        if !platform.supports(module) {
            return Err(DeployError::ModuleNotSupportedError {
                module: module.clone(),
                platform: platform.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn email_fills_subject_and_module_line() {
        let catalog = Catalog::builtin();
        let pixid = catalog.lookup("Pixid").unwrap();
        let email = render_email(
            pixid,
            "Acme SA",
            "123 456 789 00012",
            &modules(&["Commandes", "Contrats"]),
        )
        .unwrap();

        assert!(email.contains("Déploiement Pixid - Acme SA"));
        assert!(email.lines().any(|line| line == "Commandes, Contrats"));
        assert!(email.contains("- SIRET : 123 456 789 00012"));
    }

    #[test]
    fn email_is_pure() {
        let catalog = Catalog::builtin();
        let baps = catalog.lookup("Baps").unwrap();
        let selection = modules(&["Heures", "Factures"]);
        let first = render_email(baps, "Client", "123", &selection).unwrap();
        let second = render_email(baps, "Client", "123", &selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn document_model_has_fixed_shape() {
        let catalog = Catalog::builtin();
        let pixid = catalog.lookup("Pixid").unwrap();
        let model = build_document_model(
            pixid,
            "Acme SA",
            "123 456 789 00012",
            &modules(&["Commandes", "Contrats"]),
        )
        .unwrap();

        assert_eq!(model.title, "Procédure de Déploiement Pixid");
        assert_eq!(model.modules.len(), 2);
        for row in &model.modules {
            assert_eq!(row.status, STATUS_TO_DEPLOY);
            assert_eq!(row.owner, OWNER_UNASSIGNED);
        }
        assert_eq!(model.steps.len(), 9);
        assert!(model.steps[0].starts_with("1."));
        assert!(model.steps[8].starts_with("9."));
        assert_eq!(model.checklist.len(), 7);
        assert_eq!(model.checklist[0].task, "Environnement de test créé");
        assert_eq!(model.checklist[6].task, "Go-Live approuvé");
        for row in &model.checklist {
            assert!(row.date.is_empty());
            assert!(row.owner.is_empty());
        }
    }

    #[test]
    fn document_date_uses_day_month_year() {
        let catalog = Catalog::builtin();
        let baps = catalog.lookup("Baps").unwrap();
        let model =
            build_document_model(baps, "Client", "123", &modules(&["Heures"])).unwrap();
        let date = &model.client.date;
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[2], b'/');
        assert_eq!(date.as_bytes()[5], b'/');
    }

    #[test]
    fn empty_client_fails_validation() {
        let catalog = Catalog::builtin();
        let baps = catalog.lookup("Baps").unwrap();
        let err = render_email(baps, "", "123", &modules(&["Heures"])).unwrap_err();
        assert!(matches!(err, DeployError::ValidationError { .. }));
    }

    #[test]
    fn empty_siret_and_empty_modules_fail_validation() {
        let catalog = Catalog::builtin();
        let baps = catalog.lookup("Baps").unwrap();
        assert!(matches!(
            render_email(baps, "Client", "", &modules(&["Heures"])),
            Err(DeployError::ValidationError { .. })
        ));
        assert!(matches!(
            build_document_model(baps, "Client", "123", &[]),
            Err(DeployError::ValidationError { .. })
        ));
    }

    #[test]
    fn unsupported_module_is_rejected() {
        let catalog = Catalog::builtin();
        // Pixid does not carry Heures.
        let pixid = catalog.lookup("Pixid").unwrap();
        let err =
            build_document_model(pixid, "Client", "123", &modules(&["Heures"])).unwrap_err();
        assert!(matches!(
            err,
            DeployError::ModuleNotSupportedError { ref module, ref platform }
                if module == "Heures" && platform == "Pixid"
        ));
    }
}
