use serde::{Deserialize, Serialize};

/// A deployment target. Defined once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    /// Display accent, `#RRGGBB`. UI emphasis only, no semantic behavior.
    pub color: String,
    /// Ordered subset of the universal module set.
    pub modules: Vec<String>,
}

impl Platform {
    pub fn supports(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}

/// One generate action worth of user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub platform: String,
    pub client: String,
    pub siret: String,
    pub modules: Vec<String>,
}

/// Append-only record of a past generation. Never revalidated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub platform: String,
    pub client: String,
    pub siret: String,
    pub modules: Vec<String>,
}

/// Renderer-agnostic runbook content, built fresh per request.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentModel {
    pub title: String,
    pub client: ClientBlock,
    pub modules: Vec<ModuleRow>,
    pub steps: Vec<String>,
    pub checklist: Vec<ChecklistRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientBlock {
    pub name: String,
    pub siret: String,
    /// DD/MM/YYYY, the generation date.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRow {
    pub module: String,
    pub status: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistRow {
    pub task: String,
    pub date: String,
    pub owner: String,
}
