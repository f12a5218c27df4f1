//! Session state and the one-pass generation flow:
//! Catalog -> Assembler -> Renderer, appending to history on success.

use crate::core::assembler;
use crate::core::catalog::Catalog;
use crate::domain::model::{DeploymentRequest, HistoryEntry};
use crate::domain::ports::DocumentRenderer;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

/// In-memory state for one interactive session. Owned by the caller; the
/// generation core itself stays stateless.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Per-platform generation counts in first-seen order, for the UI-layer
    /// chart summary.
    pub fn platform_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.history {
            match counts.iter_mut().find(|(name, _)| name == &entry.platform) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.platform.clone(), 1)),
            }
        }
        counts
    }

    /// History as CSV with columns date,platform,client,siret,modules
    /// (modules comma-joined inside the one field).
    pub fn history_csv(&self) -> Result<String> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.write_record(["date", "platform", "client", "siret", "modules"])?;
            for entry in &self.history {
                let joined = entry.modules.join(", ");
                writer.write_record([
                    entry.date.as_str(),
                    entry.platform.as_str(),
                    entry.client.as_str(),
                    entry.siret.as_str(),
                    joined.as_str(),
                ])?;
            }
            writer.flush()?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }
}

/// What one successful generation hands back to the form layer.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    pub email: String,
    /// Suggested download name, `deployment_<platform>_<YYYYMMDD_HHMM>.pdf`.
    pub filename: String,
    #[serde(skip)]
    pub pdf: Vec<u8>,
}

pub struct Generator<R: DocumentRenderer> {
    catalog: Catalog,
    renderer: R,
}

impl<R: DocumentRenderer> Generator<R> {
    pub fn new(catalog: Catalog, renderer: R) -> Self {
        Self { catalog, renderer }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One synchronous pass. On success the request is appended to the
    /// session history; on any error no partial artifact is produced and
    /// the history is untouched.
    pub fn generate(
        &self,
        session: &mut Session,
        request: &DeploymentRequest,
    ) -> Result<GenerationOutput> {
        let platform = self.catalog.lookup(&request.platform)?;
        tracing::debug!("Generating deployment documents for {}", platform.name);

        let email = assembler::render_email(
            platform,
            &request.client,
            &request.siret,
            &request.modules,
        )?;
        let model = assembler::build_document_model(
            platform,
            &request.client,
            &request.siret,
            &request.modules,
        )?;
        let pdf = self.renderer.render(&model)?;

        let now = Local::now();
        session.record(HistoryEntry {
            date: now.format("%Y-%m-%d %H:%M").to_string(),
            platform: platform.name.clone(),
            client: request.client.clone(),
            siret: request.siret.clone(),
            modules: request.modules.clone(),
        });
        tracing::info!(
            "Generated runbook for {} ({} modules), history now has {} entries",
            platform.name,
            request.modules.len(),
            session.history.len()
        );

        Ok(GenerationOutput {
            email,
            filename: export_filename(&platform.name, now),
            pdf,
        })
    }

    /// Email-only path. Mirrors the form's separate email button: validates
    /// and fills the template without touching the history.
    pub fn generate_email(&self, request: &DeploymentRequest) -> Result<String> {
        let platform = self.catalog.lookup(&request.platform)?;
        assembler::render_email(platform, &request.client, &request.siret, &request.modules)
    }
}

pub fn export_filename(platform: &str, at: DateTime<Local>) -> String {
    format!("deployment_{}_{}.pdf", platform, at.format("%Y%m%d_%H%M"))
}
