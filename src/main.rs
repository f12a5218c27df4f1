use anyhow::Context;
use clap::Parser;
use deploygen::utils::{logger, validation::Validate};
use deploygen::{Catalog, CatalogFile, CliConfig, DeployError, Generator, PdfRenderer, Session};
use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting deploygen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(e.exit_code());
    }

    let catalog = match &config.catalog {
        Some(path) => match CatalogFile::from_file(path).and_then(CatalogFile::into_catalog) {
            Ok(catalog) => {
                tracing::info!("Loaded platform catalog from {}", path);
                catalog
            }
            Err(e) => {
                tracing::error!("Failed to load catalog file {}: {}", path, e);
                eprintln!("❌ {}", e.user_message());
                std::process::exit(e.exit_code());
            }
        },
        None => Catalog::builtin(),
    };

    if config.list_platforms {
        for platform in catalog.platforms() {
            println!(
                "{} ({}): {}",
                platform.name,
                platform.color,
                platform.modules.join(", ")
            );
        }
        return Ok(());
    }

    let request = match config.request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            eprintln!("💡 --platform, --client, --siret et --modules sont requis");
            std::process::exit(e.exit_code());
        }
    };

    let generator = Generator::new(catalog, PdfRenderer::new());
    let mut session = Session::new();

    if config.email_only {
        match generator.generate_email(&request) {
            Ok(email) => {
                println!("{}", email);
                return Ok(());
            }
            Err(e) => fail(e),
        }
    }

    match generator.generate(&mut session, &request) {
        Ok(output) => {
            let full_path = Path::new(&config.output_path).join(&output.filename);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&full_path, &output.pdf)
                .with_context(|| format!("writing {}", full_path.display()))?;

            tracing::info!("PDF written to {}", full_path.display());
            if config.json {
                let summary = serde_json::json!({
                    "filename": output.filename,
                    "path": full_path.display().to_string(),
                    "history": session.history(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("✅ PDF généré : {}", full_path.display());
                println!();
                println!("{}", output.email);
                print!("{}", session.history_csv()?);
            }
            Ok(())
        }
        Err(e) => fail(e),
    }
}

fn fail(e: DeployError) -> ! {
    tracing::error!("Generation failed: {}", e);
    eprintln!("❌ {}", e.user_message());
    std::process::exit(e.exit_code());
}
