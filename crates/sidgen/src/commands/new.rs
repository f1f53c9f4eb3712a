//! Interactive page generation command.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sidgen_scaffold::{materialize, Console, ScaffoldConfig, ScaffoldOutcome};

/// Configuration file structure (sidgen.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_projects_dir")]
    projects_dir: String,
    #[serde(default = "default_images_dir")]
    images_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            images_dir: default_images_dir(),
        }
    }
}

fn default_projects_dir() -> String {
    "projects".to_string()
}
fn default_images_dir() -> String {
    "images/projects".to_string()
}

/// Load configuration from sidgen.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the new command.
pub async fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = ScaffoldConfig {
        projects_dir: PathBuf::from(&file_config.site.projects_dir),
        images_dir: PathBuf::from(&file_config.site.images_dir),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match materialize(&mut console, &config)? {
        ScaffoldOutcome::Created {
            html_path,
            images_path,
        } => {
            tracing::info!("Generated {}", html_path.display());
            tracing::info!("Image folder: {}", images_path.display());
        }
        ScaffoldOutcome::Aborted => {
            tracing::info!("No files were created.");
        }
    }

    Ok(())
}
