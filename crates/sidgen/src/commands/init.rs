//! Initialize a site configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    for dir in ["projects", "images/projects"] {
        let path = Path::new(dir);
        if !path.exists() {
            fs::create_dir_all(path).with_context(|| format!("Failed to create {dir}"))?;
            tracing::info!("Created {dir}/");
        }
    }

    tracing::info!("Run 'sidgen new' to generate a project page.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Sidgen Configuration

[site]
# Directory where generated project pages are written
projects_dir = "projects"

# Directory under which per-project image folders are created
images_dir = "images/projects"
"#;
