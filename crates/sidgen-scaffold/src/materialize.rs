//! End-to-end project scaffolding.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use sidgen_render::{normalize, PageRenderer, RenderError};

use crate::collect::collect_page;
use crate::prompt::{Console, PromptError};

/// Where generated artifacts go. Passed in explicitly so the flow can run
/// against any root (tests use a tempdir).
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Directory receiving `{slug}.html`.
    pub projects_dir: PathBuf,
    /// Directory under which the per-project image folder is created.
    pub images_dir: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("projects"),
            images_dir: PathBuf::from("images/projects"),
        }
    }
}

/// Errors that can occur while scaffolding a project.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a scaffolding run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Page written and image folder created.
    Created {
        html_path: PathBuf,
        images_path: PathBuf,
    },
    /// The operator backed out at a checkpoint, or the name normalized to
    /// nothing. No artifacts were touched.
    Aborted,
}

/// Run the full interactive flow: name, confirmations, content, render,
/// write.
///
/// Nothing destructive happens before the final writes, and both writes are
/// idempotent, so an aborted or crashed run never needs cleanup.
pub fn materialize<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ScaffoldConfig,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let raw_name = console.non_empty("Projektets namn (för fil/folder, t.ex. vaglampa): ")?;

    let Some(slug) = normalize(&raw_name) else {
        console.say("Kunde inte skapa ett giltigt projektnamn. Försök igen.")?;
        return Ok(ScaffoldOutcome::Aborted);
    };

    console.say(&format!("Föreslaget projektnamn: {slug}"))?;
    if !console.confirm("Vill du använda detta namn?")? {
        console.say("Avbruten.")?;
        return Ok(ScaffoldOutcome::Aborted);
    }

    let html_path = config.projects_dir.join(format!("{slug}.html"));
    let images_path = config.images_dir.join(slug.as_str());

    if html_path.exists()
        && !console.confirm(&format!("Filen {slug}.html finns redan. Skriv över?"))?
    {
        console.say("Avbruten.")?;
        return Ok(ScaffoldOutcome::Aborted);
    }

    if images_path.exists()
        && !console.confirm(&format!(
            "Mappen {} finns redan. Fortsätt?",
            images_path.display()
        ))?
    {
        console.say("Avbruten.")?;
        return Ok(ScaffoldOutcome::Aborted);
    }

    let page = collect_page(console)?;
    let html = PageRenderer::new().render(&slug, &page)?;

    fs::create_dir_all(&config.projects_dir).map_err(|e| ScaffoldError::Write {
        path: config.projects_dir.clone(),
        source: e,
    })?;
    fs::create_dir_all(&images_path).map_err(|e| ScaffoldError::Write {
        path: images_path.clone(),
        source: e,
    })?;
    fs::write(&html_path, html).map_err(|e| ScaffoldError::Write {
        path: html_path.clone(),
        source: e,
    })?;
    tracing::debug!("Wrote {}", html_path.display());

    console.say("")?;
    console.say("Klart!")?;
    console.say(&format!("Skapade: {}", html_path.display()))?;
    console.say(&format!("Skapade mapp: {}", images_path.display()))?;
    console.say("Lägg till bilderna main_1.jpg, main_2.jpg, main_3.jpg och ev. step_#.jpg i mappen.")?;

    Ok(ScaffoldOutcome::Created {
        html_path,
        images_path,
    })
}
