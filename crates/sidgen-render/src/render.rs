//! Project page renderer.

use crate::escape::escape_html;
use crate::page::{ProjectPage, StepsSection};
use crate::slug::ProjectSlug;
use crate::templates::{PageContext, TemplateEngine};

/// Errors that can occur while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render page template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders collected page data into a complete HTML document.
///
/// Pure and deterministic: no I/O, and identical inputs produce
/// byte-identical output.
pub struct PageRenderer {
    templates: TemplateEngine,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self {
            templates: TemplateEngine::new(),
        }
    }

    /// Render the document for `page` under the identifier `slug`.
    pub fn render(&self, slug: &ProjectSlug, page: &ProjectPage) -> Result<String, RenderError> {
        let ctx = PageContext {
            slug: slug.as_str().to_string(),
            title_html: escape_html(&page.title),
            meta_description_html: escape_html(&page.meta_description()),
            description_html: paragraph_block(&page.description, 16),
            steps_html: steps_block(slug, &page.steps),
            steps_class: page.steps.css_class().to_string(),
        };

        Ok(self.templates.render_page(&ctx)?)
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render paragraphs as `<p>` lines at the given indent, joined by newlines.
/// An empty list yields an empty string, leaving an empty region inside the
/// surrounding container.
fn paragraph_block(paragraphs: &[String], indent: usize) -> String {
    paragraphs
        .iter()
        .map(|p| format!("{:indent$}<p>{}</p>", "", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the inner markup of the steps container for either layout.
fn steps_block(slug: &ProjectSlug, steps: &StepsSection) -> String {
    match steps {
        StepsSection::Centered(paragraphs) => paragraph_block(paragraphs, 16),
        StepsSection::Images(groups) => {
            let rows: Vec<String> = groups
                .iter()
                .enumerate()
                .map(|(i, paragraphs)| {
                    let index = i + 1;
                    format!(
                        "                <div class=\"step-row\">\n\
                         {:20}<img src=\"../images/projects/{slug}/step_{index}.jpg\" alt=\"Steg {index}\">\n\
                         {:20}<div class=\"step-text\">\n\
                         {paragraphs}\n\
                         {:20}</div>\n\
                         {:16}</div>",
                        "", "", "", "",
                        slug = slug,
                        index = index,
                        paragraphs = paragraph_block(paragraphs, 24),
                    )
                })
                .collect();

            rows.join("\n\n")
        }
    }
}
