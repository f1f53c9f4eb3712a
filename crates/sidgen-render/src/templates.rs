//! Template engine for rendering project pages.

use minijinja::{context, Environment};

/// Fully prepared values for one page render.
///
/// The `*_html` fields are pre-escaped (or pre-rendered) HTML and go into
/// the template via `| safe`; `slug` and `steps_class` are restricted to
/// safe characters by construction.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub slug: String,
    pub title_html: String,
    pub meta_description_html: String,
    pub description_html: String,
    pub steps_html: String,
    pub steps_class: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // The generated document ends in a newline; don't let the engine
        // strip it.
        env.set_keep_trailing_newline(true);

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the project page template.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            slug => &ctx.slug,
            title_html => &ctx.title_html,
            meta_description_html => &ctx.meta_description_html,
            description_html => &ctx.description_html,
            steps_html => &ctx.steps_html,
            steps_class => &ctx.steps_class,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Layout is fixed; the trailing whitespace on some head lines is part of the
// published page format and must survive as-is.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="sv">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">    
    <meta name="description" content="{{ meta_description_html | safe }}">        
    <meta property="og:image" content="https://philipwallin.pw/images/projects/{{ slug }}/main_2.jpg">    
    <title>{{ title_html | safe }} - Philip Wallin</title>    
    <link rel="icon" type="image/x-icon" href="../images/favicon.ico">    
    <link rel="stylesheet" href="../style.css">
</head>
<body>
    <nav>
        <div class="logo">
            <a href="../index.html"><img src="../images/logo.png" alt="Logo"></a>
        </div>
        <ul class="nav-links">
            <li><a href="../index.html">Projekt</a></li>
            <li><a href="../om_mig.html">Om mig</a></li>
        </ul>
    </nav>
    
    <section class="project-detail">
        <h1>{{ title_html | safe }}</h1>
        <div class="project-content">
            <div class="project-description">
{{ description_html | safe }}
            </div>
            <div class="project-images">
                <img src="../images/projects/{{ slug }}/main_1.jpg" alt="{{ title_html | safe }} bild 1">
                <img src="../images/projects/{{ slug }}/main_2.jpg" alt="{{ title_html | safe }} bild 2">
                <img src="../images/projects/{{ slug }}/main_3.jpg" alt="{{ title_html | safe }} bild 3">
            </div>
            
            <h2>Hur den gjordes</h2>
            
            <div class="{{ steps_class }}">
{{ steps_html | safe }}
            </div>
        </div>
    </section>
    <!-- Cloudflare Web Analytics --><script defer src='https://static.cloudflareinsights.com/beacon.min.js' data-cf-beacon='{"token": "f9bdf25e4d7c4efc8e16c66a618ee4c4"}'></script><!-- End Cloudflare Web Analytics -->
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> PageContext {
        PageContext {
            slug: "test".to_string(),
            title_html: "Test".to_string(),
            meta_description_html: "Hello".to_string(),
            description_html: "                <p>Hello</p>".to_string(),
            steps_html: "                <p>A</p>".to_string(),
            steps_class: "project-steps centered-text".to_string(),
        }
    }

    #[test]
    fn renders_head_block() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert!(html.contains("<title>Test - Philip Wallin</title>"));
        assert!(html.contains(r#"<meta name="description" content="Hello">"#));
        assert!(html.contains(
            "https://philipwallin.pw/images/projects/test/main_2.jpg"
        ));
    }

    #[test]
    fn keeps_trailing_newline() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn does_not_reescape_prepared_html() {
        let engine = TemplateEngine::new();
        let mut ctx = sample_context();
        ctx.title_html = "Tom &amp; Jerry".to_string();

        let html = engine.render_page(&ctx).unwrap();

        assert!(html.contains("<h1>Tom &amp; Jerry</h1>"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn embeds_analytics_snippet_verbatim() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert!(html.contains(
            r#"data-cf-beacon='{"token": "f9bdf25e4d7c4efc8e16c66a618ee4c4"}'"#
        ));
    }
}
