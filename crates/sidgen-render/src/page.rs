//! Data model for a collected project page.

/// The "Hur den gjordes" section of a project page.
///
/// Exactly one layout is active per page; the variant also selects the CSS
/// class modifier on the steps container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepsSection {
    /// Ordered steps, each an ordered run of paragraphs. The 1-based step
    /// position determines the associated image filename (`step_{n}.jpg`).
    Images(Vec<Vec<String>>),
    /// A flat run of paragraphs rendered without per-step images.
    Centered(Vec<String>),
}

impl StepsSection {
    /// CSS class for the steps container.
    pub fn css_class(&self) -> &'static str {
        match self {
            StepsSection::Images(_) => "project-steps",
            StepsSection::Centered(_) => "project-steps centered-text",
        }
    }

    /// Number of step images the rendered page will reference.
    pub fn image_count(&self) -> usize {
        match self {
            StepsSection::Images(steps) => steps.len(),
            StepsSection::Centered(_) => 0,
        }
    }
}

/// Collected metadata for a single project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    /// Display title, raw (escaped at render time).
    pub title: String,
    /// Description paragraphs in display order.
    pub description: Vec<String>,
    /// The steps section in one of its two layouts.
    pub steps: StepsSection,
}

impl ProjectPage {
    /// Meta description: paragraphs individually trimmed, empties dropped,
    /// joined with a single space. Escaping happens once, on the joined
    /// result, at render time.
    pub fn meta_description(&self) -> String {
        self.description
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_description_joins_trimmed_paragraphs() {
        let page = ProjectPage {
            title: "Lampa".to_string(),
            description: vec![
                "  Första raden. ".to_string(),
                "   ".to_string(),
                "Andra raden.".to_string(),
            ],
            steps: StepsSection::Centered(vec![]),
        };

        assert_eq!(page.meta_description(), "Första raden. Andra raden.");
    }

    #[test]
    fn image_count_follows_layout() {
        let images = StepsSection::Images(vec![vec!["a".into()], vec!["b".into()]]);
        let centered = StepsSection::Centered(vec!["a".into(), "b".into(), "c".into()]);

        assert_eq!(images.image_count(), 2);
        assert_eq!(centered.image_count(), 0);
    }

    #[test]
    fn css_class_carries_centered_modifier() {
        assert_eq!(
            StepsSection::Images(vec![]).css_class(),
            "project-steps"
        );
        assert_eq!(
            StepsSection::Centered(vec![]).css_class(),
            "project-steps centered-text"
        );
    }
}
