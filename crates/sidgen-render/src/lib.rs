//! Rendering core for sidgen project pages.
//!
//! Turns collected project metadata into a complete, self-contained HTML
//! document. Everything in this crate is string-in/string-out; console and
//! filesystem concerns live in `sidgen-scaffold`.

pub mod escape;
pub mod page;
pub mod render;
pub mod slug;
pub mod templates;

pub use escape::escape_html;
pub use page::{ProjectPage, StepsSection};
pub use render::{PageRenderer, RenderError};
pub use slug::{normalize, ProjectSlug};
