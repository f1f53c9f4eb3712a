//! Console collection and filesystem scaffolding for sidgen.
//!
//! This crate owns everything impure about page generation: the prompt loops
//! that collect project metadata and the materializer that writes the
//! rendered page and its image folder to disk. The prompts run over generic
//! reader/writer handles so the whole flow is testable without a terminal.

pub mod collect;
pub mod materialize;
pub mod prompt;

pub use collect::collect_page;
pub use materialize::{materialize, ScaffoldConfig, ScaffoldError, ScaffoldOutcome};
pub use prompt::{Console, PromptError};
