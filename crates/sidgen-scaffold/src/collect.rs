//! Interactive collection of page content.

use std::io::{BufRead, Write};

use sidgen_render::{ProjectPage, StepsSection};

use crate::prompt::{Console, PromptError};

/// Collect title, description, and steps for one page.
///
/// Never returns invalid data: every count has already met its minimum and
/// every paragraph is non-empty by the time this returns.
pub fn collect_page<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<ProjectPage, PromptError> {
    let title = console.non_empty("Titel: ")?;

    let description_count = console.int_min("Antal beskrivningsrader: ", 1)?;
    let mut description = Vec::with_capacity(description_count as usize);
    for idx in 1..=description_count {
        description.push(console.non_empty(&format!("Beskrivningsrad {idx}: "))?);
    }

    console.say("")?;
    console.say("Hur ska steg-sektionen se ut?")?;
    console.say("1) Steg med bilder")?;
    console.say("2) Bara text (centered-text)")?;

    let steps = loop {
        match console.ask("Välj 1 eller 2: ")?.as_str() {
            "1" => break collect_image_steps(console)?,
            "2" => break collect_centered_steps(console)?,
            _ => continue,
        }
    };

    Ok(ProjectPage {
        title,
        description,
        steps,
    })
}

/// One image per step, paragraphs grouped under it.
fn collect_image_steps<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<StepsSection, PromptError> {
    let step_count = console.int_min("Antal steg: ", 1)?;
    let mut steps = Vec::with_capacity(step_count as usize);

    for step_index in 1..=step_count {
        console.say(&format!("\nSteg {step_index}"))?;
        let paragraph_count = console.int_min("Antal stycken i steget: ", 1)?;
        let mut paragraphs = Vec::with_capacity(paragraph_count as usize);
        for p_index in 1..=paragraph_count {
            paragraphs.push(console.non_empty(&format!("  Text {p_index}: "))?);
        }
        steps.push(paragraphs);
    }

    Ok(StepsSection::Images(steps))
}

/// A flat paragraph run with no step images.
fn collect_centered_steps<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<StepsSection, PromptError> {
    let paragraph_count = console.int_min("Antal textstycken i steg-sektionen: ", 1)?;
    let mut paragraphs = Vec::with_capacity(paragraph_count as usize);
    for idx in 1..=paragraph_count {
        paragraphs.push(console.non_empty(&format!("Stegtext {idx}: "))?);
    }

    Ok(StepsSection::Centered(paragraphs))
}
