//! Line-oriented console prompting.

use std::io::{BufRead, Write};

/// Answers accepted as "yes" by [`Console::confirm`]. Compared after
/// trimming and lowercasing; everything else, including a blank line,
/// counts as "no".
const AFFIRMATIVE: &[&str] = &["j", "ja", "y", "yes"];

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input stream closed before a valid answer was given")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A prompt/response console over arbitrary reader and writer handles.
///
/// Production code hands in locked stdin/stdout; tests drive it with an
/// `io::Cursor` script and a `Vec<u8>` transcript.
pub struct Console<R, W> {
    reader: R,
    // Crate-visible so collector and materializer tests can inspect the
    // transcript.
    pub(crate) writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Print a prompt (no trailing newline) and read one trimmed line.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Print a full line of output.
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Prompt until a non-empty (after trimming) value is entered.
    pub fn non_empty(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            let value = self.ask(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.say("Fältet får inte vara tomt.")?;
        }
    }

    /// Prompt until an integer of at least `min` is entered.
    ///
    /// A blank answer when `min` is 0 returns 0. Legacy escape hatch for
    /// optional counts: a blank entry is indistinguishable from an explicit
    /// "0". No current caller passes `min = 0`.
    pub fn int_min(&mut self, prompt: &str, min: i64) -> Result<i64, PromptError> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() && min == 0 {
                return Ok(0);
            }
            let value: i64 = match raw.parse() {
                Ok(v) => v,
                Err(_) => {
                    self.say("Skriv ett heltal.")?;
                    continue;
                }
            };
            if value < min {
                self.say(&format!("Talet måste vara minst {min}."))?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Ask a yes/no question. Only the fixed affirmative set counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(&format!("{prompt} (j/n): "))?;
        Ok(AFFIRMATIVE.contains(&answer.to_lowercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn non_empty_reprompts_on_blank_lines() {
        let mut c = console("\n   \nVäglampa\n");

        let value = c.non_empty("Titel: ").unwrap();

        assert_eq!(value, "Väglampa");
        let transcript = String::from_utf8(c.writer).unwrap();
        assert_eq!(transcript.matches("Fältet får inte vara tomt.").count(), 2);
    }

    #[test]
    fn int_min_rejects_garbage_and_low_values() {
        let mut c = console("abc\n0\n3\n");

        let value = c.int_min("Antal: ", 1).unwrap();

        assert_eq!(value, 3);
        let transcript = String::from_utf8(c.writer).unwrap();
        assert!(transcript.contains("Skriv ett heltal."));
        assert!(transcript.contains("Talet måste vara minst 1."));
    }

    #[test]
    fn int_min_rejects_negative_numbers() {
        let mut c = console("-2\n5\n");

        let value = c.int_min("Antal: ", 1).unwrap();

        assert_eq!(value, 5);
        let transcript = String::from_utf8(c.writer).unwrap();
        assert!(transcript.contains("Talet måste vara minst 1."));
    }

    #[test]
    fn blank_means_zero_when_minimum_is_zero() {
        let mut c = console("\n");

        assert_eq!(c.int_min("Antal: ", 0).unwrap(), 0);
    }

    #[test]
    fn blank_is_not_zero_when_minimum_is_one() {
        let mut c = console("\n1\n");

        assert_eq!(c.int_min("Antal: ", 1).unwrap(), 1);
        let transcript = String::from_utf8(c.writer).unwrap();
        assert!(transcript.contains("Skriv ett heltal."));
    }

    #[test]
    fn confirm_accepts_the_affirmative_set() {
        for answer in ["j", "ja", "y", "yes", "J", "JA", "Yes", "  ja  "] {
            let mut c = console(&format!("{answer}\n"));
            assert!(c.confirm("Fortsätt?").unwrap(), "answer: {answer:?}");
        }
    }

    #[test]
    fn confirm_rejects_everything_else() {
        for answer in ["", "no", "n", "maybe", "jaa", "yes!"] {
            let mut c = console(&format!("{answer}\n"));
            assert!(!c.confirm("Fortsätt?").unwrap(), "answer: {answer:?}");
        }
    }

    #[test]
    fn confirm_appends_answer_hint() {
        let mut c = console("j\n");
        c.confirm("Vill du använda detta namn?").unwrap();

        let transcript = String::from_utf8(c.writer).unwrap();
        assert!(transcript.contains("Vill du använda detta namn? (j/n): "));
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut c = console("\n");

        // First blank line triggers a re-prompt; then the script runs dry.
        let result = c.non_empty("Titel: ");

        assert!(matches!(result, Err(PromptError::InputClosed)));
    }
}
