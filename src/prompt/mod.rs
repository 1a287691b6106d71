//! # Console Prompt
//!
//! Validated line input over any `BufRead`/`Write` pair.
//!
//! A [`Prompter`] writes a prompt, reads one line, trims and lowercases it and
//! checks it against the [`Field`]'s pattern. Bad input is answered with the
//! field's error message and the prompt is repeated; there is no retry limit.
//! The loop ends only when the input is valid or the user types a control
//! keyword, which comes back as [`Flow::Cancelled`] or [`Flow::Quit`].
//!
//! ```rust
//! use order_collector::prompt::{Field, Flow, Prompter};
//! use regex::Regex;
//! use std::io::Cursor;
//!
//! let digits = Regex::new(r"^[0-9]+$").unwrap();
//! let field = Field::new("Phone number:", &digits, "Phone number must only contain numbers");
//!
//! let mut prompter = Prompter::new(Cursor::new("abc\n021555\n"), Vec::new());
//! assert_eq!(prompter.ask(&field).unwrap(), Flow::Continue("021555".to_string()));
//! ```
//!
//! Closing stdin counts as quitting, so a piped script that runs out of input
//! ends the program cleanly. A line that is not valid UTF-8 is rejected like
//! any other malformed answer.

pub mod error;
pub mod flow;

pub use error::*;
pub use flow::*;

use regex::Regex;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// One validated input: what to ask, what to accept, what to say on rejection.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub prompt: &'a str,
    pub pattern: &'a Regex,
    pub error: &'a str,
}

impl<'a> Field<'a> {
    pub fn new(prompt: &'a str, pattern: &'a Regex, error: &'a str) -> Self {
        Self {
            prompt,
            pattern,
            error,
        }
    }
}

/// Console reader/writer pair used for every interaction with the user.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Asks until the input matches `field.pattern` or a control keyword is typed.
    ///
    /// Returns the normalized (trimmed, lowercased) input.
    pub fn ask(&mut self, field: &Field<'_>) -> Result<Flow<String>, PromptError> {
        loop {
            write!(self.output, "{}", field.prompt)?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                debug!(prompt = field.prompt, "Input closed");
                writeln!(self.output)?;
                return Ok(Flow::Quit);
            }

            // Undecodable bytes are malformed input like any other.
            let Ok(line) = std::str::from_utf8(&self.line) else {
                debug!(prompt = field.prompt, "Rejected non-UTF-8 input");
                writeln!(self.output, "{}", field.error)?;
                continue;
            };
            let input = line.trim().to_lowercase();
            trace!(prompt = field.prompt, input = %input, "Read line");

            if let Some(command) = Command::parse(&input) {
                debug!(prompt = field.prompt, ?command, "Control keyword");
                return Ok(command.into_flow());
            }
            if field.pattern.is_match(&input) {
                return Ok(Flow::Continue(input));
            }

            debug!(prompt = field.prompt, input = %input, "Rejected input");
            writeln!(self.output, "{}", field.error)?;
        }
    }

    /// Like [`ask`](Self::ask), then runs `parse` on the accepted input.
    ///
    /// A parse error is recoverable: its message is shown and the same field
    /// is asked again.
    pub fn ask_parsed<T, E: Display>(
        &mut self,
        field: &Field<'_>,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<Flow<T>, PromptError> {
        loop {
            let input = match self.ask(field)? {
                Flow::Continue(input) => input,
                Flow::Cancelled => return Ok(Flow::Cancelled),
                Flow::Quit => return Ok(Flow::Quit),
            };
            match parse(&input) {
                Ok(value) => return Ok(Flow::Continue(value)),
                Err(e) => {
                    debug!(prompt = field.prompt, input = %input, error = %e, "Rejected value");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Writes a line of output.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::LazyLock;

    static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+$").unwrap());

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn field() -> Field<'static> {
        Field::new("Name:", &LETTERS, "Letters only")
    }

    fn output(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn test_normalizes_and_accepts() {
        let mut p = prompter("  Alice \n");
        assert_eq!(p.ask(&field()).unwrap(), Flow::Continue("alice".to_string()));
        assert_eq!(output(&p), "Name:");
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompter("b0b\n\n42\nbob\n");
        assert_eq!(p.ask(&field()).unwrap(), Flow::Continue("bob".to_string()));
        let out = output(&p);
        assert_eq!(out.matches("Name:").count(), 4);
        assert_eq!(out.matches("Letters only").count(), 3);
    }

    #[test]
    fn test_control_keywords_win_over_pattern() {
        // "cc" and "qq" would match the letters pattern.
        assert_eq!(prompter("CC\n").ask(&field()).unwrap(), Flow::Cancelled);
        assert_eq!(prompter("Cancel\n").ask(&field()).unwrap(), Flow::Cancelled);
        assert_eq!(prompter(" qq\n").ask(&field()).unwrap(), Flow::Quit);
        assert_eq!(prompter("QUIT\n").ask(&field()).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_end_of_input_quits() {
        assert_eq!(prompter("").ask(&field()).unwrap(), Flow::Quit);
        assert_eq!(prompter("123\n").ask(&field()).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut p = Prompter::new(Cursor::new(b"caf\xe9\nbob\n".to_vec()), Vec::new());
        assert_eq!(p.ask(&field()).unwrap(), Flow::Continue("bob".to_string()));
        let out = output(&p);
        assert_eq!(out.matches("Name:").count(), 2);
        assert_eq!(out.matches("Letters only").count(), 1);
    }

    #[test]
    fn test_ask_parsed_reprompts_on_parse_error() {
        static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
        let field = Field::new("Count:", &DIGITS, "Digits only");
        let mut p = prompter("0\n9\n3\n");

        let flow = p
            .ask_parsed(&field, |s| match s.parse::<u32>() {
                Ok(n) if (1..=5).contains(&n) => Ok(n),
                _ => Err("Between 1 and 5"),
            })
            .unwrap();

        assert_eq!(flow, Flow::Continue(3));
        assert_eq!(output(&p).matches("Between 1 and 5").count(), 2);
    }

    #[test]
    fn test_ask_parsed_passes_through_cancel() {
        let mut p = prompter("cc\n");
        let flow = p.ask_parsed(&field(), |s| Ok::<_, String>(s.len())).unwrap();
        assert_eq!(flow, Flow::Cancelled);
    }
}
