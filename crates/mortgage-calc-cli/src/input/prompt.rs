use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

/// Line-oriented console prompts.
///
/// Answers are re-asked until they parse and pass the given field check, so a
/// caller only ever sees values that satisfy that one rule.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask until the answer parses as `T` and `validate` reports nothing.
    pub fn ask_validated<T, F>(&mut self, prompt: &str, validate: F) -> io::Result<T>
    where
        T: FromStr + Copy,
        T::Err: Display,
        F: Fn(T, &mut Vec<String>),
    {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => {
                    let mut errors = Vec::new();
                    validate(value, &mut errors);
                    if errors.is_empty() {
                        return Ok(value);
                    }
                    writeln!(self.writer, "{}", errors.join("\n").red())?;
                }
                Err(e) => {
                    writeln!(self.writer, "{}", format!("Invalid input: {e}").red())?;
                }
            }
        }
    }

    /// Yes/no question; anything else is asked again.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let question = format!("{prompt} [y/n]");
        loop {
            match self.read_answer(&question)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "{}", "Please answer y or n.".red())?,
            }
        }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt} ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }
}
