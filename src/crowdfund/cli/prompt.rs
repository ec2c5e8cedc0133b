use super::print::print_error;
use crowdfund::api::is_cancel;
use crowdfund::error::{CrowdfundError, Result};
use std::io::{self, BufRead, Write};

/// Answer to a field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Reply {
    Text(String),
    /// The cancel token was entered, or input ended.
    Cancel,
}

/// Reads answers from `input`, writing prompts to stdout.
///
/// Secret prompts are masked with `rpassword` when `interactive` is set;
/// otherwise they are read like any other line so scripted input works.
pub(super) struct Console<R> {
    input: R,
    interactive: bool,
    closed: bool,
}

impl<R: BufRead> Console<R> {
    pub(super) fn new(input: R, interactive: bool) -> Self {
        Self {
            input,
            interactive,
            closed: false,
        }
    }

    /// Whether input has reached end of file.
    pub(super) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Reads one raw line. `None` at end of input.
    pub(super) fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush().map_err(CrowdfundError::Io)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(CrowdfundError::Io)? == 0 {
            self.closed = true;
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub(super) fn ask(&mut self, prompt: &str) -> Result<Reply> {
        Ok(match self.read_line(prompt)? {
            Some(line) if !is_cancel(&line) => Reply::Text(line),
            _ => Reply::Cancel,
        })
    }

    pub(super) fn ask_secret(&mut self, prompt: &str) -> Result<Reply> {
        if !self.interactive {
            return self.ask(prompt);
        }
        let secret = rpassword::prompt_password(prompt).map_err(CrowdfundError::Io)?;
        Ok(if is_cancel(&secret) {
            Reply::Cancel
        } else {
            Reply::Text(secret)
        })
    }

    /// Prompts until `check` accepts the answer or the user cancels.
    ///
    /// Recoverable errors are shown and the prompt repeats; anything else is
    /// returned.
    pub(super) fn ask_until<T, F>(&mut self, prompt: &str, check: F) -> Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        self.until(prompt, false, check)
    }

    pub(super) fn ask_secret_until<T, F>(&mut self, prompt: &str, check: F) -> Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        self.until(prompt, true, check)
    }

    fn until<T, F>(&mut self, prompt: &str, secret: bool, mut check: F) -> Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            let reply = if secret {
                self.ask_secret(prompt)?
            } else {
                self.ask(prompt)?
            };
            let text = match reply {
                Reply::Text(text) => text,
                Reply::Cancel => return Ok(None),
            };
            match check(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_recoverable() => print_error(&e),
                Err(e) => return Err(e),
            }
        }
    }
}
