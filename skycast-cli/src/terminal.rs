use std::io::{self, BufRead, IsTerminal, Write};

use async_trait::async_trait;
use inquire::{InquireError, Text};
use skycast_core::Console;
use tracing::debug;

/// Console on the user's terminal.
///
/// Prompts go through `inquire` when stdin is a TTY; piped input falls back
/// to plain line reads so the tool can be scripted.
#[derive(Debug)]
pub struct TerminalConsole {
    piped: bool,
}

impl TerminalConsole {
    /// Console for this process, reading plain lines when stdin is redirected.
    pub fn new() -> Self {
        Self::for_stdin(io::stdin().is_terminal())
    }

    fn for_stdin(stdin_is_terminal: bool) -> Self {
        if !stdin_is_terminal {
            debug!("stdin is not a terminal, reading plain lines");
        }
        Self { piped: !stdin_is_terminal }
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.piped {
            let message = prompt.to_owned();
            let answer = tokio::task::spawn_blocking(move || Text::new(&message).prompt())
                .await
                .map_err(io::Error::other)?;

            match answer {
                Ok(line) => return Ok(Some(line)),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(None);
                }
                Err(InquireError::NotTTY) => {
                    debug!("stdin is not a terminal, reading plain lines");
                    self.piped = true;
                }
                Err(InquireError::IO(err)) => return Err(err),
                Err(err) => return Err(io::Error::other(err)),
            }
        }

        let prompt = prompt.to_owned();
        tokio::task::spawn_blocking(move || read_stdin_line(&prompt))
            .await
            .map_err(io::Error::other)?
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

fn read_stdin_line(prompt: &str) -> io::Result<Option<String>> {
    read_plain_line(&mut io::stdin().lock(), &mut io::stdout().lock(), prompt)
}

fn read_plain_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
