//! Line-oriented console used by the interactive session.
//!
//! The binary backs this with a terminal prompt; [`ScriptedConsole`] replays
//! canned input and records everything shown, so whole sessions can be
//! driven without a terminal.

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;

#[async_trait]
pub trait Console: Send {
    /// Show `prompt` and read one line. `Ok(None)` means input is exhausted.
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str);
}

/// Replays queued lines as input and captures prompts and output in order.
///
/// A testing aid: the binary never uses it. Downstream crates can use it to
/// drive a [`Session`](crate::Session) end to end and assert on the transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and output line, in the order they happened.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Number of transcript lines equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.transcript.iter().filter(|l| *l == line).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    /// Input lines that were never consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}
