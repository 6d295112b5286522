use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use skycast_core::{Config, Session, session::GENERIC_FAILURE};
use tracing::error;

use crate::terminal::TerminalConsole;

const BANNER: [&str; 4] = [
    "Welcome to ☁️ Skycast ☀️",
    "Enter a City and Receive Real-Time Weather Data. ",
    "Fetching Real-Time Weather Data...",
    "Please Wait...",
];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for any city, interactively")]
pub struct Cli {
    /// Read settings from this TOML file instead of the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the pauses in the startup banner.
    #[arg(long)]
    pub skip_intro: bool,

    /// Log more detail to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity; `RUST_LOG` wins over this.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let session = Session::from_config(&config).context("Failed to set up HTTP client")?;

        let delay = if self.skip_intro { Duration::ZERO } else { config.intro_delay() };
        play_banner(&mut io::stdout(), delay).await?;

        let mut console = TerminalConsole::new();
        if let Err(err) = session.run(&mut console).await {
            println!("{GENERIC_FAILURE}");
            error!(error = %err, "session ended unexpectedly");
        }

        Ok(())
    }
}

async fn play_banner<W: Write>(out: &mut W, delay: Duration) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
        out.flush()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    writeln!(out, "Ready to Begin!")
}
