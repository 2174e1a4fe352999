//! CLI for url2anki.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use url2anki_core::{config, logging};

use commands::{run_completions, run_man, run_scrape, run_version};

/// Generate Anki flashcards from a URL.
#[derive(Debug, Parser)]
#[command(name = "url2anki")]
#[command(
    about = "Generate Anki flashcards from a URL",
    long_about = "Generate Anki-formatted flashcards from a given URL and export them to a file to be imported into Anki"
)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(flatten)]
    pub scrape: ScrapeArgs,

    /// Enable debug-level logging (`--debug=false` overrides the config file).
    #[arg(
        short,
        long,
        global = true,
        env = "URL2ANKI_DEBUG",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub debug: Option<bool>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Flags for the default (scrape) action.
#[derive(Debug, Clone, clap::Args)]
pub struct ScrapeArgs {
    /// The URL to scrape for flashcards (EX: https://kubernetes.io/docs/reference/glossary/?all=true).
    #[arg(short, long, env = "URL2ANKI_URL", required = true, value_parser = parse_absolute_url)]
    pub url: Option<String>,

    /// The CSS selector for the questions (EX: div.term-name).
    #[arg(short, long, env = "URL2ANKI_QUESTION_SELECTOR", required = true)]
    pub question_selector: Option<String>,

    /// The CSS selector for the answers (EX: div.term-definition).
    #[arg(short, long, env = "URL2ANKI_ANSWER_SELECTOR", required = true)]
    pub answer_selector: Option<String>,

    /// The filename (including .json or .csv extension) to export flashcards to.
    #[arg(short, long, env = "URL2ANKI_OUTPUT_FILE", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Preview the flashcards before exporting (`--preview=false` overrides the config file).
    #[arg(
        short,
        long,
        env = "URL2ANKI_PREVIEW",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub preview: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the man page (roff) to stdout.
    Man,

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information.
    Version,
}

/// Accept only absolute URLs with a host (e.g. `https://example.com/page`).
fn parse_absolute_url(s: &str) -> Result<String, String> {
    let url = url::Url::parse(s).map_err(|e| format!("invalid URL {:?}: {}", s, e))?;
    if !url.has_host() {
        return Err(format!("URL {:?} has no host", s));
    }
    Ok(url.to_string())
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Some(command) => command,
            None => return run_with_config(self.scrape, self.debug),
        };

        // Subcommands never read or create the config file.
        init_logging(self.debug.unwrap_or(false));
        match command {
            CliCommand::Man => run_man(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Version => run_version(),
        }
    }
}

/// Load the config file, set up logging from the resolved debug level, then scrape.
fn run_with_config(args: ScrapeArgs, debug: Option<bool>) -> Result<()> {
    let loaded = config::load_or_init()?;
    init_logging(debug.unwrap_or(loaded.config.debug));
    if loaded.created {
        tracing::info!("created default config at {}", loaded.path.display());
    }
    tracing::debug!("loaded config: {:?}", loaded.config);

    run_scrape(args, &loaded.config)
}

/// File logging, or stderr when the state dir is unusable.
fn init_logging(debug: bool) {
    if let Err(e) = logging::init_logging(debug) {
        logging::init_logging_stderr(debug);
        tracing::warn!("file logging unavailable, using stderr: {:#}", e);
    }
}

#[cfg(test)]
mod tests;
