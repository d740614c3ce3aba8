//! recruitbook - a command-line candidate book.
//!
//! ```text
//! recruitbook --contacts people.json find n/alice bob s/4000 t/friends
//! ```

mod book;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recruitbook_seeker::{parse_find_arguments_with, SeekerConfig, DEFAULT_SALARY_RANGE};
use tracing::debug;

use crate::book::ContactBook;

/// Candidate book with prefix-based search.
#[derive(Parser, Debug)]
#[command(name = "recruitbook", version, about)]
struct Cli {
    /// JSON file holding the candidate list
    #[arg(long, short, env = "RECRUITBOOK_CONTACTS", global = true)]
    contacts: Option<PathBuf>,

    /// Inclusive distance for expected-salary matches
    #[arg(long, default_value_t = DEFAULT_SALARY_RANGE, global = true)]
    salary_range: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find candidates, e.g. `find n/alice s/4000 t/friends`
    Find {
        /// Marker-prefixed keywords (n/ p/ e/ r/ et/ s/ l/ y/ t/)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    print!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let config = SeekerConfig::default().with_salary_range(cli.salary_range);

    match &cli.command {
        Command::Find { args } => {
            let raw = args.join(" ");
            debug!(raw = %raw, "running find");
            let query = parse_find_arguments_with(&raw, &config)?;

            let path = cli
                .contacts
                .as_deref()
                .context("no contact list given; pass --contacts or set RECRUITBOOK_CONTACTS")?;
            let book = ContactBook::load(path)?;
            let hits = book.find(&query);
            debug!(matched = hits.len(), total = book.len(), "find finished");

            if cli.json {
                output::render_json(&hits)
            } else {
                let colored = console::Term::stdout().features().colors_supported();
                Ok(output::render_text(&hits, colored))
            }
        }
    }
}
