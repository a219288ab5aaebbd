//! Typology command-line front end.
//!
//! Reads selections, edits, answers and banks through `typology-content`,
//! runs them through `typology-core`, and prints JSON or plain text on stdout.
//! Logs go to stderr and are filtered with `RUST_LOG`.
//!
//! # Examples
//!
//! ```bash
//! typology generate data/selections/scholar.toml --edits data/edits/scholar.toml
//! typology diff data/selections/scholar.toml data/selections/diplomat.toml
//! typology quiz data/answers/sample.toml --partial --generate
//! typology questions --strategy deep --format ron > deep.ron
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Context, Diff, Generate, Questions, Quiz, Summary};
use config::CliConfig;

/// Turn personality typology results into character sheets
#[derive(Parser)]
#[command(name = "typology")]
#[command(about = "Typology-to-character rules engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate a character from a selection
    Generate(Generate),

    /// Print the typology summary of a selection
    Summary(Summary),

    /// Compare two selections' characters
    Diff(Diff),

    /// Score quiz answers
    Quiz(Quiz),

    /// List or export a question bank
    Questions(Questions),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TYPOLOGY_* and RUST_LOG)
    let _ = dotenvy::dotenv();
    logging::setup_logging();

    let cli = Cli::parse();
    let ctx = Context::new(CliConfig::from_env())?;

    match cli.command {
        Command::Generate(cmd) => cmd.execute(&ctx),
        Command::Summary(cmd) => cmd.execute(&ctx),
        Command::Diff(cmd) => cmd.execute(&ctx),
        Command::Quiz(cmd) => cmd.execute(&ctx),
        Command::Questions(cmd) => cmd.execute(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_quiz_flags() {
        let cli = Cli::try_parse_from([
            "typology",
            "quiz",
            "answers.toml",
            "--strategy",
            "deep",
            "--partial",
            "--generate",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Quiz(_)));

        let cli = Cli::try_parse_from(["typology", "questions", "-s", "Quick"]).unwrap();
        assert!(matches!(cli.command, Command::Questions(_)));

        let err = Cli::try_parse_from(["typology", "quiz", "a.toml", "--strategy", "slow"])
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default();
        assert!(err.contains("expected one of: quick, deep"));
    }
}
