//! List or export a question bank.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use typology_content::QuizBankLoader;
use typology_core::QuizStrategy;

use super::Context;
use super::quiz::{parse_strategy, resolve_bank};

/// List or export the questions of a bank
#[derive(Parser)]
pub struct Questions {
    /// Bank strategy
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Option<QuizStrategy>,

    /// Custom question bank (RON) instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    bank: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "list")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One block per question with numbered options
    List,
    /// The full bank as RON, ready to edit and load back
    Ron,
    /// The full bank as JSON
    Json,
}

impl Questions {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let strategy = ctx.strategy(self.strategy);
        let bank = resolve_bank(ctx, self.bank.as_deref(), strategy)?;

        match self.format {
            OutputFormat::List => {
                println!("{} bank, {} questions", bank.strategy, bank.total_questions());
                for question in bank.outline() {
                    println!();
                    println!("[{}] {} ({})", question.id, question.prompt, question.section);
                    for (index, label) in question.options.iter().enumerate() {
                        println!("  {}. {}", index, label);
                    }
                }
                Ok(())
            }
            OutputFormat::Ron => {
                println!("{}", QuizBankLoader::to_ron(&bank)?);
                Ok(())
            }
            OutputFormat::Json => ctx.emit(&bank),
        }
    }
}
