//! Generate a character from a selection file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use typology_core::{Character, apply_edits, build_typology_summary, generate_character};

use super::Context;

/// Generate a character sheet from a TOML selection
#[derive(Parser)]
pub struct Generate {
    /// Selection file (TOML)
    #[arg(value_name = "SELECTION")]
    selection: PathBuf,

    /// Edits to apply on top of the generated character (TOML)
    #[arg(short, long, value_name = "FILE")]
    edits: Option<PathBuf>,

    /// Print the plain-text typology summary instead of JSON
    #[arg(short, long)]
    summary: bool,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    /// Hex SHA-256 of the canonical selection; equal selections share it.
    fingerprint: String,
    character: &'a Character,
}

impl Generate {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let input = ctx.selection(&self.selection)?;
        let edits = ctx.edits(self.edits.as_deref())?;

        let generated = generate_character(&input)?;
        let character = apply_edits(&generated, &edits);
        tracing::info!(name = %character.name, class = %character.archetype.class_name, "generated");

        if self.summary {
            println!("{}", build_typology_summary(&character));
            return Ok(());
        }

        ctx.emit(&GenerateOutput {
            fingerprint: hex::encode(input.fingerprint()),
            character: &character,
        })
    }
}

/// Print the plain-text typology summary of a selection
#[derive(Parser)]
pub struct Summary {
    /// Selection file (TOML)
    #[arg(value_name = "SELECTION")]
    selection: PathBuf,
}

impl Summary {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let character = generate_character(&ctx.selection(&self.selection)?)?;
        println!("{}", build_typology_summary(&character));
        Ok(())
    }
}
