//! Compare two characters.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use typology_core::{compute_character_diff, generate_character};

use super::Context;

/// Compare the characters generated from two selections
#[derive(Parser)]
pub struct Diff {
    /// First selection file (TOML)
    #[arg(value_name = "A")]
    a: PathBuf,

    /// Second selection file (TOML)
    #[arg(value_name = "B")]
    b: PathBuf,
}

impl Diff {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let a = generate_character(&ctx.selection(&self.a)?)?;
        let b = generate_character(&ctx.selection(&self.b)?)?;

        let diff = compute_character_diff(&a, &b);
        if diff.is_identical() {
            tracing::info!("characters are identical");
        }
        ctx.emit(&diff)
    }
}
