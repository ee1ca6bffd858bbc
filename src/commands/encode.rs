//! Index-to-book encoding command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use num_bigint::BigUint;

use emojibabel::{encode, Alphabet, DEFAULT_BOOK_LENGTH};

use super::{resolve_constants, CommandExecutor};

/// Print the book stored at a given index.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Book index, as a decimal integer of any size
    #[arg(short, long)]
    pub index: String,

    /// Path to a constants JSON file (from `constants --output`)
    #[arg(short, long)]
    pub constants: Option<PathBuf>,

    /// Book length L for ephemeral constants (ignored with --constants)
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let alphabet = Alphabet::emoji_catalog();
        let constants = resolve_constants(self.constants.as_deref(), self.book_length, &alphabet)?;

        let index: BigUint = self
            .index
            .trim()
            .parse()
            .context("Index must be a non-negative decimal integer")?;

        let contents = encode(&index, &constants, &alphabet)
            .context("Failed to encode index")?;

        if contents.is_empty() {
            eprintln!("(index 0 is the empty book)");
        }
        println!("{}", contents.concat());

        Ok(())
    }
}
