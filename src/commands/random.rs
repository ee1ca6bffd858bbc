//! Random shelf-browsing command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use emojibabel::{encode, random_index, Alphabet, DEFAULT_BOOK_LENGTH};

use super::{resolve_constants, CommandExecutor};

/// Pick a uniformly random address from the library.
#[derive(Args, Debug)]
pub struct RandomCommand {
    /// Path to a constants JSON file (from `constants --output`)
    #[arg(short, long)]
    pub constants: Option<PathBuf>,

    /// Book length L for ephemeral constants (ignored with --constants)
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,

    /// Also print the book at that address
    #[arg(long)]
    pub show_book: bool,
}

impl CommandExecutor for RandomCommand {
    fn execute(&self) -> Result<()> {
        let alphabet = Alphabet::emoji_catalog();
        let constants = resolve_constants(self.constants.as_deref(), self.book_length, &alphabet)?;

        let index = random_index(&constants, &mut rand::thread_rng());
        println!("Index: {}", index);

        if self.show_book {
            let contents = encode(&index, &constants, &alphabet)
                .context("Failed to encode random index")?;
            println!("Book:  {}", contents.concat());
        }

        Ok(())
    }
}
