//! Book-to-index decoding command.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use emojibabel::{decode, decode_wrapping, Alphabet, DEFAULT_BOOK_LENGTH};

use super::{resolve_constants, CommandExecutor};

/// Print the index of a book given its contents.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Book contents as a concatenated symbol string
    #[arg(long, conflicts_with = "book_file")]
    pub book: Option<String>,

    /// Read book contents from a file
    #[arg(long, conflicts_with = "book")]
    pub book_file: Option<PathBuf>,

    /// Path to a constants JSON file (from `constants --output`)
    #[arg(short, long)]
    pub constants: Option<PathBuf>,

    /// Book length L for ephemeral constants (ignored with --constants)
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,

    /// Accept contents longer than L and wrap them into the address space.
    /// The resulting index will not round-trip back to the same contents.
    #[arg(long)]
    pub wrap: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let text = match (&self.book, &self.book_file) {
            (Some(book), None) => book.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read book from {}", path.display()))?,
            _ => bail!("Provide exactly one of --book or --book-file"),
        };

        let alphabet = Alphabet::emoji_catalog();
        let constants = resolve_constants(self.constants.as_deref(), self.book_length, &alphabet)?;

        let contents = alphabet
            .tokenize(text.trim())
            .context("Book contains symbols outside the catalog")?;

        let index = if self.wrap {
            decode_wrapping(&contents, &constants, &alphabet)
        } else {
            decode(&contents, &constants, &alphabet)
        }
        .context("Failed to decode book")?;

        println!("{}", index);

        Ok(())
    }
}
