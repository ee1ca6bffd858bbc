//! Snippet search command.
//!
//! "Search" constructs rather than searches: the snippet is embedded in a
//! random full-length book and that book's address is printed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use emojibabel::{decode, embed_with_config, Alphabet, EmbedConfig, DEFAULT_BOOK_LENGTH};

use super::{resolve_constants, CommandExecutor};

/// Find the address of a book containing the given snippet.
#[derive(Args, Debug)]
pub struct FindCommand {
    /// The snippet to find, as a concatenated symbol string
    #[arg(short, long)]
    pub text: String,

    /// Path to a constants JSON file (from `constants --output`)
    #[arg(short, long)]
    pub constants: Option<PathBuf>,

    /// Book length L for ephemeral constants (ignored with --constants)
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,

    /// Also print the constructed full book
    #[arg(long)]
    pub show_book: bool,

    /// Verbose output (shows padding layout)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for FindCommand {
    fn execute(&self) -> Result<()> {
        let alphabet = Alphabet::emoji_catalog();
        let constants = resolve_constants(self.constants.as_deref(), self.book_length, &alphabet)?;

        let snippet = alphabet
            .tokenize(self.text.trim())
            .context("Snippet contains symbols outside the catalog")?;

        let config = EmbedConfig {
            verbose: self.verbose,
        };
        let book = embed_with_config(&snippet, &constants, &alphabet, &config)
            .context("Failed to embed snippet")?;
        let index = decode(&book.contents, &constants, &alphabet)
            .context("Failed to decode constructed book")?;

        println!("Index:  {}", index);
        println!("Offset: {}", book.snippet_offset);
        if self.show_book {
            println!("Book:   {}", book.contents.concat());
        }

        Ok(())
    }
}
