//! Constants derivation command.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use emojibabel::{save_constants, Alphabet, Constants, DEFAULT_BOOK_LENGTH};

use super::CommandExecutor;

/// Derive the library constants (N, C, I) and optionally persist them.
#[derive(Args, Debug)]
pub struct ConstantsCommand {
    /// Canonical full-book length L
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,

    /// Write the constants (plus the alphabet fingerprint) to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Derive deterministically from a 64-hex-char seed instead of fresh
    /// randomness. The same seed always yields the same multiplier.
    #[arg(short, long)]
    pub seed: Option<String>,
}

impl CommandExecutor for ConstantsCommand {
    fn execute(&self) -> Result<()> {
        let alphabet = Alphabet::emoji_catalog();

        let constants = match &self.seed {
            Some(seed) => {
                let seed = parse_seed(seed)?;
                Constants::derive_seeded(alphabet.len(), self.book_length, seed)
                    .context("Failed to derive constants")?
            }
            None => Constants::derive(alphabet.len(), self.book_length)
                .context("Failed to derive constants")?,
        };

        println!("Alphabet size (M):   {}", constants.m);
        println!("Book length (L):     {}", constants.book_length);
        println!("Address space (N):   {} decimal digits", constants.n.to_string().len());
        println!("Multiplier (C):      {} decimal digits", constants.c.to_string().len());
        println!("Catalog fingerprint: {}", alphabet.fingerprint());

        match &self.output {
            Some(path) => {
                save_constants(path, &constants, &alphabet)
                    .with_context(|| format!("Failed to save constants to {}", path.display()))?;
                println!("Saved constants to {}", path.display());
            }
            None => {
                eprintln!();
                eprintln!("NOTE: constants were not saved. Without --output (or --seed),");
                eprintln!("      this multiplier is lost when the process exits.");
            }
        }

        Ok(())
    }
}

/// Parses a 64-character hex string into a 32-byte seed.
fn parse_seed(seed: &str) -> Result<[u8; 32]> {
    let seed = seed.trim();
    if !seed.is_ascii() {
        bail!("Seed must be ASCII hex");
    }
    if seed.len() != 64 {
        bail!("Seed must be exactly 64 hex characters, got {}", seed.len());
    }

    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = &seed[i * 2..i * 2 + 2];
        *byte = u8::from_str_radix(pair, 16)
            .with_context(|| format!("Invalid hex in seed at position {}", i * 2))?;
    }

    Ok(bytes)
}
