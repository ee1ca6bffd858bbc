//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. Commands that need constants share `resolve_constants`: either a
//! persisted constants file (reproducible addresses) or an ephemeral
//! derivation with a loud warning.

mod constants;
mod decode;
mod encode;
mod find;
mod info;
mod random;

pub use constants::ConstantsCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use find::FindCommand;
pub use info::InfoCommand;
pub use random::RandomCommand;

use std::path::Path;

use anyhow::{Context, Result};

use emojibabel::{load_constants, Alphabet, Constants};

/// Trait for command execution - Strategy pattern.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads persisted constants, or derives throwaway ones.
///
/// Ephemeral constants carry a fresh random multiplier, so any address
/// printed under them is meaningless to every other invocation. The warning
/// is deliberate and not silenceable.
pub(crate) fn resolve_constants(
    path: Option<&Path>,
    book_length: usize,
    alphabet: &Alphabet,
) -> Result<Constants> {
    match path {
        Some(path) => load_constants(path, alphabet)
            .with_context(|| format!("Failed to load constants from {}", path.display())),
        None => {
            eprintln!(
                "WARNING: no constants file given; deriving ephemeral constants. \
                 Addresses will NOT be reproducible across runs."
            );
            eprintln!("         Run `emojibabel constants --output <file>` to fix them.");

            Constants::derive(alphabet.len(), book_length)
                .context("Failed to derive ephemeral constants")
        }
    }
}
