//! Emojibabel - a Library of Babel for emoji
//!
//! CLI around the bijection engine: derive and persist constants, look up
//! the book at any index, recover the index of any book, and "find" books
//! containing arbitrary snippets by constructing them.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    CommandExecutor, ConstantsCommand, DecodeCommand, EncodeCommand, FindCommand, InfoCommand,
    RandomCommand,
};

/// Emojibabel - every possible emoji sequence already has an address
///
/// A deterministic, reversible mapping between integer indices and emoji
/// sequences. Addresses depend on the derived constants and on the emoji
/// catalog snapshot - persist constants with `constants --output` if you
/// want addresses that survive across runs.
#[derive(Parser)]
#[command(name = "emojibabel")]
#[command(version = "0.2.0")]
#[command(about = "A Library of Babel for emoji: addresses for every possible sequence")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the library constants (N, C, I), optionally saving them
    Constants(ConstantsCommand),

    /// Print the book stored at a given index
    Encode(EncodeCommand),

    /// Print the index of a book given its contents
    Decode(DecodeCommand),

    /// Find the address of a book containing a snippet
    Find(FindCommand),

    /// Pick a uniformly random address from the library
    Random(RandomCommand),

    /// Show the symbol catalog and address-space size
    Info(InfoCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Constants(cmd) => cmd.execute(),
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Find(cmd) => cmd.execute(),
        Commands::Random(cmd) => cmd.execute(),
        Commands::Info(cmd) => cmd.execute(),
    }
}
