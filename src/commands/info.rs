//! Catalog and address-space information command.

use anyhow::{bail, Result};
use clap::Args;
use num_bigint::BigUint;

use emojibabel::{Alphabet, DEFAULT_BOOK_LENGTH};

use super::CommandExecutor;

/// Show the symbol catalog and the size of the library it spans.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Book length L used for the address-space size estimate
    #[arg(short, long, default_value_t = DEFAULT_BOOK_LENGTH)]
    pub book_length: usize,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        let alphabet = Alphabet::emoji_catalog();
        let m = alphabet.len();

        println!("Catalog size (M):    {}", m);
        println!("Catalog fingerprint: {}", alphabet.fingerprint());
        println!(
            "First symbols:       {}",
            alphabet.symbols().iter().take(8).cloned().collect::<String>()
        );

        let Ok(exponent) = u32::try_from(self.book_length) else {
            bail!("Book length {} is too large", self.book_length);
        };
        let n = BigUint::from(m).pow(exponent);
        println!(
            "Address space:       {}^{} = {} decimal digits",
            m,
            self.book_length,
            n.to_string().len()
        );
        println!();
        println!("The catalog order and size are part of the library key:");
        println!("if either changes, previously issued indices decode to");
        println!("different books. Compare fingerprints before trusting old");
        println!("addresses.");

        Ok(())
    }
}
