//! Symbol catalog access for the library.
//!
//! An [`Alphabet`] is an ordered snapshot of M distinct symbols with a total,
//! one-to-one `ordinal(symbol)` mapping. The snapshot is read-only for the
//! process lifetime: M and the enumeration order feed directly into N and the
//! base-M digit conversion, so any change in the catalog's size or order
//! invalidates every previously issued index. The snapshot is part of the
//! library key alongside the multiplier C - compare [`Alphabet::fingerprint`]
//! before trusting old addresses.
//!
//! The default catalog ([`Alphabet::emoji_catalog`]) enumerates the full
//! emoji set of the `emojis` crate in its iteration order, which is stable
//! within a crate release but may grow across releases.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur during alphabet construction and lookups.
#[derive(Error, Debug)]
pub enum AlphabetError {
    #[error("Symbol '{0}' is not in the alphabet")]
    UnknownSymbol(String),

    #[error("Alphabet needs at least 2 symbols, got {0}")]
    TooSmall(usize),

    #[error("Duplicate symbol '{0}' in alphabet")]
    DuplicateSymbol(String),
}

/// An ordered, read-only catalog of distinct symbols.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Symbols in catalog order; the position is the ordinal.
    symbols: Vec<String>,
    /// Reverse lookup from symbol to ordinal.
    ordinals: HashMap<String, usize>,
    /// Longest symbol length in bytes, bounds the tokenizer's lookahead.
    max_symbol_len: usize,
}

impl Alphabet {
    /// Builds an alphabet from an ordered list of symbols.
    ///
    /// The order given here defines the ordinals and must not change between
    /// runs that share indices.
    pub fn from_symbols(symbols: Vec<String>) -> Result<Self, AlphabetError> {
        if symbols.len() < 2 {
            return Err(AlphabetError::TooSmall(symbols.len()));
        }

        let mut ordinals = HashMap::with_capacity(symbols.len());
        let mut max_symbol_len = 0;

        for (ordinal, symbol) in symbols.iter().enumerate() {
            if ordinals.insert(symbol.clone(), ordinal).is_some() {
                return Err(AlphabetError::DuplicateSymbol(symbol.clone()));
            }
            max_symbol_len = max_symbol_len.max(symbol.len());
        }

        Ok(Self {
            symbols,
            ordinals,
            max_symbol_len,
        })
    }

    /// The full emoji catalog, in `emojis` crate iteration order.
    pub fn emoji_catalog() -> Self {
        let symbols: Vec<String> = emojis::iter().map(|e| e.as_str().to_string()).collect();
        Self::from_symbols(symbols).expect("emoji catalog has many distinct symbols")
    }

    /// Number of symbols M in the catalog.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false after construction; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in catalog order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the symbol at the given ordinal, if in range.
    pub fn symbol_at(&self, ordinal: usize) -> Option<&str> {
        self.symbols.get(ordinal).map(String::as_str)
    }

    /// Looks up the ordinal of a symbol in `[0, M)`.
    pub fn ordinal(&self, symbol: &str) -> Result<usize, AlphabetError> {
        self.ordinals
            .get(symbol)
            .copied()
            .ok_or_else(|| AlphabetError::UnknownSymbol(symbol.to_string()))
    }

    /// SHA-256 hex digest over the ordered catalog.
    ///
    /// Two alphabets with the same fingerprint decode every index to the same
    /// contents. Store this next to persisted constants and refuse to decode
    /// when it no longer matches.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for symbol in &self.symbols {
            hasher.update(symbol.as_bytes());
            // Length-prefix free separator: symbols never contain NUL
            hasher.update([0u8]);
        }
        let hash = hasher.finalize();

        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Splits a concatenated symbol string back into catalog symbols.
    ///
    /// Emoji are multi-codepoint (skin tones, ZWJ sequences), so a plain
    /// `chars()` split would shred them. This uses greedy longest-match
    /// against the catalog, which resolves prefix overlaps like "🇦" vs "🇦🇷"
    /// in favor of the longer symbol.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, AlphabetError> {
        let mut tokens = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let window = rest.len().min(self.max_symbol_len);

            // Try the longest candidate first, shrinking on char boundaries
            let mut matched = None;
            let mut end = window;
            loop {
                while end > 0 && !rest.is_char_boundary(end) {
                    end -= 1;
                }
                if end == 0 {
                    break;
                }
                let candidate = &rest[..end];
                if self.ordinals.contains_key(candidate) {
                    matched = Some(candidate);
                    break;
                }
                end -= 1;
            }

            match matched {
                Some(symbol) => {
                    tokens.push(symbol.to_string());
                    rest = &rest[symbol.len()..];
                }
                None => {
                    let unknown: String = rest.chars().take(1).collect();
                    return Err(AlphabetError::UnknownSymbol(unknown));
                }
            }
        }

        Ok(tokens)
    }
}
