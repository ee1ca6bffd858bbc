//! # Emojibabel - a Library of Babel for emoji
//!
//! Emojibabel implements a deterministic, reversible mapping between a
//! non-negative integer index and a finite emoji sequence: every possible
//! sequence already has a unique, computable address, and every address
//! decodes to a unique sequence.
//!
//! ## Overview
//!
//! The engine is a multiplicative permutation of `Z/NZ` wrapped in a base-M
//! positional codec:
//! - The **alphabet** supplies M ordered, distinct symbols
//! - The **constants** fix the address space: N = M^L, a multiplier C coprime
//!   to N, and its modular inverse I
//! - **encode** maps an index in `[0, N)` to `(index * C) mod N` written as
//!   base-M digits, least-significant symbol first
//! - **decode** reads the digits back and multiplies by I to recover the index
//! - **embed** builds a full-length book containing an arbitrary snippet at a
//!   random offset, so `embed_to_index` "finds" a book for any requested text
//!   by constructing it and reading off its address
//!
//! The permutation exists so that sequentially nearby indices decode to
//! unrelated-looking content. It is obfuscation, not a cipher.
//!
//! ## Stability contract
//!
//! The alphabet snapshot and the multiplier C are together the key to the
//! whole library: if either changes, every previously issued index silently
//! decodes to different content. Constants are random by default - persist
//! them (see [`store`]) or derive them from a fixed seed if addresses must
//! survive across runs. The alphabet [`fingerprint`](Alphabet::fingerprint)
//! is saved alongside the constants so catalog drift is detected at load time.
//!
//! ## Example Usage
//!
//! ```rust
//! use emojibabel::{Alphabet, Constants, encode, decode, embed_to_index};
//! use num_bigint::BigUint;
//!
//! let alphabet = Alphabet::emoji_catalog();
//! let constants = Constants::derive(alphabet.len(), 64).unwrap();
//!
//! // Every index has exactly one book
//! let index = BigUint::from(123456789u64);
//! let book = encode(&index, &constants, &alphabet).unwrap();
//! assert_eq!(decode(&book, &constants, &alphabet).unwrap(), index);
//!
//! // Every snippet is already in some book
//! let snippet = alphabet.tokenize("👍👎👌").unwrap();
//! let found = embed_to_index(&snippet, &constants, &alphabet).unwrap();
//! let full_book = encode(&found.index, &constants, &alphabet).unwrap();
//! let at = found.snippet_offset;
//! assert_eq!(&full_book[at..at + snippet.len()], &snippet[..]);
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: Symbol catalog access (ordinals, tokenizing, fingerprint)
//! - [`constants`]: Derivation of the (N, C, I) triple
//! - [`codec`]: The bijective encoder/decoder
//! - [`book`]: Snippet embedding - the "search" primitive
//! - [`store`]: JSON persistence for derived constants

/// Default canonical length of a full book, in symbols.
pub const DEFAULT_BOOK_LENGTH: usize = 500;

/// Upper bound on coprime-candidate sampling before constants derivation
/// gives up and reports a degenerate configuration.
pub const MAX_COPRIME_RETRIES: u32 = 128;

pub mod alphabet;
pub mod book;
pub mod codec;
pub mod constants;
pub mod store;

// Re-export commonly used types at the crate root
pub use alphabet::{Alphabet, AlphabetError};
pub use book::{
    embed, embed_to_index, embed_to_index_with_rng, embed_with_config, embed_with_rng,
    EmbedConfig, EmbedError, FoundBook, FullBook,
};
pub use codec::{decode, decode_wrapping, encode, random_index, CodecError};
pub use constants::{Constants, ConstantsError};
pub use store::{load_constants, save_constants, StoreError};
