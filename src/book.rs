//! Snippet embedding - the library's "search" primitive.
//!
//! The library never searches anything: to find a book containing a snippet,
//! it builds one. The snippet is dropped at a uniformly random offset inside
//! a full-length book, both sides are filled with uniformly random symbols,
//! and the finished book is decoded to its address. `encode` on that address
//! reproduces the book with the snippet verbatim at the chosen offset.
//!
//! One wrinkle: `encode` emits no leading-zero padding, so when the right
//! padding happens to end in ordinal-0 symbols the re-encoded book comes
//! back shorter than L. A book is conceptually its contents right-padded
//! with the ordinal-0 symbol to the full length.

use num_bigint::BigUint;
use rand::{Rng, RngCore};
use thiserror::Error;

use crate::alphabet::{Alphabet, AlphabetError};
use crate::codec::{decode, CodecError};
use crate::constants::Constants;

/// Errors that can occur during embedding.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Snippet length {len} exceeds the book length {max}")]
    SnippetTooLong { len: usize, max: usize },

    #[error(transparent)]
    UnknownSymbol(#[from] AlphabetError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Padding arithmetic produced {left} + {snippet} + {right} != {expected}")]
    PaddingMismatch {
        left: usize,
        snippet: usize,
        right: usize,
        expected: usize,
    },
}

/// A full-length book built around a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullBook {
    /// Exactly `book_length` symbols: left padding, snippet, right padding.
    pub contents: Vec<String>,
    /// Offset of the snippet's first symbol within `contents`.
    pub snippet_offset: usize,
}

/// The address of a book that contains a requested snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundBook {
    /// Index that `encode` maps back to the constructed full book.
    pub index: BigUint,
    /// Offset of the snippet within that book.
    pub snippet_offset: usize,
}

/// Configuration for embedding.
#[derive(Debug, Clone, Default)]
pub struct EmbedConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Builds a full book containing `snippet` at a random offset.
pub fn embed(
    snippet: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<FullBook, EmbedError> {
    embed_with_rng(snippet, constants, alphabet, &mut rand::thread_rng())
}

/// Builds a full book with custom configuration.
pub fn embed_with_config(
    snippet: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
    config: &EmbedConfig,
) -> Result<FullBook, EmbedError> {
    let book = embed_with_rng(snippet, constants, alphabet, &mut rand::thread_rng())?;

    if config.verbose {
        eprintln!(
            "Embedded {} snippet symbols at offset {} of {}",
            snippet.len(),
            book.snippet_offset,
            constants.book_length
        );
    }

    Ok(book)
}

/// Builds a full book drawing padding from the given RNG.
///
/// Right padding length is uniform in `[0, L - |snippet|]`; left padding
/// takes the remainder; both regions are filled with uniformly random
/// catalog symbols. The result is exactly L symbols long.
pub fn embed_with_rng<R: RngCore>(
    snippet: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<FullBook, EmbedError> {
    let book_length = constants.book_length;

    if snippet.len() > book_length {
        return Err(EmbedError::SnippetTooLong {
            len: snippet.len(),
            max: book_length,
        });
    }

    // Snippet symbols must be addressable or the book cannot be decoded
    for symbol in snippet {
        alphabet.ordinal(symbol)?;
    }

    let free = book_length - snippet.len();
    let right = rng.gen_range(0..=free);
    let left = free - right;

    if left + snippet.len() + right != book_length {
        return Err(EmbedError::PaddingMismatch {
            left,
            snippet: snippet.len(),
            right,
            expected: book_length,
        });
    }

    let mut contents = Vec::with_capacity(book_length);
    for _ in 0..left {
        contents.push(random_symbol(alphabet, rng));
    }
    contents.extend_from_slice(snippet);
    for _ in 0..right {
        contents.push(random_symbol(alphabet, rng));
    }

    if contents.len() != book_length {
        return Err(EmbedError::PaddingMismatch {
            left,
            snippet: snippet.len(),
            right,
            expected: book_length,
        });
    }

    Ok(FullBook {
        contents,
        snippet_offset: left,
    })
}

/// Finds the address of a book containing `snippet`.
pub fn embed_to_index(
    snippet: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<FoundBook, EmbedError> {
    embed_to_index_with_rng(snippet, constants, alphabet, &mut rand::thread_rng())
}

/// Finds the address of a book containing `snippet`, drawing padding from
/// the given RNG.
pub fn embed_to_index_with_rng<R: RngCore>(
    snippet: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<FoundBook, EmbedError> {
    let book = embed_with_rng(snippet, constants, alphabet, rng)?;
    let index = decode(&book.contents, constants, alphabet)?;

    Ok(FoundBook {
        index,
        snippet_offset: book.snippet_offset,
    })
}

fn random_symbol<R: RngCore>(alphabet: &Alphabet, rng: &mut R) -> String {
    let ordinal = rng.gen_range(0..alphabet.len());
    alphabet
        .symbol_at(ordinal)
        .expect("ordinal is below M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn small_library() -> (Constants, Alphabet) {
        let alphabet = Alphabet::from_symbols(vec![
            "👍".to_string(),
            "👎".to_string(),
            "👌".to_string(),
        ])
        .unwrap();
        let constants = Constants::with_multiplier(3, 8, BigUint::from(7u32)).unwrap();
        (constants, alphabet)
    }

    fn snippet() -> Vec<String> {
        vec!["👍".to_string(), "👍".to_string(), "👌".to_string()]
    }

    #[test]
    fn test_embed_has_exact_length() {
        let (constants, alphabet) = small_library();

        for _ in 0..20 {
            let book = embed(&snippet(), &constants, &alphabet).unwrap();
            assert_eq!(book.contents.len(), constants.book_length);
        }
    }

    #[test]
    fn test_embed_contains_snippet_at_offset() {
        let (constants, alphabet) = small_library();
        let snippet = snippet();

        for _ in 0..20 {
            let book = embed(&snippet, &constants, &alphabet).unwrap();
            let at = book.snippet_offset;
            assert_eq!(&book.contents[at..at + snippet.len()], &snippet[..]);
        }
    }

    #[test]
    fn test_embed_full_length_snippet() {
        let (constants, alphabet) = small_library();
        let snippet: Vec<String> = std::iter::repeat("👎".to_string())
            .take(constants.book_length)
            .collect();

        let book = embed(&snippet, &constants, &alphabet).unwrap();
        assert_eq!(book.snippet_offset, 0);
        assert_eq!(book.contents, snippet);
    }

    #[test]
    fn test_embed_empty_snippet() {
        let (constants, alphabet) = small_library();

        let book = embed(&[], &constants, &alphabet).unwrap();
        assert_eq!(book.contents.len(), constants.book_length);
    }

    #[test]
    fn test_embed_rejects_overlong_snippet() {
        let (constants, alphabet) = small_library();
        let snippet: Vec<String> = std::iter::repeat("👍".to_string())
            .take(constants.book_length + 1)
            .collect();

        let result = embed(&snippet, &constants, &alphabet);
        assert!(matches!(result, Err(EmbedError::SnippetTooLong { .. })));
    }

    #[test]
    fn test_embed_rejects_unknown_symbol() {
        let (constants, alphabet) = small_library();
        let snippet = vec!["🎉".to_string()];

        let result = embed(&snippet, &constants, &alphabet);
        assert!(matches!(result, Err(EmbedError::UnknownSymbol(_))));
    }

    #[test]
    fn test_embed_deterministic_with_seeded_rng() {
        let (constants, alphabet) = small_library();

        let mut rng1 = ChaCha20Rng::from_seed([9u8; 32]);
        let mut rng2 = ChaCha20Rng::from_seed([9u8; 32]);
        let a = embed_with_rng(&snippet(), &constants, &alphabet, &mut rng1).unwrap();
        let b = embed_with_rng(&snippet(), &constants, &alphabet, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_to_index_roundtrip() {
        let (constants, alphabet) = small_library();
        let snippet = snippet();

        for _ in 0..20 {
            let found = embed_to_index(&snippet, &constants, &alphabet).unwrap();
            assert!(found.index < constants.n);

            // The address must decode to a book containing the snippet
            let contents = encode(&found.index, &constants, &alphabet).unwrap();
            let at = found.snippet_offset;
            assert!(contents.len() <= constants.book_length);
            // Trailing zero-ordinal padding is dropped by encode; the
            // snippet region itself is always present
            let window: Vec<String> = contents
                .iter()
                .cloned()
                .chain(std::iter::repeat(alphabet.symbol_at(0).unwrap().to_string()))
                .skip(at)
                .take(snippet.len())
                .collect();
            assert_eq!(window, snippet);
        }
    }

    #[test]
    fn test_embed_offsets_are_distributed() {
        let (constants, alphabet) = small_library();
        let snippet = vec!["👌".to_string()];

        let offsets: std::collections::HashSet<usize> = (0..100)
            .map(|_| embed(&snippet, &constants, &alphabet).unwrap().snippet_offset)
            .collect();

        // With L = 8 and 100 draws, multiple offsets must appear
        assert!(offsets.len() > 1);
    }
}
