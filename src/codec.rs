//! The bijective encoder/decoder.
//!
//! This is a multiplicative permutation of `Z/NZ` wrapped in a positional
//! numeral codec:
//! 1. `encode` scrambles the index as `(index * C) mod N`, then writes the
//!    scrambled value as base-M digits, least-significant symbol first
//! 2. `decode` accumulates the digits back into the scrambled value, then
//!    unscrambles with `(raw * I) mod N`
//!
//! Contents carry no fixed length and no leading-zero padding: `encode(0)`
//! is the empty book, and small indices yield short books. For any index in
//! `[0, N)`, `decode(encode(index)) == index` exactly.
//!
//! `decode` rejects contents longer than the book length L: raw values of
//! such contents can exceed N and would silently wrap. Use
//! [`decode_wrapping`] when "any sequence maps to some valid index" is the
//! behavior you actually want.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::RngCore;
use thiserror::Error;

use crate::alphabet::{Alphabet, AlphabetError};
use crate::constants::Constants;

/// Errors that can occur during encoding and decoding.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    UnknownSymbol(#[from] AlphabetError),

    #[error("Index is outside the address space [0, N)")]
    IndexOutOfRange,

    #[error("Contents length {len} exceeds the book length {max}")]
    ContentsTooLong { len: usize, max: usize },

    #[error("Alphabet has {actual} symbols but constants were derived for {expected}")]
    AlphabetMismatch { expected: usize, actual: usize },
}

/// Maps an index in `[0, N)` to its book contents.
///
/// The result is the base-M digit sequence of `(index * C) mod N`,
/// least-significant symbol first, at most L symbols long.
pub fn encode(
    index: &BigUint,
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<Vec<String>, CodecError> {
    check_alphabet(constants, alphabet)?;

    if index >= &constants.n {
        return Err(CodecError::IndexOutOfRange);
    }

    let m = BigUint::from(alphabet.len());
    let mut scrambled = (index * &constants.c) % &constants.n;
    let mut contents = Vec::new();

    while !scrambled.is_zero() {
        let (quotient, digit) = scrambled.div_rem(&m);
        let ordinal = digit.to_usize().expect("digit is below M");
        let symbol = alphabet.symbol_at(ordinal).expect("ordinal is below M");
        contents.push(symbol.to_string());
        scrambled = quotient;
    }

    Ok(contents)
}

/// Maps book contents back to their index.
///
/// Symbols are read least-significant first. Fails with `UnknownSymbol` for
/// symbols outside the alphabet and with `ContentsTooLong` for contents
/// longer than L (see [`decode_wrapping`]).
pub fn decode(
    contents: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<BigUint, CodecError> {
    if contents.len() > constants.book_length {
        return Err(CodecError::ContentsTooLong {
            len: contents.len(),
            max: constants.book_length,
        });
    }

    decode_wrapping(contents, constants, alphabet)
}

/// Maps contents of any length to some index in `[0, N)`.
///
/// The raw value of contents longer than L can exceed N; it is reduced
/// modulo N, so every sequence gets a valid address but re-encoding that
/// address is not guaranteed to reproduce the input.
pub fn decode_wrapping(
    contents: &[String],
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<BigUint, CodecError> {
    check_alphabet(constants, alphabet)?;

    let m = BigUint::from(alphabet.len());
    let mut raw = BigUint::zero();
    let mut place = BigUint::one();

    for symbol in contents {
        let ordinal = alphabet.ordinal(symbol)?;
        raw += BigUint::from(ordinal) * &place;
        place *= &m;
    }

    Ok((raw * &constants.i) % &constants.n)
}

/// Draws a uniformly random index from the address space `[0, N)`.
pub fn random_index<R: RngCore>(constants: &Constants, rng: &mut R) -> BigUint {
    rng.gen_biguint_below(&constants.n)
}

fn check_alphabet(constants: &Constants, alphabet: &Alphabet) -> Result<(), CodecError> {
    if alphabet.len() != constants.m {
        return Err(CodecError::AlphabetMismatch {
            expected: constants.m,
            actual: alphabet.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_library() -> (Constants, Alphabet) {
        let alphabet = Alphabet::from_symbols(vec![
            "👍".to_string(),
            "👎".to_string(),
            "👌".to_string(),
        ])
        .unwrap();
        // M = 3, L = 3, N = 27, C = 5, I = 11
        let constants = Constants::with_multiplier(3, 3, BigUint::from(5u32)).unwrap();
        (constants, alphabet)
    }

    #[test]
    fn test_encode_zero_is_empty() {
        let (constants, alphabet) = small_library();
        let contents = encode(&BigUint::zero(), &constants, &alphabet).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_encode_one_is_scrambled() {
        let (constants, alphabet) = small_library();

        // scrambled = 5 -> digits 2, 1 -> 👌 👎
        let contents = encode(&BigUint::one(), &constants, &alphabet).unwrap();
        assert_eq!(contents, vec!["👌", "👎"]);
    }

    #[test]
    fn test_decode_inverts_encode_over_full_space() {
        let (constants, alphabet) = small_library();

        for index in 0u32..27 {
            let index = BigUint::from(index);
            let contents = encode(&index, &constants, &alphabet).unwrap();
            assert!(contents.len() <= 3);
            let back = decode(&contents, &constants, &alphabet).unwrap();
            assert_eq!(back, index);
        }
    }

    #[test]
    fn test_encode_is_permutation() {
        let (constants, alphabet) = small_library();

        let mut seen = std::collections::HashSet::new();
        for index in 0u32..27 {
            let contents = encode(&BigUint::from(index), &constants, &alphabet).unwrap();
            assert!(seen.insert(contents), "two indices shared one book");
        }
    }

    #[test]
    fn test_encode_inverts_decode() {
        let (constants, alphabet) = small_library();

        let contents: Vec<String> = vec!["👍".into(), "👍".into(), "👌".into()];
        let index = decode(&contents, &constants, &alphabet).unwrap();
        let back = encode(&index, &constants, &alphabet).unwrap();
        assert_eq!(back, contents);
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        let (constants, alphabet) = small_library();

        let result = encode(&BigUint::from(27u32), &constants, &alphabet);
        assert!(matches!(result, Err(CodecError::IndexOutOfRange)));
    }

    #[test]
    fn test_decode_rejects_overlong_contents() {
        let (constants, alphabet) = small_library();

        let contents: Vec<String> = std::iter::repeat("👍".to_string()).take(4).collect();
        let result = decode(&contents, &constants, &alphabet);
        assert!(matches!(
            result,
            Err(CodecError::ContentsTooLong { len: 4, max: 3 })
        ));
    }

    #[test]
    fn test_decode_wrapping_accepts_overlong_contents() {
        let (constants, alphabet) = small_library();

        let contents: Vec<String> = std::iter::repeat("👎".to_string()).take(10).collect();
        let index = decode_wrapping(&contents, &constants, &alphabet).unwrap();
        assert!(index < constants.n);
    }

    #[test]
    fn test_decode_unknown_symbol() {
        let (constants, alphabet) = small_library();

        let contents: Vec<String> = vec!["👍".into(), "🎉".into()];
        let result = decode(&contents, &constants, &alphabet);
        assert!(matches!(result, Err(CodecError::UnknownSymbol(_))));
    }

    #[test]
    fn test_alphabet_mismatch() {
        let (constants, _) = small_library();
        let other = Alphabet::from_symbols(vec!["a".to_string(), "b".to_string()]).unwrap();

        let result = encode(&BigUint::one(), &constants, &other);
        assert!(matches!(
            result,
            Err(CodecError::AlphabetMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_random_index_in_range() {
        let (constants, _) = small_library();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let index = random_index(&constants, &mut rng);
            assert!(index < constants.n);
        }
    }

    #[test]
    fn test_roundtrip_with_emoji_catalog() {
        let alphabet = Alphabet::emoji_catalog();
        let constants = Constants::derive_seeded(alphabet.len(), 16, [7u8; 32]).unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let index = random_index(&constants, &mut rng);
            let contents = encode(&index, &constants, &alphabet).unwrap();
            assert!(contents.len() <= 16);
            assert_eq!(decode(&contents, &constants, &alphabet).unwrap(), index);
        }
    }
}
