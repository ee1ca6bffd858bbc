//! Derivation of the library constants (N, C, I).
//!
//! N = M^L fixes the address space `[0, N)`. C is a multiplier coprime to N,
//! so `x -> (x * C) mod N` is a bijection on the address space, and I is C's
//! modular inverse, so multiplying by I undoes it.
//!
//! Derivation is random by default: two runs of [`Constants::derive`] produce
//! different multipliers, and indices issued under one multiplier are
//! unrecoverable under another. Callers that share addresses across runs must
//! either persist the derived constants (see [`crate::store`]) or derive them
//! from a fixed seed with [`Constants::derive_seeded`].

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MAX_COPRIME_RETRIES;

/// Errors that can occur during constants derivation.
#[derive(Error, Debug)]
pub enum ConstantsError {
    #[error("Alphabet needs at least 2 symbols, got {0}")]
    AlphabetTooSmall(usize),

    #[error("Book length must be at least 1")]
    EmptyBook,

    #[error("Book length {0} is too large to exponentiate")]
    BookLengthTooLarge(usize),

    #[error("No coprime multiplier found after {0} attempts; (M, L) configuration is degenerate")]
    RetriesExhausted(u32),

    #[error("Multiplier is not coprime to N")]
    NotCoprime,

    #[error("Multiplier must lie in [1, N)")]
    MultiplierOutOfRange,
}

/// The immutable constants triple plus the (M, L) configuration it was
/// derived from.
///
/// Derive once, then treat as read-only for the remainder of the process.
/// Never regenerate silently: C is the key that scatters indices, and a new
/// C orphans every previously issued address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constants {
    /// Alphabet size the constants were derived for.
    pub m: usize,
    /// Canonical full-book length L.
    pub book_length: usize,
    /// Address space size, N = M^L.
    pub n: BigUint,
    /// Multiplier, coprime to N.
    pub c: BigUint,
    /// Modular inverse of C: (C * I) mod N == 1.
    pub i: BigUint,
}

impl Constants {
    /// Derives constants with a fresh random multiplier.
    pub fn derive(m: usize, book_length: usize) -> Result<Self, ConstantsError> {
        Self::derive_with_rng(m, book_length, &mut rand::thread_rng())
    }

    /// Derives constants deterministically from a 32-byte seed.
    ///
    /// The same (m, book_length, seed) triple always yields the same
    /// multiplier, which makes addresses reproducible without persisting the
    /// constants file.
    pub fn derive_seeded(
        m: usize,
        book_length: usize,
        seed: [u8; 32],
    ) -> Result<Self, ConstantsError> {
        let mut rng = ChaCha20Rng::from_seed(seed);
        Self::derive_with_rng(m, book_length, &mut rng)
    }

    /// Derives constants sampling the multiplier from the given RNG.
    pub fn derive_with_rng<R: RngCore>(
        m: usize,
        book_length: usize,
        rng: &mut R,
    ) -> Result<Self, ConstantsError> {
        let n = modulus(m, book_length)?;

        // N's prime factors are exactly M's, a small fixed set, so a uniform
        // candidate is coprime with high probability and the retry loop is
        // short in practice. The bound catches degenerate configurations.
        let one = BigUint::one();
        let mut c = None;
        for _ in 0..MAX_COPRIME_RETRIES {
            let candidate = rng.gen_biguint_range(&one, &n);
            if n.gcd(&candidate).is_one() {
                c = Some(candidate);
                break;
            }
        }
        let c = c.ok_or(ConstantsError::RetriesExhausted(MAX_COPRIME_RETRIES))?;

        let i = mod_inverse(&c, &n).ok_or(ConstantsError::NotCoprime)?;

        Ok(Self {
            m,
            book_length,
            n,
            c,
            i,
        })
    }

    /// Builds constants around an explicitly chosen multiplier.
    ///
    /// Useful for fixed test vectors and for reconstructing a previously
    /// persisted configuration.
    pub fn with_multiplier(
        m: usize,
        book_length: usize,
        c: BigUint,
    ) -> Result<Self, ConstantsError> {
        let n = modulus(m, book_length)?;

        if c.is_zero() || c >= n {
            return Err(ConstantsError::MultiplierOutOfRange);
        }
        if !n.gcd(&c).is_one() {
            return Err(ConstantsError::NotCoprime);
        }

        let i = mod_inverse(&c, &n).ok_or(ConstantsError::NotCoprime)?;

        Ok(Self {
            m,
            book_length,
            n,
            c,
            i,
        })
    }
}

/// Computes N = M^L with arbitrary precision.
fn modulus(m: usize, book_length: usize) -> Result<BigUint, ConstantsError> {
    if m < 2 {
        return Err(ConstantsError::AlphabetTooSmall(m));
    }
    if book_length == 0 {
        return Err(ConstantsError::EmptyBook);
    }
    let exponent = book_length
        .to_u32()
        .ok_or(ConstantsError::BookLengthTooLarge(book_length))?;

    Ok(BigUint::from(m).pow(exponent))
}

/// Modular multiplicative inverse of `c` modulo `n` via the extended
/// Euclidean algorithm. Returns `None` when gcd(c, n) != 1.
fn mod_inverse(c: &BigUint, n: &BigUint) -> Option<BigUint> {
    let c = BigInt::from(c.clone());
    let n = BigInt::from(n.clone());

    let ext = c.extended_gcd(&n);
    if !ext.gcd.is_one() {
        return None;
    }

    // ext.x may be negative; mod_floor maps it into [0, n)
    ext.x.mod_floor(&n).to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_exact() {
        let c = Constants::with_multiplier(3, 3, BigUint::from(5u32)).unwrap();
        assert_eq!(c.n, BigUint::from(27u32));

        let c = Constants::derive(10, 30).unwrap();
        assert_eq!(c.n, BigUint::from(10u32).pow(30));
    }

    #[test]
    fn test_known_triple() {
        // gcd(5, 27) = 1 and 5 * 11 = 55 = 2*27 + 1
        let c = Constants::with_multiplier(3, 3, BigUint::from(5u32)).unwrap();
        assert_eq!(c.i, BigUint::from(11u32));
        assert_eq!((&c.c * &c.i) % &c.n, BigUint::one());
    }

    #[test]
    fn test_derive_inverse_property() {
        let c = Constants::derive(7, 5).unwrap();
        assert!(c.c >= BigUint::one());
        assert!(c.c < c.n);
        assert_eq!((&c.c * &c.i) % &c.n, BigUint::one());
    }

    #[test]
    fn test_derive_seeded_deterministic() {
        let seed = [42u8; 32];
        let a = Constants::derive_seeded(31, 8, seed).unwrap();
        let b = Constants::derive_seeded(31, 8, seed).unwrap();
        assert_eq!(a, b);

        let c = Constants::derive_seeded(31, 8, [43u8; 32]).unwrap();
        assert_ne!(a.c, c.c);
    }

    #[test]
    fn test_rejects_degenerate_alphabet() {
        assert!(matches!(
            Constants::derive(1, 3),
            Err(ConstantsError::AlphabetTooSmall(1))
        ));
        assert!(matches!(
            Constants::derive(0, 3),
            Err(ConstantsError::AlphabetTooSmall(0))
        ));
    }

    #[test]
    fn test_rejects_empty_book() {
        assert!(matches!(
            Constants::derive(3, 0),
            Err(ConstantsError::EmptyBook)
        ));
    }

    #[test]
    fn test_with_multiplier_rejects_non_coprime() {
        // gcd(3, 27) = 3
        let result = Constants::with_multiplier(3, 3, BigUint::from(3u32));
        assert!(matches!(result, Err(ConstantsError::NotCoprime)));
    }

    #[test]
    fn test_with_multiplier_rejects_out_of_range() {
        let result = Constants::with_multiplier(3, 3, BigUint::zero());
        assert!(matches!(result, Err(ConstantsError::MultiplierOutOfRange)));

        let result = Constants::with_multiplier(3, 3, BigUint::from(27u32));
        assert!(matches!(result, Err(ConstantsError::MultiplierOutOfRange)));
    }

    #[test]
    fn test_mod_inverse_non_coprime_is_none() {
        assert_eq!(
            mod_inverse(&BigUint::from(6u32), &BigUint::from(27u32)),
            None
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Constants::derive(5, 4).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Constants = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
