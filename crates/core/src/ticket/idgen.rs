//! Ticket identifier generation.

use rand::Rng;

/// Default length of generated identifiers.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Alphabet identifiers are drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate an opaque identifier of `length` uppercase ASCII letters.
///
/// Uniqueness is best-effort: the generator keeps no record of issued
/// identifiers, so collisions across calls are possible.
pub fn generate(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
