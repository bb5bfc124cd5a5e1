//! Random password generation.
//!
//! The random source is supplied by the caller, so tests can use a seeded
//! generator and get the same password every time.

use rand::Rng;

/// Symbols a generated password draws its one symbol from.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_-+=<>?/[]{},.:;";
/// Digits.
pub const DIGITS: &[u8] = b"0123456789";
/// Uppercase letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Length of every generated password.
pub const GENERATED_LENGTH: usize = 12;

/// Build a password of one symbol, one digit, one uppercase letter, then
/// lowercase letters up to [`GENERATED_LENGTH`], in that order.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut password = String::with_capacity(GENERATED_LENGTH);
    password.push(pick(rng, SYMBOLS));
    password.push(pick(rng, DIGITS));
    password.push(pick(rng, UPPERCASE));
    while password.len() < GENERATED_LENGTH {
        password.push(pick(rng, LOWERCASE));
    }
    password
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}
