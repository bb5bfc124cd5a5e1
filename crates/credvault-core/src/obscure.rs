//! Letter-shift obscuring transform.
//!
//! **This is not encryption.** Every ASCII letter is rotated one place within
//! its case's alphabet and everything else passes through untouched. Anyone
//! holding a stored value can recover the plaintext by eye. The transform only
//! keeps passwords from being stored verbatim; it provides no confidentiality
//! and must not be treated as a security boundary.

/// Rotate every ASCII letter forward by one (`a→b`, `z→a`, `Z→A`).
pub fn encode(text: &str) -> String {
    text.chars().map(|c| shift(c, 1)).collect()
}

/// Inverse of [`encode`]: rotate every ASCII letter back by one.
pub fn decode(text: &str) -> String {
    text.chars().map(|c| shift(c, 25)).collect()
}

fn shift(c: char, by: u8) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    // ASCII letters are single bytes, so the cast is lossless.
    let offset = (c as u8 - base + by) % 26;
    (base + offset) as char
}
