//! Binary-to-text codec over caller-substitutable 65-entry alphabets.
//!
//! Packs 3 input bytes into 4 output symbols of 6 bits each. The default
//! table is the RFC 1521 base64 alphabet with `=` padding; the crypt table
//! orders its symbols `./A-Za-z0-9` and carries no padding symbol, so
//! partial trailing groups shorten the output instead.

mod alphabet;
mod base64;

pub use alphabet::{Alphabet, CRYPT, STANDARD};
pub use base64::{decode, decode_into, encode, encode_into, encoded_len};

/// Number of entries in an alphabet table (64 data symbols + 1 pad slot).
pub const TABLE_LEN: usize = 65;
