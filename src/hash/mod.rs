//! Adaptive, salted password hashing in the bcrypt construction.
//!
//! Derives a digest by running an expensive, cost-controlled Blowfish key
//! schedule over the salt and password, then encrypting a fixed plaintext
//! 64 times. Records are self-describing text of the form
//! `$2a$NN$<salt22><digest31>`, rendered through the crypt alphabet.

mod bcrypt;
mod cipher;
mod record;

pub use bcrypt::{generate_salt, hash_password, verify_password};

/// Raw salt length in bytes.
pub const SALT_LEN: usize = 16;
/// Digest bytes kept from the 24-byte cipher output; the last byte is
/// dropped.
pub const DIGEST_LEN: usize = 23;
/// Encoded salt length in symbols.
pub const ENCODED_SALT_LEN: usize = 22;
/// Encoded digest length in symbols.
pub const ENCODED_DIGEST_LEN: usize = 31;
/// Smallest accepted cost exponent; the key schedule runs `2^cost` rounds.
pub const MIN_COST: u32 = 4;
/// Largest cost exponent the round counter can represent.
pub const MAX_COST: u32 = 31;

/// Algorithm revision character.
pub(crate) const VERSION: u8 = b'2';
/// Passes over the magic plaintext.
pub(crate) const ENCRYPTION_ROUNDS: usize = 64;
/// Fixed plaintext encrypted into the digest.
pub(crate) const MAGIC: &[u8; 24] = b"OrpheanBeholderScryDoubt";
