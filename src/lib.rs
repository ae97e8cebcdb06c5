//! Bcrypt-style adaptive password hashing over a table-driven base64
//! codec.
//!
//! Two strictly layered pieces: a codec that packs 3 bytes into 4
//! printable symbols through a caller-substitutable 65-entry alphabet,
//! and a salted, cost-parameterized password hash that renders its salt
//! and digest through the codec's crypt alphabet.
//!
//! ```
//! use saltmill::{generate_salt, hash_password, verify_password};
//!
//! let record = hash_password(b"hunter2", &generate_salt(8)).unwrap();
//! assert!(verify_password(b"hunter2", &record));
//! assert!(!verify_password(b"hunter3", &record));
//! ```

mod codec;
mod error;
mod hash;

pub use crate::codec::{
    Alphabet, CRYPT, STANDARD, TABLE_LEN, decode, decode_into, encode, encode_into, encoded_len,
};
pub use crate::error::Error;
pub use crate::hash::{
    DIGEST_LEN, ENCODED_DIGEST_LEN, ENCODED_SALT_LEN, MAX_COST, MIN_COST, SALT_LEN, generate_salt,
    hash_password, verify_password,
};
