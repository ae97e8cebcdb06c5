use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::cipher::ExpensiveKeySchedule;
use super::record;
use super::{DIGEST_LEN, ENCODED_DIGEST_LEN, ENCRYPTION_ROUNDS, MAGIC, MAX_COST, MIN_COST, SALT_LEN};
use crate::codec;
use crate::error::Error;

/// Draws a fresh 16-byte salt and renders it as a salt-record prefix
/// `$2a$NN$<salt22>`.
///
/// `cost` is clamped into the supported range.
///
/// # Panics
///
/// Panics if the OS random generator is unavailable. There is no safe
/// salt source to fall back to.
pub fn generate_salt(cost: u32) -> String {
    let cost = cost.clamp(MIN_COST, MAX_COST);

    let mut salt = [0u8; SALT_LEN];
    if getrandom::fill(&mut salt).is_err() {
        panic!("OS random generator unavailable");
    }

    record::format_salt(cost, &salt)
}

/// Hashes `password` under the salt and cost carried by `salt_record`,
/// returning the full record `$2[a]$NN$<salt22><digest31>`.
///
/// A stored full record is accepted as `salt_record`; its digest portion
/// is ignored and the prefix through the salt is reused verbatim. With
/// the `a` minor revision a NUL byte is appended to the keying material,
/// matching existing stored hashes.
///
/// # Errors
///
/// Any malformed record field is rejected before cipher work starts.
pub fn hash_password(password: &[u8], salt_record: &str) -> Result<String, Error> {
    let parsed = record::parse(salt_record)?;

    let mut key = Zeroizing::new(Vec::with_capacity(password.len() + 1));
    key.extend_from_slice(password);
    if parsed.append_nul {
        key.push(0);
    }
    if key.is_empty() {
        return Err(Error::EmptyPassword);
    }

    let rounds = 1u64 << parsed.cost;
    let schedule = ExpensiveKeySchedule::new(&parsed.salt, &key, rounds);

    let mut block = *MAGIC;
    for _ in 0..ENCRYPTION_ROUNDS {
        schedule.encrypt_blocks(&mut block);
    }

    let mut out = String::with_capacity(parsed.prefix_len + ENCODED_DIGEST_LEN);
    out.push_str(&salt_record[..parsed.prefix_len]);
    out.push_str(&codec::encode(&block[..DIGEST_LEN], &codec::CRYPT));
    Ok(out)
}

/// Checks `password` against a stored record.
///
/// Recomputes the hash with the stored salt and compares in constant
/// time. Every failure mode, malformed record included, is the same
/// `false`.
pub fn verify_password(password: &[u8], stored: &str) -> bool {
    match hash_password(password, stored) {
        Ok(computed) => bool::from(computed.as_bytes().ct_eq(stored.as_bytes())),
        Err(_) => false,
    }
}
