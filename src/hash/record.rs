//! The persisted record grammar: `$2[a]$NN$<salt22>[<digest31>]`.

use super::{ENCODED_DIGEST_LEN, ENCODED_SALT_LEN, MAX_COST, MIN_COST, SALT_LEN, VERSION};
use crate::codec;
use crate::error::Error;

/// Fields recovered from a salt record before any cipher work.
#[derive(Debug)]
pub(crate) struct SaltRecord {
    /// Minor revision `a`: a NUL byte is appended to the keying material.
    pub append_nul: bool,
    pub cost: u32,
    pub salt: [u8; SALT_LEN],
    /// Record bytes through the encoded salt, reused verbatim in the
    /// produced hash.
    pub prefix_len: usize,
}

pub(crate) fn parse(record: &str) -> Result<SaltRecord, Error> {
    let bytes = record.as_bytes();

    if bytes.first() != Some(&b'$') {
        return Err(Error::MalformedRecord);
    }
    let mut pos = 1;

    let version = *bytes.get(pos).ok_or(Error::MalformedRecord)?;
    if version > VERSION {
        return Err(Error::UnsupportedVersion(version as char));
    }
    pos += 1;

    let append_nul = match bytes.get(pos) {
        Some(b'$') => false,
        Some(b'a') => {
            pos += 1;
            true
        }
        Some(&other) => return Err(Error::BadMinorVersion(other as char)),
        None => return Err(Error::MalformedRecord),
    };

    if bytes.get(pos) != Some(&b'$') {
        return Err(Error::MalformedRecord);
    }
    pos += 1;

    let cost = match (bytes.get(pos), bytes.get(pos + 1)) {
        (Some(tens), Some(ones)) if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            u32::from(tens - b'0') * 10 + u32::from(ones - b'0')
        }
        (Some(_), Some(_)) => return Err(Error::BadCost),
        _ => return Err(Error::MalformedRecord),
    };
    pos += 2;

    if bytes.get(pos) != Some(&b'$') {
        return Err(Error::MalformedRecord);
    }
    pos += 1;

    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(Error::BadCost);
    }

    // A full record carries the digest after the salt; only the salt is
    // read here, which is how verification reuses stored records.
    let salt_field = &bytes[pos..];
    if salt_field.len() != ENCODED_SALT_LEN
        && salt_field.len() != ENCODED_SALT_LEN + ENCODED_DIGEST_LEN
    {
        return Err(Error::BadSalt);
    }

    let mut salt = [0u8; SALT_LEN];
    let decoded = codec::decode_into(&salt_field[..ENCODED_SALT_LEN], &mut salt, &codec::CRYPT)
        .map_err(|_| Error::BadSalt)?;
    if decoded != SALT_LEN {
        return Err(Error::BadSalt);
    }

    Ok(SaltRecord {
        append_nul,
        cost,
        salt,
        prefix_len: pos + ENCODED_SALT_LEN,
    })
}

/// Renders a salt-record prefix. The minor revision is always `a`.
pub(crate) fn format_salt(cost: u32, salt: &[u8; SALT_LEN]) -> String {
    format!(
        "${}a${:02}${}",
        VERSION as char,
        cost,
        codec::encode(salt, &codec::CRYPT)
    )
}
