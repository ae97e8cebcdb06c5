use super::alphabet::Alphabet;
use crate::error::Error;

/// Output capacity required to encode `n` input bytes, padding included.
pub fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Encodes `input` into `out`, returning the number of symbols written.
///
/// The required capacity is [`encoded_len`] of the input regardless of the
/// table's padding mode; with a truncating table the symbol count returned
/// may be smaller. Capacity beyond the written symbols is zero-filled.
///
/// # Errors
///
/// Returns [`Error::Capacity`] if `out` is shorter than the required
/// capacity.
pub fn encode_into(input: &[u8], out: &mut [u8], table: &Alphabet) -> Result<usize, Error> {
    let needed = encoded_len(input.len());
    if out.len() < needed {
        return Err(Error::Capacity {
            needed,
            available: out.len(),
        });
    }

    let mut written = 0;
    let mut groups = input.chunks_exact(3);
    for group in &mut groups {
        let m = (group[0] as u32) << 16 | (group[1] as u32) << 8 | group[2] as u32;
        out[written] = table.symbol(((m >> 18) & 0x3f) as usize);
        out[written + 1] = table.symbol(((m >> 12) & 0x3f) as usize);
        out[written + 2] = table.symbol(((m >> 6) & 0x3f) as usize);
        out[written + 3] = table.symbol((m & 0x3f) as usize);
        written += 4;
    }

    let rest = groups.remainder();
    if !rest.is_empty() {
        let mut m = (rest[0] as u32) << 16;
        if rest.len() == 2 {
            m |= (rest[1] as u32) << 8;
        }
        out[written] = table.symbol(((m >> 18) & 0x3f) as usize);
        out[written + 1] = table.symbol(((m >> 12) & 0x3f) as usize);
        written += 2;
        if rest.len() == 2 {
            out[written] = table.symbol(((m >> 6) & 0x3f) as usize);
            written += 1;
        }
        if let Some(pad) = table.pad() {
            while written < needed {
                out[written] = pad;
                written += 1;
            }
        }
    }

    out[written..].fill(0);
    Ok(written)
}

/// Encodes `input` into a freshly allocated string.
pub fn encode(input: &[u8], table: &Alphabet) -> String {
    let mut out = vec![0u8; encoded_len(input.len())];
    let written = encode_into(input, &mut out, table).expect("capacity computed from input");
    out.truncate(written);
    out.into_iter().map(char::from).collect()
}

/// Decodes `input` into `out`, returning the number of bytes written.
///
/// With a padding table the total length must be a multiple of 4 with at
/// most two trailing pad symbols and nothing after them. With a truncating
/// table the length remainder modulo 4 must not be 1. Capacity beyond the
/// written bytes is zero-filled.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] for bytes outside the table,
/// [`Error::InvalidPadding`] or [`Error::InvalidLength`] for lengths no
/// byte sequence can produce, and [`Error::Capacity`] if `out` cannot hold
/// the decoded bytes.
pub fn decode_into(input: &[u8], out: &mut [u8], table: &Alphabet) -> Result<usize, Error> {
    let pad = table.pad();

    // Significant symbols run up to the first pad symbol.
    let sig = match pad {
        Some(p) => input.iter().position(|&b| b == p).unwrap_or(input.len()),
        None => input.len(),
    };
    for &b in &input[..sig] {
        if table.index_of(b).is_none() {
            return Err(Error::InvalidSymbol(b));
        }
    }

    let needed = match pad {
        Some(p) => {
            let mut pads = 0;
            if sig < input.len() {
                pads = 1;
                if sig + 1 < input.len() && input[sig + 1] == p {
                    pads = 2;
                }
            }
            if sig + pads != input.len() || (sig + pads) % 4 != 0 {
                return Err(Error::InvalidPadding);
            }
            (sig + pads) / 4 * 3 - pads
        }
        None => {
            if sig % 4 == 1 {
                return Err(Error::InvalidLength(sig));
            }
            sig / 4 * 3 + match sig % 4 {
                0 => 0,
                2 => 1,
                _ => 2,
            }
        }
    };

    if needed > out.len() {
        return Err(Error::Capacity {
            needed,
            available: out.len(),
        });
    }

    // Scanned and validated above.
    let index = |b: u8| table.index_of(b).unwrap_or(0) as u32;

    let mut s = 0;
    let mut d = 0;
    while sig - s > 3 {
        let m = index(input[s]) << 18
            | index(input[s + 1]) << 12
            | index(input[s + 2]) << 6
            | index(input[s + 3]);
        out[d] = (m >> 16) as u8;
        out[d + 1] = (m >> 8) as u8;
        out[d + 2] = m as u8;
        s += 4;
        d += 3;
    }

    match sig - s {
        0 => {}
        rest => {
            let mut m = index(input[s]) << 18 | index(input[s + 1]) << 12;
            out[d] = (m >> 16) as u8;
            if rest == 3 {
                m |= index(input[s + 2]) << 6;
                out[d + 1] = (m >> 8) as u8;
            }
        }
    }

    out[needed..].fill(0);
    Ok(needed)
}

/// Decodes `input` into a freshly allocated byte vector.
pub fn decode(input: &[u8], table: &Alphabet) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; input.len().div_ceil(4) * 3];
    let written = decode_into(input, &mut out, table)?;
    out.truncate(written);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CRYPT, STANDARD};

    #[test]
    fn encodes_rfc_padding_cases() {
        assert_eq!(encode(b"f", &STANDARD), "Zg==");
        assert_eq!(encode(b"fo", &STANDARD), "Zm8=");
        assert_eq!(encode(b"foo", &STANDARD), "Zm9v");
        assert_eq!(encode(b"foob", &STANDARD), "Zm9vYg==");
        assert_eq!(encode(b"fooba", &STANDARD), "Zm9vYmE=");
        assert_eq!(encode(b"foobar", &STANDARD), "Zm9vYmFy");
    }

    #[test]
    fn truncating_table_shortens_partial_groups() {
        assert_eq!(encode(b"f", &CRYPT).len(), 2);
        assert_eq!(encode(b"fo", &CRYPT).len(), 3);
        assert_eq!(encode(b"foo", &CRYPT).len(), 4);
        assert!(!encode(b"f", &CRYPT).contains('='));
    }

    #[test]
    fn round_trips_every_length_with_both_tables() {
        let data: Vec<u8> = (0..=255).collect();
        for n in 0..data.len() {
            for table in [&STANDARD, &CRYPT] {
                let text = encode(&data[..n], table);
                assert_eq!(decode(text.as_bytes(), table).unwrap(), &data[..n]);
            }
        }
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(encode(b"repeatable", &CRYPT), encode(b"repeatable", &CRYPT));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(encode(b"", &STANDARD), "");
        assert_eq!(decode(b"", &STANDARD).unwrap(), Vec::<u8>::new());
        assert_eq!(decode(b"", &CRYPT).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_length_remainder_one() {
        assert!(decode(b"Z", &STANDARD).is_err());
        assert!(decode(b"Zm9vY", &STANDARD).is_err());
        assert_eq!(decode(b"Z", &CRYPT), Err(Error::InvalidLength(1)));
        assert_eq!(decode(b"Zm9vY", &CRYPT), Err(Error::InvalidLength(5)));
    }

    #[test]
    fn rejects_bad_padding() {
        // one pad where two are needed
        assert_eq!(decode(b"Zg=", &STANDARD), Err(Error::InvalidPadding));
        // three pads
        assert_eq!(decode(b"Zg===", &STANDARD), Err(Error::InvalidPadding));
        // trailing garbage after padding
        assert_eq!(decode(b"Zm8=x", &STANDARD), Err(Error::InvalidPadding));
        // padding after a complete group
        assert_eq!(decode(b"AAAA=", &STANDARD), Err(Error::InvalidPadding));
        // missing pads entirely
        assert_eq!(decode(b"Zg", &STANDARD), Err(Error::InvalidPadding));
    }

    #[test]
    fn rejects_symbols_outside_the_table() {
        assert_eq!(decode(b"Zm9!", &STANDARD), Err(Error::InvalidSymbol(b'!')));
        assert_eq!(decode(b"+AAA", &CRYPT), Err(Error::InvalidSymbol(b'+')));
    }

    #[test]
    fn encode_into_reports_needed_capacity() {
        let mut out = [0u8; 3];
        assert_eq!(
            encode_into(b"f", &mut out, &STANDARD),
            Err(Error::Capacity {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn decode_into_reports_needed_capacity() {
        let mut out = [0u8; 2];
        assert_eq!(
            decode_into(b"Zm9v", &mut out, &STANDARD),
            Err(Error::Capacity {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn zero_fills_unused_trailing_capacity() {
        let mut out = [0xff_u8; 8];
        let written = encode_into(b"f", &mut out, &CRYPT).unwrap();
        assert_eq!(written, 2);
        assert!(out[written..].iter().all(|&b| b == 0));

        let mut out = [0xff_u8; 8];
        let written = decode_into(b"Zm9v", &mut out, &STANDARD).unwrap();
        assert_eq!(written, 3);
        assert!(out[written..].iter().all(|&b| b == 0));
    }

    #[test]
    fn caller_supplied_table_is_honored() {
        // standard order reversed, '*' pad
        let mut symbols = [0u8; crate::codec::TABLE_LEN];
        for (i, &b) in b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
            .iter()
            .rev()
            .enumerate()
        {
            symbols[i] = b;
        }
        symbols[crate::codec::TABLE_LEN - 1] = b'*';
        let table = Alphabet::new(&symbols).unwrap();

        let text = encode(b"fo", &table);
        assert!(text.ends_with('*'));
        assert_eq!(decode(text.as_bytes(), &table).unwrap(), b"fo");
    }
}
