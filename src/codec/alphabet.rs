use super::TABLE_LEN;
use crate::error::Error;

const INVALID: i8 = -1;

/// An encoding table of 64 data symbols plus one pad slot.
///
/// A pad slot of `0` means the table does not pad; encoded output is
/// truncated after a partial trailing group instead. The decode-side
/// inverse table is derived once at construction and cached.
pub struct Alphabet {
    symbols: [u8; TABLE_LEN],
    inverse: [i8; 256],
}

/// RFC 1521 alphabet, `=` padded.
pub static STANDARD: Alphabet = match Alphabet::build(
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=",
) {
    Ok(table) => table,
    Err(_) => panic!("standard alphabet is valid"),
};

/// Crypt alphabet `./A-Za-z0-9`, unpadded. Not the standard ordering.
pub static CRYPT: Alphabet = match Alphabet::build(
    *b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\0",
) {
    Ok(table) => table,
    Err(_) => panic!("crypt alphabet is valid"),
};

impl Alphabet {
    /// Validates a caller-supplied table and derives its inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if any data symbol is repeated or not printable
    /// ASCII, or if a non-zero pad slot collides with a data symbol.
    pub fn new(symbols: &[u8; TABLE_LEN]) -> Result<Self, Error> {
        Self::build(*symbols)
    }

    const fn build(symbols: [u8; TABLE_LEN]) -> Result<Self, Error> {
        let mut inverse = [INVALID; 256];

        let mut i = 0;
        while i < TABLE_LEN - 1 {
            let s = symbols[i];
            if !s.is_ascii_graphic() || inverse[s as usize] != INVALID {
                return Err(Error::InvalidAlphabet);
            }
            inverse[s as usize] = i as i8;
            i += 1;
        }

        let pad = symbols[TABLE_LEN - 1];
        if pad != 0 && (!pad.is_ascii_graphic() || inverse[pad as usize] != INVALID) {
            return Err(Error::InvalidAlphabet);
        }

        Ok(Self { symbols, inverse })
    }

    /// Symbol for a 6-bit value.
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// The pad symbol, or `None` for truncating tables.
    pub fn pad(&self) -> Option<u8> {
        match self.symbols[TABLE_LEN - 1] {
            0 => None,
            pad => Some(pad),
        }
    }

    /// 6-bit value for a symbol, `None` for bytes outside the table.
    pub fn index_of(&self, symbol: u8) -> Option<u8> {
        let index = self.inverse[symbol as usize];
        if index == INVALID { None } else { Some(index as u8) }
    }
}
