use blowfish::Blowfish;

use super::SALT_LEN;

/// Blowfish state derived through the expensive key schedule.
///
/// The hash consumes the cipher through exactly this surface: plain state
/// initialization, `rounds` alternating salt/key re-derivations, and
/// in-place block encryption.
pub(crate) struct ExpensiveKeySchedule {
    state: Blowfish,
}

impl ExpensiveKeySchedule {
    pub(crate) fn new(salt: &[u8; SALT_LEN], key: &[u8], rounds: u64) -> Self {
        let mut state = Blowfish::bc_init_state();
        state.salted_expand_key(salt, key);
        for _ in 0..rounds {
            state.bc_expand_key(key);
            state.bc_expand_key(salt);
        }
        Self { state }
    }

    /// Encrypts `buf` in place as successive big-endian 8-byte blocks.
    pub(crate) fn encrypt_blocks(&self, buf: &mut [u8]) {
        for block in buf.chunks_exact_mut(8) {
            let l = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
            let r = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
            let [l, r] = self.state.bc_encrypt([l, r]);
            block[..4].copy_from_slice(&l.to_be_bytes());
            block[4..].copy_from_slice(&r.to_be_bytes());
        }
    }
}
