/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
use arrayvec::ArrayVec;
use zeroize::Zeroize;

use crate::crypto::*;

/// FIPS 180-1 initial hash value.
const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Offset within a block at which the 64-bit message length begins.
const LENGTH_OFFSET: usize = SHA1_BLOCK_SIZE - 8;

/// Rotate `value` left by `amount` bits. Bits that overflow the top re-enter at the bottom.
/// `amount` is taken modulo 32.
#[inline(always)]
pub const fn rotl32(value: u32, amount: u32) -> u32 {
    value.rotate_left(amount)
}

/// Run the SHA-1 compression function over a single 64 byte block, chaining the result into
/// `state`.
fn compress(state: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), SHA1_BLOCK_SIZE);
    let mut w = [0u32; 80];
    for (i, word) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }
    for i in 16..80 {
        w[i] = rotl32(w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16], 1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;
    for (i, wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), 0x5a827999),
            20..=39 => (b ^ c ^ d, 0x6ed9eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };
        let t = rotl32(a, 5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*wi);
        e = d;
        d = c;
        c = rotl32(b, 30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    w.zeroize();
}

/// Streaming SHA-1 (FIPS 180-1).
///
/// Input that does not fill a whole block is held in an internal 64 byte buffer until more
/// input arrives or the hash is finished. Nothing is heap allocated.
///
/// The internal state is wiped on drop and on reset.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffered: usize,
    /// Total message length in bytes.
    length: u64,
}

impl Sha1 {
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }

    pub fn update(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (SHA1_BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < SHA1_BLOCK_SIZE {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(SHA1_BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Apply the final padding, write the digest to `output` and return to the initial state.
    pub fn finish_and_reset(&mut self, output: &mut [u8; SHA1_HASH_SIZE]) {
        let bit_length = self.length.wrapping_mul(8);

        // 0x80, zeros up to 56 mod 64, then the big-endian bit length. At most two blocks.
        let mut tail: ArrayVec<u8, { 2 * SHA1_BLOCK_SIZE }> = ArrayVec::new();
        tail.extend(self.buffer[..self.buffered].iter().copied());
        tail.push(0x80);
        while tail.len() % SHA1_BLOCK_SIZE != LENGTH_OFFSET {
            tail.push(0);
        }
        tail.extend(bit_length.to_be_bytes());
        for block in tail.chunks_exact(SHA1_BLOCK_SIZE) {
            compress(&mut self.state, block);
        }
        tail.zeroize();

        for (out, word) in output.chunks_exact_mut(4).zip(self.state.iter()) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        self.reset();
    }

    /// Consume this hasher and return the digest of everything passed to `update`.
    pub fn finish(mut self) -> [u8; SHA1_HASH_SIZE] {
        let mut output = [0u8; SHA1_HASH_SIZE];
        self.finish_and_reset(&mut output);
        output
    }

    pub fn reset(&mut self) {
        self.buffer.zeroize();
        self.state = INITIAL_STATE;
        self.buffered = 0;
        self.length = 0;
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
    }
}

impl Sha1Hash for Sha1 {
    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) {
        Sha1::update(self, data)
    }

    fn finish_and_reset(&mut self, output: &mut [u8; SHA1_HASH_SIZE]) {
        Sha1::finish_and_reset(self, output)
    }
}

/// Compute the SHA-1 digest of `data`.
/// Any input of any length, including empty, is valid.
pub fn sha1(data: &[u8]) -> [u8; SHA1_HASH_SIZE] {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finish()
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn rotation() {
        assert_eq!(rotl32(0x8000_0001, 1), 0x0000_0003);
        assert_eq!(rotl32(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotl32(0x1234_5678, 8), 0x3456_7812);
        assert_eq!(rotl32(0x8000_0000, 31), 0x4000_0000);
        assert_eq!(rotl32(0xffff_ffff, 17), 0xffff_ffff);
    }

    #[test]
    fn fips_vectors() {
        assert_eq!(sha1(b""), hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert_eq!(sha1(b"abc"), hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
        assert_eq!(
            sha1(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1")
        );
        assert_eq!(
            sha1(b"The quick brown fox jumps over the lazy dog"),
            hex!("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
        );
    }

    #[test]
    fn million_a() {
        let mut hasher = Sha1::new();
        let chunk = [b'a'; 1000];
        for _ in 0..1000 {
            hasher.update(&chunk);
        }
        assert_eq!(hasher.finish(), hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f"));
    }

    #[test]
    fn split_points_match_one_shot() {
        let data: Vec<u8> = (0..200u32).map(|i| (i * 7 + 3) as u8).collect();
        for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 200] {
            let expected = sha1(&data[..len]);
            for split in 0..=len {
                let mut hasher = Sha1::new();
                hasher.update(&data[..split]);
                hasher.update(&data[split..len]);
                assert_eq!(hasher.finish(), expected, "len {} split {}", len, split);
            }
        }
    }

    #[test]
    fn finish_resets() {
        let mut hasher = Sha1::new();
        let mut first = [0u8; SHA1_HASH_SIZE];
        let mut second = [0u8; SHA1_HASH_SIZE];
        hasher.update(b"some earlier message that must not leak");
        hasher.finish_and_reset(&mut first);
        hasher.update(b"abc");
        hasher.finish_and_reset(&mut second);
        assert_eq!(second, hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
        assert_ne!(first, second);
    }
}
