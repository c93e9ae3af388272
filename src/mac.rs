/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
use zeroize::Zeroizing;

use crate::crypto::*;
use crate::hash::sha1;
use crate::scratch::{with_thread_scratch, ScratchPool};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Normalize an HMAC key of any length to exactly one SHA-1 block.
///
/// Keys longer than a block are replaced by their SHA-1 digest. The result is zero padded.
pub fn normalize_key(key: &[u8]) -> Zeroizing<[u8; SHA1_BLOCK_SIZE]> {
    let mut normalized = Zeroizing::new([0u8; SHA1_BLOCK_SIZE]);
    if key.len() > SHA1_BLOCK_SIZE {
        let digest = Zeroizing::new(sha1(key));
        normalized[..SHA1_HASH_SIZE].copy_from_slice(&*digest);
    } else {
        normalized[..key.len()].copy_from_slice(key);
    }
    normalized
}

fn pad_block(key: &[u8; SHA1_BLOCK_SIZE], pad: u8) -> Zeroizing<[u8; SHA1_BLOCK_SIZE]> {
    let mut block = Zeroizing::new([pad; SHA1_BLOCK_SIZE]);
    for (b, k) in block.iter_mut().zip(key.iter()) {
        *b ^= *k;
    }
    block
}

/// HMAC-SHA1 (RFC 2104) drawing its working buffers from `pool`.
///
/// The inner hash runs over `ipad || message` and the outer hash over `opad || inner`. Both
/// concatenations are written into buffers from `pool` in full before they are hashed.
pub fn hmac_sha1_with(pool: &mut ScratchPool, key: &[u8], message: &[u8]) -> [u8; SHA1_HASH_SIZE] {
    let key = normalize_key(key);
    let ipad = pad_block(&key, IPAD);
    let opad = pad_block(&key, OPAD);

    let inner = {
        let mut buf = pool.acquire(SHA1_BLOCK_SIZE + message.len());
        buf[..SHA1_BLOCK_SIZE].copy_from_slice(&*ipad);
        buf[SHA1_BLOCK_SIZE..].copy_from_slice(message);
        Zeroizing::new(sha1(&buf))
    };

    let mut buf = pool.acquire(SHA1_BLOCK_SIZE + SHA1_HASH_SIZE);
    buf[..SHA1_BLOCK_SIZE].copy_from_slice(&*opad);
    buf[SHA1_BLOCK_SIZE..].copy_from_slice(&*inner);
    sha1(&buf)
}

/// HMAC-SHA1 (RFC 2104) of `message` under `key`, using the calling thread's scratch pool.
///
/// Total over all inputs: keys and messages of any length, including empty, are valid.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; SHA1_HASH_SIZE] {
    with_thread_scratch(|pool| hmac_sha1_with(pool, key, message))
}

/// Check `tag` against the HMAC-SHA1 of `message` under `key` in constant time.
/// Tags that are not exactly 20 bytes never verify.
#[must_use]
pub fn verify_hmac_sha1(key: &[u8], message: &[u8], tag: &[u8]) -> bool {
    secure_eq(&hmac_sha1(key, message), tag)
}

/// HMAC-SHA1 context that owns its scratch pool instead of using the thread's.
pub struct HmacSha1 {
    scratch: ScratchPool,
}

impl HmacSha1 {
    pub fn with_scratch(scratch: ScratchPool) -> Self {
        Self { scratch }
    }

    pub fn mac(&mut self, key: &[u8], message: &[u8]) -> [u8; SHA1_HASH_SIZE] {
        hmac_sha1_with(&mut self.scratch, key, message)
    }

    pub fn scratch(&self) -> &ScratchPool {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut ScratchPool {
        &mut self.scratch
    }
}

impl Default for HmacSha1 {
    fn default() -> Self {
        Self::with_scratch(ScratchPool::new())
    }
}

impl Sha1Hmac for HmacSha1 {
    fn new() -> Self {
        Self::default()
    }

    fn hash(&mut self, key: &[u8], full_input: &[u8], output: &mut [u8; SHA1_HASH_SIZE]) {
        *output = self.mac(key, full_input);
    }
}
