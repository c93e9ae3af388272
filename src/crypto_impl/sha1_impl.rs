/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
use ::hmac::{Hmac, Mac};
use ::sha1::{Digest, Sha1};

use crate::crypto::*;

/// The version and type of the sha1 crate that the `Sha1Hash` trait is implemented for.
pub type CrateSha1 = Sha1;
impl Sha1Hash for CrateSha1 {
    fn new() -> Self {
        Digest::new()
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(self, data)
    }

    fn finish_and_reset(&mut self, output: &mut [u8; SHA1_HASH_SIZE]) {
        output.copy_from_slice(&Digest::finalize_reset(self));
    }
}

/// HMAC-SHA1 backed by the `hmac` and `sha1` crates.
pub struct CrateHmacSha1;
impl Sha1Hmac for CrateHmacSha1 {
    fn new() -> Self {
        Self
    }

    fn hash(&mut self, key: &[u8], full_input: &[u8], output: &mut [u8; SHA1_HASH_SIZE]) {
        let mut hm = <Hmac<Sha1> as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length");
        Mac::update(&mut hm, full_input);
        output.copy_from_slice(&hm.finalize().into_bytes());
    }
}
