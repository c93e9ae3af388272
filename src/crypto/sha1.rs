/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */

/// The size of a SHA-1 hash, which is always 20 bytes.
pub const SHA1_HASH_SIZE: usize = 20;
/// The size of a SHA-1 input block, which is always 64 bytes.
/// HMAC keys are normalized to exactly this length.
pub const SHA1_BLOCK_SIZE: usize = 64;

/// A SHA-1 implementation.
/// Does not need to be threadsafe.
pub trait Sha1Hash {
    /// Create a new instance of SHA-1 for streaming data to.
    fn new() -> Self;
    /// Update the instance of SHA-1 with input `data`.
    /// This must update the state of SHA-1 as if `data` was appended to the previous input.
    fn update(&mut self, data: &[u8]);
    /// Finish streaming input and output the final hash.
    /// The hash must be written to `output`.
    ///
    /// This instance should be reset so that a new, independent hash can be generated.
    fn finish_and_reset(&mut self, output: &mut [u8; SHA1_HASH_SIZE]);
}

/// A HMAC-SHA1 implementation.
/// Does not need to be threadsafe.
pub trait Sha1Hmac {
    /// Allocate space on the stack or heap for repeated Hmac invocations.
    fn new() -> Self;
    /// Pure function for computing a single HMAC Hash. Repeat invocations of this function should
    /// have no effect on each other.
    ///
    /// `key` may be of any length, including zero.
    fn hash(&mut self, key: &[u8], full_input: &[u8], output: &mut [u8; SHA1_HASH_SIZE]);
}
