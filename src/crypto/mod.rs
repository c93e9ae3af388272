/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */

mod sha1;
pub use self::sha1::*;

/// Constant time byte slice equality.
#[inline]
pub fn secure_eq<A: AsRef<[u8]> + ?Sized, B: AsRef<[u8]> + ?Sized>(a: &A, b: &B) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() == b.len() {
        let mut x = 0u8;
        for (aa, bb) in a.iter().zip(b.iter()) {
            x |= *aa ^ *bb;
        }
        x == 0
    } else {
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secure_eq_lengths() {
        assert!(secure_eq(b"", b""));
        assert!(secure_eq(&[1u8, 2, 3], &[1u8, 2, 3]));
        assert!(!secure_eq(&[1u8, 2, 3], &[1u8, 2, 4]));
        assert!(!secure_eq(&[1u8, 2, 3], &[1u8, 2]));
    }
}
