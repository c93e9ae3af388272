/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
#[cfg(feature = "sha1")]
mod sha1_impl;
#[cfg(feature = "sha1")]
pub use hmac;
#[cfg(feature = "sha1")]
pub use sha1;
#[cfg(feature = "sha1")]
pub use sha1_impl::*;
