/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
//#![warn(missing_docs, rust_2018_idioms)]
pub mod crypto;
pub mod crypto_impl;

mod hash;
mod log_event;
mod mac;
mod scratch;

pub mod boundary;
pub mod result;

pub use crate::hash::*;
pub use crate::log_event::*;
pub use crate::mac::*;
pub use crate::scratch::*;
