/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
//! Entry points for a host runtime that hands us nullable, opaque byte buffers.
use std::sync::Arc;

#[cfg(feature = "logging")]
use crate::log_event::LogEvent;
use crate::result::{invalid_argument, BoundaryError};

/// An immutable, shareable byte buffer as exchanged with the host.
/// Cloning only bumps a reference count.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ArrayBuffer(Arc<[u8]>);

impl ArrayBuffer {
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<Vec<u8>> for ArrayBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self(Arc::from(v))
    }
}

impl From<&[u8]> for ArrayBuffer {
    fn from(b: &[u8]) -> Self {
        Self(Arc::from(b))
    }
}

impl<const L: usize> From<[u8; L]> for ArrayBuffer {
    fn from(b: [u8; L]) -> Self {
        Self(Arc::from(&b[..]))
    }
}

impl AsRef<[u8]> for ArrayBuffer {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn require<'a>(buffer: Option<&'a ArrayBuffer>, argument: &'static str) -> Result<&'a [u8], BoundaryError> {
    match buffer {
        Some(b) => Ok(b.as_bytes()),
        None => {
            #[cfg(feature = "logging")]
            crate::scratch::with_thread_scratch(|pool| pool.event_log(LogEvent::RejectedNullArgument(argument)));
            Err(invalid_argument!(argument))
        }
    }
}

/// HMAC-SHA1 of `data` under `key`. Returns exactly 20 bytes.
///
/// Fails with `BoundaryError::InvalidArgument` if either reference is absent, checking `key`
/// first. Empty buffers are valid.
pub fn hmac_sha1(key: Option<&ArrayBuffer>, data: Option<&ArrayBuffer>) -> Result<ArrayBuffer, BoundaryError> {
    let key = require(key, "key")?;
    let data = require(data, "data")?;
    Ok(crate::mac::hmac_sha1(key, data).into())
}

/// SHA-1 of `data`. Returns exactly 20 bytes.
pub fn sha1(data: Option<&ArrayBuffer>) -> Result<ArrayBuffer, BoundaryError> {
    let data = require(data, "data")?;
    Ok(crate::hash::sha1(data).into())
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn wraps_digest() {
        let key = ArrayBuffer::from(&b"key"[..]);
        let data = ArrayBuffer::from(b"The quick brown fox jumps over the lazy dog".to_vec());
        let mac = hmac_sha1(Some(&key), Some(&data)).unwrap();
        assert_eq!(mac.len(), 20);
        assert_eq!(mac.as_bytes(), hex!("de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"));

        let empty = ArrayBuffer::from(Vec::new());
        assert_eq!(sha1(Some(&empty)).unwrap().as_bytes(), hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert_eq!(hmac_sha1(Some(&empty), Some(&empty)).unwrap().len(), 20);
    }

    #[test]
    fn rejects_null() {
        let data = ArrayBuffer::from([1u8, 2, 3]);
        let e = hmac_sha1(None, Some(&data)).unwrap_err();
        assert!(matches!(e, BoundaryError::InvalidArgument { argument: "key", .. }));
        let e = hmac_sha1(Some(&data), None).unwrap_err();
        assert!(matches!(e, BoundaryError::InvalidArgument { argument: "data", .. }));
        let e = hmac_sha1(None, None).unwrap_err();
        assert!(matches!(e, BoundaryError::InvalidArgument { argument: "key", .. }));
        assert!(matches!(sha1(None), Err(BoundaryError::InvalidArgument { argument: "data", .. })));
        assert_eq!(e.to_string(), "invalid argument: key must not be null");
    }

    #[cfg(feature = "logging")]
    #[test]
    fn null_rejection_is_logged() {
        use std::cell::RefCell;

        use crate::scratch::with_thread_scratch;

        thread_local! {
            static EVENTS: RefCell<Vec<LogEvent>> = RefCell::new(Vec::new());
        }
        fn record(event: LogEvent) {
            EVENTS.with(|e| e.borrow_mut().push(event));
        }

        let data = ArrayBuffer::from(&b"msg"[..]);
        with_thread_scratch(|pool| pool.set_event_log(Some(record)));
        let _ = hmac_sha1(None, Some(&data));
        let _ = hmac_sha1(Some(&data), None);
        let _ = sha1(None);
        with_thread_scratch(|pool| pool.set_event_log(None));

        let rejections: Vec<LogEvent> = EVENTS.with(|e| {
            e.borrow().iter().copied().filter(|e| matches!(e, LogEvent::RejectedNullArgument(_))).collect()
        });
        assert_eq!(
            rejections,
            vec![
                LogEvent::RejectedNullArgument("key"),
                LogEvent::RejectedNullArgument("data"),
                LogEvent::RejectedNullArgument("data"),
            ]
        );
    }
}
