/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

use crate::log_event::*;

/// A reusable working buffer for the HMAC hot path.
///
/// Requests up to the pool's ceiling are served from a single cached buffer that is grown in
/// place and never shrunk, so steady state use does not allocate. Larger requests receive a
/// fresh allocation that is dropped after use and the cached buffer is left untouched, which
/// bounds the memory a pool can hold on to.
///
/// Buffer contents are never cleared between uses. Callers must overwrite the region they were
/// given before reading from it.
pub struct ScratchPool {
    buffer: Vec<u8>,
    ceiling: usize,
    #[cfg(feature = "logging")]
    event_log: Option<fn(LogEvent)>,
}

impl ScratchPool {
    /// Default ceiling for the cached buffer.
    /// A single HMAC call needs one block plus the message, or one block plus a digest.
    pub const DEFAULT_CEILING: usize = 1024;

    /// Create a pool with the default ceiling. Nothing is allocated until the first `acquire`.
    pub const fn new() -> Self {
        Self::with_ceiling(Self::DEFAULT_CEILING)
    }

    pub const fn with_ceiling(ceiling: usize) -> Self {
        Self {
            buffer: Vec::new(),
            ceiling,
            #[cfg(feature = "logging")]
            event_log: None,
        }
    }

    /// Borrow a buffer of exactly `required` bytes.
    ///
    /// The contents are unspecified.
    pub fn acquire(&mut self, required: usize) -> ScratchBuf<'_> {
        if required > self.ceiling {
            log!(self, LogEvent::ScratchBypassed { required, ceiling: self.ceiling });
            return ScratchBuf::Fresh(vec![0u8; required]);
        }

        let capacity = self.buffer.capacity();
        if self.buffer.len() < required {
            if capacity == 0 {
                log!(self, LogEvent::ScratchCreated(required));
            } else if capacity < required {
                log!(self, LogEvent::ScratchGrown { from: capacity, to: required });
            }
            // Exact growth keeps the cached capacity at or below the ceiling.
            self.buffer.reserve_exact(required - self.buffer.len());
            self.buffer.resize(required, 0);
        } else if capacity > 0 {
            log!(self, LogEvent::ScratchReused(required));
        }
        ScratchBuf::Cached(&mut self.buffer[..required])
    }

    /// Largest request that will be served from the cached buffer.
    #[inline(always)]
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Bytes currently held by the cached buffer.
    #[inline(always)]
    pub fn cached_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Install or remove the sink that receives this pool's `LogEvent`s.
    #[cfg(feature = "logging")]
    pub fn set_event_log(&mut self, event_log: Option<fn(LogEvent)>) {
        self.event_log = event_log;
    }

    #[cfg(feature = "logging")]
    pub(crate) fn event_log(&self, event: LogEvent) {
        if let Some(f) = self.event_log {
            f(event);
        }
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffer handed out by `ScratchPool::acquire`.
pub enum ScratchBuf<'a> {
    /// A region of the pool's cached buffer.
    Cached(&'a mut [u8]),
    /// A one-off allocation for a request above the ceiling.
    Fresh(Vec<u8>),
}

impl<'a> ScratchBuf<'a> {
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

impl<'a> Deref for ScratchBuf<'a> {
    type Target = [u8];
    #[inline(always)]
    fn deref(&self) -> &[u8] {
        match self {
            Self::Cached(b) => b,
            Self::Fresh(b) => b,
        }
    }
}

impl<'a> DerefMut for ScratchBuf<'a> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Cached(b) => b,
            Self::Fresh(b) => b,
        }
    }
}

thread_local! {
    static THREAD_SCRATCH: RefCell<ScratchPool> = RefCell::new(ScratchPool::new());
}

/// Run `f` with the calling thread's scratch pool.
///
/// Each thread owns its own pool, created on first use and dropped when the thread exits.
/// If the pool is already borrowed further up this thread's stack, or has already been destroyed
/// because the thread is exiting, `f` is given a temporary pool instead.
pub fn with_thread_scratch<R>(f: impl FnOnce(&mut ScratchPool) -> R) -> R {
    let mut f = Some(f);
    let cached = THREAD_SCRATCH.try_with(|cell| {
        let mut pool = cell.try_borrow_mut().ok()?;
        f.take().map(|f| f(&mut pool))
    });
    match (cached, f) {
        (Ok(Some(r)), _) => r,
        (_, Some(f)) => f(&mut ScratchPool::new()),
        (_, None) => unreachable!("scratch closure consumed without a result"),
    }
}
