/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */

/// Events that might be interesting to log or aggregate into metrics.
///
/// Events are only generated when the `logging` feature is enabled, and are delivered to the
/// sink installed with `ScratchPool::set_event_log`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LogEvent {
    /// The pool's cached buffer was allocated for the first time, with this many bytes.
    ScratchCreated(usize),
    /// The cached buffer had to grow to serve a request.
    ScratchGrown {
        from: usize,
        to: usize,
    },
    /// A request was served from the cached buffer without allocating.
    ScratchReused(usize),
    /// A request was larger than the pool's ceiling and got a one-off allocation.
    ScratchBypassed {
        required: usize,
        ceiling: usize,
    },
    /// A null buffer reference was rejected at the boundary. Holds the argument name.
    RejectedNullArgument(&'static str),
}

macro_rules! log {
    ($pool:expr, $event:expr) => {
        #[cfg(feature = "logging")]
        $pool.event_log($event);
    };
}
pub(crate) use log;
