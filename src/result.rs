/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * (c) ZeroTier, Inc.
 * https://www.zerotier.com/
 */
use std::fmt;

/// An error returned by the host boundary functions.
/// Retrying with the same arguments will always fail the same way.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum BoundaryError {
    /// A required buffer reference was null or absent.
    /// No hashing was performed.
    InvalidArgument {
        /// Name of the rejected argument.
        argument: &'static str,
        /// The file of this crate from which this error was generated.
        #[cfg(feature = "debug")]
        file: &'static str,
        /// The line number from which this error was generated.
        #[cfg(feature = "debug")]
        line: u32,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, .. } => write!(f, "invalid argument: {} must not be null", argument),
        }
    }
}

impl std::error::Error for BoundaryError {}

macro_rules! invalid_argument {
    ($argument:expr) => {
        $crate::result::BoundaryError::InvalidArgument {
            #[cfg(feature = "debug")]
            file: file!(),
            #[cfg(feature = "debug")]
            line: line!(),
            argument: $argument,
        }
    };
}
pub(crate) use invalid_argument;
