//! Unified error type.

use std::fmt;

/// The error type returned by portico's fallible operations.
///
/// Almost nothing here can fail: missing parameters are `None`, malformed
/// query strings and absent bodies degrade to empty mappings. The one hard
/// error is a caller mistake — asking for a redirect without saying where.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// `redirect` was called with neither a controller nor an action.
    MissingRedirectTarget,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRedirectTarget => {
                f.write_str("redirect needs a controller and/or an action")
            }
        }
    }
}

impl std::error::Error for Error {}
