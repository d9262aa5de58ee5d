//! HTTP method as a typed enum.
//!
//! Only the methods controllers branch on get their own variant; everything
//! else collapses into [`Method::Other`], which every predicate on
//! [`RequestContext`](crate::RequestContext) treats as "none of the above".
//! Unknown methods never fail context capture — a context for a `PATCH`
//! request is still useful for URL building and parameter access.

use std::fmt;
use std::str::FromStr;

/// The request method, as the accessor distinguishes it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Delete,
    Get,
    Post,
    Put,
    /// Any other method (HEAD, PATCH, OPTIONS, …). Valid HTTP, just nothing
    /// this crate branches on.
    Other,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    ///
    /// [`Method::Other`] has no single wire form; it renders as `"OTHER"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Get    => "GET",
            Self::Post   => "POST",
            Self::Put    => "PUT",
            Self::Other  => "OTHER",
        }
    }
}

/// Parses an uppercase method string (e.g. `"GET"`). Case-sensitive per
/// RFC 9110 §9.1 — transports put methods on the wire uppercase already.
/// Anything unrecognized is `Method::Other`, not an error.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELETE" => Ok(Self::Delete),
            "GET"    => Ok(Self::Get),
            "POST"   => Ok(Self::Post),
            "PUT"    => Ok(Self::Put),
            _        => Ok(Self::Other),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_known_methods() {
        assert_eq!("GET".parse(), Ok(Method::Get));
        assert_eq!("POST".parse(), Ok(Method::Post));
        assert_eq!("PUT".parse(), Ok(Method::Put));
        assert_eq!("DELETE".parse(), Ok(Method::Delete));
    }

    #[test]
    fn unknown_and_lowercase_map_to_other() {
        assert_eq!("PATCH".parse(), Ok(Method::Other));
        assert_eq!("get".parse(), Ok(Method::Other));
        assert_eq!("".parse::<Method>(), Ok(Method::Other));
    }
}
