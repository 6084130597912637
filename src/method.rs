//! HTTP method as a typed enum.
//!
//! Covers the RFC 9110 standard methods. Any other token maps to
//! [`Method::Other`], which only matches `any` routes.

use std::fmt;
use std::str::FromStr;

/// An HTTP request method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
    /// A token outside RFC 9110, e.g. `BREW`.
    Other,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
            Self::Other   => "OTHER",
        }
    }

    /// Maps a request-line token, falling back to [`Method::Other`].
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or(Self::Other)
    }
}

/// Parses an uppercase method string. Case-sensitive per RFC 9110 §9.1.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONNECT" => Ok(Self::Connect),
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "HEAD"    => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH"   => Ok(Self::Patch),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "TRACE"   => Ok(Self::Trace),
            _         => Err(()),
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
    fn parses_wire_names() {
        assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert_eq!(Method::Head.to_string(), "HEAD");
    }

    #[test]
    fn rejects_lowercase_and_unknown() {
        assert!("get".parse::<Method>().is_err());
        assert!("BREW".parse::<Method>().is_err());
    }

    #[test]
    fn unknown_tokens_become_other() {
        assert_eq!(Method::from_token("BREW"), Method::Other);
        assert_eq!(Method::from_token("PUT"), Method::Put);
    }
}
