//! Endpoint normalization.
//!
//! Operators paste backend addresses into configuration in all sorts of shapes:
//! bare hosts, `http://` URLs, values with trailing slashes or stray
//! whitespace. Everything downstream (the API client and the socket helper)
//! expects one canonical form: a secure origin with no trailing slash.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const SECURE_SCHEME: &str = "https://";
const PLAIN_SCHEME: &str = "http://";

/// Canonicalize a user-supplied endpoint into a secure origin string.
///
/// Trims whitespace, strips trailing slashes, prepends `https://` when no
/// `http://`/`https://` scheme is present and upgrades `http://` to
/// `https://`. Scheme detection is ASCII case-insensitive; an existing
/// `https://` prefix keeps its original case.
///
/// This never fails. Input that is empty after trimming yields the bare
/// `https://`, which callers must validate themselves (see
/// [`Endpoint::is_empty_host`]).
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');

    if starts_with_ignore_ascii_case(trimmed, SECURE_SCHEME) {
        trimmed.to_string()
    } else if starts_with_ignore_ascii_case(trimmed, PLAIN_SCHEME) {
        format!("{}{}", SECURE_SCHEME, &trimmed[PLAIN_SCHEME.len()..])
    } else {
        format!("{}{}", SECURE_SCHEME, trimmed)
    }
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// A normalized connection endpoint.
///
/// The only way to build one is through [`normalize_url`], so the wrapped
/// string always starts with a secure scheme and has no trailing slash
/// (except for the bare `https://` produced from empty input).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn parse(input: &str) -> Self {
        Self(normalize_url(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the scheme separator.
    pub fn authority(&self) -> &str {
        &self.0[SECURE_SCHEME.len()..]
    }

    /// True for the degenerate `https://` endpoint built from blank input.
    pub fn is_empty_host(&self) -> bool {
        self.authority().is_empty()
    }

    /// Append a path to the origin with exactly one `/` between them.
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.0.clone()
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// WebSocket URL for the same host, with the scheme swapped for `wss://`.
    pub fn socket_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("wss://{}", self.authority())
        } else {
            format!("wss://{}/{}", self.authority(), path)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Endpoint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
