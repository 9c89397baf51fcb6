//! Wildcard segment parsing.
//!
//! A route path may end in one wildcard segment, `{name}` or `{name:type}`.
//! Segments are parsed once when a route is registered; lookups only compare
//! the already-split prefix and consult the parsed [`Wildcard`].

use crate::error::{Result, RouteError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Shape a final segment must have to be considered a wildcard candidate.
#[allow(clippy::expect_used)]
static WILDCARD_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{[a-zA-Z:]+\}$").expect("valid wildcard segment regex"));

/// Shape accepted by strict registration: a name and at most one type.
#[allow(clippy::expect_used)]
static STRICT_WILDCARD_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{[a-zA-Z]+(?::[a-zA-Z]+)?\}$").expect("valid strict wildcard regex")
});

/// Type constraint attached to a wildcard segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardKind {
    /// `{name}`
    Untyped,
    /// `{name:number}`
    Number,
    /// `{name:string}`
    String,
    /// Any other `{name:type}`; kept verbatim, never satisfied during disambiguation.
    Other(Arc<str>),
}

impl Display for WildcardKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WildcardKind::Untyped => f.write_str("untyped"),
            WildcardKind::Number => f.write_str("number"),
            WildcardKind::String => f.write_str("string"),
            WildcardKind::Other(other) => f.write_str(other),
        }
    }
}

/// A parsed `{name}` / `{name:type}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    name: Arc<str>,
    kind: WildcardKind,
}

impl Wildcard {
    /// Parse a single path segment (without slashes).
    ///
    /// Returns `None` when the segment is not a wildcard. The name is the
    /// text inside the braces up to the first `:`; the type is the text
    /// between the first and second `:` if present.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        if !WILDCARD_SEGMENT.is_match(segment) {
            return None;
        }

        let inner = segment.trim_start_matches('{').trim_end_matches('}');
        let mut parts = inner.split(':');
        let name = parts.next().unwrap_or_default();
        let kind = match parts.next() {
            None => WildcardKind::Untyped,
            Some("number") => WildcardKind::Number,
            Some("string") => WildcardKind::String,
            Some(other) => WildcardKind::Other(Arc::from(other)),
        };

        Some(Self {
            name: Arc::from(name),
            kind,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name; cloning it is a refcount bump.
    #[inline]
    #[must_use]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &WildcardKind {
        &self.kind
    }

    /// Whether `value` satisfies this wildcard's type when several
    /// candidates compete for the same request.
    ///
    /// Only `number` and `string` constraints can accept; untyped and
    /// unknown types are skipped.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            WildcardKind::Number => parses_as_integer(value),
            WildcardKind::String => true,
            WildcardKind::Untyped | WildcardKind::Other(_) => false,
        }
    }
}

/// Leading-integer test: optional whitespace, optional sign, then a digit.
///
/// Trailing characters are ignored, so `"12abc"` counts as a number.
#[must_use]
pub fn parses_as_integer(value: &str) -> bool {
    let rest = value.trim_start();
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Split a path at its last `/` into `(prefix, last_segment)`.
#[inline]
#[must_use]
pub fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    path.rsplit_once('/')
}

/// Strict syntax check used by [`Router::try_register`](super::Router::try_register).
pub fn validate_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(RouteError::RelativePath(path.to_string()));
    }

    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        let looks_like_wildcard = segment.contains('{') || segment.contains('}');
        if !looks_like_wildcard {
            continue;
        }
        if i != last {
            return Err(RouteError::NonTerminalWildcard {
                path: path.to_string(),
                segment: (*segment).to_string(),
            });
        }
        if !STRICT_WILDCARD_SEGMENT.is_match(segment) {
            return Err(RouteError::MalformedWildcard {
                path: path.to_string(),
                segment: (*segment).to_string(),
            });
        }
    }

    Ok(())
}
