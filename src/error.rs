//! Error types for strict route registration.
//!
//! Matching itself never fails with an error: a request that finds no route
//! is answered with `404`. These errors only surface from
//! [`Router::try_register`](crate::router::Router::try_register) and from
//! parsing a [`RouteMethod`](crate::router::RouteMethod).

use thiserror::Error;

/// Reasons a route declaration is rejected by strict registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The verb is not one of GET, POST, PUT or DELETE.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The final segment looks like a wildcard but is not `{name}` or `{name:type}`.
    #[error("malformed wildcard segment `{segment}` in path `{path}`")]
    MalformedWildcard { path: String, segment: String },

    /// A wildcard appears before the final segment.
    #[error("wildcard segment `{segment}` is only allowed at the end of path `{path}`")]
    NonTerminalWildcard { path: String, segment: String },

    /// The path does not start with `/`.
    #[error("route path `{0}` must start with `/`")]
    RelativePath(String),
}

/// Result type alias using RouteError.
pub type Result<T> = std::result::Result<T, RouteError>;
