use std::fmt::{Display, Formatter};

/// What the dispatcher needs to know about an incoming request.
///
/// `url` is compared verbatim against registered paths; nothing is decoded
/// or normalized beyond the single trailing-slash rule of the router.
pub trait RouteRequest {
    /// Request target, e.g. `/movies/42`.
    fn url(&self) -> &str;
    /// Method name, e.g. `GET`.
    fn method(&self) -> &str;
}

/// Owned request value for callers that do not carry an `http::Request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    pub method: String,
    pub url: String,
}

impl IncomingRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

impl Display for IncomingRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

impl RouteRequest for IncomingRequest {
    fn url(&self) -> &str {
        &self.url
    }

    fn method(&self) -> &str {
        &self.method
    }
}

/// Routes on the URI path; the query string is not part of the match.
impl<B> RouteRequest for http::Request<B> {
    fn url(&self) -> &str {
        self.uri().path()
    }

    fn method(&self) -> &str {
        self.method().as_str()
    }
}
