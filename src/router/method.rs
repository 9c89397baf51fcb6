use crate::error::RouteError;
use http::Method;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// HTTP verbs a route can be registered under.
///
/// The routing table only knows these four; a request carrying any other
/// verb simply never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    /// All supported verbs, in the order the registration surface lists them.
    pub const ALL: [RouteMethod; 4] = [
        RouteMethod::Get,
        RouteMethod::Post,
        RouteMethod::Put,
        RouteMethod::Delete,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
        }
    }

    /// Exact, case-sensitive comparison against a request's method string.
    #[inline]
    #[must_use]
    pub fn matches(self, method: &str) -> bool {
        self.as_str() == method
    }
}

impl Display for RouteMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(RouteMethod::Get),
            "POST" => Ok(RouteMethod::Post),
            "PUT" => Ok(RouteMethod::Put),
            "DELETE" => Ok(RouteMethod::Delete),
            other => Err(RouteError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl From<RouteMethod> for Method {
    fn from(method: RouteMethod) -> Self {
        match method {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Delete => Method::DELETE,
        }
    }
}

impl TryFrom<&Method> for RouteMethod {
    type Error = RouteError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_verbs() {
        for method in RouteMethod::ALL {
            assert_eq!(method.as_str().parse::<RouteMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "get".parse::<RouteMethod>(),
            Err(RouteError::UnsupportedMethod(m)) if m == "get"
        ));
    }

    #[test]
    fn test_http_method_conversion() {
        assert_eq!(Method::from(RouteMethod::Delete), Method::DELETE);
        assert_eq!(RouteMethod::try_from(&Method::PUT).unwrap(), RouteMethod::Put);
        assert!(RouteMethod::try_from(&Method::PATCH).is_err());
    }
}
