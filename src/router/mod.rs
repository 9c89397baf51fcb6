//! # Router Module
//!
//! Route registration and matching. The router knows nothing about requests,
//! responses or callbacks: it maps a `(method, url)` pair to a registered
//! entry and the path parameters captured on the way. The
//! [`dispatcher`](crate::dispatcher) module builds request handling on top.
//!
//! ## Path syntax
//!
//! Paths are literal strings. The final segment may be a wildcard:
//!
//! - `{name}` - captures any value
//! - `{name:number}` - captures values that start with an integer
//! - `{name:string}` - captures any value
//!
//! ## Matching
//!
//! Matching runs in two phases over a table kept in registration order:
//!
//! 1. **Literal**: the first entry whose path equals the url, or the url
//!    minus one trailing `/` (the root path `/` is never trimmed).
//! 2. **Wildcard**: entries whose path is the url's parent followed by a
//!    wildcard segment. A single candidate always wins. With several
//!    candidates the first one, in registration order, whose type accepts
//!    the value wins; untyped wildcards do not take part in that contest.
//!
//! ```rust
//! use routeboard::router::Router;
//!
//! let mut router = Router::new();
//! router.get("/movies/{id:number}", "by_id");
//! router.get("/movies/{title:string}", "by_title");
//!
//! let m = router.route("GET", "/movies/42").unwrap();
//! assert_eq!(*m.handler(), "by_id");
//! assert_eq!(m.get_path_param("id"), Some("42"));
//!
//! let m = router.route("GET", "/movies/alien").unwrap();
//! assert_eq!(*m.handler(), "by_title");
//! ```
//!
//! Ties are resolved by declaration order, not by specificity: registering
//! `{a:string}` before `{b:number}` makes the string route win every time.

mod core;
mod method;
mod wildcard;

pub use self::core::{
    ParamVec, Params, RouteEntry, RouteMatch, RoutePaths, Router, MAX_INLINE_PARAMS,
};
pub use method::RouteMethod;
pub use wildcard::{parses_as_integer, validate_path, Wildcard, WildcardKind};
