//! # routeboard
//!
//! **routeboard** is a small HTTP request router: it keeps an ordered table of
//! `method + path -> handler` mappings and, for each incoming request, picks
//! the handler and extracts the path parameter of a trailing wildcard.
//!
//! ## Overview
//!
//! - Routes are registered per method (`GET`, `POST`, `PUT`, `DELETE`) for one
//!   path or a list of paths. Registering the same method and path again
//!   replaces the earlier entry.
//! - The last path segment may be a wildcard: `{id}`, `{id:number}` or
//!   `{name:string}`.
//! - Matching is literal first (tolerating one trailing `/`), then wildcard.
//!   When several wildcard routes compete, the first one registered whose
//!   type accepts the value wins.
//! - A miss is answered with `404` and the response is ended.
//!
//! The router is transport-agnostic: requests only need to report a method
//! and url ([`exchange::RouteRequest`]) and responses only need to accept a
//! status and be ended ([`exchange::RouteResponse`]).
//!
//! ## Architecture
//!
//! - **[`router`]** - the routing table: registration and matching
//! - **[`dispatcher`]** - callbacks, 404 handling, route logging, shared tables
//! - **[`exchange`]** - request/response contracts and in-memory implementations
//! - **[`config`]** - dispatcher configuration (env and YAML)
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`manifest`]** - YAML route manifests used by the CLI
//! - **[`cli`]** - the `routeboard` command-line tool
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Dispatcher
//!     participant Router
//!     participant Handler
//!
//!     Caller->>Dispatcher: dispatch(request, response)
//!     Dispatcher->>Router: route(method, url)
//!     Router->>Router: literal scan (url, url minus trailing /)
//!     alt literal hit
//!         Router-->>Dispatcher: RouteMatch (no params)
//!     else wildcard scan
//!         Router->>Router: candidates under url's parent
//!         Router-->>Dispatcher: RouteMatch { params } or None
//!     end
//!     alt matched
//!         Dispatcher->>Handler: handler(request, response, params)
//!     else no match
//!         Dispatcher->>Caller: write_status(404), end()
//!     end
//! ```
//!
//! ## Example
//!
//! ```rust
//! use routeboard::dispatcher::Dispatcher;
//! use routeboard::exchange::{IncomingRequest, RecordedResponse, RouteResponse};
//! use http::StatusCode;
//!
//! let mut dispatcher: Dispatcher<IncomingRequest, RecordedResponse> = Dispatcher::new();
//! dispatcher.get(["/movies", "/films"], |_req, res, _params| {
//!     res.write_status(StatusCode::OK);
//!     res.end();
//! });
//!
//! let mut res = RecordedResponse::new();
//! dispatcher.dispatch(&IncomingRequest::new("GET", "/films/"), &mut res);
//! assert_eq!(res.status(), Some(StatusCode::OK));
//! ```

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod echo;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod manifest;
pub mod router;

pub use config::RouterConfig;
pub use dispatcher::{Dispatcher, Handler, SharedDispatcher};
pub use error::RouteError;
pub use exchange::{IncomingRequest, RecordedResponse, RouteRequest, RouteResponse};
pub use router::{Params, RouteMatch, RouteMethod, RoutePaths, Router};
