//! # Dispatcher Module
//!
//! Turns a routing table into request handling: callbacks are registered per
//! method and path, and [`Dispatcher::dispatch`] routes a request to its
//! callback or answers `404`.
//!
//! ## Request Flow
//!
//! 1. Read `method` and `url` from the request
//! 2. Match against the [`Router`](crate::router::Router) (literal, then wildcard)
//! 3. Miss: log `path does not exist: <url>`, write `404`, end the response
//! 4. Hit: log `routing with route: <method> <url>`, call the handler with
//!    `(request, response, params)`
//!
//! Both log lines are controlled by [`RouterConfig::show_log`](crate::config::RouterConfig).
//!
//! ## Example
//!
//! ```rust
//! use routeboard::dispatcher::Dispatcher;
//! use routeboard::exchange::{IncomingRequest, RecordedResponse, RouteResponse};
//! use http::StatusCode;
//!
//! let mut dispatcher: Dispatcher<IncomingRequest, RecordedResponse> = Dispatcher::new();
//! dispatcher.get("/movies/{id:number}", |_req, res, params| {
//!     res.write_status(StatusCode::OK);
//!     res.write_body(params.get("id").unwrap_or_default());
//!     res.end();
//! });
//!
//! let mut res = RecordedResponse::new();
//! dispatcher.dispatch(&IncomingRequest::new("GET", "/movies/7"), &mut res);
//! assert_eq!(res.body(), "7");
//!
//! let mut res = RecordedResponse::new();
//! dispatcher.dispatch(&IncomingRequest::new("GET", "/series/7"), &mut res);
//! assert_eq!(res.status(), Some(StatusCode::NOT_FOUND));
//! ```

mod core;
mod shared;

pub use self::core::{Dispatcher, Handler};
pub use shared::SharedDispatcher;
