//! Request and response contracts consumed by the dispatcher.
//!
//! The router is transport-agnostic. Anything that can report a method and a
//! url can be dispatched, and anything that can take a status code and be
//! ended can receive the 404 answer. Implementations are provided for the
//! `http` crate types and for small owned values used by tests and the CLI.

mod request;
mod response;

pub use request::{IncomingRequest, RouteRequest};
pub use response::{RecordedResponse, RouteResponse};
