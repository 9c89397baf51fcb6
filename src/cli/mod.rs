//! # CLI Module
//!
//! The `routeboard` binary: a small tool for checking how a set of routes
//! resolves requests, without wiring up a server.
//!
//! ## Commands
//!
//! - **list** - print the table in the order it is scanned
//! - **probe** - dispatch one request through echo handlers and print the
//!   status and JSON body
//!
//! ## Examples
//!
//! ```bash
//! routeboard list --routes routes.yaml
//!
//! routeboard probe --routes routes.yaml GET /movies/42
//! # status: 200
//! # {"handler":"movie_by_id","method":"GET","params":{"id":"42"},"url":"/movies/42"}
//!
//! routeboard probe --routes routes.yaml --quiet GET /nope
//! # status: 404
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
