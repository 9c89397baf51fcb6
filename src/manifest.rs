//! YAML route manifests for the `routeboard` binary.
//!
//! A manifest lists routes in declaration order; the order is preserved when
//! the dispatcher is built, so ambiguity between wildcards resolves exactly as
//! it would for routes registered in code.
//!
//! ```yaml
//! routes:
//!   - method: GET
//!     path: /movies
//!     handler: list_movies
//!   - method: GET
//!     paths: ["/movies/{id:number}", "/films/{id:number}"]
//!     handler: movie_by_id
//! ```

use crate::config::RouterConfig;
use crate::dispatcher::Dispatcher;
use crate::echo::echo_handler;
use crate::exchange::{IncomingRequest, RecordedResponse};
use crate::router::{RouteMethod, RoutePaths};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// `path: /a` or `paths: [/a, /b]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ManifestPaths {
    One(String),
    Many(Vec<String>),
}

impl From<ManifestPaths> for RoutePaths {
    fn from(paths: ManifestPaths) -> Self {
        match paths {
            ManifestPaths::One(path) => RoutePaths::from(path),
            ManifestPaths::Many(paths) => RoutePaths::from(paths),
        }
    }
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestRoute {
    pub method: String,
    #[serde(alias = "paths")]
    pub path: ManifestPaths,
    pub handler: String,
}

/// A parsed route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub routes: Vec<ManifestRoute>,
}

impl RouteManifest {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse route manifest YAML")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route manifest {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid route manifest {}", path.display()))
    }

    /// Build a dispatcher with an echo handler per manifest entry.
    ///
    /// Entries are registered strictly: an unknown method or a malformed
    /// wildcard fails the whole build, naming the offending entry.
    pub fn build_dispatcher(
        &self,
        config: RouterConfig,
    ) -> Result<Dispatcher<IncomingRequest, RecordedResponse>> {
        let mut dispatcher = Dispatcher::with_config(config);
        for (index, route) in self.routes.iter().enumerate() {
            let method: RouteMethod = route
                .method
                .parse()
                .with_context(|| format!("route #{} ({})", index + 1, route.handler))?;
            dispatcher
                .try_register(
                    method,
                    route.path.clone(),
                    echo_handler(route.handler.as_str()),
                )
                .with_context(|| format!("route #{} ({})", index + 1, route.handler))?;
        }
        Ok(dispatcher)
    }
}
