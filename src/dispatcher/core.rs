//! Dispatcher core module - selects a handler and invokes it.

use crate::config::RouterConfig;
use crate::error::Result;
use crate::exchange::{RouteRequest, RouteResponse};
use crate::router::{Params, RouteMatch, RouteMethod, RoutePaths, Router};
use http::StatusCode;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{info, warn};

/// A registered callback: `(request, response, params)`.
pub type Handler<Req, Res> = Arc<dyn Fn(&Req, &mut Res, &Params) + Send + Sync>;

/// Routing table plus the callbacks and logging policy around it.
///
/// Registration takes `&mut self` and is meant for startup. Dispatch takes
/// `&self` and allocates its params per call, so a built dispatcher can be
/// shared between threads. For registration while serving, see
/// [`SharedDispatcher`](super::SharedDispatcher).
pub struct Dispatcher<Req, Res> {
    router: Router<Handler<Req, Res>>,
    config: RouterConfig,
}

impl<Req, Res> Default for Dispatcher<Req, Res> {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<Req, Res> Clone for Dispatcher<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            config: self.config,
        }
    }
}

impl<Req, Res> Debug for Dispatcher<Req, Res> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("routes", &self.router)
            .finish()
    }
}

impl<Req, Res> Dispatcher<Req, Res> {
    /// Dispatcher with the default configuration (route logging on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            router: Router::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// The underlying routing table.
    #[must_use]
    pub fn router(&self) -> &Router<Handler<Req, Res>> {
        &self.router
    }

    /// Register a callback for one or more paths under `method`.
    ///
    /// Re-registering an existing `(method, path)` replaces the old callback.
    pub fn register<P, F>(&mut self, method: RouteMethod, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register_handler(method, paths, Arc::new(handler));
    }

    /// Register an already shared handler.
    pub fn register_handler<P>(&mut self, method: RouteMethod, paths: P, handler: Handler<Req, Res>)
    where
        P: Into<RoutePaths>,
    {
        self.router.register(method, paths, handler);
    }

    /// Strict variant of [`Dispatcher::register`]; rejects malformed wildcard paths.
    pub fn try_register<P, F>(&mut self, method: RouteMethod, paths: P, handler: F) -> Result<()>
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        let handler: Handler<Req, Res> = Arc::new(handler);
        self.router.try_register(method, paths, handler)
    }

    pub fn get<P, F>(&mut self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Get, paths, handler);
    }

    pub fn post<P, F>(&mut self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Post, paths, handler);
    }

    pub fn put<P, F>(&mut self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Put, paths, handler);
    }

    pub fn delete<P, F>(&mut self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Delete, paths, handler);
    }

    /// Look up the route for `(method, url)` without invoking anything.
    #[must_use]
    pub fn resolve(&self, method: &str, url: &str) -> Option<RouteMatch<Handler<Req, Res>>> {
        self.router.route(method, url)
    }
}

impl<Req, Res> Dispatcher<Req, Res>
where
    Req: RouteRequest,
    Res: RouteResponse,
{
    /// Route a request and invoke its handler.
    ///
    /// On a miss the response gets `404` and is ended; the handler of a hit
    /// owns the response entirely.
    pub fn dispatch(&self, req: &Req, res: &mut Res) {
        let url = req.url();
        let method = req.method();

        let Some(matched) = self.router.route(method, url) else {
            if self.config.show_log {
                warn!(method = %method, url = %url, "path does not exist: {}", url);
            }
            res.write_status(StatusCode::NOT_FOUND);
            res.end();
            return;
        };

        if self.config.show_log {
            info!(
                method = %method,
                url = %url,
                route_pattern = %matched.route.path(),
                path_params = ?matched.path_params,
                "routing with route: {} {}",
                method,
                url
            );
        }

        let handler = matched.handler();
        handler(req, res, &matched.path_params);
    }
}
