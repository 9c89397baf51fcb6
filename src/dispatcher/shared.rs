use super::core::{Dispatcher, Handler};
use crate::config::RouterConfig;
use crate::error::Result;
use crate::exchange::{RouteRequest, RouteResponse};
use crate::router::{validate_path, Params, RouteMethod, RoutePaths};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Cloneable dispatcher handle that accepts registrations while serving.
///
/// Readers load the current table snapshot without locking. A registration
/// copies the table, applies the change and swaps the copy in; requests
/// already in flight finish against the snapshot they loaded.
pub struct SharedDispatcher<Req, Res> {
    inner: Arc<ArcSwap<Dispatcher<Req, Res>>>,
}

impl<Req, Res> Clone for SharedDispatcher<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Req, Res> Default for SharedDispatcher<Req, Res> {
    fn default() -> Self {
        Self::new(Dispatcher::default())
    }
}

impl<Req, Res> From<Dispatcher<Req, Res>> for SharedDispatcher<Req, Res> {
    fn from(dispatcher: Dispatcher<Req, Res>) -> Self {
        Self::new(dispatcher)
    }
}

impl<Req, Res> SharedDispatcher<Req, Res> {
    #[must_use]
    pub fn new(dispatcher: Dispatcher<Req, Res>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(dispatcher)),
        }
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self::new(Dispatcher::with_config(config))
    }

    /// The table as of now. Later registrations do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Dispatcher<Req, Res>> {
        self.inner.load_full()
    }

    pub fn register<P, F>(&self, method: RouteMethod, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        let handler: Handler<Req, Res> = Arc::new(handler);
        self.swap_in(method, paths.into(), handler);
    }

    /// Strict registration; nothing is swapped in when a path is rejected.
    pub fn try_register<P, F>(&self, method: RouteMethod, paths: P, handler: F) -> Result<()>
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        let paths: RoutePaths = paths.into();
        for path in paths.iter() {
            validate_path(path)?;
        }
        let handler: Handler<Req, Res> = Arc::new(handler);
        self.swap_in(method, paths, handler);
        Ok(())
    }

    pub fn get<P, F>(&self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Get, paths, handler);
    }

    pub fn post<P, F>(&self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Post, paths, handler);
    }

    pub fn put<P, F>(&self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Put, paths, handler);
    }

    pub fn delete<P, F>(&self, paths: P, handler: F)
    where
        P: Into<RoutePaths>,
        F: Fn(&Req, &mut Res, &Params) + Send + Sync + 'static,
    {
        self.register(RouteMethod::Delete, paths, handler);
    }

    fn swap_in(&self, method: RouteMethod, paths: RoutePaths, handler: Handler<Req, Res>) {
        // rcu may retry under contention, so the closure must be repeatable.
        self.inner.rcu(|current| {
            let mut next = Dispatcher::clone(current);
            next.register_handler(method, paths.clone(), Arc::clone(&handler));
            next
        });
    }
}

impl<Req, Res> SharedDispatcher<Req, Res>
where
    Req: RouteRequest,
    Res: RouteResponse,
{
    /// Dispatch against the current snapshot.
    pub fn dispatch(&self, req: &Req, res: &mut Res) {
        self.inner.load_full().dispatch(req, res);
    }
}
