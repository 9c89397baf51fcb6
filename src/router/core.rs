//! Router core module - registration and the two-phase match.
//!
//! Matching never mutates the table: every successful lookup returns a
//! fresh [`RouteMatch`] carrying its own [`Params`], so a built [`Router`]
//! can be shared across threads and consulted concurrently.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]

use super::method::RouteMethod;
use super::wildcard::{split_last_segment, validate_path, Wildcard};
use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of matched parameters before heap allocation.
/// A route carries at most one wildcard, so this never spills in practice.
pub const MAX_INLINE_PARAMS: usize = 4;

/// Inline parameter storage. Names are shared with the registered wildcard.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Path parameters captured for one request.
///
/// Allocated per match and handed to the handler by reference; never stored
/// back on the route entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: ParamVec,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, overwriting an earlier value for the same name.
    pub fn insert(&mut self, name: Arc<str>, value: String) {
        if let Some(slot) = self
            .inner
            .iter_mut()
            .find(|(k, _)| k.as_ref() == name.as_ref())
        {
            slot.1 = value;
        } else {
            self.inner.push((name, value));
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Owned copy as a `HashMap`. Allocates; prefer [`Params::get`].
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.inner
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for (k, v) in &self.inner {
            map.serialize_entry(k.as_ref(), v)?;
        }
        map.end()
    }
}

/// One or more literal paths to register under the same method and handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths(Vec<String>);

impl RoutePaths {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl IntoIterator for RoutePaths {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for RoutePaths {
    fn from(path: &str) -> Self {
        Self(vec![path.to_string()])
    }
}

impl From<String> for RoutePaths {
    fn from(path: String) -> Self {
        Self(vec![path])
    }
}

impl From<&String> for RoutePaths {
    fn from(path: &String) -> Self {
        Self(vec![path.clone()])
    }
}

impl From<Vec<String>> for RoutePaths {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl From<Vec<&str>> for RoutePaths {
    fn from(paths: Vec<&str>) -> Self {
        Self(paths.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for RoutePaths {
    fn from(paths: &[&str]) -> Self {
        Self(paths.iter().map(|p| (*p).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RoutePaths {
    fn from(paths: [&str; N]) -> Self {
        Self(paths.iter().map(|p| (*p).to_string()).collect())
    }
}

/// A registered `(method, path) -> handler` mapping.
pub struct RouteEntry<H> {
    method: RouteMethod,
    path: Arc<str>,
    /// Byte offset of the last `/`, set only when the final segment is a wildcard.
    wildcard_at: Option<usize>,
    wildcard: Option<Wildcard>,
    handler: H,
}

impl<H> RouteEntry<H> {
    fn new(method: RouteMethod, path: String, handler: H) -> Self {
        let (wildcard_at, wildcard) = match split_last_segment(&path) {
            Some((prefix, last)) => match Wildcard::parse(last) {
                Some(w) => (Some(prefix.len()), Some(w)),
                None => (None, None),
            },
            None => (None, None),
        };

        Self {
            method,
            path: Arc::from(path),
            wildcard_at,
            wildcard,
            handler,
        }
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> RouteMethod {
        self.method
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn wildcard(&self) -> Option<&Wildcard> {
        self.wildcard.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// `(prefix before the wildcard, wildcard)` for wildcard routes.
    fn wildcard_parts(&self) -> Option<(&str, &Wildcard)> {
        let at = self.wildcard_at?;
        let wildcard = self.wildcard.as_ref()?;
        Some((&self.path[..at], wildcard))
    }
}

impl<H> Debug for RouteEntry<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("wildcard", &self.wildcard)
            .finish_non_exhaustive()
    }
}

/// Result of successfully matching a request to a route.
pub struct RouteMatch<H> {
    /// The matched entry, shared with the table.
    pub route: Arc<RouteEntry<H>>,
    /// Wildcard value captured for this request; empty for literal matches.
    pub path_params: Params,
}

impl<H> RouteMatch<H> {
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name)
    }

    #[inline]
    #[must_use]
    pub fn handler(&self) -> &H {
        self.route.handler()
    }
}

impl<H> Clone for RouteMatch<H> {
    fn clone(&self) -> Self {
        Self {
            route: Arc::clone(&self.route),
            path_params: self.path_params.clone(),
        }
    }
}

impl<H> Debug for RouteMatch<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route)
            .field("path_params", &self.path_params)
            .finish()
    }
}

/// Ordered routing table.
///
/// Entries are scanned in registration order. Re-registering an existing
/// `(method, path)` pair drops the old entry and appends the new one, so the
/// replacement also moves to the back of the table.
pub struct Router<H> {
    routes: Vec<Arc<RouteEntry<H>>>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<H> Debug for Router<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

impl<H> Router<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every path in `paths`, in order.
    ///
    /// Path syntax is not checked; a malformed wildcard is stored as a
    /// literal path and never takes part in wildcard matching.
    pub fn register<P>(&mut self, method: RouteMethod, paths: P, handler: H)
    where
        P: Into<RoutePaths>,
        H: Clone,
    {
        let paths: RoutePaths = paths.into();
        for path in paths {
            self.insert(method, path, handler.clone());
        }
    }

    /// Like [`Router::register`] but rejects malformed paths up front.
    ///
    /// Every path is checked before any is inserted, so a rejected list
    /// leaves the table untouched.
    pub fn try_register<P>(&mut self, method: RouteMethod, paths: P, handler: H) -> Result<()>
    where
        P: Into<RoutePaths>,
        H: Clone,
    {
        let paths: RoutePaths = paths.into();
        for path in paths.iter() {
            validate_path(path)?;
        }
        self.register(method, paths, handler);
        Ok(())
    }

    pub fn get<P: Into<RoutePaths>>(&mut self, paths: P, handler: H)
    where
        H: Clone,
    {
        self.register(RouteMethod::Get, paths, handler);
    }

    pub fn post<P: Into<RoutePaths>>(&mut self, paths: P, handler: H)
    where
        H: Clone,
    {
        self.register(RouteMethod::Post, paths, handler);
    }

    pub fn put<P: Into<RoutePaths>>(&mut self, paths: P, handler: H)
    where
        H: Clone,
    {
        self.register(RouteMethod::Put, paths, handler);
    }

    pub fn delete<P: Into<RoutePaths>>(&mut self, paths: P, handler: H)
    where
        H: Clone,
    {
        self.register(RouteMethod::Delete, paths, handler);
    }

    fn insert(&mut self, method: RouteMethod, path: String, handler: H) {
        let before = self.routes.len();
        self.routes
            .retain(|r| !(r.method == method && r.path.as_ref() == path.as_str()));
        let replaced = before - self.routes.len();

        let entry = RouteEntry::new(method, path, handler);
        if replaced > 0 {
            debug!(
                method = %entry.method,
                path = %entry.path,
                replaced,
                "route replaced"
            );
        } else {
            debug!(
                method = %entry.method,
                path = %entry.path,
                wildcard = ?entry.wildcard,
                "route registered"
            );
        }
        self.routes.push(Arc::new(entry));
    }

    /// Match a request. Literal routes are tried first, then wildcard routes.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the selected route and its captured params
    /// * `None` - nothing matched (the caller answers 404)
    #[must_use]
    pub fn route(&self, method: &str, url: &str) -> Option<RouteMatch<H>> {
        if let Some(route) = self.find_regular(method, url) {
            return Some(RouteMatch {
                route: Arc::clone(route),
                path_params: Params::new(),
            });
        }
        self.find_wildcard(method, url)
    }

    fn find_regular(&self, method: &str, url: &str) -> Option<&Arc<RouteEntry<H>>> {
        let trimmed = trim_trailing_slash(url);
        self.routes.iter().find(|r| {
            r.method.matches(method) && (r.path.as_ref() == url || r.path.as_ref() == trimmed)
        })
    }

    fn find_wildcard(&self, method: &str, url: &str) -> Option<RouteMatch<H>> {
        let (prefix, value) = split_last_segment(url)?;

        let mut candidates = self.routes.iter().filter_map(|r| {
            if !r.method.matches(method) {
                return None;
            }
            let (parent, wildcard) = r.wildcard_parts()?;
            (parent == prefix).then_some((r, wildcard))
        });

        let first = candidates.next()?;
        let (route, wildcard) = match candidates.next() {
            // A lone candidate wins without any type check.
            None => first,
            Some(second) => [first, second]
                .into_iter()
                .chain(candidates)
                .find(|(_, w)| w.accepts(value))?,
        };

        let mut path_params = Params::new();
        path_params.insert(wildcard.name_arc(), value.to_string());
        Some(RouteMatch {
            route: Arc::clone(route),
            path_params,
        })
    }

    /// Entries in table order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.routes.iter().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Log every registered route at INFO, in table order.
    pub fn dump_routes(&self) {
        info!(routes_count = self.routes.len(), "routing table");
        for entry in &self.routes {
            info!(method = %entry.method, path = %entry.path, "route");
        }
    }
}

/// Drop one trailing `/`; the root path is left alone.
#[inline]
fn trim_trailing_slash(url: &str) -> &str {
    if url == "/" {
        return url;
    }
    url.strip_suffix('/').unwrap_or(url)
}
