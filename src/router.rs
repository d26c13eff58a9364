//! Route registry and history for page navigation.

use crate::error::{Error, Result};
use crate::event::emit_event;

/// One registered route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Path, e.g. `/docs/components`.
    pub path: String,
    /// Human-readable page title.
    pub title: String,
}

/// Path-based navigation with a history stack.
///
/// # Examples
///
/// ```
/// use vulcan_tui::router::Router;
///
/// let mut router = Router::new("/")
///     .route("/", "Home")
///     .route("/docs", "Docs");
///
/// router.navigate("/docs").unwrap();
/// assert_eq!(router.current().path, "/docs");
/// assert!(router.back());
/// assert_eq!(router.current().path, "/");
/// ```
#[derive(Clone, Debug)]
pub struct Router {
    routes: Vec<Route>,
    history: Vec<usize>,
}

impl Router {
    /// Create a router whose first registered route is `initial`.
    ///
    /// The initial path is registered immediately with itself as title;
    /// `route` can refine the title later.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let path = initial.into();
        Self {
            routes: vec![Route {
                title: path.clone(),
                path,
            }],
            history: vec![0],
        }
    }

    /// Register (or retitle) a route.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        let path = path.into();
        let title = title.into();
        if let Some(existing) = self.routes.iter_mut().find(|r| r.path == path) {
            existing.title = title;
        } else {
            self.routes.push(Route { path, title });
        }
        self
    }

    /// Registered routes, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The current route.
    ///
    /// The history stack is never empty: it starts at the initial route
    /// and `back` refuses to pop the last entry.
    #[must_use]
    pub fn current(&self) -> &Route {
        let idx = self.history.last().copied().unwrap_or(0);
        &self.routes[idx]
    }

    /// Navigate to a registered path.
    pub fn navigate(&mut self, path: &str) -> Result<()> {
        let idx = self
            .routes
            .iter()
            .position(|r| r.path == path)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))?;
        if self.history.last() != Some(&idx) {
            self.history.push(idx);
            emit_event("router.navigate", path);
        }
        Ok(())
    }

    /// Pop the history stack; returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        emit_event("router.navigate", &self.current().path.clone());
        true
    }
}
