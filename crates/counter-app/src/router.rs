//! Navigation path between the counter screen and the count highlight screen.
//!
//! The router only keeps the stack of routes; rendering a route is the presentation layer's
//! job. The count shown on the highlight screen travels inside the route itself, not through
//! the store.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Counter,
    CountHighlight { count: i64 },
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Counter => write!(f, "counter"),
            Route::CountHighlight { count } => write!(f, "count-highlight({count})"),
        }
    }
}

/// Stack of routes pushed on top of the root screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Router {
    path: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, depth = self.path.len() + 1, "Navigate");
        self.path.push(route);
    }

    /// Pops the top route. At the root this is a no-op returning `None`.
    pub fn navigate_back(&mut self) -> Option<Route> {
        let popped = self.path.pop();
        tracing::debug!(route = ?popped, depth = self.path.len(), "Navigate back");
        popped
    }

    /// Top of the stack, `None` at the root.
    pub fn current(&self) -> Option<&Route> {
        self.path.last()
    }

    pub fn path(&self) -> &[Route] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
