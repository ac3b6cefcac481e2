//! Navigation Stack
//!
//! The screen only ever shows its root or a single placeholder detail page,
//! but pushes and pops go through an ordered stack of route tokens so the
//! view layer can render whatever is on top.

use std::fmt;

/// Integer route token pushed when an entry is tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route(pub u32);

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        tracing::info!("[NAV] push {} (depth {})", route, self.routes.len() + 1);
        self.routes.push(route);
    }

    pub fn pop(&mut self) -> Option<Route> {
        let route = self.routes.pop();
        if let Some(route) = route {
            tracing::info!("[NAV] pop {} (depth {})", route, self.routes.len());
        }
        route
    }

    /// The route currently shown, `None` at the root
    pub fn top(&self) -> Option<Route> {
        self.routes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
