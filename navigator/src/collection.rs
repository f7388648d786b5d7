//! Index-addressed collection navigator.

use alloc::vec::Vec;

use tiller_core::error::NavigationError;
use tiller_core::impl_deref;
use tiller_core::route::AnyRoute;

use crate::Navigator;

/// A navigator whose routes are addressed by index, with no LIFO or FIFO
/// discipline.
///
/// Index-addressed operations validate their bounds and silently do
/// nothing when out of range: UI-driven index math can race with list
/// mutations, and a stale index is not an error.
#[derive(Debug, Clone)]
pub struct CollectionNavigator(Navigator);

impl_deref!(CollectionNavigator, Navigator);

impl CollectionNavigator {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Navigator::new(Vec::new()))
    }

    /// Creates a collection seeded with `routes`.
    #[must_use]
    pub fn with_routes(routes: Vec<AnyRoute>) -> Self {
        Self(Navigator::new(routes))
    }

    /// Replaces the entire route list.
    pub fn set_routes(&self, new_routes: Vec<AnyRoute>) {
        self.0.update(|routes| {
            *routes = new_routes;
            true
        });
    }

    /// Inserts a route at `index`. A no-op when `index > len`.
    pub fn insert(&self, route: impl Into<AnyRoute>, index: usize) {
        let _ = self.try_insert(route, index);
    }

    /// Inserts a route at `index`, surfacing an out-of-range index.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfBounds`] when `index > len`.
    pub fn try_insert(
        &self,
        route: impl Into<AnyRoute>,
        index: usize,
    ) -> Result<(), NavigationError> {
        let route = route.into();
        let mut result = Ok(());
        self.0.update(|routes| {
            if index > routes.len() {
                result = Err(NavigationError::OutOfBounds {
                    index,
                    len: routes.len(),
                });
                return false;
            }
            routes.insert(index, route);
            true
        });
        result
    }

    /// Appends a route at the end.
    pub fn append(&self, route: impl Into<AnyRoute>) {
        let route = route.into();
        self.0.update(|routes| {
            routes.push(route);
            true
        });
    }

    /// Replaces the route at `index`. A no-op when out of range.
    pub fn replace(&self, index: usize, route: impl Into<AnyRoute>) {
        let route = route.into();
        self.0.update(|routes| {
            if index >= routes.len() {
                return false;
            }
            routes[index] = route;
            true
        });
    }

    /// Removes the route at `index`. A no-op when out of range.
    pub fn remove_at(&self, index: usize) {
        self.0.update(|routes| {
            if index >= routes.len() {
                return false;
            }
            routes.remove(index);
            true
        });
    }

    /// Removes every occurrence of `route`.
    pub fn remove(&self, route: impl Into<AnyRoute>) {
        let route = route.into();
        self.0.update(|routes| {
            let before = routes.len();
            routes.retain(|existing| *existing != route);
            routes.len() != before
        });
    }

    /// Moves the route at `from` to position `to`.
    ///
    /// A no-op unless both indices are in range. A valid move followed by
    /// its inverse restores the original order.
    pub fn move_route(&self, from: usize, to: usize) {
        let _ = self.try_move_route(from, to);
    }

    /// Moves the route at `from` to position `to`, surfacing an
    /// out-of-range index.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfBounds`] naming the offending index
    /// when either position is out of range.
    pub fn try_move_route(&self, from: usize, to: usize) -> Result<(), NavigationError> {
        let mut result = Ok(());
        self.0.update(|routes| {
            let len = routes.len();
            if from >= len || to >= len {
                let index = if from >= len { from } else { to };
                result = Err(NavigationError::OutOfBounds { index, len });
                return false;
            }
            if from == to {
                return false;
            }
            let route = routes.remove(from);
            routes.insert(to, route);
            true
        });
        result
    }

    /// Empties the collection.
    pub fn clear(&self) {
        self.0.update(|routes| {
            if routes.is_empty() {
                false
            } else {
                routes.clear();
                true
            }
        });
    }
}

impl Default for CollectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}
