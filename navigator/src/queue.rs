//! FIFO queue navigator.

use alloc::vec::Vec;

use tiller_core::impl_deref;
use tiller_core::route::AnyRoute;

use crate::Navigator;

/// A navigator driven like a FIFO queue.
///
/// The head of the list is "what is presented"; an empty queue means
/// nothing is presented. Duplicates are allowed. The queue only advances
/// when its consumer [`dequeue`](Self::dequeue)s the head.
#[derive(Debug, Clone)]
pub struct QueueNavigator(Navigator);

impl_deref!(QueueNavigator, Navigator);

impl QueueNavigator {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self(Navigator::new(Vec::new()))
    }

    /// Appends a route to the back of the queue.
    pub fn enqueue(&self, route: impl Into<AnyRoute>) {
        let route = route.into();
        self.0.update(|routes| {
            routes.push(route);
            true
        });
    }

    /// Appends multiple routes to the back of the queue.
    pub fn enqueue_all(&self, new_routes: impl IntoIterator<Item = AnyRoute>) {
        self.0.update(|routes| {
            let before = routes.len();
            routes.extend(new_routes);
            routes.len() != before
        });
    }

    /// Removes and returns the head of the queue, or `None` when empty.
    pub fn dequeue(&self) -> Option<AnyRoute> {
        let mut routes = self.0.routes.get();
        if routes.is_empty() {
            return None;
        }
        let head = routes.remove(0);
        self.0.routes.set(routes);
        Some(head)
    }

    /// The head of the queue without removing it.
    #[must_use]
    pub fn current(&self) -> Option<AnyRoute> {
        self.0.routes.get().first().cloned()
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

    /// Empties the queue.
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

    /// Replaces the entire queue with a new list of routes.
    pub fn replace_all(&self, new_routes: Vec<AnyRoute>) {
        self.0.update(|routes| {
            *routes = new_routes;
            true
        });
    }
}

impl Default for QueueNavigator {
    fn default() -> Self {
        Self::new()
    }
}
