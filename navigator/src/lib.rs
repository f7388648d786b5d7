#![no_std]

//! Reactive route-list navigators.
//!
//! A navigator owns an ordered list of [`AnyRoute`] values and nothing
//! else: no views, no animation. Every mutation replaces the list with a
//! new immutable snapshot and publishes it through a [`nami`] binding, which
//! is what drives the presentation layer's reconciliation. Variants give
//! the list its discipline:
//!
//! - [`StackNavigator`] — LIFO, may become empty
//! - [`RootStackNavigator`] — LIFO with a permanent root
//! - [`QueueNavigator`] — FIFO, drained head-first
//! - [`CollectionNavigator`] — index-addressed, order-significant
//!
//! All navigator handles are cheap clones sharing the same underlying
//! list, so application code and controllers can hold the same navigator.

extern crate alloc;

mod collection;
mod queue;
mod stack;

pub use collection::CollectionNavigator;
pub use queue::QueueNavigator;
pub use stack::{RootStackNavigator, StackNavigator};

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use nami::watcher::{BoxWatcherGuard, Context};
use nami::{Binding, Computed, Signal, SignalExt};
use tiller_core::route::AnyRoute;

/// Shared core of every navigator variant: the published route list.
#[derive(Clone)]
pub struct Navigator {
    pub(crate) routes: Binding<Vec<AnyRoute>>,
}

impl Navigator {
    /// Creates a navigator seeded with `initial` routes.
    #[must_use]
    pub fn new(initial: Vec<AnyRoute>) -> Self {
        Self {
            routes: Binding::container(initial),
        }
    }

    /// A snapshot of the current route list.
    #[must_use]
    pub fn routes(&self) -> Vec<AnyRoute> {
        self.routes.get()
    }

    /// The number of routes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.get().len()
    }

    /// Returns `true` when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.get().is_empty()
    }

    /// The route list as a watchable signal.
    #[must_use]
    pub fn computed(&self) -> Computed<Vec<AnyRoute>> {
        self.routes.clone().computed()
    }

    /// Watches the route list, receiving a snapshot on every change.
    ///
    /// The watcher stays registered for as long as the returned guard is
    /// alive.
    pub fn watch(&self, watcher: impl Fn(Context<Vec<AnyRoute>>) + 'static) -> BoxWatcherGuard {
        self.routes.watch(watcher)
    }

    /// Copy-on-write mutation: publishes a new snapshot only when `mutate`
    /// reports that it changed the list.
    pub(crate) fn update(&self, mutate: impl FnOnce(&mut Vec<AnyRoute>) -> bool) {
        let mut routes = self.routes.get();
        if mutate(&mut routes) {
            self.routes.set(routes);
        }
    }
}

impl Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.routes.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn mutations_publish_snapshots() {
        let navigator = Navigator::new(vec![AnyRoute::new("root")]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let guard = navigator.watch({
            let seen = Rc::clone(&seen);
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });

        navigator.update(|routes| {
            routes.push(AnyRoute::new("detail"));
            true
        });

        let last = seen.borrow().last().cloned().expect("snapshot published");
        assert_eq!(last, vec![AnyRoute::new("root"), AnyRoute::new("detail")]);
        drop(guard);
    }

    #[test]
    fn unchanged_mutations_do_not_publish() {
        let navigator = Navigator::new(vec![AnyRoute::new("root")]);
        let seen = Rc::new(RefCell::new(0_usize));
        let guard = navigator.watch({
            let seen = Rc::clone(&seen);
            move |_| *seen.borrow_mut() += 1
        });
        let baseline = *seen.borrow();

        navigator.update(|_| false);
        assert_eq!(*seen.borrow(), baseline);
        drop(guard);
    }
}
