//! The split (multi-pane) controller.
//!
//! Specializes reconciliation for a statically multi-paned layout: each
//! route maps 1:1 to a pane at its index, mounted and unmounted without
//! animation. Panes that kept the same route at the same index are left
//! untouched to avoid flicker and resize thrash.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::rc::Rc;

use nami::watcher::BoxWatcherGuard;
use tiller_core::host::{SplitHost, Toolbar};
use tiller_core::route::AnyRoute;
use tiller_core::router::Router;
use tiller_core::screen::AnyScreen;
use tiller_navigator::CollectionNavigator;
use tracing::debug;

/// Keeps a multi-pane host in sync with a collection navigator.
///
/// Routes are expected to be unique within the list; a duplicate route
/// shares its pane with the first occurrence.
pub struct SplitController {
    inner: Rc<SplitInner>,
    _routes: BoxWatcherGuard,
}

struct SplitInner {
    navigator: CollectionNavigator,
    router: Rc<Router>,
    host: Rc<dyn SplitHost>,
    toolbar: RefCell<Option<Rc<dyn Toolbar>>>,
    tracked_pane: Cell<Option<usize>>,
    state: RefCell<SplitState>,
}

#[derive(Default)]
struct SplitState {
    current: Vec<AnyRoute>,
    panes: HashMap<AnyRoute, AnyScreen>,
}

impl SplitController {
    /// Creates a controller and mounts the navigator's current routes.
    #[must_use]
    pub fn new(navigator: CollectionNavigator, router: Rc<Router>, host: Rc<dyn SplitHost>) -> Self {
        let inner = Rc::new(SplitInner {
            navigator,
            router,
            host,
            toolbar: RefCell::new(None),
            // The second pane usually carries the content area the toolbar
            // aligns with.
            tracked_pane: Cell::new(Some(1)),
            state: RefCell::new(SplitState::default()),
        });

        let setting_up = Rc::new(Cell::new(true));
        let guard = inner.navigator.watch({
            let weak = Rc::downgrade(&inner);
            let setting_up = Rc::clone(&setting_up);
            move |ctx| {
                if setting_up.get() {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    inner.sync(ctx.into_value());
                }
            }
        });
        setting_up.set(false);

        inner.sync(inner.navigator.routes());

        Self {
            inner,
            _routes: guard,
        }
    }

    /// The navigator this controller mirrors.
    #[must_use]
    pub fn navigator(&self) -> CollectionNavigator {
        self.inner.navigator.clone()
    }

    /// The screen mounted for a route, if any.
    #[must_use]
    pub fn screen_for(&self, route: &AnyRoute) -> Option<AnyScreen> {
        self.inner.state.borrow().panes.get(route).cloned()
    }

    /// Attaches the toolbar collaborator and reports the current offset.
    pub fn set_toolbar(&self, toolbar: Rc<dyn Toolbar>) {
        *self.inner.toolbar.borrow_mut() = Some(toolbar);
        self.update_toolbar_tracking();
    }

    /// Selects which pane's leading edge the toolbar follows.
    pub fn set_tracked_pane(&self, index: Option<usize>) {
        self.inner.tracked_pane.set(index);
        self.update_toolbar_tracking();
    }

    /// Re-reports the tracked pane's leading offset to the toolbar.
    ///
    /// Called after every sync; hosts also call it from their resize
    /// handling so the toolbar follows live divider drags.
    pub fn update_toolbar_tracking(&self) {
        self.inner.update_toolbar_tracking();
    }
}

impl Debug for SplitController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitController")
            .field("routes", &self.inner.state.borrow().current)
            .finish()
    }
}

impl SplitInner {
    fn sync(&self, new_routes: Vec<AnyRoute>) {
        {
            let state = self.state.borrow();
            if state.current == new_routes {
                return;
            }
        }

        // Drop panes whose routes vanished.
        let removed: Vec<AnyScreen> = {
            let mut state = self.state.borrow_mut();
            state.current.clone_from(&new_routes);
            let vanished: Vec<AnyRoute> = state
                .panes
                .keys()
                .filter(|route| !new_routes.contains(route))
                .cloned()
                .collect();
            vanished
                .iter()
                .filter_map(|route| state.panes.remove(route))
                .collect()
        };
        for screen in &removed {
            self.host.remove_pane(screen.id());
        }

        // Walk the new list in order; reposition existing panes, build the
        // missing ones, and leave index-stable panes untouched.
        for (index, route) in new_routes.iter().enumerate() {
            let existing = self.state.borrow().panes.get(route).cloned();
            if let Some(screen) = existing {
                if self.host.pane_index(screen.id()) != Some(index) {
                    debug!(route = ?route, index, "repositioning pane");
                    self.host.remove_pane(screen.id());
                    self.host.insert_pane(index, &screen);
                }
                continue;
            }

            // Factories run with no state borrow held.
            let screen = self.router.resolve(route);
            self.host.insert_pane(index, &screen);
            self.state.borrow_mut().panes.insert(route.clone(), screen);
        }

        self.update_toolbar_tracking();
    }

    fn update_toolbar_tracking(&self) {
        let Some(toolbar) = self.toolbar.borrow().clone() else {
            return;
        };
        let Some(index) = self.tracked_pane.get() else {
            return;
        };
        if let Some(offset) = self.host.pane_offset(index) {
            toolbar.set_leading_offset(offset);
        }
    }
}
