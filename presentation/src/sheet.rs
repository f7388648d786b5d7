//! The sheet (modal) controller.
//!
//! Specializes the reconciliation pattern for "at most one visible
//! overlay, FIFO queue of pending ones": only the queue's head is
//! observed, presentation waits for the host window, and the queue
//! advances exclusively when the host reports that the visible sheet
//! ended — never when a new one is merely requested.

use std::cell::{Cell, RefCell};
use std::fmt::{self, Debug};
use std::rc::Rc;

use nami::watcher::BoxWatcherGuard;
use nami::{Computed, Signal};
use tiller_core::geometry::Size;
use tiller_core::host::SheetHost;
use tiller_core::route::AnyRoute;
use tiller_core::router::Router;
use tiller_core::screen::AnyScreen;
use tiller_navigator::QueueNavigator;
use tracing::debug;

/// Presents the head of a queue navigator as a modal sheet.
pub struct SheetController {
    inner: Rc<SheetInner>,
    _routes: BoxWatcherGuard,
    _window: BoxWatcherGuard,
}

struct SheetInner {
    navigator: QueueNavigator,
    router: Rc<Router>,
    host: Rc<dyn SheetHost>,
    attachment: Computed<bool>,
    state: RefCell<SheetState>,
}

#[derive(Default)]
struct SheetState {
    presented: Option<(AnyRoute, AnyScreen)>,
    pending: Option<AnyRoute>,
    last_head: Option<AnyRoute>,
}

impl SheetController {
    /// Fallback preferred size when a screen reports a degenerate fitting
    /// size.
    pub const DEFAULT_SHEET_SIZE: Size = Size::new(400.0, 300.0);

    /// Creates a controller and presents the queue's current head, if any.
    #[must_use]
    pub fn new(navigator: QueueNavigator, router: Rc<Router>, host: Rc<dyn SheetHost>) -> Self {
        let attachment = host.window_attached();
        let inner = Rc::new(SheetInner {
            navigator,
            router,
            host,
            attachment,
            state: RefCell::new(SheetState::default()),
        });

        let setting_up = Rc::new(Cell::new(true));
        let routes_guard = inner.navigator.watch({
            let weak = Rc::downgrade(&inner);
            let setting_up = Rc::clone(&setting_up);
            move |ctx| {
                if setting_up.get() {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    inner.head_changed(ctx.into_value().first().cloned());
                }
            }
        });
        let window_guard = inner.attachment.watch({
            let weak = Rc::downgrade(&inner);
            let setting_up = Rc::clone(&setting_up);
            move |ctx| {
                if setting_up.get() || !ctx.into_value() {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    inner.present_pending();
                }
            }
        });
        setting_up.set(false);

        inner.head_changed(inner.navigator.current());

        Self {
            inner,
            _routes: routes_guard,
            _window: window_guard,
        }
    }

    /// The queue this controller drains.
    #[must_use]
    pub fn navigator(&self) -> QueueNavigator {
        self.inner.navigator.clone()
    }

    /// The route currently presented as a sheet, if any.
    #[must_use]
    pub fn presented_route(&self) -> Option<AnyRoute> {
        self.inner
            .state
            .borrow()
            .presented
            .as_ref()
            .map(|(route, _)| route.clone())
    }

    /// The route waiting for the host window to attach, if any.
    #[must_use]
    pub fn pending_route(&self) -> Option<AnyRoute> {
        self.inner.state.borrow().pending.clone()
    }

    /// Host signal: the visible sheet ended (user or system dismissal).
    ///
    /// Ignored while the host still reports active sheets; otherwise the
    /// head route is dequeued, which is what advances the queue to the
    /// next sheet.
    pub fn sheet_did_end(&self) {
        if self.inner.host.has_active_sheets() {
            debug!("sheet dismissal skipped, sheets still active");
            return;
        }
        self.inner.state.borrow_mut().presented = None;
        let _ = self.inner.navigator.dequeue();
    }
}

impl Debug for SheetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("presented", &self.presented_route())
            .field("pending", &self.pending_route())
            .finish()
    }
}

impl SheetInner {
    /// Reacts to a change of the queue's head, ignoring emissions that
    /// leave the head untouched.
    fn head_changed(&self, head: Option<AnyRoute>) {
        {
            let mut state = self.state.borrow_mut();
            if state.last_head == head {
                return;
            }
            state.last_head.clone_from(&head);
        }
        match head {
            None => self.dismiss_current(),
            Some(route) => self.present(route),
        }
    }

    fn present(&self, route: AnyRoute) {
        if !self.attachment.get() {
            debug!(route = ?route, "host window not attached, deferring sheet");
            self.state.borrow_mut().pending = Some(route);
            return;
        }
        self.state.borrow_mut().pending = None;

        self.dismiss_current();

        // Factories run with no state borrow held.
        let screen = self.router.resolve(&route);
        screen.layout();
        let fitting = screen.fitting_size();
        let size = if fitting.is_degenerate() {
            SheetController::DEFAULT_SHEET_SIZE
        } else {
            fitting
        };
        debug!(route = ?route, ?size, "presenting sheet");

        self.host.present(&screen, size);
        self.state.borrow_mut().presented = Some((route, screen));
    }

    fn present_pending(&self) {
        let Some(route) = self.state.borrow_mut().pending.take() else {
            return;
        };
        debug!(route = ?route, "presenting deferred sheet");
        self.present(route);
    }

    fn dismiss_current(&self) {
        let presented = self.state.borrow_mut().presented.take();
        if let Some((_, screen)) = presented {
            self.host.dismiss(&screen);
        }
    }
}
