//! The stack reconciler and transition controller.
//!
//! A [`StackController`] observes a [`RootStackNavigator`] and keeps the
//! stage's surface hierarchy in sync with the route list. Each published
//! snapshot triggers one reconciliation pass:
//!
//! 1. **Diff** — walk the new list; a wrapper is reused only when the same
//!    route sits at the same position, otherwise the router builds a fresh
//!    screen. The screen-to-route association map is rebuilt alongside.
//! 2. **Classify** — more routes than before is a push, fewer is a pop;
//!    equal counts, first mounts and empty targets commit synchronously
//!    with no animation.
//! 3. **Mount & prime** — the incoming surface is attached above (push) or
//!    below (pop) the outgoing one and primed at its start transform.
//! 4. **Animate** — outgoing and incoming slide concurrently while a shade
//!    fade signals depth; an interrupted transition resumes from the
//!    rendered in-flight values, never from the superseded targets.
//! 5. **Commit** — the completion is guarded by a generation counter so
//!    only the latest pass's completion mutates anything: it snaps the
//!    survivor to rest and detaches every other attached surface.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::rc::Rc;

use nami::watcher::BoxWatcherGuard;
use tiller_core::NavigationError;
use tiller_core::animation::{Easing, Slide, Timing, TransitionBatch};
use tiller_core::geometry::Transform;
use tiller_core::host::{Placement, Stage};
use tiller_core::route::AnyRoute;
use tiller_core::router::Router;
use tiller_core::screen::{AnyScreen, ScreenId};
use tiller_navigator::RootStackNavigator;
use tracing::{debug, warn};

use crate::toolbar::{BackAction, NavigationItem, TransitionDirection};
use crate::wrapper::StackWrapper;

/// How one reconciliation pass transitions between tops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
    Push,
    Pop,
    Replace,
}

/// Drives a stage to mirror a root stack navigator's route list.
pub struct StackController {
    inner: Rc<ControllerInner>,
    _routes: BoxWatcherGuard,
}

struct ControllerInner {
    navigator: RootStackNavigator,
    router: Rc<Router>,
    stage: Rc<dyn Stage>,
    item: NavigationItem,
    /// Bumped on every pass; completions compare against it so only the
    /// latest pass commits.
    generation: Cell<u64>,
    animated: Cell<bool>,
    state: RefCell<StackState>,
}

#[derive(Default)]
struct StackState {
    wrappers: Vec<Rc<StackWrapper>>,
    routes_by_screen: HashMap<ScreenId, AnyRoute>,
    attached: Vec<Rc<StackWrapper>>,
}

impl StackController {
    /// Transition duration in seconds.
    pub const ANIMATION_DURATION: f64 = 0.35;

    /// Creates a controller and synchronously mounts the navigator's
    /// current stack.
    #[must_use]
    pub fn new(navigator: RootStackNavigator, router: Rc<Router>, stage: Rc<dyn Stage>) -> Self {
        let inner = Rc::new(ControllerInner {
            navigator,
            router,
            stage,
            item: NavigationItem::new(),
            generation: Cell::new(0),
            animated: Cell::new(true),
            state: RefCell::new(StackState::default()),
        });

        // Filter out a synchronous callback during registration; the seed
        // sync below covers the initial list.
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
    pub fn navigator(&self) -> RootStackNavigator {
        self.inner.navigator.clone()
    }

    /// The reactive toolbar item kept current by the controller.
    #[must_use]
    pub fn navigation_item(&self) -> &NavigationItem {
        &self.inner.item
    }

    /// Enables or disables transition animations; when disabled every pass
    /// commits synchronously.
    pub fn set_animations_enabled(&self, enabled: bool) {
        self.inner.animated.set(enabled);
    }

    /// The number of mounted wrappers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.state.borrow().wrappers.len()
    }

    /// The screen instances in stack order.
    #[must_use]
    pub fn screens(&self) -> Vec<AnyScreen> {
        self.inner
            .state
            .borrow()
            .wrappers
            .iter()
            .map(|wrapper| wrapper.screen().clone())
            .collect()
    }

    /// The screen instance on top of the stack.
    #[must_use]
    pub fn top_screen(&self) -> Option<AnyScreen> {
        self.inner
            .state
            .borrow()
            .wrappers
            .last()
            .map(|wrapper| wrapper.screen().clone())
    }

    /// Looks up the screen mounted for a route, if any.
    ///
    /// With duplicate routes on the stack the bottom-most occurrence wins.
    #[must_use]
    pub fn screen_for(&self, route: &AnyRoute) -> Option<AnyScreen> {
        let state = self.inner.state.borrow();
        state
            .wrappers
            .iter()
            .find(|wrapper| state.routes_by_screen.get(&wrapper.screen().id()) == Some(route))
            .map(|wrapper| wrapper.screen().clone())
    }
}

impl Debug for StackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackController")
            .field("depth", &self.depth())
            .field("generation", &self.inner.generation.get())
            .finish()
    }
}

impl ControllerInner {
    /// One full reconciliation pass.
    fn sync(self: &Rc<Self>, routes: Vec<AnyRoute>) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let old_wrappers = self.state.borrow().wrappers.clone();
        let new_wrappers = self.reconcile(&routes);

        let from = old_wrappers.last().cloned();
        let to = new_wrappers.last().cloned();
        let is_push = new_wrappers.len() > old_wrappers.len();
        let kind = if new_wrappers.len() == old_wrappers.len() {
            TransitionKind::Replace
        } else if is_push {
            TransitionKind::Push
        } else {
            TransitionKind::Pop
        };

        match (from, to) {
            (_, None) => self.finalize(None, generation),
            (None, Some(to)) => {
                self.attach(&to, Placement::Top);
                self.finalize(Some(&to), generation);
            }
            (Some(from), Some(to)) if Rc::ptr_eq(&from, &to) => {
                self.finalize(Some(&to), generation);
            }
            (Some(from), Some(to)) => {
                if kind == TransitionKind::Replace || !self.animated.get() {
                    self.attach(&to, Placement::Top);
                    self.finalize(Some(&to), generation);
                } else {
                    let is_push = kind == TransitionKind::Push;
                    self.prepare(&from, &to, is_push);
                    self.animate(&from, &to, is_push, generation);
                }
            }
        }

        self.update_navigation_item(is_push);
    }

    /// Builds the new wrapper list, reusing a wrapper only when the same
    /// route sits at the same position.
    fn reconcile(self: &Rc<Self>, routes: &[AnyRoute]) -> Vec<Rc<StackWrapper>> {
        let (old_wrappers, old_assoc) = {
            let state = self.state.borrow();
            (state.wrappers.clone(), state.routes_by_screen.clone())
        };

        let mut new_wrappers = Vec::with_capacity(routes.len());
        let mut new_assoc = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            let existing = old_wrappers
                .get(index)
                .filter(|wrapper| old_assoc.get(&wrapper.screen().id()) == Some(route));
            if let Some(wrapper) = existing {
                new_assoc.insert(wrapper.screen().id(), route.clone());
                new_wrappers.push(Rc::clone(wrapper));
                continue;
            }

            // Factories run with no state borrow held.
            let screen = self.router.resolve(route);
            let id = screen.id();
            if new_assoc.contains_key(&id) || old_assoc.contains_key(&id) {
                warn!(
                    route = ?route,
                    error = %NavigationError::ScreenAlreadyMounted,
                    "skipping route"
                );
                continue;
            }
            let wrapper = Rc::new(StackWrapper::new(screen, self.stage.as_ref()));
            new_assoc.insert(id, route.clone());
            new_wrappers.push(wrapper);
        }

        let mut state = self.state.borrow_mut();
        state.wrappers = new_wrappers.clone();
        state.routes_by_screen = new_assoc;
        new_wrappers
    }

    /// Mounts the incoming wrapper at the right stacking order and primes
    /// a freshly mounted surface at its start transform.
    fn prepare(self: &Rc<Self>, from: &Rc<StackWrapper>, to: &Rc<StackWrapper>, is_push: bool) {
        let fresh = !self.is_attached(to);
        let placement = if is_push {
            Placement::Top
        } else {
            Placement::Below(from.surface().id())
        };
        self.attach(to, placement);

        if fresh {
            let width = self.stage.width();
            let start = if is_push {
                // Incoming pushes start fully off-screen at the trailing edge.
                Transform::translation(width)
            } else {
                // Incoming pops start a quarter-width off the leading edge,
                // the resting position of a screen one level down.
                Transform::translation(-width / 4.0)
            };
            to.surface().set_transform(start);
        }
    }

    /// Runs the slide/shade batch for one transition.
    fn animate(
        self: &Rc<Self>,
        from: &Rc<StackWrapper>,
        to: &Rc<StackWrapper>,
        is_push: bool,
        generation: u64,
    ) {
        let width = self.stage.width();

        // Capture on-screen values before cancelling, so an interrupted
        // transition resumes from the rendered picture.
        let from_start = from.current_transform();
        let to_start = to.current_transform();
        let fade = if is_push {
            from.shade_fade(true)
        } else {
            to.shade_fade(false)
        };

        from.surface().cancel_animations();
        to.surface().cancel_animations();

        let from_end = if is_push {
            Transform::translation(-width / 4.0)
        } else {
            Transform::translation(width)
        };

        let batch = TransitionBatch {
            timing: Timing::new(StackController::ANIMATION_DURATION, Easing::EaseOut),
            slides: vec![
                Slide {
                    surface: from.surface().id(),
                    from: from_start,
                    to: from_end,
                },
                Slide {
                    surface: to.surface().id(),
                    from: to_start,
                    to: Transform::IDENTITY,
                },
            ],
            fades: vec![fade],
        };

        let weak = Rc::downgrade(self);
        let survivor = Rc::clone(to);
        self.stage.animate(
            batch,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.finalize(Some(&survivor), generation);
                }
            }),
        );
    }

    /// Commits the pass: snaps the survivor to rest and detaches every
    /// other attached wrapper. Skipped entirely when a newer pass has
    /// started since this one was scheduled.
    fn finalize(&self, survivor: Option<&Rc<StackWrapper>>, generation: u64) {
        if generation != self.generation.get() {
            debug!(
                generation,
                current = self.generation.get(),
                error = %NavigationError::Superseded,
                "skipping stale transition completion"
            );
            return;
        }

        let attached = std::mem::take(&mut self.state.borrow_mut().attached);
        let mut kept = Vec::new();
        for wrapper in attached {
            if survivor.is_some_and(|survivor| Rc::ptr_eq(survivor, &wrapper)) {
                kept.push(wrapper);
                continue;
            }
            wrapper.surface().cancel_animations();
            wrapper.surface().remove_shade();
            self.stage.detach(wrapper.surface());
        }
        self.state.borrow_mut().attached = kept;

        if let Some(survivor) = survivor {
            let surface = survivor.surface();
            surface.cancel_animations();
            surface.set_transform(Transform::IDENTITY);
            surface.remove_shade();
        }
    }

    fn attach(&self, wrapper: &Rc<StackWrapper>, placement: Placement) {
        self.stage.attach(wrapper.surface(), placement);
        let mut state = self.state.borrow_mut();
        if !state
            .attached
            .iter()
            .any(|attached| Rc::ptr_eq(attached, wrapper))
        {
            state.attached.push(Rc::clone(wrapper));
        }
    }

    fn is_attached(&self, wrapper: &Rc<StackWrapper>) -> bool {
        self.state
            .borrow()
            .attached
            .iter()
            .any(|attached| Rc::ptr_eq(attached, wrapper))
    }

    fn update_navigation_item(&self, is_push: bool) {
        let top = self.state.borrow().wrappers.last().cloned();
        let depth = self.state.borrow().wrappers.len();
        match top {
            None => {
                self.item.title.set(None);
                self.item.index.set(None);
                self.item.back_action.set(None);
            }
            Some(top) => {
                self.item.direction.set(if is_push {
                    TransitionDirection::Trailing
                } else {
                    TransitionDirection::Leading
                });
                self.item.title.set(top.screen().title());
                self.item.index.set(Some(depth - 1));
                let back = (depth > 1).then(|| {
                    let navigator = self.navigator.clone();
                    BackAction::new(move || navigator.pop())
                });
                self.item.back_action.set(back);
            }
        }
    }
}
