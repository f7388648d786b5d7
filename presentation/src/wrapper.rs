//! Per-screen wrappers.

use std::fmt::{self, Debug};
use std::rc::Rc;

use tiller_core::animation::{Easing, Fade};
use tiller_core::geometry::Transform;
use tiller_core::host::{Stage, Surface};
use tiller_core::screen::AnyScreen;

/// A thin container pairing one screen instance with its mounted surface.
///
/// Created once per distinct route occurrence and reused across
/// reconciliation passes while its route stays in the list; dropped once
/// the route is gone and the exit transition has settled.
pub struct StackWrapper {
    screen: AnyScreen,
    surface: Rc<dyn Surface>,
}

impl StackWrapper {
    /// Builds a wrapper and its surface on the given stage.
    pub(crate) fn new(screen: AnyScreen, stage: &dyn Stage) -> Self {
        let surface = stage.make_surface(&screen);
        Self { screen, surface }
    }

    /// The wrapped screen instance.
    #[must_use]
    pub fn screen(&self) -> &AnyScreen {
        &self.screen
    }

    /// The surface hosting the screen.
    #[must_use]
    pub fn surface(&self) -> &Rc<dyn Surface> {
        &self.surface
    }

    /// The transform currently on screen: the rendered in-flight value
    /// when an animation is running, the model value otherwise.
    #[must_use]
    pub fn current_transform(&self) -> Transform {
        self.surface
            .rendered_transform()
            .unwrap_or_else(|| self.surface.transform())
    }

    /// Builds the shade fade for a transition, installing the shade at its
    /// starting opacity.
    ///
    /// `active: true` dims the wrapper (it is receding behind a push);
    /// `active: false` reveals it (it is resurfacing on a pop). When a
    /// previous fade is still rendering, the new fade starts from the
    /// rendered opacity instead of the resting value.
    pub(crate) fn shade_fade(&self, active: bool) -> Fade {
        let resting = if active { 0.0 } else { 1.0 };
        let from = self.surface.rendered_shade().unwrap_or(resting);
        self.surface.set_shade(from);
        Fade {
            surface: self.surface.id(),
            from,
            to: if active { 1.0 } else { 0.0 },
            easing: if active { Easing::EaseOut } else { Easing::EaseIn },
        }
    }
}

impl Debug for StackWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackWrapper")
            .field("screen", &self.screen.id())
            .field("surface", &self.surface.id())
            .finish()
    }
}
