//! Screen instances and their shared handles.
//!
//! A screen is the host-owned content mounted for a single route
//! occurrence. The engine never looks inside it: it only needs a stable
//! identity, an optional title for the toolbar, and a fitting size for
//! sheet presentation.

use alloc::rc::Rc;
use alloc::string::String;
use core::any::Any;
use core::cell::RefCell;
use core::fmt::{self, Debug};

use crate::geometry::Size;

/// The narrow interface a screen instance exposes to the engine.
///
/// Hosts implement this for whatever owns their native content — a view
/// controller, a widget subtree, a render node. All methods have neutral
/// defaults so minimal screens stay minimal.
pub trait Screen: Any {
    /// Title shown by the toolbar while this screen is on top.
    fn title(&self) -> Option<String> {
        None
    }

    /// Forces a layout pass so [`fitting_size`](Self::fitting_size)
    /// reflects the current content.
    fn layout(&mut self) {}

    /// The natural size of the laid-out content.
    fn fitting_size(&self) -> Size {
        Size::ZERO
    }
}

/// Instance identity of a screen, stable for the lifetime of its handle.
///
/// Derived from the shared allocation, so every [`AnyScreen`] clone reports
/// the same identity. Used for the "already mounted" check and as the key
/// of the screen-to-route association map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(usize);

/// A shared, type-erased handle to a screen instance.
pub struct AnyScreen(Rc<RefCell<dyn Screen>>);

impl AnyScreen {
    /// Wraps a concrete screen.
    pub fn new(screen: impl Screen) -> Self {
        Self(Rc::new(RefCell::new(screen)))
    }

    /// This screen's instance identity.
    #[must_use]
    pub fn id(&self) -> ScreenId {
        ScreenId(Rc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Returns `true` when both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The screen's toolbar title, if any.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.0.borrow().title()
    }

    /// Forces a layout pass on the screen.
    pub fn layout(&self) {
        self.0.borrow_mut().layout();
    }

    /// The screen's natural content size.
    #[must_use]
    pub fn fitting_size(&self) -> Size {
        self.0.borrow().fitting_size()
    }
}

impl Clone for AnyScreen {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl PartialEq for AnyScreen {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for AnyScreen {}

impl Debug for AnyScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyScreen").field("id", &self.id()).finish()
    }
}

/// The neutral screen the router falls back to for unregistered routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScreen;

impl Screen for PlaceholderScreen {}
