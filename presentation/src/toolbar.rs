//! Toolbar advisory state.
//!
//! A [`NavigationItem`] is a bundle of reactive fields the stack controller
//! keeps current: the toolbar chrome watches whichever fields it renders
//! and stays in sync without the controller knowing anything about it.
//! Purely advisory — navigation works without a toolbar attached.

use std::fmt::{self, Debug};
use std::rc::Rc;

use nami::Binding;

/// The edge a toolbar title should animate in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionDirection {
    /// Entering from the leading edge (a pop revealed this screen).
    Leading,
    /// Entering from the trailing edge (a push brought this screen in).
    #[default]
    Trailing,
}

/// The action behind the toolbar's back button.
#[derive(Clone)]
pub struct BackAction(Rc<dyn Fn()>);

impl BackAction {
    /// Wraps a back callback.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl Debug for BackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BackAction")
    }
}

/// Reactive description of the toolbar's navigation area.
#[derive(Debug, Clone)]
pub struct NavigationItem {
    /// Title of the current top screen.
    pub title: Binding<Option<String>>,
    /// Zero-based depth of the current top screen.
    pub index: Binding<Option<usize>>,
    /// Back action, present only when something can be popped.
    pub back_action: Binding<Option<BackAction>>,
    /// Whether the navigation area should be hidden.
    pub hidden: Binding<bool>,
    /// The edge the title should animate in from.
    pub direction: Binding<TransitionDirection>,
}

impl NavigationItem {
    /// Creates an empty navigation item.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Binding::container(None),
            index: Binding::container(None),
            back_action: Binding::container(None),
            hidden: Binding::container(false),
            direction: Binding::container(TransitionDirection::default()),
        }
    }
}

impl Default for NavigationItem {
    fn default() -> Self {
        Self::new()
    }
}
