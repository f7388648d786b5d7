#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```ignore
    //! use tiller::prelude::*;
    //!
    //! let navigator = RootStackNavigator::new(Home);
    //! let router = Router::new()
    //!     .destination_with(|_: &Home| HomeScreen::default());
    //! let stack = StackController::new(navigator, Rc::new(router), stage);
    //! ```

    pub use super::core::{
        AnyRoute, AnyScreen, Easing, NavigationError, Placement, Route, Router, Screen, ScreenId,
        SheetHost, Size, SplitHost, Stage, Surface, SurfaceId, Timing, Toolbar, Transform,
    };
    pub use super::navigator::{
        CollectionNavigator, Navigator, QueueNavigator, RootStackNavigator, StackNavigator,
    };
    pub use super::presentation::{
        BackAction, NavigationItem, SheetController, SplitController, StackController,
        TransitionDirection,
    };
}

pub use tiller_core as core;
pub use tiller_navigator as navigator;
pub use tiller_presentation as presentation;

#[doc(inline)]
pub use tiller_core::{
    AnyRoute, AnyScreen, NavigationError, Route, Router, Screen, impl_route,
};
#[doc(inline)]
pub use tiller_navigator::{
    CollectionNavigator, QueueNavigator, RootStackNavigator, StackNavigator,
};
#[doc(inline)]
pub use tiller_presentation::{SheetController, SplitController, StackController};

/// Re-export of the reactive primitives the engine is built on.
pub use nami;
