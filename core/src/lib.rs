#![no_std]

//! Core abstractions for the Tiller navigation engine.
//!
//! This crate defines the vocabulary shared by every part of the engine:
//! type-erased [`route::AnyRoute`] values identifying destinations, the
//! [`router::Router`] registry that maps route types to screen factories,
//! the [`screen::AnyScreen`] handle for host-owned screen content, and the
//! host-integration traits in [`host`] through which the presentation layer
//! mounts surfaces and drives animations without knowing anything about the
//! underlying toolkit.

extern crate alloc;

#[macro_use]
pub mod macros;

pub mod animation;
pub mod error;
pub mod geometry;
pub mod host;
pub mod route;
pub mod router;
pub mod screen;

#[doc(inline)]
pub use animation::{Easing, Fade, Slide, Timing, TransitionBatch};
#[doc(inline)]
pub use error::NavigationError;
#[doc(inline)]
pub use geometry::{Size, Transform};
#[doc(inline)]
pub use host::{Placement, SheetHost, SplitHost, Stage, Surface, SurfaceId, Toolbar};
#[doc(inline)]
pub use route::{AnyRoute, Route};
#[doc(inline)]
pub use router::Router;
#[doc(inline)]
pub use screen::{AnyScreen, PlaceholderScreen, Screen, ScreenId};
