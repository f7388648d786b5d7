//! Host-integration traits.
//!
//! The presentation layer mounts screens and drives transitions through
//! these traits; the host toolkit implements them over its real view
//! hierarchy and animation machinery. The engine owns all bookkeeping —
//! wrapper lists, associations, generation counters — while the host owns
//! pixels, layout and clocks.

use alloc::boxed::Box;
use alloc::rc::Rc;

use nami::Computed;

use crate::animation::TransitionBatch;
use crate::geometry::{Size, Transform};
use crate::screen::{AnyScreen, ScreenId};

/// Host-assigned identity of a mounted surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Creates a surface id from a host-chosen value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Stacking position for [`Stage::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Above every currently attached surface.
    Top,
    /// Immediately below the given sibling.
    Below(SurfaceId),
}

/// A mounted layer hosting one screen.
///
/// Setting a transform or shade value is immediate and carries no implied
/// animation; animated changes only ever happen through
/// [`Stage::animate`]. The `rendered_*` accessors report the in-flight
/// interpolated value while an animation runs, which is what lets an
/// interrupting transition start from the picture on screen instead of the
/// old target.
pub trait Surface {
    /// This surface's identity within its stage.
    fn id(&self) -> SurfaceId;

    /// Sets the model transform.
    fn set_transform(&self, transform: Transform);

    /// The model transform.
    fn transform(&self) -> Transform;

    /// The currently rendered transform, when an animation is in flight.
    fn rendered_transform(&self) -> Option<Transform>;

    /// Sets the shade overlay's opacity, installing the shade if needed.
    fn set_shade(&self, opacity: f32);

    /// The shade overlay's model opacity (0 when no shade is installed).
    fn shade(&self) -> f32;

    /// The currently rendered shade opacity, when a fade is in flight.
    fn rendered_shade(&self) -> Option<f32>;

    /// Removes the shade overlay.
    fn remove_shade(&self);

    /// Cancels any in-flight animations on this surface.
    fn cancel_animations(&self);
}

/// The container a stack controller mounts its surfaces into.
pub trait Stage {
    /// Creates a surface hosting `screen`. The surface is not attached yet.
    fn make_surface(&self, screen: &AnyScreen) -> Rc<dyn Surface>;

    /// Inserts a surface into the hierarchy at the given stacking order.
    ///
    /// Attaching an already-attached surface repositions it.
    fn attach(&self, surface: &Rc<dyn Surface>, placement: Placement);

    /// Removes a surface from the hierarchy.
    fn detach(&self, surface: &Rc<dyn Surface>);

    /// The container's current width, used to compute slide offsets.
    fn width(&self) -> f64;

    /// Runs a transition batch, invoking `completion` exactly once when it
    /// settles.
    ///
    /// Returns immediately; the completion is the only signal that the
    /// batch finished. Whether a superseded batch still completes is up to
    /// the host — the engine guards every completion with its generation
    /// counter either way.
    fn animate(&self, batch: TransitionBatch, completion: Box<dyn FnOnce()>);
}

/// The window-level collaborator a sheet controller presents through.
pub trait SheetHost {
    /// Whether the host is attached to a window, as a watchable signal.
    ///
    /// Presentation is deferred while this is `false` and retried when it
    /// becomes `true`.
    fn window_attached(&self) -> Computed<bool>;

    /// Presents `screen` as a sheet with the given preferred size.
    fn present(&self, screen: &AnyScreen, size: Size);

    /// Dismisses a previously presented sheet.
    fn dismiss(&self, screen: &AnyScreen);

    /// Whether any sheet is still active on the host window.
    fn has_active_sheets(&self) -> bool;
}

/// The multi-pane container a split controller populates.
pub trait SplitHost {
    /// Inserts a pane hosting `screen` at `index`.
    fn insert_pane(&self, index: usize, screen: &AnyScreen);

    /// Removes the pane hosting the given screen.
    fn remove_pane(&self, screen: ScreenId);

    /// The index of the pane hosting the given screen, if any.
    fn pane_index(&self, screen: ScreenId) -> Option<usize>;

    /// The leading x-offset of the pane at `index`, if it exists.
    fn pane_offset(&self, index: usize) -> Option<f64>;
}

/// The toolbar collaborator controllers report layout hints to.
///
/// Purely advisory: navigation is correct without a toolbar attached.
pub trait Toolbar {
    /// Pins the leading edge of the toolbar's navigation area.
    fn set_leading_offset(&self, offset: f64);
}
