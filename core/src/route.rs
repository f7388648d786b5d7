//! Type-erased route values.
//!
//! A route is an opaque, hashable value naming a navigable destination.
//! Navigators own ordered lists of [`AnyRoute`] so that routes of different
//! concrete types can coexist in one list, while the [`Router`] dispatches
//! on the route's runtime type.
//!
//! [`Router`]: crate::router::Router

use alloc::rc::Rc;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};

/// Marker trait for types usable as navigation routes.
///
/// Routes are immutable values; a navigation change is always expressed as a
/// new route list, never by mutating a route in place. Implement this for
/// your own route types:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Detail { id: u64 }
///
/// impl Route for Detail {}
/// ```
///
/// Implementations for common primitives are provided via [`impl_route!`].
///
/// [`impl_route!`]: crate::impl_route
pub trait Route: Any + Debug + Eq + Hash {}

crate::impl_route!(String, &'static str, bool, char);
crate::impl_route!(i8, i16, i32, i64, i128, isize);
crate::impl_route!(u8, u16, u32, u64, u128, usize);

/// Object-safe shim behind [`AnyRoute`].
trait ErasedRoute: Any + Debug {
    fn eq_erased(&self, other: &dyn ErasedRoute) -> bool;
    fn hash_erased(&self, state: &mut dyn Hasher);
    fn as_any(&self) -> &dyn Any;
    fn name(&self) -> &'static str;
}

impl<R: Route> ErasedRoute for R {
    fn eq_erased(&self, other: &dyn ErasedRoute) -> bool {
        other
            .as_any()
            .downcast_ref::<R>()
            .is_some_and(|other| self == other)
    }

    fn hash_erased(&self, mut state: &mut dyn Hasher) {
        // Mix the type into the hash so equal payloads of different route
        // types stay distinguishable.
        TypeId::of::<R>().hash(&mut state);
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        core::any::type_name::<R>()
    }
}

/// A type-erased, cheaply clonable route value.
///
/// `AnyRoute` preserves the wrapped value's equality, hashing and debug
/// formatting. Two routes of different underlying types never compare
/// equal, and route identity (type plus value) is what the reconciler uses
/// to match routes against mounted screens.
#[derive(Clone)]
pub struct AnyRoute(Rc<dyn ErasedRoute>);

impl AnyRoute {
    /// Erases a concrete route value.
    pub fn new(route: impl Route) -> Self {
        Self(Rc::new(route))
    }

    /// The [`TypeId`] of the wrapped route value.
    #[must_use]
    pub fn route_type(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    /// The type name of the wrapped route value, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns a reference to the wrapped value if it is an `R`.
    #[must_use]
    pub fn downcast_ref<R: Route>(&self) -> Option<&R> {
        self.0.as_any().downcast_ref()
    }

    /// Returns `true` if the wrapped value is an `R`.
    #[must_use]
    pub fn is<R: Route>(&self) -> bool {
        self.route_type() == TypeId::of::<R>()
    }
}

impl<R: Route> From<R> for AnyRoute {
    fn from(route: R) -> Self {
        Self::new(route)
    }
}

impl PartialEq for AnyRoute {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_erased(&*other.0)
    }
}

impl Eq for AnyRoute {}

impl Hash for AnyRoute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_erased(state);
    }
}

impl Debug for AnyRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
