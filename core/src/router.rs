//! The route-to-screen factory registry.
//!
//! A [`Router`] maps a route's runtime type to a factory producing the
//! screen instance for that route. Registration is keyed by [`TypeId`], so
//! there is exactly one factory per concrete route type; resolution
//! downcasts the erased route and invokes the factory with the concrete
//! value.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::TypeId;
use core::fmt::{self, Debug};

use tracing::{debug, warn};

use crate::error::NavigationError;
use crate::route::{AnyRoute, Route};
use crate::screen::{AnyScreen, PlaceholderScreen, Screen};

type Factory = Box<dyn Fn(&AnyRoute) -> AnyScreen>;

/// Registry mapping route types to screen factories.
///
/// ```ignore
/// let router = Router::new()
///     .destination(|route: &Detail| AnyScreen::new(DetailScreen::new(route.id)))
///     .destination_with(|_: &Settings| SettingsScreen::default());
/// ```
#[derive(Default)]
pub struct Router {
    factories: BTreeMap<TypeId, Factory>,
}

impl Router {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for the route type `R`, consuming and returning
    /// the router for chaining.
    #[must_use]
    pub fn destination<R: Route>(mut self, factory: impl Fn(&R) -> AnyScreen + 'static) -> Self {
        self.register(factory);
        self
    }

    /// Registers a factory returning a concrete [`Screen`], wrapping it
    /// into an [`AnyScreen`] transparently.
    #[must_use]
    pub fn destination_with<R, S>(self, factory: impl Fn(&R) -> S + 'static) -> Self
    where
        R: Route,
        S: Screen,
    {
        self.destination(move |route: &R| AnyScreen::new(factory(route)))
    }

    /// Registers a factory for the route type `R` in place.
    ///
    /// Re-registering a type replaces the previous factory.
    pub fn register<R: Route>(&mut self, factory: impl Fn(&R) -> AnyScreen + 'static) {
        let previous = self.factories.insert(
            TypeId::of::<R>(),
            Box::new(move |route: &AnyRoute| {
                let concrete = route
                    .downcast_ref::<R>()
                    .expect("route payload does not match its registered type");
                factory(concrete)
            }),
        );
        if previous.is_some() {
            debug!(route_type = core::any::type_name::<R>(), "replaced destination");
        }
    }

    /// Returns `true` if a factory is registered for `R`.
    #[must_use]
    pub fn is_registered<R: Route>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<R>())
    }

    /// Resolves a screen instance for `route`.
    ///
    /// Unregistered route types degrade to a [`PlaceholderScreen`] with a
    /// warning; they never crash the host.
    #[must_use]
    pub fn resolve(&self, route: &AnyRoute) -> AnyScreen {
        self.try_resolve(route).unwrap_or_else(|_| {
            warn!(route = ?route, "no destination registered, presenting placeholder");
            AnyScreen::new(PlaceholderScreen)
        })
    }

    /// Resolves a screen instance, surfacing the failure for unregistered
    /// route types.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnregisteredRoute`] when no factory is
    /// registered for the route's runtime type.
    pub fn try_resolve(&self, route: &AnyRoute) -> Result<AnyScreen, NavigationError> {
        self.factories.get(&route.route_type()).map_or_else(
            || Err(NavigationError::UnregisteredRoute(route.type_name())),
            |factory| Ok(factory(route)),
        )
    }
}

impl Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("destinations", &self.factories.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Detail {
        id: u64,
    }

    crate::impl_route!(Detail);

    struct DetailScreen {
        label: String,
    }

    impl Screen for DetailScreen {
        fn title(&self) -> Option<String> {
            Some(self.label.clone())
        }
    }

    #[test]
    fn dispatches_by_route_type() {
        let router = Router::new()
            .destination_with(|route: &Detail| DetailScreen {
                label: alloc::format!("detail {}", route.id),
            })
            .destination_with(|route: &&'static str| DetailScreen {
                label: (*route).to_string(),
            });

        assert!(router.is_registered::<Detail>());
        assert!(router.is_registered::<&'static str>());
        assert!(!router.is_registered::<u64>());

        let screen = router.resolve(&AnyRoute::new(Detail { id: 3 }));
        assert_eq!(screen.title().as_deref(), Some("detail 3"));

        let screen = router.resolve(&AnyRoute::new("settings"));
        assert_eq!(screen.title().as_deref(), Some("settings"));
    }

    #[test]
    fn each_resolution_builds_a_fresh_instance() {
        let router =
            Router::new().destination_with(|_: &Detail| DetailScreen { label: String::new() });
        let route = AnyRoute::new(Detail { id: 1 });
        let first = router.resolve(&route);
        let second = router.resolve(&route);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn unregistered_routes_degrade_to_a_placeholder() {
        let router = Router::new();
        let route = AnyRoute::new(Detail { id: 9 });

        assert_eq!(
            router.try_resolve(&route),
            Err(NavigationError::UnregisteredRoute(
                core::any::type_name::<Detail>()
            ))
        );

        let screen = router.resolve(&route);
        assert_eq!(screen.title(), None);
    }

    #[test]
    fn reregistration_replaces_the_factory() {
        let mut router = Router::new();
        router.register(|_: &Detail| AnyScreen::new(DetailScreen { label: "old".into() }));
        router.register(|_: &Detail| AnyScreen::new(DetailScreen { label: "new".into() }));
        let screen = router.resolve(&AnyRoute::new(Detail { id: 0 }));
        assert_eq!(screen.title().as_deref(), Some("new"));
    }
}
