//! Helper macros shared across the workspace.

/// Implements [`Route`](crate::route::Route) for one or more types.
///
/// The types must already be `Debug + Eq + Hash + 'static`:
///
/// ```ignore
/// impl_route!(MyRoute, OtherRoute);
/// ```
#[macro_export]
macro_rules! impl_route {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::route::Route for $ty {})*
    };
}

/// Implements `Deref` and `DerefMut` for transparent access to an inner type.
///
/// Used by the navigator variants to expose the shared navigator surface
/// through a newtype.
#[macro_export]
macro_rules! impl_deref {
    ($ty:ty, $target:ty) => {
        impl core::ops::Deref for $ty {
            type Target = $target;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl core::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}
