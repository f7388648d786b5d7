//! Error taxonomy for the navigation engine.
//!
//! Every failure here is locally recoverable: configuration errors degrade
//! to a placeholder screen, invariant violations are logged and ignored,
//! bounds errors are silent no-ops, and superseded animation completions
//! are skipped via the generation counter. The variants exist for the
//! `try_`-style entry points that surface the failure to the caller
//! instead of degrading.

use thiserror::Error;

/// Errors produced by routers, navigators and controllers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NavigationError {
    /// No factory is registered for the route's runtime type.
    #[error("no destination registered for route type `{0}`")]
    UnregisteredRoute(&'static str),

    /// A screen instance is already mounted in this controller.
    #[error("screen instance is already mounted in this controller")]
    ScreenAlreadyMounted,

    /// An operation was invoked with an empty batch of routes.
    #[error("cannot apply an empty batch of routes")]
    EmptyBatch,

    /// An index-addressed operation was out of range.
    #[error("index {index} out of bounds for route list of length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The list length at the time of the operation.
        len: usize,
    },

    /// An animation completion fired after a newer reconciliation started.
    #[error("transition superseded by a newer reconciliation pass")]
    Superseded,
}
