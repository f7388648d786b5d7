//! Geometry value types used at the host boundary.

/// A width/height pair in host points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is not strictly positive.
    ///
    /// A degenerate size is what a screen reports before it has laid out
    /// any content; callers substitute a fallback in that case.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A horizontal translation applied to a mounted surface.
///
/// Slide transitions only ever move surfaces along the leading/trailing
/// axis, so the transform is a single offset: negative values move toward
/// the leading edge, positive toward the trailing edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Horizontal offset in host points.
    pub tx: f64,
}

impl Transform {
    /// The resting transform.
    pub const IDENTITY: Self = Self { tx: 0.0 };

    /// Creates a horizontal translation.
    #[must_use]
    pub const fn translation(tx: f64) -> Self {
        Self { tx }
    }

    /// Returns `true` when this is the resting transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.tx == 0.0
    }

    /// Linearly interpolates toward `to`.
    ///
    /// Hosts whose rendering layer has no queryable in-flight value can
    /// combine this with [`Timing::progress`](crate::animation::Timing::progress)
    /// to estimate the currently rendered transform of a running slide.
    #[must_use]
    pub fn interpolated(self, to: Self, progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            tx: self.tx + (to.tx - self.tx) * progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(0.0, 120.0).is_degenerate());
        assert!(Size::new(400.0, -1.0).is_degenerate());
        assert!(!Size::new(400.0, 300.0).is_degenerate());
    }

    #[test]
    fn interpolation_is_clamped_and_exact_at_endpoints() {
        let from = Transform::translation(640.0);
        let to = Transform::IDENTITY;
        assert_eq!(from.interpolated(to, 0.0), from);
        assert_eq!(from.interpolated(to, 1.0), to);
        assert_eq!(from.interpolated(to, 0.5), Transform::translation(320.0));
        assert_eq!(from.interpolated(to, 2.0), to);
        assert_eq!(from.interpolated(to, -1.0), from);
    }
}
