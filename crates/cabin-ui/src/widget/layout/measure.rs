//! Constrained measurement protocol.
//!
//! A parent measures a child by handing it one [`MeasureSpec`] per axis. The
//! child picks a size and the spec's [`MeasureMode`] decides how that choice
//! is clamped:
//!
//! | mode          | result of `resolve(desired)`     |
//! |---------------|----------------------------------|
//! | `Exactly`     | the spec size, always            |
//! | `AtMost`      | `min(desired, spec size)`        |
//! | `Unspecified` | `desired`                        |

/// How a [`MeasureSpec`] constrains the measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The child must be exactly the spec size.
    Exactly,
    /// The child may be as large as it wants up to the spec size.
    AtMost,
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
}

/// A size constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

/// The result of resolving a desired size against a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResolvedSize {
    /// The final size.
    pub size: i32,
    /// Set when an `AtMost` constraint clamped the desired size.
    pub too_small: bool,
}

impl MeasureSpec {
    /// Create a spec with an explicit mode.
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    /// The child must be exactly `size` pixels.
    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    /// The child may be up to `size` pixels.
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// No constraint.
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Resolve a desired size against this spec.
    pub fn resolve(&self, desired: i32) -> i32 {
        self.resolve_and_state(desired).size
    }

    /// Resolve a desired size, also reporting whether it had to be clamped.
    pub fn resolve_and_state(&self, desired: i32) -> ResolvedSize {
        match self.mode {
            MeasureMode::Exactly => ResolvedSize {
                size: self.size,
                too_small: false,
            },
            MeasureMode::AtMost if desired > self.size => ResolvedSize {
                size: self.size,
                too_small: true,
            },
            MeasureMode::AtMost | MeasureMode::Unspecified => ResolvedSize {
                size: desired,
                too_small: false,
            },
        }
    }

    /// Derive the spec for a wrap-content child after `used` pixels of this
    /// axis went to padding, margins and earlier siblings.
    pub fn child_spec(&self, used: i32) -> MeasureSpec {
        match self.mode {
            MeasureMode::Exactly | MeasureMode::AtMost => {
                MeasureSpec::at_most(self.size.saturating_sub(used).max(0))
            }
            MeasureMode::Unspecified => MeasureSpec::unspecified(),
        }
    }
}
