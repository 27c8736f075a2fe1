//! Layout invalidation and deferred recalculation.
//!
//! Widgets never lay themselves out from inside a setter. A setter marks the
//! widget dirty through a [`LayoutInvalidator`]; the host notices the request
//! and runs one measure pass and one layout pass before the next paint.

use cabin_ui_core::logging::targets;

/// Which pass a widget is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPhase {
    /// A setter changed something; both passes must run.
    #[default]
    NeedsMeasure,
    /// Measured but not yet laid out.
    NeedsLayout,
    /// Measured and laid out with current state.
    Clean,
}

/// Per-widget dirty tracking.
///
/// Every invalidation bumps a generation counter so tests and hosts can see
/// how many layout requests a sequence of setters produced.
#[derive(Debug, Default)]
pub struct LayoutInvalidator {
    phase: LayoutPhase,
    generation: u64,
    suspended: bool,
    deferred: bool,
}

impl LayoutInvalidator {
    /// Create a new invalidator. New widgets start dirty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fresh measure and layout pass.
    ///
    /// Returns `true` if the request took effect now, `false` if it was
    /// deferred because invalidation is suspended.
    pub fn invalidate(&mut self, reason: &'static str) -> bool {
        if self.suspended {
            self.deferred = true;
            return false;
        }
        self.phase = LayoutPhase::NeedsMeasure;
        self.generation += 1;
        tracing::trace!(target: targets::WIDGET, reason, generation = self.generation, "layout requested");
        true
    }

    /// Record a completed measure pass.
    pub fn mark_measured(&mut self) {
        self.phase = LayoutPhase::NeedsLayout;
    }

    /// Record a completed layout pass.
    pub fn mark_laid_out(&mut self) {
        self.phase = LayoutPhase::Clean;
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Check if any pass is outstanding.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.phase != LayoutPhase::Clean
    }

    /// Number of layout requests so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Suspend invalidation while applying a batch of setters.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume invalidation, applying one request if any were deferred.
    ///
    /// Returns `true` if a deferred request was applied.
    pub fn resume(&mut self) -> bool {
        self.suspended = false;
        if std::mem::take(&mut self.deferred) {
            self.invalidate("deferred")
        } else {
            false
        }
    }

    /// Check if invalidation is currently suspended.
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}
