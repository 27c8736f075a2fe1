//! Measurement and layout infrastructure.
//!
//! - [`MeasureSpec`] / [`MeasureMode`]: the constrained measurement protocol
//! - [`LayoutInvalidator`]: dirty tracking between setter calls and passes
//!
//! Layout runs in two passes. The measure pass walks children bottom-up and
//! produces a desired size that honors the parent's specs; the layout pass
//! receives the final bounds and positions every visible child.

mod invalidation;
mod measure;

pub use invalidation::{LayoutInvalidator, LayoutPhase};
pub use measure::{MeasureMode, MeasureSpec, ResolvedSize};
