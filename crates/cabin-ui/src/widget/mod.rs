//! Widget geometry, the measurement protocol, and the widgets themselves.
//!
//! Layout happens in two passes driven by the host:
//!
//! 1. **Measure**: the parent hands each widget a width and a height
//!    [`MeasureSpec`](layout::MeasureSpec) and the widget reports the size
//!    it wants.
//! 2. **Layout**: the parent assigns final bounds and the widget places its
//!    children inside them.
//!
//! Setters never run either pass. They mark the widget dirty through a
//! [`LayoutInvalidator`](layout::LayoutInvalidator) and the host runs both
//! passes before the next paint.

pub mod geometry;
pub mod layout;
pub mod widgets;

pub use geometry::{Insets, Point, Rect, Size};
pub use layout::{MeasureMode, MeasureSpec};
