//! Cabin UI: widgets for car head-unit interfaces.
//!
//! The main widget is [`CarToolbar`](widget::widgets::CarToolbar), a
//! fixed-height toolbar with a navigation button, a title icon, a stacked
//! title and subtitle, and an overflow menu button. It computes sizes and
//! child bounds; loading resources and drawing pixels are left to the host.
//!
//! # Crate layout
//!
//! - [`widget`]: geometry, the measure/layout protocol and the toolbar
//! - [`resource`]: the [`ResourceResolver`](resource::ResourceResolver) the
//!   host injects for string and style lookups
//! - [`config`]: toolbar dimensions, loadable from TOML
//!
//! Core types ([`Signal`], [`Property`], [`CabinError`]) are re-exported from
//! `cabin-ui-core`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cabin_ui::prelude::*;
//!
//! let toolbar = CarToolbar::new(Arc::new(ResourceTable::with_car_theme()));
//! toolbar.set_title(Some("Navigation"));
//! toolbar.layout_requested.connect(|_| println!("layout requested"));
//!
//! let sizes = IntrinsicSizes::new().with(Slot::Title, Size::new(160, 32));
//! let m = toolbar.measure(MeasureSpec::exactly(1280), MeasureSpec::unspecified(), &sizes);
//! assert_eq!(m.measured, Size::new(1280, 96));
//! ```

pub use cabin_ui_core::*;

pub mod config;
pub mod resource;
pub mod widget;

/// Commonly used types.
pub mod prelude {
    pub use crate::config::ToolbarConfig;
    pub use crate::resource::{Icon, ResourceResolver, ResourceTable, StringRes, StyleRes};
    pub use crate::widget::geometry::{Insets, Point, Rect, Size};
    pub use crate::widget::layout::MeasureSpec;
    pub use crate::widget::widgets::{
        CarToolbar, DisplayBehavior, IntrinsicSizes, MenuItem, Placement, Slot, SlotMargins,
        SlotMeasurer, ToolbarHit,
    };
    pub use cabin_ui_core::{CabinError, Property, Result, Signal};
}
