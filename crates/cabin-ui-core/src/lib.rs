//! Core systems for Cabin UI.
//!
//! This crate provides the foundational pieces shared by Cabin UI widgets:
//!
//! - **Errors**: [`CabinError`] and the crate [`Result`] alias
//! - **Signals**: type-safe notifications with [`Signal`]
//! - **Properties**: change-detecting values with [`Property`]
//! - **Logging**: tracing targets, span names and [`PerfSpan`]
//!
//! # Example
//!
//! ```
//! use cabin_ui_core::{Property, Signal};
//!
//! let width = Property::new(56);
//! let width_changed = Signal::<i32>::new();
//! width_changed.connect(|w| assert_eq!(*w, 112));
//!
//! if width.set(112) {
//!     width_changed.emit(112);
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CabinError, ResourceKind, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
