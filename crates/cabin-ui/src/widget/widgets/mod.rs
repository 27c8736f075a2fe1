//! Widgets provided by Cabin UI.

pub mod car_toolbar;
mod menu_item;

pub use car_toolbar::{
    engine, CarToolbar, IntrinsicSizes, Measurement, PerSlot, Placement, Slot, SlotMargins,
    SlotMeasurer, SlotSet, SlotState, ToolbarHit,
};
pub use menu_item::{DisplayBehavior, MenuItem, MenuModel};
