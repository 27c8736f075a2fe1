//! Host resource lookup.
//!
//! Widgets never load resources themselves. Anything configured by resource
//! id (localized strings, text appearances) goes through a
//! [`ResourceResolver`] injected at construction. Lookup failures are
//! returned to the caller unchanged.
//!
//! [`ResourceTable`] is an in-memory resolver for hosts that keep their
//! resources in a map, and for tests.
//!
//! ```
//! use cabin_ui::resource::{ResourceResolver, ResourceTable, StringRes};
//!
//! let table = ResourceTable::with_car_theme();
//! table.insert_text(StringRes(0x7f0e_0001), "Settings");
//! assert_eq!(table.text(StringRes(0x7f0e_0001)).unwrap(), "Settings");
//! assert!(table.text(StringRes(0x7f0e_0002)).is_err());
//! ```

use std::collections::HashMap;

use cabin_ui_core::logging::targets;
use cabin_ui_core::{CabinError, ResourceKind, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Identifier of a string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringRes(pub u32);

/// Identifier of a text appearance style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleRes(pub u32);

/// Identifier of a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableRes(pub u32);

/// Well-known text appearance ids of the car theme.
pub mod styles {
    use super::StyleRes;

    /// Primary toolbar title text.
    pub const CAR_BODY1_MEDIUM: StyleRes = StyleRes(0x7f13_0001);
    /// Secondary toolbar subtitle text.
    pub const CAR_BODY2: StyleRes = StyleRes(0x7f13_0002);
}

/// Well-known drawable ids of the car theme.
pub mod drawables {
    use super::DrawableRes;

    /// Back arrow used as the default navigation icon.
    pub const NAV_ARROW_BACK: DrawableRes = DrawableRes(0x7f08_0001);
    /// Vertical ellipsis used as the default overflow icon.
    pub const MORE_VERT: DrawableRes = DrawableRes(0x7f08_0002);
}

/// A reference to an image the host knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    /// A drawable from the host resource system.
    Resource(DrawableRes),
    /// A named icon from the active icon theme.
    Named(String),
}

impl Icon {
    /// Create an icon from a drawable id.
    pub fn from_resource(id: DrawableRes) -> Self {
        Self::Resource(id)
    }

    /// Create an icon from a theme icon name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Resolved text style. The host uses it when measuring and painting text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextAppearance {
    /// Font size in pixels.
    pub font_size: f32,
    /// CSS-style font weight (400 regular, 500 medium, 700 bold).
    pub font_weight: u16,
    /// Text color as 0xAARRGGBB.
    pub color: u32,
}

impl TextAppearance {
    /// Car theme primary body text, medium weight.
    pub const CAR_BODY1_MEDIUM: Self = Self {
        font_size: 32.0,
        font_weight: 500,
        color: 0xDEFF_FFFF,
    };

    /// Car theme secondary body text.
    pub const CAR_BODY2: Self = Self {
        font_size: 26.0,
        font_weight: 400,
        color: 0x99FF_FFFF,
    };
}

/// Lookup capability provided by the host resource system.
pub trait ResourceResolver: Send + Sync {
    /// Resolve a string resource.
    fn text(&self, id: StringRes) -> Result<String>;

    /// Resolve a text appearance style.
    fn text_appearance(&self, id: StyleRes) -> Result<TextAppearance>;
}

#[derive(Debug, Clone)]
enum ResourceValue {
    Text(String),
    Appearance(TextAppearance),
}

/// An in-memory [`ResourceResolver`].
#[derive(Debug, Default)]
pub struct ResourceTable {
    values: RwLock<HashMap<u32, ResourceValue>>,
}

impl ResourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the car theme's text appearances.
    pub fn with_car_theme() -> Self {
        let table = Self::new();
        table.insert_appearance(styles::CAR_BODY1_MEDIUM, TextAppearance::CAR_BODY1_MEDIUM);
        table.insert_appearance(styles::CAR_BODY2, TextAppearance::CAR_BODY2);
        table
    }

    /// Add or replace a string resource.
    pub fn insert_text(&self, id: StringRes, text: impl Into<String>) {
        self.values
            .write()
            .insert(id.0, ResourceValue::Text(text.into()));
    }

    /// Add or replace a text appearance.
    pub fn insert_appearance(&self, id: StyleRes, appearance: TextAppearance) {
        self.values
            .write()
            .insert(id.0, ResourceValue::Appearance(appearance));
    }

    /// Remove any resource with this raw id.
    pub fn remove(&self, id: u32) -> bool {
        self.values.write().remove(&id).is_some()
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the table holds no resources.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    fn lookup(&self, id: u32, kind: ResourceKind) -> Result<ResourceValue> {
        self.values.read().get(&id).cloned().ok_or_else(|| {
            tracing::debug!(target: targets::RESOURCE, id, %kind, "resource lookup failed");
            CabinError::resource_not_found(kind, id)
        })
    }
}

impl ResourceResolver for ResourceTable {
    fn text(&self, id: StringRes) -> Result<String> {
        match self.lookup(id.0, ResourceKind::String)? {
            ResourceValue::Text(text) => Ok(text),
            ResourceValue::Appearance(_) => Err(CabinError::ResourceType {
                id: id.0,
                expected: ResourceKind::String,
            }),
        }
    }

    fn text_appearance(&self, id: StyleRes) -> Result<TextAppearance> {
        match self.lookup(id.0, ResourceKind::Style)? {
            ResourceValue::Appearance(appearance) => Ok(appearance),
            ResourceValue::Text(_) => Err(CabinError::ResourceType {
                id: id.0,
                expected: ResourceKind::Style,
            }),
        }
    }
}
