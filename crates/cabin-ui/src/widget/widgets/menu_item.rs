//! Menu items shown by the toolbar's overflow menu.
//!
//! A [`MenuItem`] is a plain value: the toolbar keeps a copy of the list it
//! was given and only inspects each item's [`DisplayBehavior`] to decide
//! whether the overflow button is needed.
//!
//! # Example
//!
//! ```
//! use cabin_ui::widget::widgets::{DisplayBehavior, MenuItem, MenuModel};
//!
//! let items = vec![
//!     MenuItem::new(1, "Search").with_display_behavior(DisplayBehavior::Always),
//!     MenuItem::new(2, "Settings").with_display_behavior(DisplayBehavior::Never),
//! ];
//!
//! let model = MenuModel::from(items);
//! assert!(model.requires_overflow());
//! assert_eq!(model.overflow_items().count(), 1);
//! ```

use crate::resource::Icon;

/// Where a menu item prefers to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayBehavior {
    /// Always shown as an action on the toolbar.
    Always,
    /// Shown on the toolbar when there is room (default).
    #[default]
    IfRoom,
    /// Only ever shown in the overflow menu.
    Never,
}

// ============================================================================
// MenuItem
// ============================================================================

/// A single entry of the toolbar menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    id: u32,
    title: String,
    icon: Option<Icon>,
    enabled: bool,
    checkable: bool,
    checked: bool,
    display_behavior: DisplayBehavior,
}

impl MenuItem {
    /// Create an enabled, non-checkable item with the given id and title.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            icon: None,
            enabled: true,
            checkable: false,
            checked: false,
            display_behavior: DisplayBehavior::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn display_behavior(&self) -> DisplayBehavior {
        self.display_behavior
    }

    /// True if this item can only appear in the overflow menu.
    #[inline]
    pub fn is_overflow_only(&self) -> bool {
        self.display_behavior == DisplayBehavior::Never
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set checkable state using builder pattern.
    ///
    /// Making an item non-checkable also clears its checked state.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        if !checkable {
            self.checked = false;
        }
        self
    }

    /// Set checked state using builder pattern.
    ///
    /// Only has effect if the item is checkable.
    pub fn with_checked(mut self, checked: bool) -> Self {
        if self.checkable {
            self.checked = checked;
        }
        self
    }

    /// Set the display behavior using builder pattern.
    pub fn with_display_behavior(mut self, behavior: DisplayBehavior) -> Self {
        self.display_behavior = behavior;
        self
    }
}

// ============================================================================
// MenuModel
// ============================================================================

/// An ordered list of menu items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuModel {
    items: Vec<MenuItem>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in the order they were supplied.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if at least one item can only be shown in the overflow menu.
    pub fn requires_overflow(&self) -> bool {
        self.items.iter().any(MenuItem::is_overflow_only)
    }

    /// Items that go into the overflow menu.
    pub fn overflow_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.is_overflow_only())
    }

    /// Items that may be shown as toolbar actions.
    pub fn action_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| !item.is_overflow_only())
    }

    /// Look up an item by id.
    pub fn find(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl From<Vec<MenuItem>> for MenuModel {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::drawables;

    #[test]
    fn test_menu_item_defaults() {
        let item = MenuItem::new(7, "Share");
        assert_eq!(item.id(), 7);
        assert_eq!(item.title(), "Share");
        assert!(item.icon().is_none());
        assert!(item.is_enabled());
        assert!(!item.is_checkable());
        assert!(!item.is_checked());
        assert_eq!(item.display_behavior(), DisplayBehavior::IfRoom);
        assert!(!item.is_overflow_only());
    }

    #[test]
    fn test_checked_requires_checkable() {
        let item = MenuItem::new(1, "Mute").with_checked(true);
        assert!(!item.is_checked());

        let item = MenuItem::new(1, "Mute").with_checkable(true).with_checked(true);
        assert!(item.is_checked());

        let item = item.with_checkable(false);
        assert!(!item.is_checked());
    }

    #[test]
    fn test_menu_item_icon() {
        let item = MenuItem::new(1, "More").with_icon(Icon::from_resource(drawables::MORE_VERT));
        assert_eq!(item.icon(), Some(&Icon::Resource(drawables::MORE_VERT)));
    }

    #[test]
    fn test_model_overflow() {
        let empty = MenuModel::new();
        assert!(empty.is_empty());
        assert!(!empty.requires_overflow());

        let model = MenuModel::from(vec![
            MenuItem::new(1, "A").with_display_behavior(DisplayBehavior::Always),
            MenuItem::new(2, "B"),
        ]);
        assert!(!model.requires_overflow());
        assert_eq!(model.action_items().count(), 2);

        let model = MenuModel::from(vec![
            MenuItem::new(1, "A"),
            MenuItem::new(2, "B").with_display_behavior(DisplayBehavior::Never),
            MenuItem::new(3, "C").with_display_behavior(DisplayBehavior::Never),
        ]);
        assert!(model.requires_overflow());
        let ids: Vec<u32> = model.overflow_items().map(MenuItem::id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(model.find(3).map(MenuItem::title), Some("C"));
        assert!(model.find(9).is_none());
    }
}
