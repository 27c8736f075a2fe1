//! Car toolbar widget.
//!
//! [`CarToolbar`] is a fixed-height horizontal bar with up to five regions:
//! a navigation button, a title icon, a title with an optional subtitle
//! stacked below it, and an overflow menu button at the end edge.
//!
//! The widget owns the content and configuration. Sizing and placement are
//! delegated to the pure functions in [`engine`]; the host supplies child
//! measurements through a [`SlotMeasurer`] and draws whatever the returned
//! [`Placement`] says.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cabin_ui::resource::ResourceTable;
//! use cabin_ui::widget::geometry::Size;
//! use cabin_ui::widget::layout::MeasureSpec;
//! use cabin_ui::widget::widgets::{CarToolbar, DisplayBehavior, IntrinsicSizes, MenuItem, Slot};
//!
//! let toolbar = CarToolbar::new(Arc::new(ResourceTable::with_car_theme()));
//! toolbar.set_title(Some("Settings"));
//! toolbar.set_menu_items(Some(vec![
//!     MenuItem::new(1, "Help").with_display_behavior(DisplayBehavior::Never),
//! ]));
//!
//! let sizes = IntrinsicSizes::new().with(Slot::Title, Size::new(120, 32));
//! let measurement = toolbar.measure(MeasureSpec::at_most(800), MeasureSpec::unspecified(), &sizes);
//! let placement = toolbar.layout(measurement.measured).unwrap();
//!
//! assert!(placement.bounds(Slot::Overflow).is_some());
//! assert!(placement.bounds(Slot::TitleIcon).is_none());
//! ```
//!
//! # Signals
//!
//! - `layout_requested`: a setter invalidated the current layout
//! - `title_changed` / `subtitle_changed`: the text actually changed
//! - `menu_items_changed`: the menu list actually changed
//! - `navigation_clicked`: a click landed in the navigation touch target
//! - `overflow_requested`: the overflow button was clicked, with the
//!   overflow-only items

pub mod engine;
pub mod slot;

use std::sync::Arc;

use cabin_ui_core::logging::targets;
use cabin_ui_core::{CabinError, ConnectionId, Property, Result, Signal};
use parking_lot::{Mutex, RwLock};

pub use engine::{Measurement, Placement};
pub use slot::{IntrinsicSizes, PerSlot, Slot, SlotMargins, SlotMeasurer, SlotSet, SlotState};

use super::menu_item::{MenuItem, MenuModel};
use crate::config::ToolbarConfig;
use crate::resource::{drawables, Icon, ResourceResolver, StringRes, StyleRes, TextAppearance};
use crate::widget::geometry::{Insets, Point, Size};
use crate::widget::layout::{LayoutInvalidator, LayoutPhase, MeasureSpec};

// ============================================================================
// ToolbarHit
// ============================================================================

/// What a click on the toolbar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarHit {
    /// The navigation button's touch target.
    Navigation,
    /// The overflow menu button.
    Overflow,
    /// Anything else, or the toolbar has not been laid out yet.
    Nothing,
}

// ============================================================================
// CarToolbar
// ============================================================================

#[derive(Debug, Default)]
struct LayoutState {
    invalidator: LayoutInvalidator,
    measurement: Option<Measurement>,
    placement: Option<Placement>,
}

/// A fixed-height toolbar for car head units.
///
/// All setters take `&self`; state lives behind `parking_lot` locks so the
/// toolbar can be shared with signal handlers. Every setter requests a fresh
/// measure and layout pass, and content setters emit their change signal
/// only when the stored value actually changed.
pub struct CarToolbar {
    resolver: Arc<dyn ResourceResolver>,
    config: RwLock<ToolbarConfig>,
    margins: RwLock<PerSlot<SlotMargins>>,

    navigation_icon: Property<Option<Icon>>,
    navigation_handler: Mutex<Option<ConnectionId>>,
    title_icon: Property<Option<Icon>>,
    title: Property<Option<String>>,
    title_appearance: Property<TextAppearance>,
    subtitle: Property<Option<String>>,
    subtitle_appearance: Property<TextAppearance>,
    overflow_icon: Property<Icon>,
    menu: Property<Option<MenuModel>>,

    layout: Mutex<LayoutState>,

    /// Emitted when a setter invalidated the layout.
    pub layout_requested: Signal<()>,
    /// Emitted with the new title when it changes.
    pub title_changed: Signal<Option<String>>,
    /// Emitted with the new subtitle when it changes.
    pub subtitle_changed: Signal<Option<String>>,
    /// Emitted with the new menu list when it changes.
    pub menu_items_changed: Signal<Option<Vec<MenuItem>>>,
    /// Emitted when the navigation button is clicked.
    pub navigation_clicked: Signal<()>,
    /// Emitted with the overflow-only items when the overflow button is clicked.
    pub overflow_requested: Signal<Vec<MenuItem>>,
}

impl CarToolbar {
    /// Create a toolbar with the default car theme dimensions.
    ///
    /// The navigation button shows a back arrow, the title icon is hidden,
    /// there is no title or subtitle and no menu.
    pub fn new(resolver: Arc<dyn ResourceResolver>) -> Self {
        Self {
            resolver,
            config: RwLock::new(ToolbarConfig::default()),
            margins: RwLock::new(PerSlot::default()),
            navigation_icon: Property::new(Some(Icon::from_resource(drawables::NAV_ARROW_BACK))),
            navigation_handler: Mutex::new(None),
            title_icon: Property::new(None),
            title: Property::new(None),
            title_appearance: Property::new(TextAppearance::CAR_BODY1_MEDIUM),
            subtitle: Property::new(None),
            subtitle_appearance: Property::new(TextAppearance::CAR_BODY2),
            overflow_icon: Property::new(Icon::from_resource(drawables::MORE_VERT)),
            menu: Property::new(None),
            layout: Mutex::new(LayoutState::default()),
            layout_requested: Signal::new(),
            title_changed: Signal::new(),
            subtitle_changed: Signal::new(),
            menu_items_changed: Signal::new(),
            navigation_clicked: Signal::new(),
            overflow_requested: Signal::new(),
        }
    }

    /// Create a toolbar with custom dimensions.
    ///
    /// Fails if the config does not validate.
    pub fn with_config(config: ToolbarConfig, resolver: Arc<dyn ResourceResolver>) -> Result<Self> {
        config.validate()?;
        let toolbar = Self::new(resolver);
        *toolbar.config.write() = config;
        Ok(toolbar)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The navigation icon, or `None` if the button is hidden.
    pub fn navigation_icon(&self) -> Option<Icon> {
        self.navigation_icon.get()
    }

    /// Set the navigation icon. `None` hides the navigation button.
    pub fn set_navigation_icon(&self, icon: Option<Icon>) {
        self.navigation_icon.set(icon);
        self.request_layout("navigation icon");
    }

    /// Install the navigation click handler, replacing any previous one.
    ///
    /// The handler is connected to [`navigation_clicked`](Self::navigation_clicked);
    /// other connections on that signal are left alone.
    pub fn set_navigation_on_click<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.navigation_clicked.connect(move |_| handler());
        if let Some(previous) = self.navigation_handler.lock().replace(id) {
            self.navigation_clicked.disconnect(previous);
        }
    }

    /// Remove the handler installed by [`set_navigation_on_click`](Self::set_navigation_on_click).
    pub fn clear_navigation_on_click(&self) {
        if let Some(previous) = self.navigation_handler.lock().take() {
            self.navigation_clicked.disconnect(previous);
        }
    }

    /// Set the container width shared by the navigation and overflow buttons.
    pub fn set_navigation_icon_container_width(&self, width: i32) -> Result<()> {
        self.update_config("edge container width", |config| {
            config.edge_container_width = width;
        })
    }

    // =========================================================================
    // Title icon
    // =========================================================================

    /// The title icon, or `None` if it is hidden.
    pub fn title_icon(&self) -> Option<Icon> {
        self.title_icon.get()
    }

    /// Set the title icon. `None` hides it.
    pub fn set_title_icon(&self, icon: Option<Icon>) {
        self.title_icon.set(icon);
        self.request_layout("title icon");
    }

    /// Set the square size the title icon is measured at.
    pub fn set_title_icon_size(&self, size: i32) -> Result<()> {
        self.update_config("title icon size", |config| {
            config.title_icon_size = size;
        })
    }

    // =========================================================================
    // Title and subtitle
    // =========================================================================

    /// The title exactly as last set.
    pub fn title(&self) -> Option<String> {
        self.title.get()
    }

    /// Set the title. `None` or an empty string hides the title row.
    pub fn set_title(&self, title: Option<&str>) {
        let title = title.map(str::to_owned);
        if self.title.set(title.clone()) {
            self.title_changed.emit(title);
        }
        self.request_layout("title");
    }

    /// Set the title from a string resource.
    ///
    /// A failed lookup is returned unchanged and leaves the title as it was.
    pub fn set_title_res(&self, id: StringRes) -> Result<()> {
        let text = self.resolver.text(id)?;
        self.set_title(Some(&text));
        Ok(())
    }

    /// The resolved title text style.
    pub fn title_text_appearance(&self) -> TextAppearance {
        self.title_appearance.get()
    }

    /// Resolve and apply the title text style.
    pub fn set_title_text_appearance(&self, id: StyleRes) -> Result<()> {
        let appearance = self.resolver.text_appearance(id)?;
        self.title_appearance.set(appearance);
        self.request_layout("title appearance");
        Ok(())
    }

    /// The subtitle exactly as last set.
    pub fn subtitle(&self) -> Option<String> {
        self.subtitle.get()
    }

    /// Set the subtitle. `None` or an empty string hides the subtitle row.
    pub fn set_subtitle(&self, subtitle: Option<&str>) {
        let subtitle = subtitle.map(str::to_owned);
        if self.subtitle.set(subtitle.clone()) {
            self.subtitle_changed.emit(subtitle);
        }
        self.request_layout("subtitle");
    }

    /// Set the subtitle from a string resource.
    pub fn set_subtitle_res(&self, id: StringRes) -> Result<()> {
        let text = self.resolver.text(id)?;
        self.set_subtitle(Some(&text));
        Ok(())
    }

    /// The resolved subtitle text style.
    pub fn subtitle_text_appearance(&self) -> TextAppearance {
        self.subtitle_appearance.get()
    }

    /// Resolve and apply the subtitle text style.
    pub fn set_subtitle_text_appearance(&self, id: StyleRes) -> Result<()> {
        let appearance = self.resolver.text_appearance(id)?;
        self.subtitle_appearance.set(appearance);
        self.request_layout("subtitle appearance");
        Ok(())
    }

    // =========================================================================
    // Overflow menu
    // =========================================================================

    /// The icon drawn on the overflow button.
    pub fn overflow_icon(&self) -> Icon {
        self.overflow_icon.get()
    }

    /// Set the icon drawn on the overflow button.
    pub fn set_overflow_icon(&self, icon: Icon) {
        self.overflow_icon.set(icon);
        self.request_layout("overflow icon");
    }

    /// The menu items as last set, or `None` if none were set.
    pub fn menu_items(&self) -> Option<Vec<MenuItem>> {
        self.menu
            .with(|menu| menu.as_ref().map(|menu| menu.items().to_vec()))
    }

    /// Replace the menu.
    ///
    /// The overflow button is shown iff at least one item is
    /// [`DisplayBehavior::Never`](super::DisplayBehavior::Never). `None`
    /// lays out like an empty list but reads back as `None`.
    pub fn set_menu_items(&self, items: Option<Vec<MenuItem>>) {
        let model = items.map(MenuModel::from);
        let requires_overflow = model.as_ref().is_some_and(MenuModel::requires_overflow);
        let items = model.as_ref().map(|model| model.items().to_vec());

        if self.menu.set(model) {
            let count = items.as_ref().map_or(0, Vec::len);
            tracing::debug!(target: targets::WIDGET, count, requires_overflow, "menu items changed");
            self.menu_items_changed.emit(items);
        }
        self.request_layout("menu items");
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// The current toolbar dimensions.
    pub fn config(&self) -> ToolbarConfig {
        *self.config.read()
    }

    /// Replace every dimension at once.
    pub fn set_config(&self, config: ToolbarConfig) -> Result<()> {
        config.validate()?;
        *self.config.write() = config;
        self.request_layout("config");
        Ok(())
    }

    /// Set the toolbar padding.
    pub fn set_padding(&self, padding: Insets) -> Result<()> {
        self.update_config("padding", |config| {
            config.padding = padding;
        })
    }

    /// The horizontal margins around one slot.
    pub fn slot_margins(&self, slot: Slot) -> SlotMargins {
        self.margins.read()[slot]
    }

    /// Set the horizontal margins around one slot.
    pub fn set_slot_margins(&self, slot: Slot, margins: SlotMargins) {
        self.margins.write()[slot] = margins;
        self.request_layout("slot margins");
    }

    /// Check whether a slot takes part in layout with the current content.
    pub fn is_slot_visible(&self, slot: Slot) -> bool {
        match slot {
            Slot::Navigation => self.navigation_icon.with(Option::is_some),
            Slot::TitleIcon => self.title_icon.with(Option::is_some),
            Slot::Title => self.title.with(|title| has_text(title.as_deref())),
            Slot::Subtitle => self.subtitle.with(|subtitle| has_text(subtitle.as_deref())),
            Slot::Overflow => self
                .menu
                .with(|menu| menu.as_ref().is_some_and(MenuModel::requires_overflow)),
        }
    }

    /// Visibility and margins of every slot, as the engine sees them.
    pub fn slots(&self) -> SlotSet {
        let margins = *self.margins.read();
        SlotSet::from_fn(|slot| SlotState {
            visible: self.is_slot_visible(slot),
            margins: margins[slot],
        })
    }

    // =========================================================================
    // Layout passes
    // =========================================================================

    /// Run a measure pass with the parent's constraints.
    ///
    /// If a setter runs while the measurer is active, the result is returned
    /// but not kept, and [`layout`](Self::layout) fails until the toolbar is
    /// measured again.
    pub fn measure<M>(
        &self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        measurer: &M,
    ) -> Measurement
    where
        M: SlotMeasurer + ?Sized,
    {
        let generation = self.layout.lock().invalidator.generation();
        let config = self.config();
        let slots = self.slots();

        // The measurer is host code; run it without holding our locks.
        let measurement = engine::measure(&config, &slots, measurer, width_spec, height_spec);

        let mut state = self.layout.lock();
        if state.invalidator.generation() == generation {
            state.measurement = Some(measurement);
            state.invalidator.mark_measured();
        } else {
            tracing::debug!(target: targets::LAYOUT, "toolbar changed while measuring, result discarded");
        }
        measurement
    }

    /// Place the visible slots inside bounds of `size`.
    ///
    /// Fails with [`CabinError::LayoutNotMeasured`] if no measure pass has
    /// run since the last invalidation.
    pub fn layout(&self, size: Size) -> Result<Placement> {
        let config = self.config();
        let slots = self.slots();

        let mut state = self.layout.lock();
        let measurement = state.measurement.ok_or(CabinError::LayoutNotMeasured)?;
        let placement = engine::layout(&config, &slots, &measurement, size);

        state.placement = Some(placement);
        if state.invalidator.phase() == LayoutPhase::NeedsLayout {
            state.invalidator.mark_laid_out();
        }
        Ok(placement)
    }

    /// True until both passes have run with the current state.
    pub fn needs_layout(&self) -> bool {
        self.layout.lock().invalidator.is_dirty()
    }

    /// Number of layout requests made so far.
    pub fn layout_generation(&self) -> u64 {
        self.layout.lock().invalidator.generation()
    }

    /// The result of the last measure pass, if still valid.
    pub fn last_measurement(&self) -> Option<Measurement> {
        self.layout.lock().measurement
    }

    /// The result of the last layout pass. Kept after invalidation so clicks
    /// can still be routed against what is on screen.
    pub fn last_placement(&self) -> Option<Placement> {
        self.layout.lock().placement
    }

    /// Apply several setters while requesting layout at most once.
    ///
    /// Invalidation resumes even if `f` panics.
    pub fn batch_update<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        self.layout.lock().invalidator.suspend();
        let _resume = ResumeOnDrop(self);
        f(self)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a click in toolbar-local coordinates.
    pub fn handle_click(&self, point: Point) -> ToolbarHit {
        let Some(placement) = self.last_placement() else {
            return ToolbarHit::Nothing;
        };

        if placement
            .navigation_touch_bounds()
            .is_some_and(|touch| touch.contains(point))
        {
            tracing::trace!(target: targets::WIDGET, x = point.x, y = point.y, "navigation clicked");
            self.navigation_clicked.emit(());
            return ToolbarHit::Navigation;
        }

        if placement
            .bounds(Slot::Overflow)
            .is_some_and(|bounds| bounds.contains(point))
        {
            let items: Vec<MenuItem> = self
                .menu
                .with(|menu| menu.iter().flat_map(|menu| menu.overflow_items()).cloned().collect());
            tracing::trace!(target: targets::WIDGET, count = items.len(), "overflow requested");
            self.overflow_requested.emit(items);
            return ToolbarHit::Overflow;
        }

        ToolbarHit::Nothing
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn update_config(&self, reason: &'static str, f: impl FnOnce(&mut ToolbarConfig)) -> Result<()> {
        let mut config = self.config();
        f(&mut config);
        config.validate()?;
        *self.config.write() = config;
        self.request_layout(reason);
        Ok(())
    }

    fn request_layout(&self, reason: &'static str) {
        let requested = self.layout.lock().invalidator.invalidate(reason);
        if requested {
            self.after_invalidate();
        }
    }

    fn after_invalidate(&self) {
        self.layout.lock().measurement = None;
        self.layout_requested.emit(());
    }
}

struct ResumeOnDrop<'a>(&'a CarToolbar);

impl Drop for ResumeOnDrop<'_> {
    fn drop(&mut self) {
        let resumed = self.0.layout.lock().invalidator.resume();
        if resumed {
            self.0.after_invalidate();
        }
    }
}

fn has_text(text: Option<&str>) -> bool {
    text.is_some_and(|text| !text.is_empty())
}

impl std::fmt::Debug for CarToolbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarToolbar")
            .field("config", &self.config())
            .field("title", &self.title())
            .field("subtitle", &self.subtitle())
            .field("menu_items", &self.menu.with(|menu| menu.as_ref().map_or(0, MenuModel::len)))
            .field("needs_layout", &self.needs_layout())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(CarToolbar: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::resource::{styles, ResourceTable};
    use crate::widget::widgets::DisplayBehavior;

    const SETTINGS: StringRes = StringRes(0x7f0e_0001);

    fn toolbar() -> CarToolbar {
        let table = ResourceTable::with_car_theme();
        table.insert_text(SETTINGS, "Settings");
        CarToolbar::new(Arc::new(table))
    }

    fn counter(signal: &Signal<()>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        signal.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    fn laid_out(toolbar: &CarToolbar, sizes: &IntrinsicSizes) -> Placement {
        let m = toolbar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified(), sizes);
        toolbar.layout(m.measured).unwrap()
    }

    #[test]
    fn test_defaults() {
        let toolbar = toolbar();
        assert_eq!(
            toolbar.navigation_icon(),
            Some(Icon::from_resource(drawables::NAV_ARROW_BACK))
        );
        assert_eq!(toolbar.overflow_icon(), Icon::from_resource(drawables::MORE_VERT));
        assert_eq!(toolbar.title_text_appearance(), TextAppearance::CAR_BODY1_MEDIUM);
        assert_eq!(toolbar.subtitle_text_appearance(), TextAppearance::CAR_BODY2);
        assert!(toolbar.title().is_none());
        assert!(toolbar.menu_items().is_none());
        assert!(toolbar.needs_layout());

        assert!(toolbar.is_slot_visible(Slot::Navigation));
        assert!(!toolbar.is_slot_visible(Slot::TitleIcon));
        assert!(!toolbar.is_slot_visible(Slot::Title));
        assert!(!toolbar.is_slot_visible(Slot::Overflow));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = ToolbarConfig::default().with_toolbar_height(-1);
        let result = CarToolbar::with_config(config, Arc::new(ResourceTable::new()));
        assert!(matches!(result, Err(CabinError::Config(_))));
    }

    #[test]
    fn test_title_round_trip() {
        let toolbar = toolbar();
        toolbar.set_title(Some("Media"));
        assert_eq!(toolbar.title().as_deref(), Some("Media"));
        assert!(toolbar.is_slot_visible(Slot::Title));

        toolbar.set_title(Some(""));
        assert_eq!(toolbar.title().as_deref(), Some(""));
        assert!(!toolbar.is_slot_visible(Slot::Title));

        toolbar.set_title(None);
        assert!(toolbar.title().is_none());
    }

    #[test]
    fn test_title_changed_only_on_change() {
        let toolbar = toolbar();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        toolbar.title_changed.connect(move |title| s.lock().push(title.clone()));
        let requests = counter(&toolbar.layout_requested);

        toolbar.set_title(Some("Radio"));
        toolbar.set_title(Some("Radio"));
        toolbar.set_title(None);

        assert_eq!(*seen.lock(), vec![Some("Radio".to_string()), None]);
        // Unchanged values still request layout.
        assert_eq!(requests.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_title_res() {
        let toolbar = toolbar();
        toolbar.set_title_res(SETTINGS).unwrap();
        assert_eq!(toolbar.title().as_deref(), Some("Settings"));
    }

    #[test]
    fn test_title_res_failure_keeps_title() {
        let toolbar = toolbar();
        toolbar.set_title(Some("Phone"));

        let err = toolbar.set_title_res(StringRes(0x7f0e_00ff)).unwrap_err();
        assert!(err.is_resource_error());
        assert_eq!(toolbar.title().as_deref(), Some("Phone"));
    }

    #[test]
    fn test_subtitle_res_and_appearance() {
        let toolbar = toolbar();
        toolbar.set_subtitle_res(SETTINGS).unwrap();
        assert_eq!(toolbar.subtitle().as_deref(), Some("Settings"));

        toolbar.set_subtitle_text_appearance(styles::CAR_BODY1_MEDIUM).unwrap();
        assert_eq!(toolbar.subtitle_text_appearance(), TextAppearance::CAR_BODY1_MEDIUM);

        let err = toolbar.set_title_text_appearance(StyleRes(SETTINGS.0)).unwrap_err();
        assert!(matches!(err, CabinError::ResourceType { .. }));
        assert_eq!(toolbar.title_text_appearance(), TextAppearance::CAR_BODY1_MEDIUM);
    }

    #[test]
    fn test_menu_items_drive_overflow() {
        let toolbar = toolbar();
        toolbar.set_menu_items(Some(vec![
            MenuItem::new(1, "Search").with_display_behavior(DisplayBehavior::Always),
        ]));
        assert!(!toolbar.is_slot_visible(Slot::Overflow));

        toolbar.set_menu_items(Some(vec![
            MenuItem::new(1, "Search"),
            MenuItem::new(2, "Help").with_display_behavior(DisplayBehavior::Never),
        ]));
        assert!(toolbar.is_slot_visible(Slot::Overflow));
        assert_eq!(toolbar.menu_items().map(|items| items.len()), Some(2));

        toolbar.set_menu_items(Some(Vec::new()));
        assert!(!toolbar.is_slot_visible(Slot::Overflow));
        assert_eq!(toolbar.menu_items(), Some(Vec::new()));

        toolbar.set_menu_items(None);
        assert!(!toolbar.is_slot_visible(Slot::Overflow));
        assert_eq!(toolbar.menu_items(), None);
    }

    #[test]
    fn test_menu_none_and_empty_are_distinct_changes() {
        let toolbar = toolbar();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        toolbar.menu_items_changed.connect(move |items| s.lock().push(items.clone()));

        toolbar.set_menu_items(None);
        toolbar.set_menu_items(Some(Vec::new()));
        toolbar.set_menu_items(None);

        assert_eq!(*seen.lock(), vec![Some(Vec::new()), None]);
    }

    #[test]
    fn test_layout_requires_measure() {
        let toolbar = toolbar();
        assert!(matches!(
            toolbar.layout(Size::new(100, 96)),
            Err(CabinError::LayoutNotMeasured)
        ));

        let sizes = IntrinsicSizes::new();
        toolbar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified(), &sizes);
        toolbar.set_title(Some("Maps"));
        assert!(toolbar.last_measurement().is_none());
        assert!(matches!(
            toolbar.layout(Size::new(100, 96)),
            Err(CabinError::LayoutNotMeasured)
        ));
    }

    #[test]
    fn test_passes_clear_dirty_state() {
        let toolbar = toolbar();
        let sizes = IntrinsicSizes::new();

        let m = toolbar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified(), &sizes);
        assert!(toolbar.needs_layout());
        toolbar.layout(m.measured).unwrap();
        assert!(!toolbar.needs_layout());
        assert!(toolbar.last_placement().is_some());

        toolbar.set_navigation_icon(None);
        assert!(toolbar.needs_layout());
        assert!(toolbar.last_placement().is_some());
    }

    #[test]
    fn test_dimension_setters() {
        let toolbar = toolbar();
        toolbar.set_navigation_icon_container_width(56).unwrap();
        toolbar.set_title_icon_size(40).unwrap();
        toolbar.set_padding(Insets::symmetric(8, 0)).unwrap();

        let config = toolbar.config();
        assert_eq!(config.edge_container_width, 56);
        assert_eq!(config.title_icon_size, 40);
        assert_eq!(config.padding.horizontal(), 16);

        assert!(toolbar.set_title_icon_size(-4).is_err());
        assert_eq!(toolbar.config().title_icon_size, 40);

        assert!(toolbar.set_navigation_icon_container_width(i32::MAX).is_err());
        assert_eq!(toolbar.config().edge_container_width, 56);
    }

    #[test]
    fn test_slot_margins_reach_engine() {
        let toolbar = toolbar();
        toolbar.set_slot_margins(Slot::Navigation, SlotMargins::new(4, 4));
        assert_eq!(toolbar.slot_margins(Slot::Navigation), SlotMargins::new(4, 4));

        let m = toolbar.measure(
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
            &IntrinsicSizes::new(),
        );
        assert_eq!(m.contribution(Slot::Navigation), 112 + 8);
    }

    #[test]
    fn test_batch_update_requests_once() {
        let toolbar = toolbar();
        let requests = counter(&toolbar.layout_requested);
        let before = toolbar.layout_generation();

        toolbar.batch_update(|t| {
            t.set_title(Some("Climate"));
            t.set_subtitle(Some("Driver"));
            t.set_title_icon(Some(Icon::named("thermostat")));
        });

        assert_eq!(requests.load(Ordering::SeqCst), 1);
        assert_eq!(toolbar.layout_generation(), before + 1);
        assert!(toolbar.is_slot_visible(Slot::Subtitle));
    }

    #[test]
    fn test_batch_update_resumes_after_panic() {
        let toolbar = toolbar();
        let before = toolbar.layout_generation();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            toolbar.batch_update(|t| {
                t.set_title(Some("Climate"));
                if t.title().is_some() {
                    panic!("host callback failed");
                }
            })
        }));
        assert!(result.is_err());
        assert_eq!(toolbar.layout_generation(), before + 1);

        toolbar.set_subtitle(Some("Driver"));
        assert_eq!(toolbar.layout_generation(), before + 2);
        assert!(toolbar.last_measurement().is_none());
    }

    #[test]
    fn test_setter_during_measure_discards_result() {
        let toolbar = toolbar();
        toolbar.set_title(Some("Media"));
        let sizes = IntrinsicSizes::new()
            .with(Slot::Title, Size::new(40, 20))
            .with(Slot::Subtitle, Size::new(30, 16));

        let measurer = |slot: Slot, width: MeasureSpec, height: MeasureSpec| {
            if slot == Slot::Title {
                toolbar.set_subtitle(Some("Bluetooth"));
            }
            sizes.measure(slot, width, height)
        };
        toolbar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified(), &measurer);

        assert!(toolbar.needs_layout());
        assert!(toolbar.last_measurement().is_none());
        assert!(matches!(
            toolbar.layout(Size::new(400, 96)),
            Err(CabinError::LayoutNotMeasured)
        ));

        let m = toolbar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified(), &sizes);
        let placement = toolbar.layout(m.measured).unwrap();
        assert!(placement.bounds(Slot::Subtitle).is_some());
        assert!(!toolbar.needs_layout());
    }

    #[test]
    fn test_navigation_click() {
        let toolbar = toolbar();
        let clicks = Arc::new(AtomicUsize::new(0));
        let c = clicks.clone();
        toolbar.set_navigation_on_click(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(toolbar.handle_click(Point::new(10, 10)), ToolbarHit::Nothing);

        let placement = laid_out(&toolbar, &IntrinsicSizes::new());
        let nav = placement.bounds(Slot::Navigation).unwrap();

        assert_eq!(toolbar.handle_click(nav.origin()), ToolbarHit::Navigation);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        // Replacing the handler drops the old one.
        let replaced = Arc::new(AtomicUsize::new(0));
        let r = replaced.clone();
        toolbar.set_navigation_on_click(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        toolbar.handle_click(nav.origin());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(replaced.load(Ordering::SeqCst), 1);

        toolbar.clear_navigation_on_click();
        assert_eq!(toolbar.navigation_clicked.connection_count(), 0);
    }

    #[test]
    fn test_navigation_touch_target_extends_bounds() {
        let toolbar = toolbar();
        let placement = laid_out(&toolbar, &IntrinsicSizes::new());

        let nav = placement.bounds(Slot::Navigation).unwrap();
        assert_eq!(nav.size(), Size::square(44));

        // Just above the 44px icon, inside the 76px touch target.
        let point = Point::new(nav.left + 2, nav.top - 10);
        assert!(!nav.contains(point));
        assert_eq!(toolbar.handle_click(point), ToolbarHit::Navigation);
    }

    #[test]
    fn test_overflow_click() {
        let toolbar = toolbar();
        toolbar.set_navigation_icon(None);
        toolbar.set_menu_items(Some(vec![
            MenuItem::new(1, "Search").with_display_behavior(DisplayBehavior::Always),
            MenuItem::new(2, "Help").with_display_behavior(DisplayBehavior::Never),
        ]));

        let requested = Arc::new(Mutex::new(Vec::new()));
        let r = requested.clone();
        toolbar.overflow_requested.connect(move |items| {
            r.lock().extend(items.iter().map(MenuItem::id));
        });

        let placement = laid_out(&toolbar, &IntrinsicSizes::new());
        let overflow = placement.bounds(Slot::Overflow).unwrap();

        assert_eq!(toolbar.handle_click(overflow.origin()), ToolbarHit::Overflow);
        assert_eq!(*requested.lock(), vec![2]);
    }
}
