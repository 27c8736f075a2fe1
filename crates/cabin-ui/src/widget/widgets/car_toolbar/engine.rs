//! Measure and layout passes for the car toolbar.
//!
//! Both passes are pure functions of a [`ToolbarConfig`], a [`SlotSet`] and
//! the host's measurements. [`CarToolbar`](super::CarToolbar) calls them, but
//! hosts with their own widget state can call them directly.
//!
//! # Width accounting
//!
//! Edge buttons are measured first because they have a higher display
//! priority than the title column:
//!
//! ```text
//! | nav container | title icon | max(title, subtitle) | overflow container |
//! ```
//!
//! Each edge button contributes `max(edge_container_width, icon width)` plus
//! its margins. The title icon contributes its width only. Title and subtitle
//! stack, so the text column contributes the wider of the two (each including
//! its margins). Hidden slots contribute nothing.

use cabin_ui_core::logging::{span_names, targets};
use cabin_ui_core::PerfSpan;

use super::slot::{PerSlot, Slot, SlotMeasurer, SlotSet};
use crate::config::ToolbarConfig;
use crate::widget::geometry::{Point, Rect, Size};
use crate::widget::layout::MeasureSpec;

/// Result of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Size the toolbar asked for before the parent's specs were applied.
    pub desired: Size,
    /// Size after resolving `desired` against the parent's specs.
    pub measured: Size,
    /// An `AtMost` width spec clamped the desired width.
    pub width_too_small: bool,
    /// An `AtMost` height spec clamped the desired height.
    pub height_too_small: bool,
    slots: PerSlot<Option<Size>>,
    contributions: PerSlot<i32>,
}

impl Measurement {
    /// Measured size of a slot, or `None` if it was hidden.
    pub fn slot_size(&self, slot: Slot) -> Option<Size> {
        self.slots[slot]
    }

    /// Width this slot added to the desired width, before the title and
    /// subtitle were folded into one column. Zero for hidden slots.
    pub fn contribution(&self, slot: Slot) -> i32 {
        self.contributions[slot]
    }

    /// Width of the stacked title/subtitle column.
    pub fn text_column_width(&self) -> i32 {
        self.contributions[Slot::Title].max(self.contributions[Slot::Subtitle])
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// The bounds the toolbar was laid out in, at the local origin.
    pub size: Size,
    bounds: PerSlot<Option<Rect>>,
    navigation_touch: Option<Rect>,
}

impl Placement {
    /// Bounds of a slot in toolbar-local coordinates, or `None` if hidden.
    pub fn bounds(&self, slot: Slot) -> Option<Rect> {
        self.bounds[slot]
    }

    /// Hit rectangle of the navigation button, grown to the touch target.
    pub fn navigation_touch_bounds(&self) -> Option<Rect> {
        self.navigation_touch
    }

    /// Visible slots with their bounds, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rect)> + '_ {
        self.bounds
            .iter()
            .filter_map(|(slot, rect)| rect.map(|rect| (slot, rect)))
    }
}

/// Run the measure pass.
///
/// Height is never content-driven: the desired height is the configured
/// toolbar height plus vertical padding. Title and subtitle are measured
/// against whatever width the edge buttons and title icon left over.
pub fn measure<M>(
    config: &ToolbarConfig,
    slots: &SlotSet,
    measurer: &M,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Measurement
where
    M: SlotMeasurer + ?Sized,
{
    let _perf = PerfSpan::new(span_names::MEASURE);

    let desired_height = config.desired_height();
    let text_height_spec = MeasureSpec::at_most(desired_height).child_spec(config.padding.vertical());

    let mut sizes: PerSlot<Option<Size>> = PerSlot::default();
    let mut contributions: PerSlot<i32> = PerSlot::default();
    let mut width: i32 = 0;

    for slot in [Slot::Navigation, Slot::Overflow] {
        if !slots.is_visible(slot) {
            continue;
        }
        let icon_spec = MeasureSpec::exactly(config.edge_icon_size);
        let size = measurer.measure(slot, icon_spec, icon_spec);
        let contribution = config
            .edge_container_width
            .max(size.width)
            .saturating_add(slots[slot].margins.horizontal());

        tracing::trace!(target: targets::LAYOUT, ?slot, width = size.width, height = size.height, contribution, "measured edge button");
        sizes[slot] = Some(size);
        contributions[slot] = contribution;
        width = width.saturating_add(contribution);
    }

    if slots.is_visible(Slot::TitleIcon) {
        let icon_spec = MeasureSpec::exactly(config.title_icon_size);
        let size = measurer.measure(Slot::TitleIcon, icon_spec, icon_spec);

        tracing::trace!(target: targets::LAYOUT, width = size.width, height = size.height, "measured title icon");
        sizes[Slot::TitleIcon] = Some(size);
        contributions[Slot::TitleIcon] = size.width;
        width = width.saturating_add(size.width);
    }

    // Both text rows see the same budget: they stack rather than share it.
    let width_used = width;
    for slot in [Slot::Title, Slot::Subtitle] {
        if !slots.is_visible(slot) {
            continue;
        }
        let margins = slots[slot].margins;
        let used = config
            .padding
            .horizontal()
            .saturating_add(margins.horizontal())
            .saturating_add(width_used);
        let text_width_spec = width_spec.child_spec(used);
        let size = measurer.measure(slot, text_width_spec, text_height_spec);
        let contribution = size.width.saturating_add(margins.horizontal());

        tracing::trace!(target: targets::LAYOUT, ?slot, width = size.width, height = size.height, budget = text_width_spec.size, "measured text");
        sizes[slot] = Some(size);
        contributions[slot] = contribution;
    }
    width = width.saturating_add(contributions[Slot::Title].max(contributions[Slot::Subtitle]));

    let desired = Size::new(width, desired_height);
    let resolved_width = width_spec.resolve_and_state(desired.width);
    let resolved_height = height_spec.resolve_and_state(desired.height);
    let measured = Size::new(resolved_width.size, resolved_height.size);

    if resolved_width.too_small {
        tracing::debug!(target: targets::LAYOUT, desired = desired.width, available = width_spec.size, "toolbar content wider than available width");
    }
    tracing::debug!(target: targets::LAYOUT, width = measured.width, height = measured.height, "measured toolbar");

    Measurement {
        desired,
        measured,
        width_too_small: resolved_width.too_small,
        height_too_small: resolved_height.too_small,
        slots: sizes,
        contributions,
    }
}

/// Run the layout pass inside bounds of `size`.
///
/// Every visible slot is vertically centered in the full height. Centering
/// offsets use integer division, so an odd leftover pixel goes below (or to
/// the right of) the child.
pub fn layout(
    config: &ToolbarConfig,
    slots: &SlotSet,
    measurement: &Measurement,
    size: Size,
) -> Placement {
    let _perf = PerfSpan::new(span_names::LAYOUT);

    let height = size.height;
    let mut placement = Placement {
        size,
        ..Placement::default()
    };
    let mut left = config.padding.left;
    let mut right = size.width - config.padding.right;

    if let Some(nav) = visible_size(slots, measurement, Slot::Navigation) {
        let margins = slots[Slot::Navigation].margins;
        let container = config.edge_container_width.max(nav.width);
        left += margins.start;

        let rect = centered_from_left(left + (container - nav.width) / 2, nav, height);
        placement.bounds[Slot::Navigation] = Some(rect);
        placement.navigation_touch = Some(rect.expanded_to(Size::square(config.touch_target_size)));
        left += container + margins.end;
    }

    if let Some(overflow) = visible_size(slots, measurement, Slot::Overflow) {
        let margins = slots[Slot::Overflow].margins;
        let container = config.edge_container_width.max(overflow.width);
        right -= margins.end;

        let rect = centered_from_right(right - (container - overflow.width) / 2, overflow, height);
        placement.bounds[Slot::Overflow] = Some(rect);
        right -= container + margins.start;
    }

    if let Some(icon) = visible_size(slots, measurement, Slot::TitleIcon) {
        placement.bounds[Slot::TitleIcon] = Some(centered_from_left(left, icon, height));
        left += icon.width;
    }

    let title = visible_size(slots, measurement, Slot::Title);
    let subtitle = visible_size(slots, measurement, Slot::Subtitle);
    let title_left = left + slots[Slot::Title].margins.start;
    let subtitle_left = left + slots[Slot::Subtitle].margins.start;

    match (title, subtitle) {
        (Some(title), Some(subtitle)) => {
            let gap = config.text_vertical_padding;
            let title_top = (height - title.height - subtitle.height - gap) / 2;
            let title_rect = Rect::from_origin_size(Point::new(title_left, title_top), title);
            let subtitle_top = title_rect.bottom + gap;

            placement.bounds[Slot::Title] = Some(title_rect);
            placement.bounds[Slot::Subtitle] = Some(Rect::from_origin_size(
                Point::new(subtitle_left, subtitle_top),
                subtitle,
            ));
        }
        (Some(title), None) => {
            placement.bounds[Slot::Title] = Some(centered_from_left(title_left, title, height));
        }
        (None, Some(subtitle)) => {
            placement.bounds[Slot::Subtitle] =
                Some(centered_from_left(subtitle_left, subtitle, height));
        }
        (None, None) => {}
    }

    if left > right {
        tracing::debug!(target: targets::LAYOUT, left, right, "start and end slots overlap");
    }
    tracing::trace!(target: targets::LAYOUT, width = size.width, height = size.height, "laid out toolbar");

    placement
}

fn visible_size(slots: &SlotSet, measurement: &Measurement, slot: Slot) -> Option<Size> {
    if slots.is_visible(slot) {
        measurement.slot_size(slot)
    } else {
        None
    }
}

fn centered_from_left(left: i32, size: Size, parent_height: i32) -> Rect {
    let top = (parent_height - size.height) / 2;
    Rect::from_origin_size(Point::new(left, top), size)
}

fn centered_from_right(right: i32, size: Size, parent_height: i32) -> Rect {
    let top = (parent_height - size.height) / 2;
    Rect::from_origin_size(Point::new(right - size.width, top), size)
}
