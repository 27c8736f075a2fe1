//! The five toolbar slots and per-slot data.

use std::ops::{Index, IndexMut};

use crate::widget::geometry::Size;
use crate::widget::layout::MeasureSpec;

/// One of the five fixed toolbar regions, in start-to-end display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Navigation button at the start edge.
    Navigation,
    /// Icon shown before the title.
    TitleIcon,
    /// Primary single-line text.
    Title,
    /// Secondary single-line text, stacked under the title.
    Subtitle,
    /// Overflow menu button at the end edge.
    Overflow,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 5] = [
        Slot::Navigation,
        Slot::TitleIcon,
        Slot::Title,
        Slot::Subtitle,
        Slot::Overflow,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Slot::Navigation => 0,
            Slot::TitleIcon => 1,
            Slot::Title => 2,
            Slot::Subtitle => 3,
            Slot::Overflow => 4,
        }
    }

    /// Navigation and Overflow: square, icon-only, centered in a container.
    pub fn is_edge_button(self) -> bool {
        matches!(self, Slot::Navigation | Slot::Overflow)
    }

    /// Title and Subtitle: measured against the remaining width.
    pub fn is_text(self) -> bool {
        matches!(self, Slot::Title | Slot::Subtitle)
    }
}

/// A fixed-size table holding one value per [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerSlot<T>([T; 5]);

impl<T> PerSlot<T> {
    /// Build a table by calling `f` for every slot.
    pub fn from_fn(mut f: impl FnMut(Slot) -> T) -> Self {
        Self(Slot::ALL.map(&mut f))
    }

    /// Iterate `(slot, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Slot> for PerSlot<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &T {
        &self.0[slot.index()]
    }
}

impl<T> IndexMut<Slot> for PerSlot<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.0[slot.index()]
    }
}

/// Horizontal margins around a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotMargins {
    pub start: i32,
    pub end: i32,
}

impl SlotMargins {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// No margins.
    pub const ZERO: Self = Self::new(0, 0);

    /// start + end.
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.start.saturating_add(self.end)
    }
}

/// Per-slot state consumed by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotState {
    pub visible: bool,
    pub margins: SlotMargins,
}

impl SlotState {
    pub const HIDDEN: Self = Self {
        visible: false,
        margins: SlotMargins::ZERO,
    };

    pub const VISIBLE: Self = Self {
        visible: true,
        margins: SlotMargins::ZERO,
    };
}

/// Visibility and margins of all five slots for one layout pass.
pub type SlotSet = PerSlot<SlotState>;

impl SlotSet {
    /// A set where exactly the listed slots are visible.
    pub fn visible(slots: &[Slot]) -> Self {
        Self::from_fn(|slot| SlotState {
            visible: slots.contains(&slot),
            margins: SlotMargins::ZERO,
        })
    }

    /// Check if a slot is shown.
    #[inline]
    pub fn is_visible(&self, slot: Slot) -> bool {
        self[slot].visible
    }

    /// Set margins on one slot using builder pattern.
    pub fn with_margins(mut self, slot: Slot, margins: SlotMargins) -> Self {
        self[slot].margins = margins;
        self
    }
}

/// Per-child measurement callback supplied by the host.
///
/// The engine calls this once per visible slot and pass. The returned size
/// should honor the specs the same way [`MeasureSpec::resolve`] does.
pub trait SlotMeasurer {
    fn measure(&self, slot: Slot, width: MeasureSpec, height: MeasureSpec) -> Size;
}

impl<F> SlotMeasurer for F
where
    F: Fn(Slot, MeasureSpec, MeasureSpec) -> Size,
{
    fn measure(&self, slot: Slot, width: MeasureSpec, height: MeasureSpec) -> Size {
        self(slot, width, height)
    }
}

/// A [`SlotMeasurer`] backed by fixed intrinsic content sizes.
///
/// Each slot's intrinsic size is resolved against the specs it is measured
/// with, so edge buttons measured `Exactly` come back at the edge icon size
/// and text measured `AtMost` is clamped to the remaining width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntrinsicSizes(PerSlot<Size>);

impl IntrinsicSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intrinsic content size of a slot using builder pattern.
    pub fn with(mut self, slot: Slot, size: Size) -> Self {
        self.0[slot] = size;
        self
    }

    /// Set the intrinsic content size of a slot.
    pub fn set(&mut self, slot: Slot, size: Size) {
        self.0[slot] = size;
    }

    /// Get the intrinsic content size of a slot.
    pub fn get(&self, slot: Slot) -> Size {
        self.0[slot]
    }
}

impl SlotMeasurer for IntrinsicSizes {
    fn measure(&self, slot: Slot, width: MeasureSpec, height: MeasureSpec) -> Size {
        let intrinsic = self.0[slot];
        Size::new(width.resolve(intrinsic.width), height.resolve(intrinsic.height))
    }
}
