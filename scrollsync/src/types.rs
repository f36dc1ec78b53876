use core::ops::{Index, IndexMut};

use crate::math;

/// A scroll axis.
///
/// Every piece of per-axis state in this crate is keyed by `Axis`; the two axes never
/// share mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The extent of `size` along this axis (width for horizontal, height for vertical).
    pub fn extent_of(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The coordinate of `point` along this axis.
    pub fn coordinate_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// The wheel axis: holding the modifier key turns vertical wheel motion horizontal.
    pub fn from_wheel_modifier(shift_key: bool) -> Self {
        if shift_key {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// `aria-orientation` value.
    pub fn orientation(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Name of the debug attribute carrying the thumb's track-space offset.
    pub fn offset_attribute(self) -> &'static str {
        match self {
            Self::Horizontal => "data-scroll-left",
            Self::Vertical => "data-scroll-top",
        }
    }
}

/// One value per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisPair<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> AxisPair<T> {
    pub fn new(horizontal: T, vertical: T) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            horizontal: f(Axis::Horizontal),
            vertical: f(Axis::Vertical),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisPair<U> {
        AxisPair {
            horizontal: f(Axis::Horizontal, self.horizontal),
            vertical: f(Axis::Vertical, self.vertical),
        }
    }
}

impl<T> Index<Axis> for AxisPair<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

impl<T> IndexMut<Axis> for AxisPair<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Native scroll position of the viewport (`scrollLeft`, `scrollTop`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// Viewport and content measurements along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Size of the clipping box.
    pub viewport: f64,
    /// Size of the unclipped content box.
    pub content: f64,
}

impl Extent {
    pub fn new(viewport: f64, content: f64) -> Self {
        Self { viewport, content }
    }

    pub fn along(axis: Axis, viewport: Size, content: Size) -> Self {
        Self::new(axis.extent_of(viewport), axis.extent_of(content))
    }

    /// Whether the content overflows the viewport by more than the comparison tolerance.
    ///
    /// This is also the guard for every ratio computed from the extent: a non-scrollable
    /// extent never reaches a division.
    pub fn is_scrollable(&self) -> bool {
        self.viewport > 0.0 && math::is_more(self.content, self.viewport)
    }

    /// Largest valid scroll offset. Collapses to `0` when the axis is not scrollable.
    pub fn max_offset(&self) -> f64 {
        if self.is_scrollable() {
            self.content - self.viewport
        } else {
            0.0
        }
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        math::clamp(offset, 0.0, self.max_offset())
    }
}

/// Pixel length and offset of a thumb inside its track.
///
/// A zero `length` means the axis is not scrollable and the thumb is hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub length: f64,
    pub offset: f64,
}

impl ThumbGeometry {
    pub fn is_hidden(&self) -> bool {
        self.length == 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Start,
    End,
}

/// Whether a scroll offset sits on either end of its valid range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeState {
    pub at_start: bool,
    pub at_end: bool,
}

impl EdgeState {
    pub fn compute(offset: f64, extent: Extent) -> Self {
        Self {
            at_start: math::is_equal(offset, 0.0),
            at_end: math::is_equal(offset, extent.max_offset()),
        }
    }

    pub fn is_at(&self, edge: Edge) -> bool {
        match edge {
            Edge::Start => self.at_start,
            Edge::End => self.at_end,
        }
    }
}

/// Normalized scroll notification delivered to the consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub axis: Axis,
    /// Content-space offset.
    pub offset: f64,
    pub at_start: bool,
    pub at_end: bool,
}

impl ScrollEvent {
    pub fn edges(&self) -> EdgeState {
        EdgeState {
            at_start: self.at_start,
            at_end: self.at_end,
        }
    }
}

/// Combined resize notification: thumb lengths plus the (possibly reclamped) offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEvent {
    pub h_thumb_length: f64,
    pub v_thumb_length: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}
