use scrollsync::{Axis, Point};

use crate::{PointerEvent, PointerId};

/// State of one drag: the captured pointer and the last applied pointer coordinate.
///
/// Deltas are always taken against `origin`, which the adapters move forward only when a
/// delta was actually applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pointer: PointerId,
    origin: Point,
}

impl DragSession {
    pub fn start(pointer: PointerId, origin: Point) -> Self {
        Self { pointer, origin }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether `event` comes from the captured pointer.
    pub fn accepts(&self, event: &PointerEvent) -> bool {
        event.id == self.pointer && event.is_primary
    }

    pub fn origin_along(&self, axis: Axis) -> f64 {
        axis.coordinate_of(self.origin)
    }

    pub fn advance(&mut self, axis: Axis, coordinate: f64) {
        match axis {
            Axis::Horizontal => self.origin.x = coordinate,
            Axis::Vertical => self.origin.y = coordinate,
        }
    }
}
