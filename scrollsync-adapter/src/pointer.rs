use scrollsync::{Axis, Point};

/// Identity of a pointer, stable for the lifetime of one contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// A pointer down/move/up/cancel event as reported by the host.
///
/// For thumb targets, `position` along the thumb's axis is measured from the start of
/// its track. For the content target any origin works; only differences are used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub is_primary: bool,
    pub position: Point,
}

impl PointerEvent {
    /// A primary pointer event.
    pub fn new(id: PointerId, kind: PointerKind, position: Point) -> Self {
        Self {
            id,
            kind,
            is_primary: true,
            position,
        }
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    pub delta_y: f64,
    /// Axis modifier: turns vertical wheel motion into horizontal scrolling.
    pub shift_key: bool,
}

impl WheelEvent {
    pub fn new(delta_y: f64, shift_key: bool) -> Self {
        Self { delta_y, shift_key }
    }
}

/// The element a pointer event was dispatched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerTarget {
    Content,
    Thumb(Axis),
}

/// Pointer capture primitive of the host.
///
/// Captured pointers keep delivering move/up events to the capturing target even when
/// they leave it. Release is implicit on pointer up/cancel; the host reports an
/// involuntary loss through the adapters' `on_lost_pointer_capture`.
pub trait PointerCapture {
    fn capture_pointer(&mut self, _target: PointerTarget, _pointer: PointerId) {}
}

impl<P: PointerCapture + ?Sized> PointerCapture for &mut P {
    fn capture_pointer(&mut self, target: PointerTarget, pointer: PointerId) {
        (**self).capture_pointer(target, pointer);
    }
}
