use scrollsync::{Axis, AxisPair, ScrollError, ScrollEvent, ScrollHost, ScrollResult, Scrollable};

use crate::{DragSession, PointerCapture, PointerEvent, PointerId, PointerKind, PointerTarget};

/// Drag-the-content adapter for touch pointers.
///
/// Dragging the content moves it with the finger, so the scroll offset moves against the
/// pointer. Mouse and pen pointers never start a content drag.
#[derive(Clone, Debug, Default)]
pub struct ContentDrag {
    session: Option<DragSession>,
}

impl ContentDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts a drag for a primary touch pointer and captures it.
    ///
    /// Returns whether a drag session was started.
    pub fn on_pointer_down<H: ScrollHost + PointerCapture>(
        &mut self,
        scrollable: &mut Scrollable<H>,
        event: &PointerEvent,
    ) -> ScrollResult<bool> {
        if event.kind != PointerKind::Touch || !event.is_primary {
            return Ok(false);
        }
        let host = scrollable.host_mut().ok_or(ScrollError::NotMounted)?;
        host.capture_pointer(PointerTarget::Content, event.id);
        self.session = Some(DragSession::start(event.id, event.position));
        sdebug!(pointer = event.id.0, "content drag start");
        Ok(true)
    }

    /// Scrolls both axes by the pointer movement since the last applied move.
    pub fn on_pointer_move<H: ScrollHost>(
        &mut self,
        scrollable: &mut Scrollable<H>,
        event: &PointerEvent,
        now_ms: u64,
    ) -> ScrollResult<AxisPair<Option<ScrollEvent>>> {
        let mut out = AxisPair::default();
        let Some(session) = self.session.as_mut() else {
            return Ok(out);
        };
        if !session.accepts(event) {
            return Ok(out);
        }

        for axis in Axis::ALL {
            let coordinate = axis.coordinate_of(event.position);
            let delta = session.origin_along(axis) - coordinate;
            let proposed = scrollable.scroll_offset(axis) + delta;
            if let Some(scroll) = scrollable.apply_scroll_intent(axis, proposed, now_ms)? {
                session.advance(axis, coordinate);
                out[axis] = Some(scroll);
            }
        }
        Ok(out)
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        self.end(event.id);
    }

    pub fn on_pointer_cancel(&mut self, event: &PointerEvent) {
        self.end(event.id);
    }

    pub fn on_lost_pointer_capture(&mut self, pointer: PointerId) {
        self.end(pointer);
    }

    /// Drops the session regardless of the pointer.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    fn end(&mut self, pointer: PointerId) {
        if self.session.is_some_and(|s| s.pointer() == pointer) {
            sdebug!(pointer = pointer.0, "content drag end");
            self.session = None;
        }
    }
}
