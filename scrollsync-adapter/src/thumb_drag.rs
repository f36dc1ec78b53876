use scrollsync::math;
use scrollsync::{Axis, ScrollError, ScrollEvent, ScrollHost, ScrollResult, Scrollable};

use crate::{DragSession, PointerCapture, PointerEvent, PointerId, PointerKind, PointerTarget};

/// Drag-the-thumb adapter for one axis.
///
/// Pointer coordinates along the axis are track-local: `0` is the start of the track,
/// whose length is the viewport extent.
#[derive(Clone, Debug)]
pub struct ThumbDrag {
    axis: Axis,
    session: Option<DragSession>,
    // Where inside the thumb the pointer went down.
    grab: f64,
}

impl ThumbDrag {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            session: None,
            grab: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Distance from the thumb's start to the grab point.
    pub fn grab_offset(&self) -> f64 {
        self.grab
    }

    /// Starts a drag for a primary mouse or touch pointer on a visible thumb.
    ///
    /// Returns whether a drag session was started.
    pub fn on_pointer_down<H: ScrollHost + PointerCapture>(
        &mut self,
        scrollable: &mut Scrollable<H>,
        event: &PointerEvent,
    ) -> ScrollResult<bool> {
        if !matches!(event.kind, PointerKind::Mouse | PointerKind::Touch) || !event.is_primary {
            return Ok(false);
        }
        let thumb = *scrollable.thumb(self.axis);
        if thumb.is_hidden() {
            return Ok(false);
        }
        let host = scrollable.host_mut().ok_or(ScrollError::NotMounted)?;
        host.capture_pointer(PointerTarget::Thumb(self.axis), event.id);

        self.grab = self.axis.coordinate_of(event.position) - thumb.offset();
        self.session = Some(DragSession::start(event.id, event.position));
        sdebug!(axis = ?self.axis, pointer = event.id.0, grab = self.grab, "thumb drag start");
        Ok(true)
    }

    /// Moves the thumb with the pointer and scrolls the content to match.
    ///
    /// Once the pointer leaves the track on either side (taking the grab point into
    /// account) the thumb is pinned to that end of the track, so coming back resumes the
    /// drag without a jump.
    pub fn on_pointer_move<H: ScrollHost>(
        &mut self,
        scrollable: &mut Scrollable<H>,
        event: &PointerEvent,
        now_ms: u64,
    ) -> ScrollResult<Option<ScrollEvent>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if !session.accepts(event) {
            return Ok(None);
        }
        let Some(extent) = scrollable.extent(self.axis) else {
            return Ok(None);
        };

        let thumb = scrollable.thumb(self.axis);
        let track = extent.viewport;
        let length = thumb.length();
        if !math::is_more(track, length) {
            return Ok(None);
        }
        let current = thumb.offset();
        let max_track = track - length;
        let pointer = self.axis.coordinate_of(event.position);

        let pinned = if pointer < self.grab.floor() {
            Some(0.0)
        } else if pointer > track - (length - self.grab).ceil() {
            Some(max_track)
        } else {
            None
        };
        let offset = match pinned {
            Some(end) => {
                // Later deltas start from the grab point of the pinned thumb.
                session.advance(self.axis, end + self.grab);
                end
            }
            None => {
                let delta = pointer - session.origin_along(self.axis);
                math::clamp(current + delta, 0.0, max_track)
            }
        };
        if offset == current {
            return Ok(None);
        }
        if pinned.is_none() {
            session.advance(self.axis, pointer);
        }

        let scroll = math::to_content_space(offset, extent.content, extent.viewport);
        strace!(axis = ?self.axis, track_offset = offset, scroll, "thumb drag move");
        scrollable.apply_scroll_intent(self.axis, scroll, now_ms)
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
        self.grab = 0.0;
    }

    fn end(&mut self, pointer: PointerId) {
        if self.session.is_some_and(|s| s.pointer() == pointer) {
            sdebug!(axis = ?self.axis, pointer = pointer.0, "thumb drag end");
            self.cancel();
        }
    }
}
