use scrollsync::{
    Axis, AxisPair, ResizeEvent, ScrollEvent, ScrollHost, ScrollPosition, ScrollResult,
    Scrollable, ScrollableOptions, Size,
};

use crate::{
    ContentDrag, PointerCapture, PointerEvent, PointerId, PointerTarget, ThumbDrag, WheelEvent,
    WheelOutcome, on_wheel,
};

/// A framework-neutral controller that wraps a [`scrollsync::Scrollable`] together with
/// one input adapter per channel (wheel, touch drag on the content, drag on each thumb).
///
/// This type does not hold any UI objects beyond the host. Adapters drive it by calling:
/// - `on_viewport_resize` / `on_content_resize` when the geometry observer fires
/// - `on_native_scroll` for native scroll events
/// - `on_wheel` and the `on_pointer_*` family for raw input, tagged with their target
/// - `tick(now_ms)` on a timer or per frame, for rate-limited notifications
#[derive(Clone, Debug)]
pub struct Controller<H> {
    s: Scrollable<H>,
    content_drag: ContentDrag,
    thumb_drags: AxisPair<ThumbDrag>,
}

impl<H: ScrollHost + PointerCapture> Controller<H> {
    pub fn new(options: ScrollableOptions) -> Self {
        Self::from_scrollable(Scrollable::new(options))
    }

    pub fn with_host(options: ScrollableOptions, host: H) -> Self {
        Self::from_scrollable(Scrollable::with_host(options, host))
    }

    pub fn from_scrollable(s: Scrollable<H>) -> Self {
        Self {
            s,
            content_drag: ContentDrag::new(),
            thumb_drags: AxisPair::from_fn(ThumbDrag::new),
        }
    }

    pub fn scrollable(&self) -> &Scrollable<H> {
        &self.s
    }

    pub fn scrollable_mut(&mut self) -> &mut Scrollable<H> {
        &mut self.s
    }

    pub fn into_scrollable(self) -> Scrollable<H> {
        self.s
    }

    /// Mounts a new host. Drag sessions captured by the previous host are dropped.
    pub fn mount(&mut self, host: H) -> Option<H> {
        self.cancel_drags();
        self.s.mount(host)
    }

    pub fn unmount(&mut self) -> Option<H> {
        self.cancel_drags();
        self.s.unmount()
    }

    pub fn content_drag(&self) -> &ContentDrag {
        &self.content_drag
    }

    pub fn thumb_drag(&self, axis: Axis) -> &ThumbDrag {
        &self.thumb_drags[axis]
    }

    pub fn is_dragging(&self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Content => self.content_drag.is_dragging(),
            PointerTarget::Thumb(axis) => self.thumb_drags[axis].is_dragging(),
        }
    }

    pub fn on_viewport_resize(&mut self, size: Size, now_ms: u64) -> Option<ResizeEvent> {
        self.s.on_viewport_resize(size, now_ms)
    }

    pub fn on_content_resize(&mut self, size: Size, now_ms: u64) -> Option<ResizeEvent> {
        self.s.on_content_resize(size, now_ms)
    }

    pub fn on_native_scroll(
        &mut self,
        position: ScrollPosition,
        now_ms: u64,
    ) -> AxisPair<Option<ScrollEvent>> {
        self.s.on_native_scroll(position, now_ms)
    }

    pub fn on_wheel(&mut self, event: WheelEvent, now_ms: u64) -> ScrollResult<WheelOutcome> {
        on_wheel(&mut self.s, event, now_ms)
    }

    /// Returns whether a drag session was started on `target`.
    pub fn on_pointer_down(
        &mut self,
        target: PointerTarget,
        event: &PointerEvent,
    ) -> ScrollResult<bool> {
        match target {
            PointerTarget::Content => self.content_drag.on_pointer_down(&mut self.s, event),
            PointerTarget::Thumb(axis) => self.thumb_drags[axis].on_pointer_down(&mut self.s, event),
        }
    }

    /// Routes a move of a captured pointer. Moves from any other pointer are ignored.
    pub fn on_pointer_move(
        &mut self,
        target: PointerTarget,
        event: &PointerEvent,
        now_ms: u64,
    ) -> ScrollResult<AxisPair<Option<ScrollEvent>>> {
        match target {
            PointerTarget::Content => self.content_drag.on_pointer_move(&mut self.s, event, now_ms),
            PointerTarget::Thumb(axis) => {
                let mut out = AxisPair::default();
                out[axis] = self.thumb_drags[axis].on_pointer_move(&mut self.s, event, now_ms)?;
                Ok(out)
            }
        }
    }

    pub fn on_pointer_up(&mut self, target: PointerTarget, event: &PointerEvent) {
        match target {
            PointerTarget::Content => self.content_drag.on_pointer_up(event),
            PointerTarget::Thumb(axis) => self.thumb_drags[axis].on_pointer_up(event),
        }
    }

    pub fn on_pointer_cancel(&mut self, target: PointerTarget, event: &PointerEvent) {
        match target {
            PointerTarget::Content => self.content_drag.on_pointer_cancel(event),
            PointerTarget::Thumb(axis) => self.thumb_drags[axis].on_pointer_cancel(event),
        }
    }

    pub fn on_lost_pointer_capture(&mut self, target: PointerTarget, pointer: PointerId) {
        match target {
            PointerTarget::Content => self.content_drag.on_lost_pointer_capture(pointer),
            PointerTarget::Thumb(axis) => self.thumb_drags[axis].on_lost_pointer_capture(pointer),
        }
    }

    pub fn set_scroll_top(&mut self, value: f64, now_ms: u64) -> ScrollResult<Option<ScrollEvent>> {
        self.s.set_scroll_top(value, now_ms)
    }

    pub fn set_scroll_left(
        &mut self,
        value: f64,
        now_ms: u64,
    ) -> ScrollResult<Option<ScrollEvent>> {
        self.s.set_scroll_left(value, now_ms)
    }

    /// Delivers rate-limited notifications that are due.
    pub fn tick(&mut self, now_ms: u64) {
        self.s.tick(now_ms);
    }

    pub fn flush(&mut self) {
        self.s.flush();
    }

    fn cancel_drags(&mut self) {
        self.content_drag.cancel();
        for axis in Axis::ALL {
            self.thumb_drags[axis].cancel();
        }
    }
}
