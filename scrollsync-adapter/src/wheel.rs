use scrollsync::{Axis, ScrollEvent, ScrollHost, ScrollResult, Scrollable};

use crate::WheelEvent;

/// Result of routing a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// The offset changed; the host should stop the event's default action and its
    /// propagation.
    Scrolled(ScrollEvent),
    /// Nothing moved (already at the edge, or no overflow). The event should bubble, e.g.
    /// to scroll a parent region.
    Ignored,
}

impl WheelOutcome {
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, Self::Scrolled(_))
    }

    pub fn event(&self) -> Option<&ScrollEvent> {
        match self {
            Self::Scrolled(event) => Some(event),
            Self::Ignored => None,
        }
    }
}

/// Applies a wheel event: `delta_y` moves the vertical axis, or the horizontal one while
/// the shift modifier is held.
pub fn on_wheel<H: ScrollHost>(
    scrollable: &mut Scrollable<H>,
    event: WheelEvent,
    now_ms: u64,
) -> ScrollResult<WheelOutcome> {
    let axis = Axis::from_wheel_modifier(event.shift_key);
    let proposed = scrollable.scroll_offset(axis) + event.delta_y;
    strace!(?axis, delta = event.delta_y, proposed, "on_wheel");

    Ok(match scrollable.apply_scroll_intent(axis, proposed, now_ms)? {
        Some(scroll) => WheelOutcome::Scrolled(scroll),
        None => WheelOutcome::Ignored,
    })
}
