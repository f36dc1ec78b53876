use crate::Axis;

/// Element of the visual surface that receives an attribute write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The scrollable content box (its id is referenced by `aria-controls`).
    Content,
    /// The thumb of one axis.
    Thumb(Axis),
}

/// The visual surface a [`crate::Scrollable`] drives.
///
/// Implementations translate these calls to whatever the UI layer uses (DOM nodes, widget
/// state, terminal cells). The engine never reads from the host: geometry arrives through
/// `Scrollable::on_viewport_resize` / `on_content_resize`, native scroll positions through
/// `Scrollable::on_native_scroll`.
pub trait ScrollHost {
    /// Writes the native scroll position of the viewport.
    ///
    /// The host is expected to report the resulting native scroll event back to the
    /// engine like any other; the engine recognizes it as its own write.
    fn write_scroll_offset(&mut self, axis: Axis, offset: f64);

    /// Moves a thumb inside its track (track-space pixels).
    fn write_thumb_offset(&mut self, axis: Axis, offset: f64);

    /// Sets a thumb's length along its axis. `0` hides it.
    fn write_thumb_length(&mut self, axis: Axis, length: f64);

    /// Sets a string attribute used for accessibility or debugging hooks.
    fn set_attribute(&mut self, element: Element, name: &str, value: &str);

    /// Toggles the "has a scrollbar on this axis" state of the container.
    fn set_scrollbar_visible(&mut self, _axis: Axis, _visible: bool) {}
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn write_scroll_offset(&mut self, axis: Axis, offset: f64) {
        (**self).write_scroll_offset(axis, offset);
    }

    fn write_thumb_offset(&mut self, axis: Axis, offset: f64) {
        (**self).write_thumb_offset(axis, offset);
    }

    fn write_thumb_length(&mut self, axis: Axis, length: f64) {
        (**self).write_thumb_length(axis, length);
    }

    fn set_attribute(&mut self, element: Element, name: &str, value: &str) {
        (**self).set_attribute(element, name, value);
    }

    fn set_scrollbar_visible(&mut self, axis: Axis, visible: bool) {
        (**self).set_scrollbar_visible(axis, visible);
    }
}
