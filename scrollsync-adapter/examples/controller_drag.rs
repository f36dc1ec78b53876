// Example: routing wheel, thumb-drag and native scroll events through a controller.
use scrollsync::{Axis, Element, Point, ScrollHost, ScrollPosition, ScrollableOptions, Size};
use scrollsync_adapter::{
    Controller, PointerCapture, PointerEvent, PointerId, PointerKind, PointerTarget, WheelEvent,
};

#[derive(Default)]
struct Surface {
    scroll: ScrollPosition,
}

impl ScrollHost for Surface {
    fn write_scroll_offset(&mut self, axis: Axis, offset: f64) {
        match axis {
            Axis::Horizontal => self.scroll.left = offset,
            Axis::Vertical => self.scroll.top = offset,
        }
    }

    fn write_thumb_offset(&mut self, axis: Axis, offset: f64) {
        println!("thumb {axis:?} at {offset}");
    }

    fn write_thumb_length(&mut self, axis: Axis, length: f64) {
        println!("thumb {axis:?} length {length}");
    }

    fn set_attribute(&mut self, _element: Element, _name: &str, _value: &str) {}
}

impl PointerCapture for Surface {
    fn capture_pointer(&mut self, target: PointerTarget, pointer: PointerId) {
        println!("capture {pointer:?} on {target:?}");
    }
}

fn main() -> Result<(), scrollsync::ScrollError> {
    let options = ScrollableOptions::new().with_on_edge_reached(Some(|axis: Axis, edge: scrollsync::Edge| {
        println!("edge reached: {axis:?} {edge:?}");
    }));
    let mut c = Controller::with_host(options, Surface::default());
    c.on_viewport_resize(Size::new(400.0, 300.0), 0);
    c.on_content_resize(Size::new(400.0, 1200.0), 0);

    let out = c.on_wheel(WheelEvent::new(120.0, false), 16)?;
    println!("wheel prevent_default={}", out.should_prevent_default());

    let thumb = PointerTarget::Thumb(Axis::Vertical);
    let grab = c.scrollable().thumb(Axis::Vertical).offset() + 4.0;
    let pointer = |y: f64| PointerEvent::new(PointerId(1), PointerKind::Mouse, Point::new(0.0, y));
    c.on_pointer_down(thumb, &pointer(grab))?;
    for y in [grab + 20.0, grab + 60.0, 1_000.0] {
        c.on_pointer_move(thumb, &pointer(y), 32)?;
    }
    c.on_pointer_up(thumb, &pointer(1_000.0));

    // The surface reports its own scroll back, as a real one would.
    let native = c.scrollable().host().map(|s| s.scroll).unwrap_or_default();
    c.on_native_scroll(native, 48);

    c.flush();
    println!("state={:?}", c.scrollable().state());
    Ok(())
}
