// Example: a printing host, a resize and a programmatic scroll.
use scrollsync::{Axis, Element, ScrollHost, Scrollable, ScrollableOptions, Size};

struct PrintHost;

impl ScrollHost for PrintHost {
    fn write_scroll_offset(&mut self, axis: Axis, offset: f64) {
        println!("native {axis:?} <- {offset}");
    }

    fn write_thumb_offset(&mut self, axis: Axis, offset: f64) {
        println!("thumb {axis:?} offset <- {offset}");
    }

    fn write_thumb_length(&mut self, axis: Axis, length: f64) {
        println!("thumb {axis:?} length <- {length}");
    }

    fn set_attribute(&mut self, element: Element, name: &str, value: &str) {
        println!("{element:?} {name}={value}");
    }
}

fn main() {
    let options = ScrollableOptions::new()
        .with_content_id("demo-content")
        .without_rate_limits()
        .with_on_scroll(Some(|e: scrollsync::ScrollEvent| {
            println!(
                "on_scroll: {:?} offset={} at_start={} at_end={}",
                e.axis, e.offset, e.at_start, e.at_end
            );
        }));

    let mut s = Scrollable::with_host(options, PrintHost);
    s.on_viewport_resize(Size::new(300.0, 300.0), 0);
    s.on_content_resize(Size::new(300.0, 1000.0), 0);

    if let Err(err) = s.set_scroll_top(350.0, 16) {
        eprintln!("scroll failed: {err}");
    }
    // The host echoes the write back; it is recognized and not re-emitted.
    let echoed = s.on_native_scroll_axis(Axis::Vertical, 350.0, 17);
    println!("echo re-emitted: {}", echoed.is_some());

    println!("state={:?}", s.state());
}
