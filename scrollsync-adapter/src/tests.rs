use crate::*;

use scrollsync::math;
use scrollsync::{
    Axis, AxisPair, Element, ScrollError, ScrollHost, ScrollPosition, ScrollableOptions, Size,
};

#[derive(Debug, Default)]
struct RecordingHost {
    scroll_writes: Vec<(Axis, f64)>,
    captures: Vec<(PointerTarget, PointerId)>,
}

impl ScrollHost for RecordingHost {
    fn write_scroll_offset(&mut self, axis: Axis, offset: f64) {
        self.scroll_writes.push((axis, offset));
    }

    fn write_thumb_offset(&mut self, _axis: Axis, _offset: f64) {}

    fn write_thumb_length(&mut self, _axis: Axis, _length: f64) {}

    fn set_attribute(&mut self, _element: Element, _name: &str, _value: &str) {}
}

impl PointerCapture for RecordingHost {
    fn capture_pointer(&mut self, target: PointerTarget, pointer: PointerId) {
        self.captures.push((target, pointer));
    }
}

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + unit * (end - start)
    }

    fn gen_bool(&mut self) -> bool {
        self.next_u64() & (1 << 32) != 0
    }
}

fn controller(viewport: Size, content: Size) -> Controller<RecordingHost> {
    let mut c = Controller::with_host(
        ScrollableOptions::new().without_rate_limits(),
        RecordingHost::default(),
    );
    c.on_viewport_resize(viewport, 0);
    c.on_content_resize(content, 0);
    c
}

// Vertical: content 1000, viewport 300, thumb length 90. Horizontal: content fits.
fn tall() -> Controller<RecordingHost> {
    controller(Size::new(300.0, 300.0), Size::new(300.0, 1000.0))
}

fn host(c: &Controller<RecordingHost>) -> &RecordingHost {
    c.scrollable().host().unwrap()
}

fn touch(id: u64, x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(PointerId(id), PointerKind::Touch, scrollsync::Point::new(x, y))
}

fn mouse(id: u64, x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(PointerId(id), PointerKind::Mouse, scrollsync::Point::new(x, y))
}

const V_THUMB: PointerTarget = PointerTarget::Thumb(Axis::Vertical);

#[test]
fn wheel_delta_scrolls_vertical_axis() {
    let mut c = controller(Size::new(300.0, 300.0), Size::new(1000.0, 1000.0));
    let out = c.on_wheel(WheelEvent::new(100.0, false), 1).unwrap();

    assert!(out.should_prevent_default());
    assert_eq!(out.event().map(|e| e.axis), Some(Axis::Vertical));
    assert_eq!(c.scrollable().scroll_top(), 100.0);
    assert_eq!(c.scrollable().scroll_left(), 0.0);
}

#[test]
fn wheel_with_shift_scrolls_horizontal_axis() {
    let mut c = controller(Size::new(300.0, 300.0), Size::new(1000.0, 1000.0));
    let out = c.on_wheel(WheelEvent::new(100.0, true), 1).unwrap();

    assert!(out.should_prevent_default());
    assert_eq!(c.scrollable().scroll_top(), 0.0);
    assert_eq!(c.scrollable().scroll_left(), 100.0);
    assert_eq!(host(&c).scroll_writes, vec![(Axis::Horizontal, 100.0)]);
}

#[test]
fn wheel_at_edge_is_left_to_bubble() {
    let mut c = tall();
    let out = c.on_wheel(WheelEvent::new(-40.0, false), 1).unwrap();
    assert_eq!(out, WheelOutcome::Ignored);
    assert!(!out.should_prevent_default());

    // Horizontal content fits: nothing to scroll either.
    let out = c.on_wheel(WheelEvent::new(40.0, true), 2).unwrap();
    assert_eq!(out, WheelOutcome::Ignored);
    assert!(host(&c).scroll_writes.is_empty());
}

#[test]
fn wheel_overshoot_is_clamped() {
    let mut c = tall();
    let out = c.on_wheel(WheelEvent::new(5_000.0, false), 1).unwrap();
    let e = out.event().copied().unwrap();
    assert_eq!(e.offset, 700.0);
    assert!(e.at_end);
}

#[test]
fn wheel_errors_propagate() {
    let mut c = Controller::<RecordingHost>::new(ScrollableOptions::new());
    assert_eq!(
        c.on_wheel(WheelEvent::new(10.0, false), 0),
        Err(ScrollError::NotMounted)
    );

    let mut c = tall();
    assert!(matches!(
        c.on_wheel(WheelEvent::new(f64::INFINITY, false), 0),
        Err(ScrollError::NonFiniteOffset { .. })
    ));
}

#[test]
fn touch_drag_moves_content_against_pointer() {
    let mut c = tall();
    assert!(c.on_pointer_down(PointerTarget::Content, &touch(1, 0.0, 200.0)).unwrap());
    assert_eq!(host(&c).captures, vec![(PointerTarget::Content, PointerId(1))]);

    let out = c
        .on_pointer_move(PointerTarget::Content, &touch(1, 0.0, 150.0), 1)
        .unwrap();
    assert_eq!(out.vertical.map(|e| e.offset), Some(50.0));
    assert_eq!(out.horizontal, None);

    c.on_pointer_move(PointerTarget::Content, &touch(1, 0.0, 100.0), 2)
        .unwrap();
    assert_eq!(c.scrollable().scroll_top(), 100.0);

    // Dragging down scrolls back up.
    c.on_pointer_move(PointerTarget::Content, &touch(1, 0.0, 130.0), 3)
        .unwrap();
    assert_eq!(c.scrollable().scroll_top(), 70.0);
}

#[test]
fn touch_drag_ignores_other_pointers() {
    let mut c = tall();
    c.on_pointer_down(PointerTarget::Content, &touch(1, 0.0, 200.0))
        .unwrap();

    let out = c
        .on_pointer_move(PointerTarget::Content, &touch(2, 0.0, 0.0), 1)
        .unwrap();
    assert_eq!(out, AxisPair::default());
    let secondary = touch(1, 0.0, 0.0).with_primary(false);
    c.on_pointer_move(PointerTarget::Content, &secondary, 2)
        .unwrap();
    assert_eq!(c.scrollable().scroll_top(), 0.0);

    c.on_pointer_up(PointerTarget::Content, &touch(2, 0.0, 0.0));
    assert!(c.is_dragging(PointerTarget::Content));
    c.on_pointer_up(PointerTarget::Content, &touch(1, 0.0, 0.0));
    assert!(!c.is_dragging(PointerTarget::Content));

    c.on_pointer_move(PointerTarget::Content, &touch(1, 0.0, 0.0), 3)
        .unwrap();
    assert_eq!(c.scrollable().scroll_top(), 0.0);
}

#[test]
fn diagonal_touch_drag_echo_is_suppressed() {
    let mut c = controller(Size::new(300.0, 300.0), Size::new(900.0, 1000.0));
    c.on_pointer_down(PointerTarget::Content, &touch(1, 100.0, 100.0))
        .unwrap();

    // Left by 40.37 scrolls horizontally; down by 10 is blocked at the top edge.
    let out = c
        .on_pointer_move(PointerTarget::Content, &touch(1, 59.63, 110.0), 1)
        .unwrap();
    assert_eq!(out.horizontal.map(|e| e.offset), Some(40.37));
    assert_eq!(out.vertical, None);
    assert!(c.scrollable().echo_suppressor().is_armed());

    // The host reports our write snapped to a whole pixel.
    let out = c.on_native_scroll(ScrollPosition::new(40.0, 0.0), 2);
    assert_eq!(out, AxisPair::default());
    assert_eq!(c.scrollable().scroll_left(), 40.37);
}

#[test]
fn mouse_on_content_never_drags() {
    let mut c = tall();
    assert!(!c.on_pointer_down(PointerTarget::Content, &mouse(1, 0.0, 200.0)).unwrap());
    c.on_pointer_move(PointerTarget::Content, &mouse(1, 0.0, 0.0), 1)
        .unwrap();
    assert_eq!(c.scrollable().scroll_top(), 0.0);
    assert!(host(&c).captures.is_empty());
}

#[test]
fn pointer_cancel_ends_touch_drag() {
    let mut c = tall();
    c.on_pointer_down(PointerTarget::Content, &touch(1, 0.0, 200.0))
        .unwrap();
    c.on_pointer_cancel(PointerTarget::Content, &touch(1, 0.0, 200.0));
    assert!(!c.is_dragging(PointerTarget::Content));
}

#[test]
fn thumb_drag_maps_track_distance_to_content() {
    let mut c = tall();
    assert!(c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap());
    assert_eq!(c.thumb_drag(Axis::Vertical).grab_offset(), 10.0);
    assert_eq!(host(&c).captures, vec![(V_THUMB, PointerId(7))]);

    let out = c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 40.0), 1).unwrap();
    assert_eq!(out.vertical.map(|e| e.offset), Some(100.0));
    assert_eq!(c.scrollable().thumb(Axis::Vertical).offset(), 30.0);
    assert_eq!(host(&c).scroll_writes.last(), Some(&(Axis::Vertical, 100.0)));
}

#[test]
fn thumb_drag_ignores_other_pointers() {
    let mut c = tall();
    c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap();

    let out = c.on_pointer_move(V_THUMB, &mouse(8, 5.0, 40.0), 1).unwrap();
    assert_eq!(out, AxisPair::default());
    let secondary = mouse(7, 5.0, 40.0).with_primary(false);
    let out = c.on_pointer_move(V_THUMB, &secondary, 2).unwrap();
    assert_eq!(out, AxisPair::default());
    assert_eq!(c.scrollable().scroll_top(), 0.0);

    c.on_pointer_up(V_THUMB, &mouse(8, 5.0, 40.0));
    c.on_lost_pointer_capture(V_THUMB, PointerId(8));
    assert!(c.is_dragging(V_THUMB));

    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 40.0), 3).unwrap();
    assert_eq!(c.scrollable().scroll_top(), 100.0);
}

#[test]
fn thumb_drag_pins_to_track_ends() {
    let mut c = tall();
    c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap();

    // Past the end of the track, accounting for the grab point.
    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 290.0), 1).unwrap();
    assert_eq!(c.scrollable().scroll_top(), 700.0);
    assert_eq!(c.scrollable().thumb(Axis::Vertical).offset(), 210.0);

    let out = c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 250.0), 2).unwrap();
    assert_eq!(out, AxisPair::default());

    // Back inside: the thumb follows the grab point again, without a jump.
    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 200.0), 3).unwrap();
    assert_eq!(c.scrollable().thumb(Axis::Vertical).offset(), 190.0);
    assert_eq!(c.scrollable().scroll_top(), 633.33);

    // Before the start of the track.
    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, -50.0), 4).unwrap();
    assert_eq!(c.scrollable().scroll_top(), 0.0);
    assert_eq!(c.scrollable().thumb(Axis::Vertical).offset(), 0.0);
}

#[test]
fn thumb_drag_requires_visible_thumb_and_primary_pointer() {
    let mut c = tall();
    let h_thumb = PointerTarget::Thumb(Axis::Horizontal);
    assert!(!c.on_pointer_down(h_thumb, &mouse(1, 5.0, 5.0)).unwrap());

    let pen = PointerEvent::new(PointerId(2), PointerKind::Pen, scrollsync::Point::new(5.0, 5.0));
    assert!(!c.on_pointer_down(V_THUMB, &pen).unwrap());

    let secondary = touch(3, 5.0, 5.0).with_primary(false);
    assert!(!c.on_pointer_down(V_THUMB, &secondary).unwrap());

    assert!(c.on_pointer_down(V_THUMB, &touch(4, 5.0, 5.0)).unwrap());
    assert_eq!(host(&c).captures.len(), 1);
}

#[test]
fn lost_capture_ends_thumb_drag() {
    let mut c = tall();
    c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap();
    c.on_lost_pointer_capture(V_THUMB, PointerId(7));
    assert!(!c.is_dragging(V_THUMB));
    assert_eq!(c.thumb_drag(Axis::Vertical).grab_offset(), 0.0);

    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 100.0), 1).unwrap();
    assert_eq!(c.scrollable().scroll_top(), 0.0);
}

#[test]
fn thumb_drag_echo_is_suppressed() {
    let mut c = tall();
    c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap();
    c.on_pointer_move(V_THUMB, &mouse(7, 5.0, 40.0), 1).unwrap();

    let out = c.on_native_scroll(ScrollPosition::new(0.0, 100.0), 2);
    assert_eq!(out, AxisPair::default());
}

#[test]
fn unmount_drops_drag_sessions() {
    let mut c = tall();
    c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)).unwrap();
    c.on_pointer_down(PointerTarget::Content, &touch(8, 0.0, 0.0))
        .unwrap();
    assert!(c.unmount().is_some());
    assert!(!c.is_dragging(V_THUMB));
    assert!(!c.is_dragging(PointerTarget::Content));
    assert_eq!(
        c.on_pointer_down(V_THUMB, &mouse(7, 5.0, 10.0)),
        Err(ScrollError::NotMounted)
    );
}

#[test]
fn random_input_interleaving_keeps_state_consistent() {
    let viewport = Size::new(300.0, 200.0);

    for seed in 0..16u64 {
        let mut rng = Lcg::new(seed);
        let mut c = controller(viewport, Size::new(1200.0, 900.0));
        let mut now = 0u64;

        for _ in 0..400 {
            now += rng.gen_range_u64(0, 40);
            match rng.gen_range_u64(0, 6) {
                0 => {
                    let delta = rng.gen_range_f64(-300.0, 300.0);
                    let shift = rng.gen_bool();
                    c.on_wheel(WheelEvent::new(delta, shift), now).unwrap();
                }
                1 => {
                    let left = rng.gen_range_f64(-100.0, 1_500.0);
                    let top = rng.gen_range_f64(-100.0, 1_500.0);
                    c.on_native_scroll(ScrollPosition::new(left, top), now);
                }
                2 => {
                    let top = rng.gen_range_f64(-500.0, 1_500.0);
                    c.set_scroll_top(top, now).unwrap();
                }
                3 => {
                    let axis = if rng.gen_bool() {
                        Axis::Vertical
                    } else {
                        Axis::Horizontal
                    };
                    let target = PointerTarget::Thumb(axis);
                    let start = c.scrollable().thumb(axis).offset() + 2.0;
                    let at = |v: f64| match axis {
                        Axis::Horizontal => mouse(9, v, 0.0),
                        Axis::Vertical => mouse(9, 0.0, v),
                    };
                    c.on_pointer_down(target, &at(start)).unwrap();
                    for _ in 0..rng.gen_range_u64(1, 6) {
                        let v = rng.gen_range_f64(-50.0, 400.0);
                        c.on_pointer_move(target, &at(v), now).unwrap();
                    }
                    c.on_pointer_up(target, &at(0.0));
                }
                4 => {
                    c.on_pointer_down(PointerTarget::Content, &touch(3, 150.0, 100.0))
                        .unwrap();
                    for _ in 0..rng.gen_range_u64(1, 6) {
                        let x = rng.gen_range_f64(-200.0, 500.0);
                        let y = rng.gen_range_f64(-200.0, 500.0);
                        c.on_pointer_move(PointerTarget::Content, &touch(3, x, y), now)
                            .unwrap();
                    }
                    c.on_pointer_up(PointerTarget::Content, &touch(3, 0.0, 0.0));
                }
                _ => {
                    let width = rng.gen_range_f64(100.0, 1_500.0);
                    let height = rng.gen_range_f64(100.0, 1_500.0);
                    c.on_content_resize(Size::new(width, height), now);
                }
            }

            let s = c.scrollable();
            for axis in Axis::ALL {
                let extent = s.extent(axis).unwrap();
                let offset = s.scroll_offset(axis);
                assert!(offset >= 0.0, "seed={seed} axis={axis:?} offset={offset}");
                assert!(
                    offset <= extent.max_offset(),
                    "seed={seed} axis={axis:?} offset={offset} max={}",
                    extent.max_offset()
                );

                let thumb = s.thumb(axis);
                assert_eq!(
                    thumb.length(),
                    math::thumb_length(extent.viewport, extent.content)
                );
                let expected = if extent.is_scrollable() {
                    math::to_track_space(offset, extent.content, extent.viewport)
                } else {
                    0.0
                };
                assert_eq!(thumb.offset(), expected, "seed={seed} axis={axis:?}");
            }

            // The host echoing the current position never produces an event.
            let echo = ScrollPosition::new(s.scroll_left(), s.scroll_top());
            assert_eq!(c.on_native_scroll(echo, now), AxisPair::default());
        }
    }
}
