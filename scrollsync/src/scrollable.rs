use crate::math::{self, PRECISION};
use crate::{
    Axis, AxisPair, Edge, EdgeState, EchoSuppressor, Element, Extent, RateLimiter, ResizeEvent,
    ScrollError, ScrollEvent, ScrollHost, ScrollPosition, ScrollResult, ScrollState,
    ScrollableOptions, Size, Thumb,
};

/// A headless custom-scrollbar engine.
///
/// `Scrollable` owns the authoritative scroll offset of both axes and keeps three
/// representations of it consistent: the host's native scroll position, each thumb's
/// track-space geometry, and the edge-reached state.
///
/// Adapters drive it with:
/// - `on_viewport_resize` / `on_content_resize` when the geometry observer fires
/// - `on_native_scroll` when the host reports a native scroll event
/// - `apply_scroll_intent` for every other scroll request (wheel, drags, programmatic)
/// - `tick(now_ms)` on a timer or per frame, to deliver rate-limited notifications
///
/// Only the engine writes the native scroll position and the thumb geometry. Every write
/// to the native position arms the echo suppressor first so the resulting native scroll
/// event is recognized as self-caused.
#[derive(Clone, Debug)]
pub struct Scrollable<H> {
    options: ScrollableOptions,
    host: Option<H>,
    viewport: Option<Size>,
    content: Option<Size>,
    offsets: AxisPair<f64>,
    thumbs: AxisPair<Thumb>,
    // Last edge state seen by `on_edge_reached`; only used to detect transitions.
    reported_edges: AxisPair<EdgeState>,
    echo: EchoSuppressor,
    scroll_limiters: AxisPair<RateLimiter<ScrollEvent>>,
    resize_limiter: RateLimiter<ResizeEvent>,
}

impl<H: ScrollHost> Scrollable<H> {
    /// Creates an unmounted engine. Geometry may be fed before a host is mounted.
    pub fn new(options: ScrollableOptions) -> Self {
        sdebug!(content_id = %options.content_id, "Scrollable::new");
        Self {
            host: None,
            viewport: None,
            content: None,
            offsets: AxisPair::default(),
            thumbs: AxisPair::from_fn(Thumb::new),
            reported_edges: AxisPair::default(),
            echo: EchoSuppressor::new(),
            scroll_limiters: AxisPair::from_fn(|_| RateLimiter::new(options.scroll_rate_limit)),
            resize_limiter: RateLimiter::new(options.resize_rate_limit),
            options,
        }
    }

    pub fn with_host(options: ScrollableOptions, host: H) -> Self {
        let mut s = Self::new(options);
        s.mount(host);
        s
    }

    pub fn options(&self) -> &ScrollableOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollableOptions) {
        let content_id_changed = options.content_id != self.options.content_id;
        self.options = options;
        for axis in Axis::ALL {
            self.scroll_limiters[axis].set_policy(self.options.scroll_rate_limit);
        }
        self.resize_limiter.set_policy(self.options.resize_rate_limit);

        if !content_id_changed {
            return;
        }
        if let Some(host) = self.host.as_mut() {
            let id = self.options.content_id.as_str();
            host.set_attribute(Element::Content, "id", id);
            for axis in Axis::ALL {
                host.set_attribute(Element::Thumb(axis), "aria-controls", id);
            }
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollableOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Attaches the visual surface and writes the current state to it.
    ///
    /// Returns the previously mounted host, if any.
    pub fn mount(&mut self, mut host: H) -> Option<H> {
        sdebug!(content_id = %self.options.content_id, "Scrollable::mount");
        host.set_attribute(Element::Content, "id", &self.options.content_id);
        for axis in Axis::ALL {
            let offset = self.offsets[axis];
            self.thumbs[axis].mount(&mut host, &self.options.content_id, offset);
            if offset != 0.0 {
                self.echo.arm();
                host.write_scroll_offset(axis, offset);
            }
        }
        self.host.replace(host)
    }

    /// Detaches the visual surface. Pending notifications stay queued.
    pub fn unmount(&mut self) -> Option<H> {
        sdebug!("Scrollable::unmount");
        self.echo.clear();
        self.host.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Viewport/content extents along `axis`, or `None` until both surfaces were measured.
    pub fn extent(&self, axis: Axis) -> Option<Extent> {
        Some(Extent::along(axis, self.viewport?, self.content?))
    }

    pub fn scroll_offset(&self, axis: Axis) -> f64 {
        self.offsets[axis]
    }

    pub fn scroll_top(&self) -> f64 {
        self.offsets.vertical
    }

    pub fn scroll_left(&self) -> f64 {
        self.offsets.horizontal
    }

    pub fn thumb(&self, axis: Axis) -> &Thumb {
        &self.thumbs[axis]
    }

    pub fn has_scrollbar(&self, axis: Axis) -> bool {
        !self.thumbs[axis].is_hidden()
    }

    /// Edge state recomputed from the current extent and offset.
    pub fn edges(&self, axis: Axis) -> EdgeState {
        match self.extent(axis) {
            Some(extent) => EdgeState::compute(self.offsets[axis], extent),
            None => EdgeState::default(),
        }
    }

    pub fn echo_suppressor(&self) -> &EchoSuppressor {
        &self.echo
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            offsets: self.offsets,
            thumbs: self.thumbs.map(|_, thumb| thumb.geometry()),
            edges: AxisPair::from_fn(|axis| self.edges(axis)),
            viewport: self.viewport,
            content: self.content,
        }
    }

    /// Whether a rate-limited notification is waiting for `tick`/`flush`.
    pub fn has_pending_notifications(&self) -> bool {
        self.resize_limiter.has_pending()
            || Axis::ALL
                .iter()
                .any(|&axis| self.scroll_limiters[axis].has_pending())
    }

    /// Geometry observer callback for the viewport (clipping box).
    ///
    /// Returns the recomputed resize payload, or `None` when the size is unchanged or the
    /// content has not been measured yet. Delivery to `on_resize` is rate-limited
    /// separately.
    pub fn on_viewport_resize(&mut self, size: Size, now_ms: u64) -> Option<ResizeEvent> {
        if self.viewport == Some(size) {
            return None;
        }
        self.viewport = Some(size);
        self.recompute_geometry(now_ms)
    }

    /// Geometry observer callback for the content box. See `on_viewport_resize`.
    pub fn on_content_resize(&mut self, size: Size, now_ms: u64) -> Option<ResizeEvent> {
        if self.content == Some(size) {
            return None;
        }
        self.content = Some(size);
        self.recompute_geometry(now_ms)
    }

    fn recompute_geometry(&mut self, now_ms: u64) -> Option<ResizeEvent> {
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            strace!("recompute_geometry: surfaces not measured yet");
            return None;
        };

        for axis in Axis::ALL {
            let extent = Extent::along(axis, viewport, content);
            let length = math::thumb_length(extent.viewport, extent.content);
            self.thumbs[axis].set_length(length, self.host.as_mut());

            // Content shrank under the current offset: reclamp through the regular write
            // path so the host, the thumb and the consumer all see it.
            let current = self.offsets[axis];
            let reclamped =
                extent.clamp(current) != current && self.apply_intent(axis, current, now_ms).is_some();
            if !reclamped {
                self.sync_thumb_offset(axis, extent);
                self.reported_edges[axis] = EdgeState::compute(self.offsets[axis], extent);
            }
        }

        let payload = ResizeEvent {
            h_thumb_length: self.thumbs.horizontal.length(),
            v_thumb_length: self.thumbs.vertical.length(),
            scroll_left: self.offsets.horizontal,
            scroll_top: self.offsets.vertical,
        };
        strace!(
            h_thumb_length = payload.h_thumb_length,
            v_thumb_length = payload.v_thumb_length,
            scroll_left = payload.scroll_left,
            scroll_top = payload.scroll_top,
            "recompute_geometry"
        );
        if let Some(event) = self.resize_limiter.call(payload, now_ms) {
            self.deliver_resize(event);
        }
        Some(payload)
    }

    /// Requests a new scroll offset for `axis`.
    ///
    /// The offset is clamped to the valid range and rounded to the conversion precision.
    /// When that changes the current offset, the native position, the thumb and the edge
    /// state are updated and a scroll event is emitted (rate-limited); the event is also
    /// returned. Returns `Ok(None)` when nothing changed or geometry is not known yet.
    pub fn apply_scroll_intent(
        &mut self,
        axis: Axis,
        offset: f64,
        now_ms: u64,
    ) -> ScrollResult<Option<ScrollEvent>> {
        if self.host.is_none() {
            return Err(ScrollError::NotMounted);
        }
        if !offset.is_finite() {
            swarn!(?axis, offset, "apply_scroll_intent: non-finite offset");
            return Err(ScrollError::NonFiniteOffset {
                axis,
                value: offset,
            });
        }
        Ok(self.apply_intent(axis, offset, now_ms))
    }

    pub fn set_scroll_top(&mut self, value: f64, now_ms: u64) -> ScrollResult<Option<ScrollEvent>> {
        self.apply_scroll_intent(Axis::Vertical, value, now_ms)
    }

    pub fn set_scroll_left(
        &mut self,
        value: f64,
        now_ms: u64,
    ) -> ScrollResult<Option<ScrollEvent>> {
        self.apply_scroll_intent(Axis::Horizontal, value, now_ms)
    }

    fn apply_intent(&mut self, axis: Axis, offset: f64, now_ms: u64) -> Option<ScrollEvent> {
        let extent = self.extent(axis)?;
        // Clamp last: rounding must not push past an unrounded `max_offset`.
        let next = extent.clamp(math::round_to(offset, PRECISION));
        if next == self.offsets[axis] {
            return None;
        }
        strace!(?axis, from = self.offsets[axis], to = next, now_ms, "apply_intent");

        // The marker is only touched by an actual write. A no-op intent on one axis must
        // not drop a marker the other axis armed in the same input batch.
        if let Some(host) = self.host.as_mut() {
            self.echo.arm();
            host.write_scroll_offset(axis, next);
        }
        self.offsets[axis] = next;
        Some(self.reconcile(axis, extent, now_ms))
    }

    /// Native scroll event callback.
    ///
    /// Each axis is compared against its last known offset on its own, so a diagonal
    /// gesture updates both. A self-caused event (echo suppressor armed) only absorbs
    /// differences within the comparison tolerance, which is how a host's sub-pixel
    /// snapping of our own write shows up; larger differences are still genuine.
    pub fn on_native_scroll(
        &mut self,
        position: ScrollPosition,
        now_ms: u64,
    ) -> AxisPair<Option<ScrollEvent>> {
        let suppressed = self.echo.take();
        let mut out = AxisPair::default();

        for axis in Axis::ALL {
            let native = position.get(axis);
            if !native.is_finite() {
                swarn!(?axis, native, "on_native_scroll: non-finite offset");
                continue;
            }
            let known = self.offsets[axis];
            if native == known {
                continue;
            }
            if suppressed && math::is_equal(native, known) {
                strace!(?axis, native, known, "on_native_scroll: echo suppressed");
                continue;
            }

            let Some(extent) = self.extent(axis) else {
                self.offsets[axis] = native.max(0.0);
                continue;
            };
            // Overscroll and sub-tolerance overflow report positions outside the valid
            // range; they only count when the clamped offset moves.
            let next = extent.clamp(native);
            if next == known {
                continue;
            }
            strace!(?axis, from = known, to = next, now_ms, "on_native_scroll");
            // The host already shows `native`; only the derived state follows it.
            self.offsets[axis] = next;
            out[axis] = Some(self.reconcile(axis, extent, now_ms));
        }

        out
    }

    /// Single-axis form of `on_native_scroll`; the other axis keeps its known offset.
    pub fn on_native_scroll_axis(
        &mut self,
        axis: Axis,
        offset: f64,
        now_ms: u64,
    ) -> Option<ScrollEvent> {
        let mut position = ScrollPosition::new(self.offsets.horizontal, self.offsets.vertical);
        match axis {
            Axis::Horizontal => position.left = offset,
            Axis::Vertical => position.top = offset,
        }
        self.on_native_scroll(position, now_ms)[axis]
    }

    fn reconcile(&mut self, axis: Axis, extent: Extent, now_ms: u64) -> ScrollEvent {
        self.sync_thumb_offset(axis, extent);

        let offset = self.offsets[axis];
        let edges = EdgeState::compute(offset, extent);
        self.report_edges(axis, edges);

        let event = ScrollEvent {
            axis,
            offset,
            at_start: edges.at_start,
            at_end: edges.at_end,
        };
        if let Some(event) = self.scroll_limiters[axis].call(event, now_ms) {
            self.deliver_scroll(event);
        }
        event
    }

    fn sync_thumb_offset(&mut self, axis: Axis, extent: Extent) {
        let offset = self.offsets[axis];
        let track_offset = if extent.is_scrollable() {
            math::to_track_space(offset, extent.content, extent.viewport)
        } else {
            0.0
        };
        self.thumbs[axis].set_offset(track_offset, offset, self.host.as_mut());
    }

    fn report_edges(&mut self, axis: Axis, edges: EdgeState) {
        let prev = core::mem::replace(&mut self.reported_edges[axis], edges);
        let Some(cb) = &self.options.on_edge_reached else {
            return;
        };
        for edge in [Edge::Start, Edge::End] {
            if edges.is_at(edge) && !prev.is_at(edge) {
                cb(axis, edge);
            }
        }
    }

    /// Delivers rate-limited notifications whose window has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        for axis in Axis::ALL {
            if let Some(event) = self.scroll_limiters[axis].poll(now_ms) {
                self.deliver_scroll(event);
            }
        }
        if let Some(event) = self.resize_limiter.poll(now_ms) {
            self.deliver_resize(event);
        }
    }

    /// Delivers every pending notification immediately.
    pub fn flush(&mut self) {
        for axis in Axis::ALL {
            if let Some(event) = self.scroll_limiters[axis].flush() {
                self.deliver_scroll(event);
            }
        }
        if let Some(event) = self.resize_limiter.flush() {
            self.deliver_resize(event);
        }
    }

    fn deliver_scroll(&self, event: ScrollEvent) {
        if let Some(cb) = &self.options.on_scroll {
            cb(event);
        }
    }

    fn deliver_resize(&self, event: ResizeEvent) {
        if let Some(cb) = &self.options.on_resize {
            cb(event);
        }
    }
}
