use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Axis, Edge, RateLimit, ResizeEvent, ScrollEvent};

/// A callback fired (rate-limited) for every reconciled scroll change.
pub type OnScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// A callback fired (rate-limited) after the viewport or content was resized.
pub type OnResizeCallback = Arc<dyn Fn(ResizeEvent) + Send + Sync>;

/// A callback fired synchronously when an axis arrives at one of its edges.
pub type OnEdgeReachedCallback = Arc<dyn Fn(Axis, Edge) + Send + Sync>;

static NEXT_CONTENT_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a process-unique id for the content element.
pub fn generate_content_id() -> String {
    let n = NEXT_CONTENT_ID.fetch_add(1, Ordering::Relaxed);
    format!("scrollsync-content-{n}")
}

/// Configuration for [`crate::Scrollable`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct ScrollableOptions {
    /// Id of the content element, referenced by each thumb's `aria-controls`.
    pub content_id: String,

    /// Rate limiting of `on_scroll`. Each axis is limited independently so a burst on one
    /// axis never swallows the other axis' last event.
    pub scroll_rate_limit: RateLimit,

    /// Rate limiting of `on_resize`.
    pub resize_rate_limit: RateLimit,

    pub on_scroll: Option<OnScrollCallback>,
    pub on_resize: Option<OnResizeCallback>,

    /// Fired on the transition onto an edge, not while the offset stays there. Not
    /// rate-limited.
    pub on_edge_reached: Option<OnEdgeReachedCallback>,
}

impl ScrollableOptions {
    pub fn new() -> Self {
        Self {
            content_id: generate_content_id(),
            scroll_rate_limit: RateLimit::trailing(100),
            resize_rate_limit: RateLimit::leading(300),
            on_scroll: None,
            on_resize: None,
            on_edge_reached: None,
        }
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = content_id.into();
        self
    }

    pub fn with_scroll_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.scroll_rate_limit = rate_limit;
        self
    }

    pub fn with_resize_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.resize_rate_limit = rate_limit;
        self
    }

    /// Disables rate limiting on both channels. Mostly useful for tests and for hosts
    /// that already coalesce events per frame.
    pub fn without_rate_limits(mut self) -> Self {
        self.scroll_rate_limit = RateLimit::NONE;
        self.resize_rate_limit = RateLimit::NONE;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_resize(
        mut self,
        on_resize: Option<impl Fn(ResizeEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_resize = on_resize.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_edge_reached(
        mut self,
        on_edge_reached: Option<impl Fn(Axis, Edge) + Send + Sync + 'static>,
    ) -> Self {
        self.on_edge_reached = on_edge_reached.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ScrollableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ScrollableOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollableOptions")
            .field("content_id", &self.content_id)
            .field("scroll_rate_limit", &self.scroll_rate_limit)
            .field("resize_rate_limit", &self.resize_rate_limit)
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_edge_reached", &self.on_edge_reached.is_some())
            .finish()
    }
}
