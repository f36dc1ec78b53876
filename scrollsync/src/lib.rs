//! A headless custom-scrollbar engine.
//!
//! For input adapters (wheel, touch drag, thumb drag) and a routing controller, see the
//! `scrollsync-adapter` crate.
//!
//! This crate keeps three coupled coordinate spaces in sync for each axis: the native
//! scroll offset of a clipping viewport, the pixel geometry of a custom scrollbar thumb,
//! and the content/viewport ratio that maps one onto the other. It also tells its own
//! programmatic scroll writes apart from user-driven native scrolling, so the two never
//! feed back into each other.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport and content sizes (from a geometry-change observer)
//! - native scroll events
//! - a [`ScrollHost`] that applies scroll positions, thumb geometry and attributes
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod echo;
mod error;
mod host;
pub mod math;
mod options;
mod rate_limit;
mod scrollable;
mod state;
mod thumb;
mod types;


pub use echo::EchoSuppressor;
pub use error::{ScrollError, ScrollResult};
pub use host::{Element, ScrollHost};
pub use options::{
    OnEdgeReachedCallback, OnResizeCallback, OnScrollCallback, ScrollableOptions,
    generate_content_id,
};
pub use rate_limit::{RateLimit, RateLimiter};
pub use scrollable::Scrollable;
pub use state::ScrollState;
pub use thumb::Thumb;
pub use types::{
    Axis, AxisPair, Edge, EdgeState, Extent, Point, ResizeEvent, ScrollEvent, ScrollPosition,
    Size, ThumbGeometry,
};
