//! Input adapters for the `scrollsync` crate.
//!
//! The `scrollsync` engine is UI-agnostic and only knows about scroll intents and native
//! scroll events. This crate turns raw input into intents, in a framework-neutral way:
//!
//! - Mouse wheel, with the shift modifier selecting the horizontal axis
//! - Touch drag on the content (mouse clicks on the content never scroll)
//! - Pointer drag on either thumb, pinned to the track ends when the pointer leaves it
//!
//! [`Controller`] bundles an engine with one adapter per channel.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod pointer;
mod session;
mod thumb_drag;
mod touch;
mod wheel;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use pointer::{PointerCapture, PointerEvent, PointerId, PointerKind, PointerTarget, WheelEvent};
pub use session::DragSession;
pub use thumb_drag::ThumbDrag;
pub use touch::ContentDrag;
pub use wheel::{WheelOutcome, on_wheel};
