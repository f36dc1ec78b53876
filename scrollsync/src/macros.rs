//! Logging shims. With `feature = "tracing"` every event goes to the `scrollsync` target;
//! without it the macros expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
pub(crate) const TARGET: &str = "scrollsync";

#[cfg(feature = "tracing")]
macro_rules! log_at {
    ($level:ident, $($field:tt)*) => {
        tracing::$level!(target: $crate::macros::TARGET, $($field)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_at {
    ($level:ident, $($field:tt)*) => {};
}

/// Per-event detail: intents, native scroll reconciliation, resize recompute.
macro_rules! strace {
    ($($field:tt)*) => { log_at!(trace, $($field)*) };
}

/// Lifecycle: construction, mount, unmount.
macro_rules! sdebug {
    ($($field:tt)*) => { log_at!(debug, $($field)*) };
}

/// Rejected input.
macro_rules! swarn {
    ($($field:tt)*) => { log_at!(warn, $($field)*) };
}
