#[cfg(feature = "tracing")]
pub(crate) const TARGET: &str = "scrollsync_adapter";

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

// Wheel routing and drag moves.
macro_rules! strace {
    ($($field:tt)*) => { log_at!(trace, $($field)*) };
}

// Drag session start and end.
macro_rules! sdebug {
    ($($field:tt)*) => { log_at!(debug, $($field)*) };
}
