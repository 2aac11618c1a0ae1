//! Logging hooks.
//!
//! With the `trace` feature the macros forward to `tracing`; without it they
//! expand to nothing, so the hot path carries no logging cost.

#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
