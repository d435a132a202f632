//! Internal logging shims.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it they
//! expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_walk {
    ($($arg:tt)*) => { ::tracing::trace!(target: "vertex_dfs", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_walk {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_walk {
    ($($arg:tt)*) => { ::tracing::debug!(target: "vertex_dfs", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_walk {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_walk;
pub(crate) use trace_walk;
