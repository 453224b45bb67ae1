//! Phase logging, compiled out unless the `tracing` feature is enabled.

macro_rules! debug_phase {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

macro_rules! trace_phase {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}
