//! Process-wide switch for generation tracing
//!
//! Tracing is off unless [`init`] turns it on. The flag can be set only once, normally at
//! startup, and it never changes what the generators produce.

use once_cell::sync::OnceCell;

static TRACING: OnceCell<bool> = OnceCell::new();

/// Set whether generation steps are traced. Returns `false` if the flag was already set,
/// in which case the earlier setting stays in effect.
pub fn init(enabled: bool) -> bool {
    TRACING.set(enabled).is_ok()
}

/// Returns true if generation steps are being traced
pub fn tracing_enabled() -> bool {
    TRACING.get().copied().unwrap_or(false)
}

macro_rules! trace_step {
    ($($arg:tt)+) => {
        if $crate::diagnostics::tracing_enabled() {
            log::trace!($($arg)+);
        }
    };
}
