//! Helper to set the backtrace env var.

use std::sync::Once;

static INIT: Once = Once::new();

/// Sets `RUST_BACKTRACE=1` unless a value has already been provided.
///
/// Only the first call has any effect. Call it at the top of `main`, before any other thread
/// is spawned.
pub fn enable() {
    INIT.call_once(|| {
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            // SAFETY: called once from `main` before the process spawns threads.
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        }
    });
}
