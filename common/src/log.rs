//! Logging helpers shared by every crate.
//!
//! Everything goes through `tracing`; the CLI formatter decides how it looks.

/// Target used for events that mark a finished milestone of a run.
pub const SUCCESS_TARGET: &str = "lbnode::success";

/// Logs a milestone at `INFO` under [`SUCCESS_TARGET`].
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
