//! Status-line macros.
//!
//! These forward to `tracing` so that the subscriber installed by the binary decides
//! where and how the lines end up. [`success!`](crate::success) tags the event with
//! `status = "success"`, which the terminal formatter renders with its own symbol.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
