//! Call-site macros for the five severities.
//!
//! Each captures `file!()` / `line!()` where it is invoked and routes through
//! the process-wide logger. Before `init` has run they are no-ops.

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log_at($crate::Level::Debug, ::std::format_args!($($arg)*), ::std::file!(), ::std::line!())
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log_at($crate::Level::Info, ::std::format_args!($($arg)*), ::std::file!(), ::std::line!())
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::log_at($crate::Level::Warning, ::std::format_args!($($arg)*), ::std::file!(), ::std::line!())
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log_at($crate::Level::Error, ::std::format_args!($($arg)*), ::std::file!(), ::std::line!())
    };
}

#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        $crate::log_at($crate::Level::Critical, ::std::format_args!($($arg)*), ::std::file!(), ::std::line!())
    };
}
