//! Logging macros
//!
//! Each macro hands `emit` a closure, so the event and its formatted
//! context values are only built when the global service accepts the level.
//! Context values may be anything implementing `Display`.

/// `log_error!(code, message [, line = n] [, "key" => value]*)`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, line = $line:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, || {
            $crate::logging::LogEvent::error($code, $message)
                .with_line($line)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, || {
            $crate::logging::LogEvent::error($code, $message)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };
}

/// `log_success!(code, message [, "key" => value]*)`, logged at info level
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            $crate::logging::LogEvent::success($code, $message)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            $crate::logging::LogEvent::info($message)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };
}

#[macro_export]
macro_rules! log_warning {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Warning, || {
            $crate::logging::LogEvent::warning($message)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };
}

#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, || {
            $crate::logging::LogEvent::debug($message)
                $(.with_context($key, &format!("{}", $value)))*
        })
    };
}
