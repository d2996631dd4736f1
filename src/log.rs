use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("NOTBR_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Builds a message, appending the details only when debug is enabled.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Additional details shown in debug mode.
///
/// # Returns
///
/// A formatted string containing the message and, in debug mode, the details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message with optional formatted arguments to stderr.
///
/// Output goes to stderr so it never mixes with the transformed text.
///
/// # Examples
///
/// ```
/// use notbr::debug;
///
/// // Printed in yellow only when NOTBR_DEBUG is "true" or "1"
/// debug!("Operation completed");
/// debug!("Read {} bytes from {}", 42, "stdin");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
