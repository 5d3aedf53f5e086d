use std::fmt;
use std::io::Write;

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
}

/// Write `time | <color>message<reset>` to a locked stderr.
pub fn stamped_line(color: &str, args: fmt::Arguments<'_>) {
    let time = chrono::Local::now().format("%Y/%m/%d %H:%M:%S%.3f");
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{}{time} | {}{color}{args}{}",
        cc::LIGHT_GRAY,
        cc::RESET,
        cc::RESET
    );
}

#[macro_export]
macro_rules! log {
    // default color: log!("block: {}", n);
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::libs::writing::stamped_line(
            $crate::libs::writing::cc::LIGHT_GRAY,
            format_args!($fmt $(, $arg)*),
        )
    };

    // colored: log!(cc::GREEN, "block: {}", n);
    ($color:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::libs::writing::stamped_line($color, format_args!($fmt $(, $arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}\n",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}
