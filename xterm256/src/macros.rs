/// Like [`format!`], with the result colored by a [`Color`](crate::Color).
///
/// ```
/// use xterm256::{Color, xformat};
///
/// let s = xformat!(Color::RED, "{} apples", 3);
/// assert_eq!(s, "\x1b[38;5;9m3 apples\x1b[0m");
/// ```
#[macro_export]
macro_rules! xformat {
    ($color:expr, $($arg:tt)*) => {
        $crate::sprintf($color, ::std::format_args!($($arg)*))
    };
}

/// Like [`print!`], colored. Evaluates to `io::Result<usize>`.
#[macro_export]
macro_rules! xprint {
    ($color:expr, $($arg:tt)*) => {
        $crate::printf($color, ::std::format_args!($($arg)*))
    };
}

/// Like [`println!`], colored. The newline follows the reset sequence.
/// Evaluates to `io::Result<usize>`.
#[macro_export]
macro_rules! xprintln {
    ($color:expr, $($arg:tt)*) => {
        $crate::println($color, ::std::format_args!($($arg)*))
    };
}

/// Like [`write!`] on an [`io::Write`](std::io::Write), colored.
/// Evaluates to `io::Result<usize>`.
#[macro_export]
macro_rules! xwrite {
    ($dst:expr, $color:expr, $($arg:tt)*) => {
        $crate::fprintf($color, &mut $dst, ::std::format_args!($($arg)*))
    };
}

/// Like [`writeln!`] on an [`io::Write`](std::io::Write), colored. The
/// newline follows the reset sequence. Evaluates to `io::Result<usize>`.
#[macro_export]
macro_rules! xwriteln {
    ($dst:expr, $color:expr, $($arg:tt)*) => {
        $crate::fprintln($color, &mut $dst, ::std::format_args!($($arg)*))
    };
}
