use std::fmt::{self, Display, Formatter};

/// Escape sequence that switches every rendition attribute off.
pub const RESET: &str = "\x1b[0m";

/// The subset of SGR (Select Graphic Rendition) sequences emitted when
/// coloring text with the xterm 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    /// Resets rendition to defaults.
    Reset,
    /// `CSI 38;5;<code> m`
    Foreground(u8),
    /// `CSI 48;5;<code> m`
    Background(u8),
}

impl Display for Sgr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str(RESET),
            Self::Foreground(code) => write!(f, "\x1b[38;5;{code}m"),
            Self::Background(code) => write!(f, "\x1b[48;5;{code}m"),
        }
    }
}
