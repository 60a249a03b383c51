//! Raw escape sequences for callers that build colored output by hand.

use crate::sgr::Sgr;

pub use crate::sgr::RESET;

/// `ESC[38;5;<code>m`: switch the foreground to palette entry `code`.
pub fn foreground(code: u8) -> String {
    Sgr::Foreground(code).to_string()
}

/// `ESC[48;5;<code>m`: switch the background to palette entry `code`.
pub fn background(code: u8) -> String {
    Sgr::Background(code).to_string()
}
