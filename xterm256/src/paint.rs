use std::fmt::{self, Display, Formatter};

use crate::color::Color;
use crate::sgr::Sgr;

/// Content rendered between a [`Color`]'s escape sequences and a reset.
///
/// Produced by [`Color::paint`]. Formatting flags such as width or
/// precision apply to the content only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painted<T> {
    color: Color,
    content: T,
}

impl<T> Painted<T> {
    pub(crate) fn new(color: Color, content: T) -> Self {
        Self { color, content }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn content(&self) -> &T {
        &self.content
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.color.foreground() {
            write!(f, "{}", Sgr::Foreground(code))?;
        }
        if let Some(code) = self.color.background() {
            write!(f, "{}", Sgr::Background(code))?;
        }

        self.content.fmt(f)?;

        // Always reset, even when nothing was colored.
        write!(f, "{}", Sgr::Reset)
    }
}

/// Surround `payload` with the escape sequences for `color`.
pub fn wrap(color: Color, payload: &str) -> String {
    color.paint(payload).to_string()
}
