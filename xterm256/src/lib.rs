//! Color terminal output with the xterm 256-color palette.
//!
//! ```
//! use xterm256::{Color, sprint};
//!
//! let mut orange = Color::new(3, 1, 0)?;
//! orange.set_background(5, 5, 5)?;
//!
//! assert_eq!(
//!     sprint(orange, "Bar"),
//!     "\x1b[38;5;130m\x1b[48;5;231mBar\x1b[0m"
//! );
//! # Ok::<(), xterm256::Xterm256Error>(())
//! ```

mod color;
mod error;
pub mod escape;
mod macros;
mod paint;
mod print;
mod sgr;

pub use color::{Color, rgb_to_code};
pub use error::{Result, Xterm256Error};
pub use paint::{Painted, wrap};
pub use print::{
    fprint, fprintf, fprintln, print, printf, println, sprint, sprintf,
    sprintln,
};
pub use sgr::{RESET, Sgr};
