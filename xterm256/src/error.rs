use thiserror::Error;

/// Errors produced while building an xterm-256 [`Color`](crate::Color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Xterm256Error {
    #[error("invalid RGB component: ({r}, {g}, {b}) maps to {code}")]
    InvalidColorComponent { r: i32, g: i32, b: i32, code: i64 },
}

pub type Result<T> = std::result::Result<T, Xterm256Error>;
