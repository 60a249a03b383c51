//! `print`/`format` style entry points.
//!
//! Every function renders its operand with the standard formatting
//! machinery first and then surrounds it with the escape sequences of the
//! given [`Color`]. The `*f` variants take [`fmt::Arguments`], usually built
//! through the [`xformat!`](crate::xformat), [`xprint!`](crate::xprint) and
//! [`xwrite!`](crate::xwrite) family of macros.
//!
//! Writers report the number of bytes written. Errors from the sink are
//! returned untouched.

use std::fmt::{self, Display};
use std::io::{self, Write};

use log::debug;

use crate::color::Color;

/// Format `content` and surround it with the escape sequences for `color`.
pub fn sprint<T: Display>(color: Color, content: T) -> String {
    color.paint(content).to_string()
}

/// Templated variant of [`sprint`].
pub fn sprintf(color: Color, args: fmt::Arguments<'_>) -> String {
    color.paint(args).to_string()
}

/// Like [`sprint`], with a newline appended to the content.
///
/// The newline is part of the colored region and precedes the reset
/// sequence.
pub fn sprintln<T: Display>(color: Color, content: T) -> String {
    color.paint(format_args!("{content}\n")).to_string()
}

/// Write the colored `content` to `w`.
///
/// # Errors
///
/// Returns any error raised by `w`.
pub fn fprint<W, T>(color: Color, w: &mut W, content: T) -> io::Result<usize>
where
    W: Write + ?Sized,
    T: Display,
{
    emit(w, sprint(color, content))
}

/// Templated variant of [`fprint`].
///
/// # Errors
///
/// Returns any error raised by `w`.
pub fn fprintf<W>(
    color: Color,
    w: &mut W,
    args: fmt::Arguments<'_>,
) -> io::Result<usize>
where
    W: Write + ?Sized,
{
    emit(w, sprintf(color, args))
}

/// Write the colored `content` to `w` followed by a newline.
///
/// Unlike [`sprintln`], the newline is written after the reset sequence.
///
/// # Errors
///
/// Returns any error raised by `w`.
pub fn fprintln<W, T>(color: Color, w: &mut W, content: T) -> io::Result<usize>
where
    W: Write + ?Sized,
    T: Display,
{
    let mut out = sprint(color, content);
    out.push('\n');
    emit(w, out)
}

/// [`fprint`] to standard output.
///
/// Standard output is flushed afterwards, so output without a trailing
/// newline shows up immediately.
///
/// # Errors
///
/// Returns any error raised while writing to standard output.
pub fn print<T: Display>(color: Color, content: T) -> io::Result<usize> {
    flushed(&mut io::stdout().lock(), |w| fprint(color, w, content))
}

/// [`fprintf`] to standard output, flushed afterwards.
///
/// # Errors
///
/// Returns any error raised while writing to standard output.
pub fn printf(color: Color, args: fmt::Arguments<'_>) -> io::Result<usize> {
    flushed(&mut io::stdout().lock(), |w| fprintf(color, w, args))
}

/// [`fprintln`] to standard output, flushed afterwards.
///
/// # Errors
///
/// Returns any error raised while writing to standard output.
pub fn println<T: Display>(color: Color, content: T) -> io::Result<usize> {
    flushed(&mut io::stdout().lock(), |w| fprintln(color, w, content))
}

fn flushed<W, F>(w: &mut W, write: F) -> io::Result<usize>
where
    W: Write + ?Sized,
    F: FnOnce(&mut W) -> io::Result<usize>,
{
    let written = write(w)?;
    w.flush()?;
    Ok(written)
}

fn emit<W: Write + ?Sized>(w: &mut W, out: String) -> io::Result<usize> {
    if let Err(err) = w.write_all(out.as_bytes()) {
        debug!("[failed write] bytes: {}, error: {err}", out.len());
        return Err(err);
    }

    Ok(out.len())
}
