use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, Xterm256Error};
use crate::paint::Painted;

/// Index of the first entry of the 6x6x6 color cube.
const CUBE_START: i64 = 16;

/// Convert `r`, `g` and `b` components (each expected in `0..=5`) to the
/// matching xterm 256-color code.
///
/// Only the resulting code is checked: a triple is rejected when
/// `16 + 36r + 6g + b` falls outside `0..=255`. Components outside `0..=5`
/// that still land inside the palette are accepted.
pub fn rgb_to_code(r: i32, g: i32, b: i32) -> Result<u8> {
    let code =
        CUBE_START + i64::from(r) * 36 + i64::from(g) * 6 + i64::from(b);

    u8::try_from(code).map_err(|_| {
        debug!("[rejected rgb] r: {r}, g: {g}, b: {b}, code: {code}");
        Xterm256Error::InvalidColorComponent { r, g, b, code }
    })
}

/// Foreground and background colors expressed as xterm 256-color codes.
///
/// See <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit> for the
/// palette layout. `None` leaves the terminal's current color in place.
///
/// `Color` is a plain `Copy` value: sharing it between threads is free,
/// mutating one instance requires `&mut` access and therefore whatever
/// synchronization the caller already uses for it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Color {
    #[serde(default)]
    foreground: Option<u8>,
    #[serde(default)]
    background: Option<u8>,
}

impl Color {
    pub const BLACK: Self = Self::from_code(0);
    pub const DARK_RED: Self = Self::from_code(1);
    pub const DARK_GREEN: Self = Self::from_code(2);
    pub const DARK_YELLOW: Self = Self::from_code(3);
    pub const DARK_BLUE: Self = Self::from_code(4);
    pub const DARK_MAGENTA: Self = Self::from_code(5);
    pub const DARK_CYAN: Self = Self::from_code(6);
    pub const LIGHT_GRAY: Self = Self::from_code(7);
    pub const DARK_GRAY: Self = Self::from_code(8);
    pub const RED: Self = Self::from_code(9);
    pub const GREEN: Self = Self::from_code(10);
    pub const YELLOW: Self = Self::from_code(11);
    pub const BLUE: Self = Self::from_code(12);
    pub const MAGENTA: Self = Self::from_code(13);
    pub const CYAN: Self = Self::from_code(14);
    pub const WHITE: Self = Self::from_code(15);

    pub const ORANGE: Self = Self::from_code(130);

    /// Create a color whose foreground is the cube entry for `r`, `g`, `b`.
    /// The background is left unset.
    ///
    /// # Errors
    ///
    /// Returns [`Xterm256Error::InvalidColorComponent`] when the components
    /// do not map into the palette, see [`rgb_to_code`].
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        let mut color = Self::default();
        color.set_foreground(r, g, b)?;
        Ok(color)
    }

    /// Foreground-only color using a raw palette code.
    pub const fn from_code(code: u8) -> Self {
        Self {
            foreground: Some(code),
            background: None,
        }
    }

    /// Copy of `self` with the background set to a raw palette code.
    pub const fn with_background_code(self, code: u8) -> Self {
        Self {
            foreground: self.foreground,
            background: Some(code),
        }
    }

    pub fn foreground(&self) -> Option<u8> {
        self.foreground
    }

    pub fn background(&self) -> Option<u8> {
        self.background
    }

    /// Set the foreground to the cube entry for `r`, `g`, `b`.
    ///
    /// # Errors
    ///
    /// On [`Xterm256Error::InvalidColorComponent`] the foreground keeps its
    /// previous value.
    pub fn set_foreground(&mut self, r: i32, g: i32, b: i32) -> Result<()> {
        let code = rgb_to_code(r, g, b)?;
        self.foreground = Some(code);
        Ok(())
    }

    /// Set the background to the cube entry for `r`, `g`, `b`.
    ///
    /// # Errors
    ///
    /// On [`Xterm256Error::InvalidColorComponent`] the background keeps its
    /// previous value.
    pub fn set_background(&mut self, r: i32, g: i32, b: i32) -> Result<()> {
        let code = rgb_to_code(r, g, b)?;
        self.background = Some(code);
        Ok(())
    }

    /// Wrap `content` so that it renders surrounded by this color's escape
    /// sequences.
    pub fn paint<T>(self, content: T) -> Painted<T> {
        Painted::new(self, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_color_covers_whole_cube() {
        for r in 0..=5 {
            for g in 0..=5 {
                for b in 0..=5 {
                    let color = Color::new(r, g, b).unwrap();
                    let expected = (16 + 36 * r + 6 * g + b) as u8;
                    assert_eq!(color.foreground(), Some(expected));
                    assert_eq!(color.background(), None);
                }
            }
        }
    }

    #[test]
    fn new_color_white_corner() {
        let color = Color::new(5, 5, 5).unwrap();
        assert_eq!(color.foreground(), Some(231));
        assert_eq!(color.background(), None);
    }

    #[test]
    fn new_color_rejects_out_of_range_code() {
        let err = Color::new(42, 42, 42).unwrap_err();
        assert_eq!(
            err,
            Xterm256Error::InvalidColorComponent {
                r: 42,
                g: 42,
                b: 42,
                code: 1822
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid RGB component: (42, 42, 42) maps to 1822"
        );
    }

    #[test]
    fn conversion_checks_code_not_components() {
        // -1 * 36 + 5 * 6 + 5 lands on the last system color.
        assert_eq!(rgb_to_code(-1, 5, 5), Ok(15));
        assert_eq!(rgb_to_code(6, 3, 5), Ok(255));
        assert!(rgb_to_code(6, 3, 6).is_err());
        assert!(rgb_to_code(0, 0, -17).is_err());
        assert_eq!(rgb_to_code(0, 0, -16), Ok(0));
    }

    #[test]
    fn conversion_does_not_overflow() {
        let err = rgb_to_code(i32::MAX, i32::MAX, i32::MAX).unwrap_err();
        let Xterm256Error::InvalidColorComponent { code, .. } = err;
        assert_eq!(code, 16 + i64::from(i32::MAX) * 43);

        assert!(rgb_to_code(i32::MIN, i32::MIN, i32::MIN).is_err());
    }

    #[test]
    fn set_background_keeps_foreground() {
        let mut color = Color::RED;
        color.set_background(0, 0, 0).unwrap();
        assert_eq!(color.foreground(), Some(9));
        assert_eq!(color.background(), Some(16));
    }

    #[test]
    fn failed_setters_leave_fields_untouched() {
        let mut color = Color::new(3, 1, 0).unwrap();
        color.set_background(5, 5, 5).unwrap();

        assert!(color.set_background(42, 42, 42).is_err());
        assert!(color.set_foreground(42, 42, 42).is_err());

        assert_eq!(color.foreground(), Some(130));
        assert_eq!(color.background(), Some(231));
    }

    #[test]
    fn failed_setter_on_unset_field_stays_unset() {
        let mut color = Color::default();
        assert!(color.set_background(-42, 0, 0).is_err());
        assert_eq!(color, Color::default());
    }

    #[test]
    fn named_colors() {
        let cases = vec![
            (Color::BLACK, 0),
            (Color::DARK_RED, 1),
            (Color::DARK_GREEN, 2),
            (Color::DARK_YELLOW, 3),
            (Color::DARK_BLUE, 4),
            (Color::DARK_MAGENTA, 5),
            (Color::DARK_CYAN, 6),
            (Color::LIGHT_GRAY, 7),
            (Color::DARK_GRAY, 8),
            (Color::RED, 9),
            (Color::GREEN, 10),
            (Color::YELLOW, 11),
            (Color::BLUE, 12),
            (Color::MAGENTA, 13),
            (Color::CYAN, 14),
            (Color::WHITE, 15),
            (Color::ORANGE, 130),
        ];

        for (color, code) in cases {
            assert_eq!(color.foreground(), Some(code));
            assert_eq!(color.background(), None);
        }
    }

    #[test]
    fn mutating_a_copy_keeps_constant_intact() {
        let mut red = Color::RED;
        red.set_foreground(0, 0, 0).unwrap();
        assert_eq!(red.foreground(), Some(16));
        assert_eq!(Color::RED.foreground(), Some(9));
    }

    #[test]
    fn with_background_code_keeps_foreground() {
        let color = Color::ORANGE.with_background_code(231);
        assert_eq!(color.foreground(), Some(130));
        assert_eq!(color.background(), Some(231));
    }

    #[test]
    fn serde_shape() {
        let color = Color::new(5, 5, 5).unwrap().with_background_code(16);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"foreground":231,"background":16}"#);

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn serde_missing_fields_are_unset() {
        let parsed: Color = serde_json::from_str(r#"{"foreground":9}"#).unwrap();
        assert_eq!(parsed, Color::RED);

        let parsed: Color = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Color::default());
    }

    #[test]
    fn serde_rejects_codes_outside_palette() {
        assert!(serde_json::from_str::<Color>(r#"{"foreground":256}"#).is_err());
        assert!(serde_json::from_str::<Color>(r#"{"background":-1}"#).is_err());
    }
}
