//! Solid colors and their canonical CSS form.

use std::fmt;

/// An RGBA color with every channel stored in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    /// Opaque color from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Color from 8-bit channels and a `0.0..=1.0` alpha.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            alpha,
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let mut nibbles = Vec::with_capacity(8);
        for digit in digits.chars() {
            let value = digit
                .to_digit(16)
                .ok_or(ColorError::InvalidDigit { digit })?;
            nibbles.push(value as u8);
        }
        let bytes: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|nibble| nibble * 17).collect(),
            6 | 8 => nibbles
                .chunks(2)
                .map(|pair| pair[0] * 16 + pair[1])
                .collect(),
            len => return Err(ColorError::InvalidLength { len }),
        };
        let alpha = bytes.get(3).map_or(1.0, |alpha| f32::from(*alpha) / 255.0);
        Ok(Self::rgba(bytes[0], bytes[1], bytes[2], alpha))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub fn alpha(&self) -> f32 {
        self.3
    }

    pub fn is_opaque(&self) -> bool {
        self.3 >= 1.0
    }

    /// The red, green and blue channels as bytes.
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel(self.0), channel(self.1), channel(self.2)]
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Opaque colors print as `#rrggbb`, translucent ones as `rgba(r, g, b, a)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        if self.is_opaque() {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            let alpha = crate::unit::format_f32(self.3.clamp(0.0, 1.0));
            write!(f, "rgba({r}, {g}, {b}, {alpha})")
        }
    }
}

/// Failure to parse a hex color literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorError {
    InvalidLength { len: usize },
    InvalidDigit { digit: char },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidLength { len } => {
                write!(f, "hex color has {len} digits; expected 3, 4, 6 or 8")
            }
            ColorError::InvalidDigit { digit } => {
                write!(f, "hex color contains non-hex digit {digit:?}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::{Color, ColorError};

    #[test]
    fn opaque_color_prints_as_hex() {
        assert_eq!(Color::rgb(255, 0, 128).to_string(), "#ff0080");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn translucent_color_prints_as_rgba() {
        assert_eq!(
            Color::rgba(0, 0, 0, 0.5).to_string(),
            "rgba(0, 0, 0, 0.5)"
        );
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::from_hex("#0f0"), Ok(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("00FF00"), Ok(Color::rgb(0, 255, 0)));
        let translucent = Color::from_hex("#ff000080").expect("valid hex");
        assert_eq!(translucent.to_rgb8(), [255, 0, 0]);
        assert!(!translucent.is_opaque());
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Color::from_hex("#12345"),
            Err(ColorError::InvalidLength { len: 5 })
        );
        assert_eq!(
            Color::from_hex("#zzz"),
            Err(ColorError::InvalidDigit { digit: 'z' })
        );
    }
}
