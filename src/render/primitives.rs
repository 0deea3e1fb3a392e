use serde::{Deserialize, Serialize};

use crate::error::{RatingTrendError, RatingTrendResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a `#RRGGBB` or `#RRGGBBAA` hex string, so serialization
/// quantizes each channel to the nearest multiple of 1/255. Colors built from
/// hex or `from_argb` round-trip exactly; arbitrary fractions such as `0.3`
/// come back as `77.0 / 255.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xff) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn from_hex(input: &str) -> RatingTrendResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RatingTrendError::InvalidConfig(format!(
                "color `{input}` must contain only hex digits"
            )));
        }
        let parsed = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map(|rgb| 0xff00_0000 | rgb),
            8 => u32::from_str_radix(digits, 16).map(|rgba| rgba.rotate_right(8)),
            _ => {
                return Err(RatingTrendError::InvalidConfig(format!(
                    "color `{input}` must be #RRGGBB or #RRGGBBAA"
                )));
            }
        };
        parsed.map(Self::from_argb).map_err(|err| {
            RatingTrendError::InvalidConfig(format!("color `{input}` is not valid hex: {err}"))
        })
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        );
        if a == 0xff {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn validate(self) -> RatingTrendResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RatingTrendError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = RatingTrendError;

    fn try_from(value: String) -> RatingTrendResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Outline and interior colors for one rating value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub stroke: Color,
    pub fill: Color,
}

impl ColorPair {
    #[must_use]
    pub const fn new(stroke: Color, fill: Color) -> Self {
        Self { stroke, fill }
    }

    pub fn validate(self) -> RatingTrendResult<()> {
        self.stroke.validate()?;
        self.fill.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_parses_with_and_without_alpha() {
        let opaque = Color::from_hex("#FF8000").expect("rgb hex");
        assert_eq!(opaque.red, 1.0);
        assert_eq!(opaque.blue, 0.0);
        assert_eq!(opaque.alpha, 1.0);

        let translucent = Color::from_hex("#00000080").expect("rgba hex");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn hex_rejects_bad_lengths_and_digits() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn hex_rejects_sign_prefixes() {
        assert!(Color::from_hex("#+12345").is_err());
        assert!(Color::from_hex("+1234567").is_err());
        assert!(Color::from_hex("#-12345").is_err());
    }

    #[test]
    fn hex_form_quantizes_to_eight_bit_channels() {
        let color = Color::rgb(0.3, 0.5, 1.0);
        let reparsed = Color::from_hex(&color.to_hex()).expect("own hex parses");

        assert_eq!(reparsed.red, 77.0 / 255.0);
        assert_eq!(reparsed.green, 128.0 / 255.0);
        assert_eq!(reparsed.blue, 1.0);
        for (before, after) in [
            (color.red, reparsed.red),
            (color.green, reparsed.green),
            (color.blue, reparsed.blue),
        ] {
            assert!((before - after).abs() <= 0.5 / 255.0 + 1e-12);
        }
        assert_eq!(Color::from_hex(&reparsed.to_hex()).expect("stable"), reparsed);
    }

    #[test]
    fn argb_unpacks_alpha_from_high_byte() {
        let color = Color::from_argb(0x80FF_0000);
        assert_eq!(color.red, 1.0);
        assert!((color.alpha - 128.0 / 255.0).abs() < 1e-12);
    }
}
