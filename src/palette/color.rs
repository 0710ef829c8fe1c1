//! RGB hex colours

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB colour, always displayed as `#RRGGBB` with uppercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digits: {0}")]
    Digits(#[from] hex::FromHexError),
}

/// Label colour that stays readable on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Light,
    Dark,
}

impl Foreground {
    pub fn color(self) -> Color {
        match self {
            Foreground::Light => Color::WHITE,
            Foreground::Dark => Color::BLACK,
        }
    }
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Each of the six hex digits is drawn independently from 0..16.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || (rng.random_range(0..16u8) << 4) | rng.random_range(0..16u8);
        Self::rgb(channel(), channel(), channel())
    }

    /// Weighted brightness on raw 8-bit channels (no gamma correction).
    pub fn luminance(self) -> f64 {
        0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b)
    }

    pub fn text_color(self) -> Foreground {
        if self.luminance() > 128.0 {
            Foreground::Dark
        } else {
            Foreground::Light
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#RRGGBB` or `RRGGBB` in either case. The leading `#` is
    /// optional so unquoted shell arguments work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 {
            return Err(ParseColorError::Length(digits.len()));
        }
        let mut buf = [0u8; 3];
        hex::decode_to_slice(digits, &mut buf)?;
        Ok(Self::rgb(buf[0], buf[1], buf[2]))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_hex_code(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Color::rgb(0xab, 0x0c, 0xff).to_string(), "#AB0CFF");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_parse() {
        assert_eq!("#aabbcc".parse::<Color>().unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!("112233".parse::<Color>().unwrap(), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!("#12345".parse::<Color>(), Err(ParseColorError::Length(5)));
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ParseColorError::Digits(_))
        ));
    }

    #[test]
    fn test_random_matches_hex_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = Color::random_with(&mut rng);
            assert!(is_hex_code(&c.to_string()), "bad colour {c}");
        }
        assert!(is_hex_code(&Color::random_with(&mut rand::rng()).to_string()));
    }

    #[test]
    fn test_text_color() {
        assert_eq!(Color::WHITE.text_color(), Foreground::Dark);
        assert_eq!(Color::BLACK.text_color(), Foreground::Light);
        // 0.2126 * 255 + 0.7152 * 0 + 0.0722 * 255 = 72.6
        assert_eq!(Color::rgb(255, 0, 255).text_color(), Foreground::Light);
        // pure green alone is 182.4
        assert_eq!(Color::rgb(0, 255, 0).text_color(), Foreground::Dark);
        assert_eq!(Foreground::Light.color(), Color::WHITE);
    }

    #[test]
    fn test_grey_threshold() {
        // weights sum to 1, so a neutral grey's luminance is its channel value
        assert_eq!(Color::rgb(127, 127, 127).text_color(), Foreground::Light);
        assert_eq!(Color::rgb(129, 129, 129).text_color(), Foreground::Dark);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"#0a0B0c\"").unwrap();
        assert_eq!(back, Color::rgb(10, 11, 12));
    }
}
