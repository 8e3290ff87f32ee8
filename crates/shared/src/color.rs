use crate::error::{MapError, Result};

/// Brightness multiplier applied to the hovered department's fill.
pub const LIGHTEN_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (either case).
    pub fn parse(color: &str) -> Result<Self> {
        let invalid = || MapError::InvalidColor(color.to_string());
        let hex = color.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Multiply each channel by `factor`, rounding and clamping to 255.
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

/// Lighten a `#RRGGBB` color by `factor` per channel.
pub fn lighten(color: &str, factor: f64) -> Result<String> {
    Ok(Rgb::parse(color)?.scaled(factor).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_gray() {
        assert_eq!(lighten("#646464", LIGHTEN_FACTOR).unwrap(), "#787878");
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        assert_eq!(lighten("#FFFFFF", LIGHTEN_FACTOR).unwrap(), "#ffffff");
    }

    #[test]
    fn test_lighten_pads_single_digit_channels() {
        // 0x05 * 1.2 = 6 -> "06"; 0 stays 0
        assert_eq!(lighten("#050000", LIGHTEN_FACTOR).unwrap(), "#060000");
    }

    #[test]
    fn test_lighten_mixed_channels() {
        // d5 = 213 -> 255.6 clamps; 7b = 123 -> 147.6 rounds to 148 = 0x94; 3a = 58 -> 69.6 -> 70 = 0x46
        assert_eq!(lighten("#d57b3a", LIGHTEN_FACTOR).unwrap(), "#ff9446");
    }

    #[test]
    fn test_lighten_every_channel_value() {
        for v in 0..=255u8 {
            let input = Rgb { r: v, g: v, b: v }.to_hex();
            let out = Rgb::parse(&lighten(&input, LIGHTEN_FACTOR).unwrap()).unwrap();
            let expected = ((v as f64) * 1.2).round().min(255.0) as u8;
            assert_eq!(out.r, expected, "channel {v}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Rgb::parse("646464").is_err());
        assert!(Rgb::parse("#64646").is_err());
        assert!(Rgb::parse("#zz6464").is_err());
        assert!(Rgb::parse("#6464é4").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Rgb { r: 0xAB, g: 0xCD, b: 0xEF }.to_hex(), "#abcdef");
    }
}
