//! Plain RGB colours for the indicator, independent of any rendering crate.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const YELLOW_GREEN: Rgb = Rgb::new(154, 205, 50);
    /// Default widget background.
    pub const CHARCOAL: Rgb = Rgb::new(24, 24, 24);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend: `alpha == 0.0` keeps `self`, `1.0` yields `over`.
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |lo: u8, hi: u8| (lo as f32 + (hi as f32 - lo as f32) * a).round() as u8;
        Rgb::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }
}

/// Named colours accepted in config files and on the command line.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::new(255, 255, 255)),
    ("gray", Rgb::GRAY),
    ("grey", Rgb::GRAY),
    ("darkgray", Rgb::new(64, 64, 64)),
    ("lightgray", Rgb::new(211, 211, 211)),
    ("silver", Rgb::new(192, 192, 192)),
    ("charcoal", Rgb::CHARCOAL),
    ("red", Rgb::new(255, 0, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("yellowgreen", Rgb::YELLOW_GREEN),
    ("green", Rgb::new(0, 128, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("dodgerblue", Rgb::new(30, 144, 255)),
    ("blue", Rgb::new(0, 0, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
];

/// Why a colour string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("colour string is empty")]
    Empty,
    #[error("invalid hex colour `{0}` (expected #rrggbb)")]
    InvalidHex(String),
    #[error("invalid component list `{0}` (expected r,g,b with values 0-255)")]
    InvalidComponents(String),
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('"');
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidHex(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
            };
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            let [r, g, b] = parts[..] else {
                return Err(ColorParseError::InvalidComponents(s.to_string()));
            };
            let parse = |v: &str| {
                v.parse::<u8>()
                    .map_err(|_| ColorParseError::InvalidComponents(s.to_string()))
            };
            return Ok(Rgb::new(parse(r)?, parse(g)?, parse(b)?));
        }

        let key = s.to_lowercase().replace(['-', '_', ' '], "");
        NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, rgb)| rgb)
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_components_and_names() {
        assert_eq!("#9acd32".parse::<Rgb>(), Ok(Rgb::YELLOW_GREEN));
        assert_eq!("#9ACD32".parse::<Rgb>(), Ok(Rgb::YELLOW_GREEN));
        assert_eq!("128, 128,128".parse::<Rgb>(), Ok(Rgb::GRAY));
        assert_eq!("YellowGreen".parse::<Rgb>(), Ok(Rgb::YELLOW_GREEN));
        assert_eq!("dodger-blue".parse::<Rgb>(), Ok(Rgb::new(30, 144, 255)));
        assert_eq!("\"gray\"".parse::<Rgb>(), Ok(Rgb::GRAY));
    }

    #[test]
    fn rejects_malformed_colours() {
        assert_eq!("".parse::<Rgb>(), Err(ColorParseError::Empty));
        assert!(matches!("#12345".parse::<Rgb>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!("#zzzzzz".parse::<Rgb>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(
            "1,2".parse::<Rgb>(),
            Err(ColorParseError::InvalidComponents(_))
        ));
        assert!(matches!(
            "1,2,300".parse::<Rgb>(),
            Err(ColorParseError::InvalidComponents(_))
        ));
        assert!(matches!(
            "chartreuse".parse::<Rgb>(),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn display_is_parseable_hex() {
        let c = Rgb::new(1, 171, 255);
        assert_eq!(c.to_string(), "#01abff");
        assert_eq!(c.to_string().parse::<Rgb>(), Ok(c));
    }

    #[test]
    fn blend_endpoints_and_midpoint() {
        let a = Rgb::BLACK;
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(a.blend(b, 7.0), b);
    }
}
