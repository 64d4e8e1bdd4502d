//! CSS value types: keywords, lengths, and colors.

/// A CSS length unit. Only `px` contributes to layout in this engine;
/// `em` and `%` are recognized but resolve to zero (see [`Value::to_px`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Pixels.
    Px,
    /// Font-relative (unsupported, treated as zero).
    Em,
    /// Percentage (unsupported, treated as zero).
    Percent,
    /// An unrecognized unit, or no unit at all.
    Unset,
}

/// An RGBA color, each channel in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Alpha.
    pub a: u8,
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Build an opaque color from RGB channels.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Parse a named color. The complete table for this engine: `red`,
    /// `blue`, `green`, `white`, `black`.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(Self::opaque(255, 0, 0)),
            "blue" => Some(Self::opaque(0, 0, 255)),
            "green" => Some(Self::opaque(0, 128, 0)),
            "white" => Some(Self::opaque(255, 255, 255)),
            "black" => Some(Self::opaque(0, 0, 0)),
            _ => None,
        }
    }

    /// Parse a hex color literal (without the leading `#`). Length 3 is
    /// expanded per-digit (`abc` → `aabbcc`, A=255); length 6 is
    /// `RRGGBB` with A=255; length 8 is `AARRGGBB`. An invalid hex digit
    /// anywhere resolves to a channel value of 0 rather than rejecting
    /// the whole color.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let byte = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let r = chars.next()?;
                let g = chars.next()?;
                let b = chars.next()?;
                Some(Self {
                    a: 255,
                    r: byte(&format!("{r}{r}")),
                    g: byte(&format!("{g}{g}")),
                    b: byte(&format!("{b}{b}")),
                })
            }
            6 => Some(Self { a: 255, r: byte(&hex[0..2]), g: byte(&hex[2..4]), b: byte(&hex[4..6]) }),
            8 => Some(Self {
                a: byte(&hex[0..2]),
                r: byte(&hex[2..4]),
                g: byte(&hex[4..6]),
                b: byte(&hex[6..8]),
            }),
            _ => None,
        }
    }
}

/// A CSS value: a bare keyword, a length, or a color. These three
/// populations are disjoint — a `Value` is never ambiguous between them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare keyword such as `auto` or `center`.
    Keyword(String),
    /// A quantity with a unit.
    Length(f64, Unit),
    /// An RGBA color.
    Color(Color),
}

impl Value {
    /// The pixel quantity of this value, or `0.0` if it is not a `Px`
    /// length (including `em`/`%`, which this minimal engine does not
    /// resolve, and non-length values).
    #[must_use]
    pub fn to_px(&self) -> f64 {
        match self {
            Self::Length(quantity, Unit::Px) => *quantity,
            _ => 0.0,
        }
    }

    /// `true` if this value is the `auto` keyword.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(k) if k == "auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_color_parsing() {
        assert_eq!(Color::from_hex("FFFFFF"), Some(Color { a: 255, r: 255, g: 255, b: 255 }));
        assert_eq!(Color::from_hex("ffffff"), Some(Color { a: 255, r: 255, g: 255, b: 255 }));
        assert_eq!(Color::from_hex("fff"), Some(Color { a: 255, r: 255, g: 255, b: 255 }));
        assert_eq!(Color::from_hex("AAEE120C"), Some(Color { a: 170, r: 238, g: 18, b: 12 }));
        assert_eq!(Color::from_hex("DD0001"), Some(Color { a: 255, r: 221, g: 0, b: 1 }));
    }

    #[test]
    fn invalid_hex_digit_becomes_zero() {
        assert_eq!(Color::from_hex("zzzzzz"), Some(Color { a: 255, r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn to_px_ignores_non_pixel_units() {
        assert_eq!(Value::Length(10.0, Unit::Em).to_px(), 0.0);
        assert_eq!(Value::Length(10.0, Unit::Px).to_px(), 10.0);
        assert_eq!(Value::Keyword("auto".to_string()).to_px(), 0.0);
    }
}
