use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::ColorError;

/// 24-bit color, usable as the color of a [`Cell`](crate::Cell) when the board has no palette of its own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const RED: Self = Self::new(0xff, 0x00, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xff, 0x00);
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb` or the `#rgb` shorthand, with the `#` optional.
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() {
            return Err(ColorError::MissingDigits);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit);
        }

        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidDigit)
        };

        match digits.len() {
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            // each shorthand nibble is doubled: `f` -> `ff`
            3 => Ok(Self::new(
                channel(0..1)? * 0x11,
                channel(1..2)? * 0x11,
                channel(2..3)? * 0x11,
            )),
            len => Err(ColorError::InvalidLength(len)),
        }
    }
}
