use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::WeekgridError;

/// Fixed named-color table. Names are matched case-insensitively.
const NAMED: &[(&str, Color)] = &[
    ("black", Color::new(0x00, 0x00, 0x00)),
    ("white", Color::new(0xff, 0xff, 0xff)),
    ("red", Color::new(0xff, 0x00, 0x00)),
    ("green", Color::new(0x00, 0x80, 0x00)),
    ("blue", Color::new(0x00, 0x00, 0xff)),
    ("yellow", Color::new(0xff, 0xff, 0x00)),
    ("orange", Color::new(0xff, 0xa5, 0x00)),
    ("purple", Color::new(0x80, 0x00, 0x80)),
    ("pink", Color::new(0xff, 0xc0, 0xcb)),
    ("brown", Color::new(0xa5, 0x2a, 0x2a)),
    ("cyan", Color::new(0x00, 0xff, 0xff)),
    ("magenta", Color::new(0xff, 0x00, 0xff)),
    ("gray", Color::new(0x80, 0x80, 0x80)),
    ("grey", Color::new(0x80, 0x80, 0x80)),
    ("silver", Color::new(0xc0, 0xc0, 0xc0)),
    ("maroon", Color::new(0x80, 0x00, 0x00)),
    ("olive", Color::new(0x80, 0x80, 0x00)),
    ("lime", Color::new(0x00, 0xff, 0x00)),
    ("aqua", Color::new(0x00, 0xff, 0xff)),
    ("teal", Color::new(0x00, 0x80, 0x80)),
    ("navy", Color::new(0x00, 0x00, 0x80)),
    ("fuchsia", Color::new(0xff, 0x00, 0xff)),
];

/// An RGB color, normalized from hex or named input before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#RRGGBB` (leading `#` optional) or a name from the fixed table.
    pub fn parse(s: &str) -> Result<Self, WeekgridError> {
        let s = s.trim();
        if let Some(c) = Self::parse_hex(s) {
            return Ok(c);
        }
        let lower = s.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or_else(|| WeekgridError::invalid_color(s))
    }

    fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Whether label text on this fill should be white rather than black.
    /// Perceptual luminance approximation.
    pub fn is_dark(&self) -> bool {
        let brightness = 0.299 * f32::from(self.r) + 0.587 * f32::from(self.g)
            + 0.114 * f32::from(self.b);
        brightness < 128.0
    }

    /// Random bright color: each channel in 100..=255.
    pub fn random_muted(rng: &mut fastrand::Rng) -> Self {
        Self::new(
            rng.u8(100..=255),
            rng.u8(100..=255),
            rng.u8(100..=255),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
