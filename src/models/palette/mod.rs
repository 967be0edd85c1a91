// Palette model
// Project tag colors plus the fixed colors the cell renderer needs

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::project::ProjectTag;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` or `rrggbb`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Length(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb::from_u32)
            .map_err(|_| ColorParseError::Digits(s.to_string()))
    }
}

/// Tag name whose color doubles as the fallback for unknown tags.
pub const FALLBACK_TAG: &str = "Extra";

const DEFAULT_ENTRIES: [(&str, u32); 10] = [
    ("Fabrication", 0x3b82f6),
    ("Installation", 0x10b981),
    ("Completed", 0x22c55e),
    ("Overdue", 0xef4444),
    ("Delay", 0xf97316),
    ("Inspection", 0xeab308),
    ("Handover", 0x6366f1),
    (FALLBACK_TAG, 0x8b5cf6),
    ("Tentative", 0x94a3b8),
    ("Today", 0x38bdf8),
];

/// Mapping from project tag to color, with the fallback and placeholder colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    entries: HashMap<ProjectTag, Rgb>,
    pub fallback: Rgb,
    /// Fill for unused slots of the 3×3 grid
    pub placeholder: Rgb,
    /// Outline around the current date
    pub today: Rgb,
    /// Cell and window background
    pub background: Rgb,
    /// Day numbers and badge text
    pub text: Rgb,
}

impl Default for ColorPalette {
    fn default() -> Self {
        let entries: HashMap<ProjectTag, Rgb> = DEFAULT_ENTRIES
            .iter()
            .map(|(tag, rgb)| (ProjectTag::new(*tag), Rgb::from_u32(*rgb)))
            .collect();
        Self {
            fallback: Rgb::from_u32(0x8b5cf6),
            placeholder: Rgb::from_u32(0x26303a),
            today: Rgb::from_u32(0x38bdf8),
            background: Rgb::from_u32(0x0f172a),
            text: Rgb::from_u32(0xcfe8ff),
            entries,
        }
    }
}

impl ColorPalette {
    /// Color for `tag`, or the fallback when the tag is unknown.
    pub fn color_for(&self, tag: &ProjectTag) -> Rgb {
        self.entries.get(tag).copied().unwrap_or(self.fallback)
    }

    /// Insert or replace a tag color. Overriding the fallback tag also moves
    /// the fallback color, as does overriding "Today" for the outline.
    pub fn set(&mut self, tag: ProjectTag, color: Rgb) {
        if tag.as_str() == FALLBACK_TAG {
            self.fallback = color;
        }
        if tag.as_str() == "Today" {
            self.today = color;
        }
        self.entries.insert(tag, color);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Default palette with user overrides applied. Invalid hex strings are
    /// logged and ignored.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut palette = Self::default();
        for (tag, hex) in overrides {
            match hex.parse::<Rgb>() {
                Ok(color) => palette.set(ProjectTag::new(tag.as_str()), color),
                Err(err) => log::warn!("Ignoring palette override for '{}': {}", tag, err),
            }
        }
        palette
    }
}
