use std::path::PathBuf;

use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::error::{EaselError, Result};

/// An exact 8-bit RGB color. Equality is channel-wise, no tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or bare `RRGGBB`) hex triple.
    pub fn from_hex(s: &str) -> Result<Color> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EaselError::InvalidColor(s.to_string()));
        }
        let channel =
            |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).expect("validated hex digits");
        Ok(Color::new(channel(0), channel(2), channel(4)))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color together with how often it occurred in a sampled sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Color,
    pub count: u64,
}

/// Channel layout of a sprite's pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// A single decoded sprite frame.
/// Pixel data is row-major, shape = (height, width, channel), 8 bits per channel.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub data: Array3<u8>,
    pub format: PixelFormat,
    pub metadata: SpriteMetadata,
}

impl Sprite {
    pub fn new(data: Array3<u8>, format: PixelFormat) -> Self {
        debug_assert_eq!(data.shape()[2], format.channels());
        Self {
            data,
            format,
            metadata: SpriteMetadata::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.data.shape()[1] as u32
    }

    pub fn height(&self) -> u32 {
        self.data.shape()[0] as u32
    }

    /// True if the sprite has no pixels (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// RGB channels at (x, y); any alpha channel is ignored.
    pub fn rgb_at(&self, x: u32, y: u32) -> Color {
        let (row, col) = (y as usize, x as usize);
        Color::new(
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        )
    }

    /// Alpha at (x, y); opaque for RGB sprites.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        match self.format {
            PixelFormat::Rgb => 255,
            PixelFormat::Rgba => self.data[[y as usize, x as usize, 3]],
        }
    }
}

/// Optional per-sprite metadata.
#[derive(Clone, Debug, Default)]
pub struct SpriteMetadata {
    /// Path the sprite was decoded from, when it came from disk.
    pub source: Option<PathBuf>,
}
