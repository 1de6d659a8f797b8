use ndarray::Array3;

use easel_core::sprite::{Color, PixelFormat, Sprite};

/// Build an RGB sprite uniformly filled with one color.
pub fn solid_sprite(width: u32, height: u32, color: Color) -> Sprite {
    let mut data = Array3::<u8>::zeros((height as usize, width as usize, 3));
    for row in 0..height as usize {
        for col in 0..width as usize {
            data[[row, col, 0]] = color.r;
            data[[row, col, 1]] = color.g;
            data[[row, col, 2]] = color.b;
        }
    }
    Sprite::new(data, PixelFormat::Rgb)
}

/// Build an RGB sprite from rows of colors (row 0 = top of the image).
pub fn sprite_from_rows(rows: &[Vec<Color>]) -> Sprite {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    let mut data = Array3::<u8>::zeros((h, w, 3));
    for (row, colors) in rows.iter().enumerate() {
        for (col, color) in colors.iter().enumerate() {
            data[[row, col, 0]] = color.r;
            data[[row, col, 1]] = color.g;
            data[[row, col, 2]] = color.b;
        }
    }
    Sprite::new(data, PixelFormat::Rgb)
}

/// Build an RGBA sprite from rows of (color, alpha) pairs.
pub fn rgba_sprite_from_rows(rows: &[Vec<(Color, u8)>]) -> Sprite {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    let mut data = Array3::<u8>::zeros((h, w, 4));
    for (row, pixels) in rows.iter().enumerate() {
        for (col, (color, alpha)) in pixels.iter().enumerate() {
            data[[row, col, 0]] = color.r;
            data[[row, col, 1]] = color.g;
            data[[row, col, 2]] = color.b;
            data[[row, col, 3]] = *alpha;
        }
    }
    Sprite::new(data, PixelFormat::Rgba)
}
