use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array3;

use crate::error::Result;
use crate::sprite::{PixelFormat, Sprite};

/// Decode an image file into a sprite.
///
/// Formats carrying an alpha channel load as RGBA; everything else is
/// converted to RGB. The source path is recorded in the sprite metadata.
pub fn load_sprite(path: &Path) -> Result<Sprite> {
    let img = image::open(path)?;

    let mut sprite = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        let mut data = Array3::<u8>::zeros((h as usize, w as usize, 4));
        for row in 0..h as usize {
            for col in 0..w as usize {
                let pixel = rgba.get_pixel(col as u32, row as u32);
                for c in 0..4 {
                    data[[row, col, c]] = pixel.0[c];
                }
            }
        }
        Sprite::new(data, PixelFormat::Rgba)
    } else {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let mut data = Array3::<u8>::zeros((h as usize, w as usize, 3));
        for row in 0..h as usize {
            for col in 0..w as usize {
                let pixel = rgb.get_pixel(col as u32, row as u32);
                for c in 0..3 {
                    data[[row, col, c]] = pixel.0[c];
                }
            }
        }
        Sprite::new(data, PixelFormat::Rgb)
    };

    sprite.metadata.source = Some(path.to_path_buf());
    Ok(sprite)
}

/// Encode a sprite to `path`, choosing the format from the extension.
/// The alpha channel of RGBA sprites is preserved.
pub fn save_sprite(sprite: &Sprite, path: &Path) -> Result<()> {
    let w = sprite.width();
    let h = sprite.height();

    match sprite.format {
        PixelFormat::Rgb => {
            let mut img = RgbImage::new(w, h);
            for row in 0..h as usize {
                for col in 0..w as usize {
                    img.put_pixel(
                        col as u32,
                        row as u32,
                        Rgb([
                            sprite.data[[row, col, 0]],
                            sprite.data[[row, col, 1]],
                            sprite.data[[row, col, 2]],
                        ]),
                    );
                }
            }
            img.save(path)?;
        }
        PixelFormat::Rgba => {
            let mut img = RgbaImage::new(w, h);
            for row in 0..h as usize {
                for col in 0..w as usize {
                    img.put_pixel(
                        col as u32,
                        row as u32,
                        Rgba([
                            sprite.data[[row, col, 0]],
                            sprite.data[[row, col, 1]],
                            sprite.data[[row, col, 2]],
                            sprite.data[[row, col, 3]],
                        ]),
                    );
                }
            }
            img.save(path)?;
        }
    }

    Ok(())
}

/// Create the output directory (and any missing parents).
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
