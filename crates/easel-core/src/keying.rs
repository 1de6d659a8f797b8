use ndarray::Array3;

use crate::sprite::{Color, PixelFormat, Sprite};

/// Rewrite every pixel whose RGB exactly matches `target` to fully
/// transparent white.
///
/// Returns a new RGBA sprite; the input is unchanged. Non-matching
/// pixels keep their RGB values, with alpha carried over from RGBA
/// input or forced opaque for RGB input.
pub fn key_out_color(sprite: &Sprite, target: Color) -> Sprite {
    let h = sprite.height() as usize;
    let w = sprite.width() as usize;

    let mut data = Array3::<u8>::zeros((h, w, 4));
    for y in 0..sprite.height() {
        for x in 0..sprite.width() {
            let (row, col) = (y as usize, x as usize);
            let rgb = sprite.rgb_at(x, y);
            let pixel: [u8; 4] = if rgb == target {
                [255, 255, 255, 0]
            } else {
                [rgb.r, rgb.g, rgb.b, sprite.alpha_at(x, y)]
            };
            for (c, value) in pixel.into_iter().enumerate() {
                data[[row, col, c]] = value;
            }
        }
    }

    let mut keyed = Sprite::new(data, PixelFormat::Rgba);
    keyed.metadata = sprite.metadata.clone();
    keyed
}
