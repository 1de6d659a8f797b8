use ndarray::{s, Array3};

use crate::error::{EaselError, Result};
use crate::sprite::{Color, PixelFormat, Sprite};

/// Allocate an RGB canvas of the given size, fully filled with `fill`.
///
/// Zero width or height is degenerate but legal; the canvas simply has
/// no pixels.
pub fn blank_canvas(width: u32, height: u32, fill: Color) -> Sprite {
    let mut data = Array3::<u8>::zeros((height as usize, width as usize, 3));
    data.slice_mut(s![.., .., 0]).fill(fill.r);
    data.slice_mut(s![.., .., 1]).fill(fill.g);
    data.slice_mut(s![.., .., 2]).fill(fill.b);
    Sprite::new(data, PixelFormat::Rgb)
}

/// Paste `src` onto `dest` anchored at the bottom-left corner.
///
/// The source's bottom edge aligns with the canvas bottom edge and its
/// left edge with canvas x = 0, i.e. the destination origin is
/// (0, dest.height - src.height). `dest` is mutated in place; `src` is
/// read-only. RGBA sources contribute their RGB channels only.
pub fn paste_bottom_left(dest: &mut Sprite, src: &Sprite) -> Result<()> {
    if src.width() > dest.width() || src.height() > dest.height() {
        return Err(EaselError::PasteOutOfBounds {
            src_width: src.width(),
            src_height: src.height(),
            canvas_width: dest.width(),
            canvas_height: dest.height(),
        });
    }

    let y0 = (dest.height() - src.height()) as usize;
    let (src_h, src_w) = (src.height() as usize, src.width() as usize);

    dest.data
        .slice_mut(s![y0..y0 + src_h, ..src_w, ..3])
        .assign(&src.data.slice(s![.., .., ..3]));

    Ok(())
}
