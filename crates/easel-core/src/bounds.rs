use crate::error::{EaselError, Result};
use crate::sprite::Sprite;

/// Maximum width and maximum height across a sprite sequence.
///
/// The two maxima are reduced independently, so the resulting bounding
/// box can exceed every individual frame when one frame is the widest
/// and a different frame is the tallest.
pub fn max_dimensions(sprites: &[Sprite]) -> Result<(u32, u32)> {
    if sprites.is_empty() {
        return Err(EaselError::EmptySequence);
    }

    let mut width = 0;
    let mut height = 0;
    for sprite in sprites {
        width = width.max(sprite.width());
        height = height.max(sprite.height());
    }

    Ok((width, height))
}
