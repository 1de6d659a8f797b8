use std::collections::HashMap;

use crate::error::{EaselError, Result};
use crate::sprite::{Color, ColorCount, Sprite};

/// Most frequent exact RGB color in a sprite, with its occurrence count.
///
/// Alpha is ignored for the tally. Ties are broken by first-seen order in
/// a row-major scan, so repeated runs over the same frame always report
/// the same background color.
pub fn dominant_color(sprite: &Sprite) -> Result<ColorCount> {
    if sprite.is_empty() {
        return Err(EaselError::EmptyImage);
    }

    // (count, index of first occurrence) per distinct color
    let mut counts: HashMap<Color, (u64, usize)> = HashMap::new();
    let mut index = 0usize;
    for y in 0..sprite.height() {
        for x in 0..sprite.width() {
            let entry = counts.entry(sprite.rgb_at(x, y)).or_insert((0, index));
            entry.0 += 1;
            index += 1;
        }
    }

    let (color, (count, _)) = counts
        .into_iter()
        .max_by_key(|&(_, (count, first))| (count, std::cmp::Reverse(first)))
        .expect("non-empty sprite has at least one color");

    Ok(ColorCount { color, count })
}
