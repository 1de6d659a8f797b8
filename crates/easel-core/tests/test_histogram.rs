#[allow(dead_code)]
mod common;

use ndarray::Array3;

use easel_core::error::EaselError;
use easel_core::histogram::dominant_color;
use easel_core::sprite::{Color, PixelFormat, Sprite};

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);

#[test]
fn test_uniform_sprite_counts_every_pixel() {
    let sprite = common::solid_sprite(4, 3, RED);

    let result = dominant_color(&sprite).unwrap();
    assert_eq!(result.color, RED);
    assert_eq!(result.count, 12);
}

#[test]
fn test_majority_color_wins() {
    // 3 of 4 pixels red, like a small subject on a background
    let sprite = common::sprite_from_rows(&[vec![RED, RED], vec![GREEN, RED]]);

    let result = dominant_color(&sprite).unwrap();
    assert_eq!(result.color, RED);
    assert_eq!(result.count, 3);
}

#[test]
fn test_tie_breaks_to_first_seen_in_row_major_order() {
    let sprite = common::sprite_from_rows(&[vec![GREEN, RED], vec![RED, GREEN]]);

    // equal counts; green is scanned first at (0, 0)
    let result = dominant_color(&sprite).unwrap();
    assert_eq!(result.color, GREEN);
    assert_eq!(result.count, 2);
}

#[test]
fn test_alpha_is_ignored_in_tally() {
    // same RGB under three different alphas still counts as one color
    let mut data = Array3::<u8>::zeros((1, 3, 4));
    for col in 0..3 {
        data[[0, col, 0]] = 10;
        data[[0, col, 1]] = 20;
        data[[0, col, 2]] = 30;
        data[[0, col, 3]] = (col * 100) as u8;
    }
    let sprite = Sprite::new(data, PixelFormat::Rgba);

    let result = dominant_color(&sprite).unwrap();
    assert_eq!(result.color, Color::new(10, 20, 30));
    assert_eq!(result.count, 3);
}

#[test]
fn test_zero_area_sprite_is_rejected() {
    let sprite = Sprite::new(Array3::<u8>::zeros((0, 0, 3)), PixelFormat::Rgb);
    assert!(matches!(
        dominant_color(&sprite),
        Err(EaselError::EmptyImage)
    ));
}
