#[allow(dead_code)]
mod common;

use easel_core::canvas::{blank_canvas, paste_bottom_left};
use easel_core::error::EaselError;
use easel_core::sprite::{Color, PixelFormat};

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);

#[test]
fn test_blank_canvas_is_fully_filled() {
    let canvas = blank_canvas(3, 2, RED);

    assert_eq!(canvas.format, PixelFormat::Rgb);
    assert_eq!((canvas.width(), canvas.height()), (3, 2));
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(canvas.rgb_at(x, y), RED);
        }
    }
}

#[test]
fn test_zero_size_canvas_is_legal() {
    let canvas = blank_canvas(0, 0, RED);
    assert!(canvas.is_empty());
}

#[test]
fn test_paste_keeps_canvas_shape() {
    let mut canvas = blank_canvas(5, 4, Color::WHITE);
    let src = common::solid_sprite(2, 2, RED);

    paste_bottom_left(&mut canvas, &src).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (5, 4));
}

#[test]
fn test_paste_anchors_bottom_left() {
    // 2x2 source on a 3x3 canvas covers (0,1)-(1,2), leaving the top
    // row and the rightmost column as background
    let mut canvas = blank_canvas(3, 3, RED);
    let src = common::solid_sprite(2, 2, GREEN);

    paste_bottom_left(&mut canvas, &src).unwrap();

    for y in 1..3 {
        for x in 0..2 {
            assert_eq!(canvas.rgb_at(x, y), GREEN);
        }
    }
    for x in 0..3 {
        assert_eq!(canvas.rgb_at(x, 0), RED);
    }
    for y in 0..3 {
        assert_eq!(canvas.rgb_at(2, y), RED);
    }

    // bottom-left pixels line up
    assert_eq!(canvas.rgb_at(0, 2), src.rgb_at(0, 1));
}

#[test]
fn test_equal_size_paste_covers_canvas() {
    let mut canvas = blank_canvas(2, 2, RED);
    let src = common::solid_sprite(2, 2, GREEN);

    paste_bottom_left(&mut canvas, &src).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(canvas.rgb_at(x, y), GREEN);
        }
    }
}

#[test]
fn test_oversized_source_is_rejected() {
    let mut canvas = blank_canvas(2, 2, RED);
    let src = common::solid_sprite(3, 1, GREEN);

    let err = paste_bottom_left(&mut canvas, &src).unwrap_err();
    assert!(matches!(err, EaselError::PasteOutOfBounds { .. }));

    // the canvas is untouched after a rejected paste
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(canvas.rgb_at(x, y), RED);
        }
    }
}

#[test]
fn test_rgba_source_contributes_rgb_only() {
    let mut canvas = blank_canvas(2, 2, RED);
    let src = common::rgba_sprite_from_rows(&[vec![(GREEN, 0)]]);

    paste_bottom_left(&mut canvas, &src).unwrap();

    // the source's transparency is ignored; its RGB lands as-is
    assert_eq!(canvas.format, PixelFormat::Rgb);
    assert_eq!(canvas.rgb_at(0, 1), GREEN);
}
