use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Source directory not found: {}", .path.display())]
    SourceDirMissing { path: PathBuf },

    #[error("No files in source directory: {}", .path.display())]
    EmptyBatch { path: PathBuf },

    #[error("Empty sprite sequence")]
    EmptySequence,

    #[error("Cannot sample colors from a zero-area image")]
    EmptyImage,

    #[error("Reference frame {index} out of range (total: {total})")]
    ReferenceOutOfRange { index: usize, total: usize },

    #[error(
        "Source {src_width}x{src_height} does not fit canvas {canvas_width}x{canvas_height}"
    )]
    PasteOutOfBounds {
        src_width: u32,
        src_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("Invalid color literal: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, EaselError>;
