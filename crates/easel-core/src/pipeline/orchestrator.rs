use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::bounds::max_dimensions;
use crate::canvas::{blank_canvas, paste_bottom_left};
use crate::error::{EaselError, Result};
use crate::histogram::dominant_color;
use crate::io::discover::list_source_files;
use crate::io::image_io::{ensure_output_dir, load_sprite, save_sprite};
use crate::keying::key_out_color;
use crate::sprite::{Color, Sprite};

use super::config::{OutputMode, PipelineConfig};
use super::types::{BatchReport, NoOpReporter, PipelineStage, ProgressReporter, SkippedFile};

/// Run the full normalization pipeline with a thread-safe progress reporter.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<BatchReport> {
    reporter.begin_stage(PipelineStage::Scanning, None);
    let files = list_source_files(&config.input)?;
    if files.is_empty() {
        return Err(EaselError::EmptyBatch {
            path: config.input.clone(),
        });
    }
    reporter.finish_stage();
    info!(total_files = files.len(), "Scanned source folder");

    // Decode everything up front; per-file failures are isolated so one
    // stray file cannot abort the batch.
    reporter.begin_stage(PipelineStage::Reading, Some(files.len()));
    let mut sprites = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for (i, path) in files.iter().enumerate() {
        match load_sprite(path) {
            Ok(sprite) => sprites.push(sprite),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping undecodable file");
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: err.to_string(),
                });
            }
        }
        reporter.advance(i + 1);
    }
    reporter.finish_stage();
    if sprites.is_empty() {
        return Err(EaselError::EmptySequence);
    }

    reporter.begin_stage(PipelineStage::Analyzing, None);
    let (background, background_count) = resolve_background(config, &sprites)?;
    let (canvas_width, canvas_height) = max_dimensions(&sprites)?;
    reporter.finish_stage();
    info!(%background, canvas_width, canvas_height, "Analyzed batch");

    ensure_output_dir(&config.output)?;

    // Each frame's output is independent of every other frame's, so the
    // composite/key/write loop runs in parallel.
    reporter.begin_stage(PipelineStage::Compositing, Some(sprites.len()));
    let done = AtomicUsize::new(0);
    let results: Vec<std::result::Result<PathBuf, SkippedFile>> = sprites
        .par_iter()
        .map(|sprite| {
            let result = process_sprite(sprite, config, background, canvas_width, canvas_height);
            reporter.advance(done.fetch_add(1, Ordering::Relaxed) + 1);
            result
        })
        .collect();
    reporter.finish_stage();

    let mut written = Vec::new();
    for result in results {
        match result {
            Ok(path) => written.push(path),
            Err(skip) => {
                warn!(path = %skip.path.display(), reason = %skip.reason, "Skipping frame");
                skipped.push(skip);
            }
        }
    }
    info!(written = written.len(), skipped = skipped.len(), "Batch complete");

    Ok(BatchReport {
        background,
        background_count,
        canvas_width,
        canvas_height,
        written,
        skipped,
    })
}

/// Run the full normalization pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<BatchReport> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

/// Background color from the config override or the reference frame histogram.
fn resolve_background(
    config: &PipelineConfig,
    sprites: &[Sprite],
) -> Result<(Color, Option<u64>)> {
    if let Some(color) = config.background {
        return Ok((color, None));
    }

    let reference =
        sprites
            .get(config.reference_index)
            .ok_or(EaselError::ReferenceOutOfRange {
                index: config.reference_index,
                total: sprites.len(),
            })?;
    let detected = dominant_color(reference)?;
    Ok((detected.color, Some(detected.count)))
}

/// Composite one frame onto a fresh canvas, key it if requested, and write
/// the result. Failures are reported per file, never for the whole batch.
fn process_sprite(
    sprite: &Sprite,
    config: &PipelineConfig,
    background: Color,
    canvas_width: u32,
    canvas_height: u32,
) -> std::result::Result<PathBuf, SkippedFile> {
    let source = sprite.metadata.source.clone().unwrap_or_default();
    let skip = |reason: String| SkippedFile {
        path: source.clone(),
        reason,
    };

    let destination = output_path(config, &source);

    let mut composited = blank_canvas(canvas_width, canvas_height, background);
    paste_bottom_left(&mut composited, sprite).map_err(|e| skip(e.to_string()))?;

    let result = match config.mode {
        OutputMode::Canvas => composited,
        OutputMode::Keyed => key_out_color(&composited, background),
    };

    save_sprite(&result, &destination).map_err(|e| skip(e.to_string()))?;
    Ok(destination)
}

/// Destination path: same file name under the output directory. Keyed
/// output always goes to PNG so the alpha channel survives encoding.
fn output_path(config: &PipelineConfig, source: &Path) -> PathBuf {
    let name = source.file_name().unwrap_or_default();
    let mut path = config.output.join(name);
    if config.mode == OutputMode::Keyed {
        path.set_extension("png");
    }
    path
}
