use std::path::PathBuf;

use crate::sprite::Color;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum PipelineStage {
    Scanning,
    Reading,
    Analyzing,
    Compositing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scanning => write!(f, "Scanning source folder"),
            Self::Reading => write!(f, "Reading frames"),
            Self::Analyzing => write!(f, "Analyzing background"),
            Self::Compositing => write!(f, "Compositing frames"),
        }
    }
}

/// Summary of one batch run.
#[derive(Clone, Debug)]
pub struct BatchReport {
    /// Background color used as the canvas fill (and key, in keyed mode).
    pub background: Color,
    /// Occurrence count from detection; `None` when the color was overridden.
    pub background_count: Option<u64>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Source files skipped after a per-file failure.
    pub skipped: Vec<SkippedFile>,
}

/// A source file that failed to decode, composite, or write.
#[derive(Clone, Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., frame count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
