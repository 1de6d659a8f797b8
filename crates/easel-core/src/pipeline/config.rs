use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sprite::Color;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub mode: OutputMode,
    /// Fixed background color; detected from the reference frame when unset.
    #[serde(default)]
    pub background: Option<Color>,
    /// Frame used for background detection (position among decoded frames,
    /// sorted by file name).
    #[serde(default)]
    pub reference_index: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Composite each frame onto the common canvas.
    #[default]
    Canvas,
    /// Composite, then key the background color out to transparency.
    Keyed,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canvas => write!(f, "canvas"),
            Self::Keyed => write!(f, "keyed"),
        }
    }
}
