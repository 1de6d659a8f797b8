use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use easel_core::pipeline::config::{OutputMode, PipelineConfig};
use easel_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};
use easel_core::sprite::Color;

use crate::summary::print_run_summary;

#[derive(Clone, ValueEnum)]
pub enum ModeArg {
    Canvas,
    Keyed,
}

#[derive(Args)]
pub struct RunArgs {
    /// Source folder of sprite frames
    pub input: PathBuf,

    /// Destination folder for normalized frames
    pub output: PathBuf,

    /// Pipeline config file (TOML); overrides the other arguments
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output mode
    #[arg(long, value_enum, default_value = "canvas")]
    pub mode: ModeArg,

    /// Background color override as #RRGGBB (skips detection)
    #[arg(long)]
    pub background: Option<String>,

    /// Frame used for background detection (position in sorted file order)
    #[arg(long, default_value = "0")]
    pub reference: usize,
}

/// Progress bar driven by the core pipeline's reporter callbacks.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        self.bar.set_position(self.bar.length().unwrap_or(0));
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    print_run_summary(&config);

    let pb = ProgressBar::new(1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reporter = Arc::new(BarReporter { bar: pb.clone() });
    let report = run_pipeline_reported(&config, reporter)?;

    pb.finish_with_message("Done");
    println!();
    match report.background_count {
        Some(count) => println!(
            "Background:  {} ({} px in reference frame)",
            report.background, count
        ),
        None => println!("Background:  {} (override)", report.background),
    }
    println!(
        "Canvas:      {}x{}",
        report.canvas_width, report.canvas_height
    );
    println!(
        "Written:     {} file(s) to {}",
        report.written.len(),
        config.output.display()
    );

    if !report.skipped.is_empty() {
        println!("\nSkipped {} file(s):", report.skipped.len());
        for skip in &report.skipped {
            println!("  {}: {}", skip.path.display(), skip.reason);
        }
        anyhow::bail!(
            "{} of {} files failed",
            report.skipped.len(),
            report.skipped.len() + report.written.len()
        );
    }

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<PipelineConfig> {
    let background = args
        .background
        .as_deref()
        .map(Color::from_hex)
        .transpose()
        .context("Invalid --background color")?;

    Ok(PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        mode: match args.mode {
            ModeArg::Canvas => OutputMode::Canvas,
            ModeArg::Keyed => OutputMode::Keyed,
        },
        background,
        reference_index: args.reference,
    })
}
