use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use easel_core::bounds::max_dimensions;
use easel_core::histogram::dominant_color;
use easel_core::io::discover::list_source_files;
use easel_core::io::image_io::load_sprite;

#[derive(Args)]
pub struct InfoArgs {
    /// Source folder of sprite frames
    pub dir: PathBuf,

    /// Frame used for background detection (position in sorted file order)
    #[arg(long, default_value = "0")]
    pub reference: usize,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let files = list_source_files(&args.dir)?;

    println!("Folder:      {}", args.dir.display());
    println!("Files:       {}", files.len());
    println!();

    let mut sprites = Vec::new();
    for path in &files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<non-utf8>");
        match load_sprite(path) {
            Ok(sprite) => {
                println!("  {:<32} {}x{}", name, sprite.width(), sprite.height());
                sprites.push(sprite);
            }
            Err(err) => println!("  {:<32} not decodable ({err})", name),
        }
    }

    if sprites.is_empty() {
        println!("\nNo decodable frames.");
        return Ok(());
    }

    let (width, height) = max_dimensions(&sprites)?;
    println!();
    println!("Canvas:      {}x{}", width, height);

    let reference = sprites.get(args.reference).ok_or_else(|| {
        anyhow::anyhow!(
            "reference frame {} out of range (total: {})",
            args.reference,
            sprites.len()
        )
    })?;
    let background = dominant_color(reference)?;
    println!(
        "Background:  {} ({} px in frame {})",
        background.color, background.count, args.reference
    );

    Ok(())
}
