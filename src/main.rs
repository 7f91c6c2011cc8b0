// Pixel Magnifier - Main Entry Point
//
// Loads a PNG, magnifies it with the configured filter, and shows the
// result in a preview window. Press S in the window to export the
// scaled image, Esc to quit.

use std::env;
use std::path::Path;
use std::time::Instant;

use magnify_rs::config::MagnifierConfig;
use magnify_rs::display::run_preview;
use magnify_rs::filter::FilterKind;
use magnify_rs::image::{png_io, scale_host_image, PixelData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Pixel Magnifier (magnify-rs) v0.1.0");
    println!("===================================");
    println!();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        eprintln!("Usage: {} <image.png> [filter]", args[0]);
        eprintln!();
        eprintln!("Available filters:");
        for kind in FilterKind::all() {
            eprintln!("  {}", kind);
        }
        std::process::exit(1);
    };

    // Load or create the configuration
    let mut config = MagnifierConfig::load_or_default();

    // A filter name on the command line overrides the configured one
    if let Some(name) = args.get(2) {
        match FilterKind::from_name(name) {
            Some(kind) => config.scaling.filter = kind,
            None => {
                eprintln!("Unknown filter '{}'", name);
                eprintln!("Available filters:");
                for kind in FilterKind::all() {
                    eprintln!("  {}", kind);
                }
                std::process::exit(1);
            }
        }
    }

    let image = png_io::load_png(Path::new(input_path))?;
    let storage = match image.data() {
        PixelData::Rgb(_) => "truecolor".to_string(),
        PixelData::Indexed { palette, .. } => format!("indexed, {} colors", palette.len()),
    };
    println!(
        "Loaded '{}' ({}x{}, {})",
        input_path,
        image.width(),
        image.height(),
        storage
    );

    let kind = config.scaling.filter;
    let filter = kind.create();

    let start = Instant::now();
    let scaled = scale_host_image(filter.as_ref(), &image)?;
    let elapsed = start.elapsed();

    println!(
        "Scaled with {} to {}x{} in {:.2} ms",
        kind,
        scaled.width(),
        scaled.height(),
        elapsed.as_secs_f64() * 1000.0
    );
    println!();

    let title = format!(
        "Pixel Magnifier - {} ({}x{})",
        kind,
        scaled.width(),
        scaled.height()
    );
    run_preview(scaled, title, config.window.vsync, config.export.clone())?;

    println!("Preview window closed.");
    Ok(())
}
