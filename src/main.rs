#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use image_gallery::config::{self, GalleryOptions};
use image_gallery::core::file_manager::FileManager;
use image_gallery::GalleryItem;

#[derive(Debug, Parser)]
#[command(name = "image-gallery", version, about = "Carousel image gallery")]
struct Cli {
    /// Image, folder of images, or gallery `.toml` file to open
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Gallery options file; overrides the `[gallery]` table of PATH
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start the slideshow right away
    #[arg(long)]
    autoplay: bool,

    /// Override the slideshow interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("image_gallery={level}").parse()?)
        .add_directive("wgpu=warn".parse()?)
        .add_directive("winit=warn".parse()?)
        .add_directive("eframe=warn".parse()?)
        .add_directive("egui=warn".parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn is_gallery_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn load(cli: &Cli) -> Result<(Vec<GalleryItem>, GalleryOptions)> {
    let (items, mut options) = match cli.path.as_deref() {
        Some(path) if is_gallery_file(path) => {
            let file = config::load_from_path(path)
                .with_context(|| format!("loading gallery from {}", path.display()))?;
            (file.items, file.gallery)
        }
        Some(path) => {
            let (items, start) = FileManager::items_for_path(path)
                .with_context(|| format!("opening {}", path.display()))?;
            let options = GalleryOptions {
                start_index: start,
                ..GalleryOptions::default()
            };
            (items, options)
        }
        None => (Vec::new(), GalleryOptions::default()),
    };

    if let Some(config_path) = cli.config.as_deref() {
        let start = options.start_index;
        options = config::load_options(config_path)
            .with_context(|| format!("loading config from {}", config_path.display()))?;
        if options.start_index == 0 {
            options.start_index = start;
        }
    }
    if cli.autoplay {
        options.autoplay = true;
    }
    if let Some(ms) = cli.interval_ms {
        options.slide_interval = Duration::from_millis(ms);
    }
    options.validate().context("validating gallery options")?;
    Ok((items, options))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let (items, options) = load(&cli)?;
    info!(count = items.len(), autoplay = options.autoplay, "starting gallery");

    image_gallery::app::run(items, options)
}
