use anyhow::anyhow;

use crate::config::config::*;
use crate::config::GalleryOptions;
use crate::core::item::GalleryItem;
use crate::ui::viewer::ImageViewerApp;

/// Opens the viewer window and blocks until it closes.
pub fn run(items: Vec<GalleryItem>, options: GalleryOptions) -> anyhow::Result<()> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native,
        Box::new(move |_cc| Ok(Box::new(ImageViewerApp::new(items, options)))),
    )
    .map_err(|err| anyhow!("failed to start the viewer: {err}"))
}
