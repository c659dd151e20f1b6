use std::path::Path;

use eframe::egui;
use rfd::FileDialog;
use tracing::{info, warn};

use crate::config::config::*;
use crate::config::GalleryOptions;
use crate::core::file_manager::FileManager;
use crate::core::item::GalleryItem;
use crate::i18n::en::*;
use crate::ui::gallery_view::ImageGallery;

/// Desktop shell around one [`ImageGallery`].
pub struct ImageViewerApp {
    gallery: Option<ImageGallery>,
    options: GalleryOptions,
    show_about: bool,
}

impl ImageViewerApp {
    pub fn new(items: Vec<GalleryItem>, options: GalleryOptions) -> Self {
        let mut app = Self {
            gallery: None,
            options,
            show_about: false,
        };
        app.set_items(items, None);
        app
    }

    fn set_items(&mut self, items: Vec<GalleryItem>, start: Option<usize>) {
        if items.is_empty() {
            self.gallery = None;
            return;
        }
        let mut options = self.options.clone();
        if let Some(start) = start {
            options.start_index = start;
        }
        self.gallery = Some(ImageGallery::new("viewer-gallery", items, options));
    }

    fn open_path(&mut self, path: &Path) {
        match FileManager::items_for_path(path) {
            Ok((items, start)) => {
                info!(path = %path.display(), count = items.len(), "opened images");
                self.set_items(items, Some(start));
            }
            Err(err) => warn!(path = %path.display(), %err, "could not open images"),
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.gallery
            .as_ref()
            .is_some_and(ImageGallery::is_fullscreen)
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F11)) {
            if let Some(gallery) = self.gallery.as_mut() {
                gallery.toggle_fullscreen();
            }
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                ui.separator();
                if ui.button(BTN_ABOUT).clicked() {
                    self.show_about = true;
                }
                self.show_image_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(BTN_OPEN).clicked() {
            let (filter_name, extensions) = FileManager::supported_file_filter();
            if let Some(path) = FileDialog::new()
                .add_filter(filter_name, &extensions)
                .pick_file()
            {
                self.open_path(&path);
            }
        }
    }

    fn show_image_info(&self, ui: &mut egui::Ui) {
        let Some(gallery) = self.gallery.as_ref() else {
            return;
        };
        ui.separator();
        ui.label(gallery.state().index_label());
        if let Some(title) = gallery.current_item().and_then(|i| i.original_title.as_deref()) {
            ui.label(title);
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(APP_NAME);
                    ui.label(format!("v{}", APP_VERSION));
                    ui.add_space(10.0);
                    ui.label(TEXT_ABOUT);
                    ui.label(TEXT_LICENSE);
                });
                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match self.gallery.as_mut() {
                Some(gallery) => gallery.show(ui),
                None => Self::show_placeholder_text(ui),
            });
    }

    fn show_placeholder_text(ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading(TEXT_EMPTY_GALLERY);
            ui.label(TEXT_OPEN_HINT);
            ui.label(TEXT_KEYS_HINT);
        });
    }
}

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        if !self.is_fullscreen() {
            self.show_toolbar(ctx);
        }

        self.show_about_dialog(ctx);
        self.show_main_content(ctx);
    }
}
