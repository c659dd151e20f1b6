//! The gallery widget.
//!
//! [`ImageGallery`] owns the items, the [`GalleryState`] and the texture
//! store. Call [`ImageGallery::show`] once per frame; it fills the space it
//! is given, or the whole window while fullscreen.

use std::time::Instant;

use egui::{Area, Context, CornerRadius, Id, Order, Rect, Sense, Ui, UiBuilder, ViewportCommand};
use tracing::trace;

use crate::config::GalleryOptions;
use crate::core::gallery::{GalleryCallbacks, GalleryState};
use crate::core::image_loader::{ImageKind, ImageRequest};
use crate::core::item::GalleryItem;
use crate::core::keyboard;
use crate::ui::bullets::bullets;
use crate::ui::controls::{fullscreen_button, index_counter, nav_arrow, play_button, NavSide};
use crate::ui::image_store::ImageStore;
use crate::ui::slides::paint_slides;
use crate::ui::style::color;
use crate::ui::thumbnails::{split_layout, strip_extent, ThumbnailStrip};

/// Extra controls drawn over the slides; receives the slide area.
pub type CustomControls = Box<dyn FnMut(&mut Ui, Rect)>;

pub struct ImageGallery {
    id: Id,
    items: Vec<GalleryItem>,
    state: GalleryState,
    images: ImageStore,
    last_scrolled: Option<usize>,
    custom_controls: Option<CustomControls>,
}

impl ImageGallery {
    pub fn new(
        id_salt: impl std::hash::Hash,
        items: Vec<GalleryItem>,
        options: GalleryOptions,
    ) -> Self {
        let thumbnail_capacity = options.cache_size.max(items.len());
        let images = ImageStore::new(options.cache_size, thumbnail_capacity);
        Self {
            id: Id::new(id_salt),
            state: GalleryState::new(items.len(), options),
            items,
            images,
            last_scrolled: None,
            custom_controls: None,
        }
    }

    pub fn with_callbacks(mut self, callbacks: GalleryCallbacks) -> Self {
        self.state = self.state.with_callbacks(callbacks);
        self
    }

    pub fn with_custom_controls(mut self, controls: impl FnMut(&mut Ui, Rect) + 'static) -> Self {
        self.custom_controls = Some(Box::new(controls));
        self
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GalleryState {
        &mut self.state
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.state.current_index())
    }

    /// Replaces the items. Cached textures for unchanged sources survive.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        let cache_size = self.state.options().cache_size;
        self.images
            .set_capacities(cache_size, cache_size.max(items.len()));
        self.state.set_total(items.len());
        self.items = items;
        self.last_scrolled = None;
    }

    pub fn set_options(&mut self, options: GalleryOptions) {
        self.images.set_capacities(
            options.cache_size,
            options.cache_size.max(self.items.len()),
        );
        self.state.set_options(options, Instant::now());
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn slide_to_index(&mut self, index: usize) -> bool {
        self.state.go_to(index as isize, Instant::now())
    }

    pub fn play(&mut self) {
        self.state.play(Instant::now());
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.state.toggle_fullscreen();
    }

    pub fn exit_fullscreen(&mut self) {
        self.state.exit_fullscreen();
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state.is_fullscreen()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let now = Instant::now();
        let ctx = ui.ctx().clone();
        self.state.mount(now);
        self.sync_viewport(&ctx);
        self.process_images(&ctx);
        self.preload();

        if !ctx.wants_keyboard_input() {
            for key in ctx.input(keyboard::pressed_keys) {
                self.state.handle_key(key, now);
            }
        }

        let rect = ui.available_rect_before_wrap();
        ui.allocate_rect(rect, Sense::hover());

        if self.state.is_fullscreen() {
            let screen = ctx.screen_rect();
            let background = color(self.state.options().style.modal_background);
            Area::new(self.id.with("fullscreen"))
                .order(Order::Foreground)
                .fixed_pos(screen.min)
                .show(&ctx, |ui| {
                    ui.allocate_rect(screen, Sense::hover());
                    ui.painter().rect_filled(screen, CornerRadius::ZERO, background);
                    self.layout(ui, screen, now);
                });
        } else {
            self.layout(ui, rect, now);
        }

        if let Some(fullscreen) = self.state.take_fullscreen_request() {
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
        }
        if let Some(after) = self.state.tick(now) {
            ctx.request_repaint_after(after);
        }
    }

    fn sync_viewport(&mut self, ctx: &Context) {
        let reported = ctx.input(|i| i.viewport().fullscreen);
        self.state.set_native_fullscreen_supported(reported.is_some());
        if let Some(fullscreen) = reported {
            self.state.on_native_fullscreen_change(fullscreen);
        }
    }

    fn preload(&mut self) {
        let fullscreen = self.state.is_fullscreen();
        for index in self.state.preload_window() {
            let Some(item) = self.items.get(index) else {
                continue;
            };
            if item.render_item.is_some() || !self.state.should_load_slide(index) {
                continue;
            }
            let source = self.state.effective_source(item.slide_source(fullscreen));
            self.images.ensure(ImageRequest::new(ImageKind::Slide, source));
        }
    }

    /// Item indexes currently showing `request`.
    fn indexes_for(&self, request: &ImageRequest) -> Vec<usize> {
        let shows = |source: &str| self.state.effective_source(source) == request.source;
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| match request.kind {
                ImageKind::Slide => {
                    shows(&item.original) || item.fullscreen.as_deref().is_some_and(shows)
                }
                ImageKind::Thumbnail => shows(item.thumbnail_source()),
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn process_images(&mut self, ctx: &Context) {
        for finished in self.images.process(ctx) {
            let indexes = self.indexes_for(&finished.request);
            trace!(source = %finished.request.source, ?indexes, "image finished");
            match finished.error {
                None => {
                    if finished.request.kind == ImageKind::Slide {
                        for index in indexes {
                            self.state.image_loaded(index);
                        }
                    }
                }
                Some(err) => {
                    for index in indexes {
                        let fallback = self.state.image_failed(
                            index,
                            finished.request.kind,
                            &finished.request.source,
                            &err,
                        );
                        if let Some(fallback) = fallback {
                            self.images
                                .ensure(ImageRequest::new(finished.request.kind, fallback));
                        }
                    }
                }
            }
        }
    }

    fn layout(&mut self, ui: &mut Ui, rect: Rect, now: Instant) {
        let options = self.state.options().clone();
        let style = &options.style;
        let total = self.state.total();

        let (slides_rect, strip) = if options.show_thumbnails && total > 0 {
            let (slides, strip) =
                split_layout(rect, options.thumbnail_position, strip_extent(style));
            (slides, Some(strip))
        } else {
            (rect, None)
        };

        ui.painter()
            .rect_filled(slides_rect, CornerRadius::ZERO, color(style.background));

        let response = ui.interact(
            slides_rect,
            self.id.with("slides"),
            Sense::click_and_drag(),
        );
        if response.drag_started() {
            self.state.swipe_begin();
        }
        if response.dragged() && self.state.is_swiping() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let (Some(origin), Some(pos)) = (origin, response.interact_pointer_pos()) {
                let delta = pos - origin;
                self.state.swipe_update(delta.x, delta.y, slides_rect.width());
            }
        }
        if response.drag_stopped() {
            let velocity = ui.input(|i| i.pointer.velocity().x);
            self.state.swipe_end(velocity, now);
        }
        if response.clicked() {
            self.state.slide_clicked(self.state.current_index());
        }
        if let Some(tooltip) = self.current_item().and_then(GalleryItem::slide_tooltip) {
            response.on_hover_text(tooltip.to_string());
        }

        paint_slides(
            ui,
            slides_rect,
            &self.items,
            &self.state,
            &mut self.images,
            style,
            now,
        );

        if options.show_nav && total > 1 {
            let left = self.state.can_slide_left();
            if nav_arrow(ui, slides_rect, NavSide::Left, left, style).clicked() {
                self.state.slide_left(now);
            }
            let right = self.state.can_slide_right();
            if nav_arrow(ui, slides_rect, NavSide::Right, right, style).clicked() {
                self.state.slide_right(now);
            }
        }
        if options.show_bullets && total > 1 {
            let current = self.state.current_index();
            if let Some(index) = bullets(ui, slides_rect, &self.items, current, style) {
                self.state.bullet_clicked(index, now);
            }
        }
        if options.show_index {
            index_counter(ui, slides_rect, &self.state.index_label(), style);
        }
        if options.show_play_button
            && total > 1
            && play_button(ui, slides_rect, self.state.is_playing(), style).clicked()
        {
            self.state.toggle_play(now);
        }
        if options.show_fullscreen_button
            && fullscreen_button(ui, slides_rect, self.state.is_fullscreen(), style).clicked()
        {
            self.state.toggle_fullscreen();
        }
        if let Some(controls) = self.custom_controls.as_mut() {
            let mut child = ui.new_child(UiBuilder::new().max_rect(slides_rect));
            controls(&mut child, slides_rect);
        }

        if let Some(strip) = strip {
            let current = self.state.current_index();
            let event = ThumbnailStrip {
                items: &self.items,
                state: &self.state,
                style,
                position: options.thumbnail_position,
                draggable: !options.disable_thumbnail_swipe,
                scroll_to_current: !options.disable_thumbnail_scroll
                    && self.last_scrolled != Some(current),
            }
            .show(ui, strip, &mut self.images);
            self.last_scrolled = Some(current);

            if let Some(index) = event.clicked {
                self.state.thumbnail_clicked(index, now);
            }
            self.state.thumbnail_hovered(event.hovered, now);
        }
    }
}
