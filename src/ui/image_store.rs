use egui::{Context, TextureHandle, TextureOptions};

use crate::config::config::MIN_SLIDE_CACHE;
use crate::core::image_cache::ImageCache;
use crate::core::image_loader::{ImageKind, ImageLoaderFactory, ImageRequest, LoadError};
use crate::core::preload_manager::PreloadManager;

/// What the widget can draw for a request right now.
pub enum ImageState {
    Ready(TextureHandle),
    Loading,
    Failed,
    NotRequested,
}

/// Decode finished this frame.
pub struct Finished {
    pub request: ImageRequest,
    pub error: Option<LoadError>,
}

/// Textures for slides and thumbnails, decoded in the background.
///
/// The slide cache never drops below the preload window, or slides
/// requested every frame would evict each other and decode forever.
pub struct ImageStore {
    preload: PreloadManager,
    slides: ImageCache,
    thumbnails: ImageCache,
}

impl ImageStore {
    pub fn new(slide_capacity: usize, thumbnail_capacity: usize) -> Self {
        Self::with_factory(ImageLoaderFactory::new(), slide_capacity, thumbnail_capacity)
    }

    pub fn with_factory(
        factory: ImageLoaderFactory,
        slide_capacity: usize,
        thumbnail_capacity: usize,
    ) -> Self {
        Self {
            preload: PreloadManager::new(factory),
            slides: ImageCache::new(slide_capacity.max(MIN_SLIDE_CACHE)),
            thumbnails: ImageCache::new(thumbnail_capacity),
        }
    }

    fn cache(&mut self, kind: ImageKind) -> &mut ImageCache {
        match kind {
            ImageKind::Slide => &mut self.slides,
            ImageKind::Thumbnail => &mut self.thumbnails,
        }
    }

    pub fn set_capacities(&mut self, slides: usize, thumbnails: usize) {
        self.slides.set_capacity(slides.max(MIN_SLIDE_CACHE));
        self.thumbnails.set_capacity(thumbnails);
    }

    /// Queues a decode unless the texture is cached, loading or failed.
    pub fn ensure(&mut self, request: ImageRequest) {
        if request.source.is_empty() || self.cache(request.kind).contains(&request) {
            return;
        }
        self.preload.request(request);
    }

    pub fn state(&mut self, request: &ImageRequest) -> ImageState {
        if let Some(texture) = self.cache(request.kind).get(request) {
            return ImageState::Ready(texture.clone());
        }
        if self.preload.has_failed(request) {
            ImageState::Failed
        } else if self.preload.is_loading(request) {
            ImageState::Loading
        } else {
            ImageState::NotRequested
        }
    }

    /// Uploads finished decodes as textures and reports each outcome.
    pub fn process(&mut self, ctx: &Context) -> Vec<Finished> {
        self.preload.set_repaint_context(ctx);
        self.preload
            .drain()
            .into_iter()
            .map(|loaded| match loaded.result {
                Ok(image) => {
                    let texture = ctx.load_texture(
                        format!("gallery-{:?}-{}", loaded.request.kind, loaded.request.source),
                        image,
                        TextureOptions::LINEAR,
                    );
                    self.cache(loaded.request.kind)
                        .insert(loaded.request.clone(), texture);
                    Finished {
                        request: loaded.request,
                        error: None,
                    }
                }
                Err(err) => Finished {
                    request: loaded.request,
                    error: Some(err),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_loader::ImageLoader;
    use egui::{Color32, ColorImage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct CountingLoader(Arc<AtomicUsize>);

    impl ImageLoader for CountingLoader {
        fn load(&self, _request: &ImageRequest) -> Result<ColorImage, LoadError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ColorImage::new([1, 1], Color32::WHITE))
        }

        fn supports(&self, _source: &str) -> bool {
            true
        }
    }

    fn settle(store: &mut ImageStore, ctx: &Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            store.process(ctx);
            if !store.preload.has_pending() || Instant::now() > deadline {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn tiny_cache_still_holds_the_preload_window() {
        let decodes = Arc::new(AtomicUsize::new(0));
        let factory =
            ImageLoaderFactory::with_loaders(vec![Box::new(CountingLoader(decodes.clone()))]);
        let mut store = ImageStore::with_factory(factory, 1, 1);
        let ctx = Context::default();
        let requests: Vec<_> = ["a.png", "b.png", "c.png"]
            .into_iter()
            .map(|src| ImageRequest::new(ImageKind::Slide, src))
            .collect();

        for _frame in 0..5 {
            for request in &requests {
                store.ensure(request.clone());
            }
            settle(&mut store, &ctx);
        }

        assert_eq!(decodes.load(Ordering::SeqCst), 3);
        for request in &requests {
            assert!(matches!(store.state(request), ImageState::Ready(_)));
        }
    }

    #[test]
    fn shrinking_capacities_keeps_the_window() {
        let decodes = Arc::new(AtomicUsize::new(0));
        let factory =
            ImageLoaderFactory::with_loaders(vec![Box::new(CountingLoader(decodes.clone()))]);
        let mut store = ImageStore::with_factory(factory, 8, 8);
        store.set_capacities(0, 8);
        let ctx = Context::default();
        for src in ["a.png", "b.png", "c.png"] {
            store.ensure(ImageRequest::new(ImageKind::Slide, src));
        }
        settle(&mut store, &ctx);
        assert_eq!(store.slides.len(), 3);
    }
}
