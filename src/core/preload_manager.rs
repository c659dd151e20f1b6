use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::Arc;

use egui::{ColorImage, Context};
use tracing::{debug, warn};

use crate::core::image_loader::{ImageLoaderFactory, ImageRequest, LoadError};

/// Result of one background decode.
pub struct LoadedImage {
    pub request: ImageRequest,
    pub result: Result<ColorImage, LoadError>,
}

/// Decodes images on a rayon pool and hands results back to the UI thread.
///
/// Each request is decoded at most once while in flight, and a request that
/// failed is never attempted again.
pub struct PreloadManager {
    image_receiver: mpsc::Receiver<LoadedImage>,
    image_sender: mpsc::Sender<LoadedImage>,
    in_flight: HashSet<ImageRequest>,
    failed: HashSet<ImageRequest>,
    pool: Option<Arc<rayon::ThreadPool>>,
    loader_factory: ImageLoaderFactory,
    repaint: Option<Context>,
}

impl Default for PreloadManager {
    fn default() -> Self {
        Self::new(ImageLoaderFactory::new())
    }
}

impl PreloadManager {
    pub fn new(loader_factory: ImageLoaderFactory) -> Self {
        let (sender, receiver) = mpsc::channel();
        let threads = num_cpus::get().clamp(1, 4);
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("gallery-decode-{i}"))
            .build()
        {
            Ok(pool) => Some(Arc::new(pool)),
            Err(err) => {
                warn!(%err, "falling back to the global rayon pool for decoding");
                None
            }
        };

        Self {
            image_receiver: receiver,
            image_sender: sender,
            in_flight: HashSet::new(),
            failed: HashSet::new(),
            pool,
            loader_factory,
            repaint: None,
        }
    }

    /// Context woken up whenever a decode finishes.
    pub fn set_repaint_context(&mut self, ctx: &Context) {
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }
    }

    /// Queues a decode. Returns false when the request is already in
    /// flight or has failed before.
    pub fn request(&mut self, request: ImageRequest) -> bool {
        if self.in_flight.contains(&request) || self.failed.contains(&request) {
            return false;
        }
        self.in_flight.insert(request.clone());
        debug!(source = %request.source, kind = ?request.kind, "queueing decode");

        let sender = self.image_sender.clone();
        let factory = self.loader_factory.clone();
        let repaint = self.repaint.clone();
        let job = move || {
            let result = factory.load(&request);
            if sender.send(LoadedImage { request, result }).is_err() {
                return; // receiver dropped with the gallery
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };
        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
        true
    }

    /// Collects finished decodes. Failures are remembered so they are not
    /// requested again.
    pub fn drain(&mut self) -> Vec<LoadedImage> {
        let mut done = Vec::new();
        while let Ok(loaded) = self.image_receiver.try_recv() {
            self.in_flight.remove(&loaded.request);
            if let Err(err) = &loaded.result {
                warn!(source = %loaded.request.source, %err, "image failed to load");
                self.failed.insert(loaded.request.clone());
            }
            done.push(loaded);
        }
        done
    }

    pub fn is_loading(&self, request: &ImageRequest) -> bool {
        self.in_flight.contains(request)
    }

    pub fn has_failed(&self, request: &ImageRequest) -> bool {
        self.failed.contains(request)
    }

    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }
}

/// Remembers which slides have been near the current one, so lazily
/// loaded slides stay loaded after the gallery moves on.
#[derive(Debug, Clone)]
pub struct LazyLoadTracker {
    enabled: bool,
    seen: Vec<bool>,
}

impl LazyLoadTracker {
    pub fn new(enabled: bool, total: usize) -> Self {
        Self {
            enabled,
            seen: vec![false; total],
        }
    }

    pub fn reset(&mut self, total: usize) {
        self.seen = vec![false; total];
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn mark(&mut self, window: &[usize]) {
        for &idx in window {
            if let Some(seen) = self.seen.get_mut(idx) {
                *seen = true;
            }
        }
    }

    pub fn should_load(&self, index: usize) -> bool {
        !self.enabled || self.seen.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_loader::ImageKind;
    use std::time::{Duration, Instant};

    fn wait_for(manager: &mut PreloadManager) -> Vec<LoadedImage> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let done = manager.drain();
            if !done.is_empty() || Instant::now() > deadline {
                return done;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn failed_requests_are_not_retried() {
        let mut manager = PreloadManager::default();
        let request = ImageRequest::new(ImageKind::Slide, "/missing/image.png");
        assert!(manager.request(request.clone()));
        assert!(!manager.request(request.clone()));
        let done = wait_for(&mut manager);
        assert_eq!(done.len(), 1);
        assert!(done[0].result.is_err());
        assert!(manager.has_failed(&request));
        assert!(!manager.request(request));
        assert!(!manager.has_pending());
    }

    #[test]
    fn lazy_tracker_keeps_seen_slides() {
        let mut lazy = LazyLoadTracker::new(true, 5);
        assert!(!lazy.should_load(0));
        lazy.mark(&[0, 1, 4]);
        assert!(lazy.should_load(4));
        assert!(!lazy.should_load(2));
        lazy.mark(&[2]);
        assert!(lazy.should_load(0));

        let eager = LazyLoadTracker::new(false, 5);
        assert!(eager.should_load(3));
    }
}
