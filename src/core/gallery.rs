//! Gallery coordinator.
//!
//! [`GalleryState`] owns every piece of mutable gallery state (index,
//! autoplay timer, fullscreen flag, swipe, slide animation, thumbnail hover)
//! and reports changes through [`GalleryCallbacks`]. It knows nothing about
//! drawing; the egui widget in `ui::gallery_view` feeds it input and reads
//! positions back. Time is always passed in, so the state machine can be
//! driven deterministically.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::config::THUMBNAIL_HOVER_DELAY;
use crate::config::GalleryOptions;
use crate::core::autoplay::AutoplayTimer;
use crate::core::fullscreen::FullscreenController;
use crate::core::image_loader::{ImageKind, LoadError};
use crate::core::keyboard::{action_for_key, KeyAction};
use crate::core::navigation::{NavigationManager, SlideMove};
use crate::core::preload_manager::LazyLoadTracker;
use crate::core::swipe::{SwipeOutcome, SwipeTracker};
use crate::core::transition::{base_position, SlideTransition};

type IndexCallback = Box<dyn FnMut(usize)>;
type ErrorCallback = Box<dyn FnMut(usize, &LoadError)>;

/// Listeners for gallery events. Every field is optional.
#[derive(Default)]
pub struct GalleryCallbacks {
    /// A move was requested; receives the target index.
    pub on_before_slide: Option<IndexCallback>,
    /// The slide animation finished; receives the new index.
    pub on_slide: Option<IndexCallback>,
    pub on_play: Option<IndexCallback>,
    pub on_pause: Option<IndexCallback>,
    pub on_screen_change: Option<Box<dyn FnMut(bool)>>,
    pub on_click: Option<IndexCallback>,
    pub on_thumbnail_click: Option<IndexCallback>,
    pub on_bullet_click: Option<IndexCallback>,
    pub on_image_load: Option<IndexCallback>,
    pub on_image_error: Option<ErrorCallback>,
    pub on_thumbnail_error: Option<ErrorCallback>,
}

fn emit(callback: &mut Option<IndexCallback>, index: usize) {
    if let Some(cb) = callback.as_mut() {
        cb(index);
    }
}

pub struct GalleryState {
    options: GalleryOptions,
    navigation: NavigationManager,
    autoplay: AutoplayTimer,
    fullscreen: FullscreenController,
    swipe: SwipeTracker,
    transition: SlideTransition,
    last_step: isize,
    pending_slide: Option<usize>,
    hover: Option<(usize, Instant)>,
    lazy: LazyLoadTracker,
    fallbacks: HashMap<String, String>,
    callbacks: GalleryCallbacks,
    mounted: bool,
}

impl GalleryState {
    pub fn new(total: usize, options: GalleryOptions) -> Self {
        let navigation = NavigationManager::new(total, options.start_index, options.infinite);
        let mut lazy = LazyLoadTracker::new(options.lazy_load, total);
        lazy.mark(&navigation.visible_window());
        Self {
            autoplay: AutoplayTimer::new(options.autoplay_period()),
            fullscreen: FullscreenController::new(options.use_native_fullscreen),
            swipe: SwipeTracker::new(options.swipe_threshold, options.flick_threshold),
            transition: SlideTransition::new(options.slide_duration),
            navigation,
            last_step: 0,
            pending_slide: None,
            hover: None,
            lazy,
            fallbacks: HashMap::new(),
            callbacks: GalleryCallbacks::default(),
            mounted: false,
            options,
        }
    }

    pub fn with_callbacks(mut self, callbacks: GalleryCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn callbacks_mut(&mut self) -> &mut GalleryCallbacks {
        &mut self.callbacks
    }

    /// First frame: starts autoplay when configured.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        debug!(
            total = self.total(),
            start = self.current_index(),
            "gallery mounted"
        );
        if self.options.autoplay {
            self.play(now);
        }
    }

    /// Tears the autoplay timer down unconditionally.
    pub fn unmount(&mut self) {
        self.autoplay.teardown();
        self.transition.cancel();
        self.swipe.cancel();
        self.hover = None;
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    /// Replaces the item count after the item list changed.
    pub fn set_total(&mut self, total: usize) {
        if total == self.navigation.total() {
            return;
        }
        self.navigation.set_total(total);
        self.lazy.reset(total);
        self.lazy.mark(&self.navigation.visible_window());
        self.fallbacks.clear();
        self.transition.cancel();
        self.pending_slide = None;
    }

    /// Applies changed options, restarting autoplay on timing changes.
    pub fn set_options(&mut self, options: GalleryOptions, now: Instant) {
        self.navigation.set_infinite(options.infinite);
        self.fullscreen.set_use_native(options.use_native_fullscreen);
        self.swipe
            .set_thresholds(options.swipe_threshold, options.flick_threshold);
        self.transition.set_duration(options.slide_duration);
        self.lazy.set_enabled(options.lazy_load);
        self.autoplay.set_interval(options.autoplay_period(), now);
        self.options = options;
    }

    // Navigation

    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    pub fn previous_index(&self) -> usize {
        self.navigation.previous_index()
    }

    pub fn total(&self) -> usize {
        self.navigation.total()
    }

    pub fn can_go_next(&self) -> bool {
        self.navigation.can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigation.can_go_previous()
    }

    /// Whether the left arrow does anything; mirrored in RTL.
    pub fn can_slide_left(&self) -> bool {
        if self.options.is_rtl {
            self.can_go_next()
        } else {
            self.can_go_previous()
        }
    }

    pub fn can_slide_right(&self) -> bool {
        if self.options.is_rtl {
            self.can_go_previous()
        } else {
            self.can_go_next()
        }
    }

    pub fn next(&mut self, now: Instant) -> bool {
        let from = self.live_offset(now);
        let mv = self.navigation.next();
        self.begin_move(mv, from, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        let from = self.live_offset(now);
        let mv = self.navigation.previous();
        self.begin_move(mv, from, now)
    }

    pub fn slide_left(&mut self, now: Instant) -> bool {
        if self.options.is_rtl {
            self.next(now)
        } else {
            self.previous(now)
        }
    }

    pub fn slide_right(&mut self, now: Instant) -> bool {
        if self.options.is_rtl {
            self.previous(now)
        } else {
            self.next(now)
        }
    }

    /// Jumps to `index`; out-of-range requests wrap to the other end.
    pub fn go_to(&mut self, index: isize, now: Instant) -> bool {
        let from = self.live_offset(now);
        let mv = self.navigation.go_to(index);
        self.begin_move(mv, from, now)
    }

    fn begin_move(&mut self, mv: Option<SlideMove>, from_offset: f32, now: Instant) -> bool {
        let Some(mv) = mv else {
            return false;
        };
        debug!(from = mv.from, to = mv.to, step = mv.step, "slide");
        emit(&mut self.callbacks.on_before_slide, mv.to);
        self.last_step = mv.step;
        self.pending_slide = Some(mv.to);
        self.transition
            .start(from_offset + 100.0 * mv.step as f32, now);
        self.lazy.mark(&self.navigation.visible_window());
        if self.transition.duration().is_zero() {
            self.finish_transition(now);
        }
        true
    }

    fn finish_transition(&mut self, now: Instant) {
        if self.transition.finish_if_done(now) {
            if let Some(index) = self.pending_slide.take() {
                emit(&mut self.callbacks.on_slide, index);
            }
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_running()
    }

    // Autoplay

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn play(&mut self, now: Instant) {
        if self.autoplay.start(now) {
            info!(index = self.current_index(), "slideshow playing");
            emit(&mut self.callbacks.on_play, self.navigation.current_index());
        }
    }

    pub fn pause(&mut self) {
        if self.autoplay.stop() {
            info!(index = self.current_index(), "slideshow paused");
            emit(&mut self.callbacks.on_pause, self.navigation.current_index());
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Changes the autoplay interval; a running slideshow restarts without
    /// reporting play/pause.
    pub fn set_slide_interval(&mut self, interval: Duration, now: Instant) {
        self.options.slide_interval = interval;
        self.autoplay
            .set_interval(self.options.autoplay_period(), now);
    }

    pub fn set_slide_duration(&mut self, duration: Duration, now: Instant) {
        self.options.slide_duration = duration;
        self.transition.set_duration(duration);
        self.autoplay
            .set_interval(self.options.autoplay_period(), now);
    }

    /// Handle of the armed autoplay timer, if any.
    pub fn autoplay_handle(&self) -> Option<u64> {
        self.autoplay.handle()
    }

    // Fullscreen

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    pub fn is_modal_fullscreen(&self) -> bool {
        self.fullscreen.is_modal()
    }

    pub fn set_native_fullscreen_supported(&mut self, supported: bool) {
        self.fullscreen.set_native_supported(supported);
    }

    pub fn enter_fullscreen(&mut self) {
        if self.fullscreen.enter() {
            self.screen_changed();
        }
    }

    pub fn exit_fullscreen(&mut self) {
        if self.fullscreen.exit() {
            self.screen_changed();
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.is_fullscreen() {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    /// Feeds the fullscreen state the viewport reports.
    pub fn on_native_fullscreen_change(&mut self, reported: bool) {
        if self.fullscreen.on_native_change(reported) {
            self.screen_changed();
        }
    }

    fn screen_changed(&mut self) {
        let fullscreen = self.fullscreen.is_fullscreen();
        info!(fullscreen, modal = self.fullscreen.is_modal(), "screen change");
        if let Some(cb) = self.callbacks.on_screen_change.as_mut() {
            cb(fullscreen);
        }
    }

    /// Viewport command the widget must send, if any.
    pub fn take_fullscreen_request(&mut self) -> Option<bool> {
        self.fullscreen.take_native_request()
    }

    // Input

    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: egui::Key, now: Instant) -> bool {
        if self.options.disable_keyboard {
            return false;
        }
        match action_for_key(key) {
            Some(KeyAction::SlideLeft) => self.slide_left(now),
            Some(KeyAction::SlideRight) => self.slide_right(now),
            Some(KeyAction::ExitFullscreen) => {
                let was = self.is_fullscreen();
                self.exit_fullscreen();
                was
            }
            None => false,
        }
    }

    pub fn swipe_begin(&mut self) {
        if self.options.disable_swipe || self.total() < 2 {
            return;
        }
        if self.transition.is_running() {
            // grabbing a moving strip lands it
            self.transition.cancel();
            if let Some(index) = self.pending_slide.take() {
                emit(&mut self.callbacks.on_slide, index);
            }
        }
        self.swipe.begin();
    }

    /// Total drag since `swipe_begin`; returns the visual offset in percent.
    pub fn swipe_update(&mut self, dx: f32, dy: f32, width: f32) -> f32 {
        self.swipe.update(dx, dy, width)
    }

    /// Ends the drag; `velocity_x` in points per second.
    pub fn swipe_end(&mut self, velocity_x: f32, now: Instant) -> SwipeOutcome {
        if !self.swipe.is_active() {
            return SwipeOutcome::Cancel;
        }
        let from = self.swipe_index_offset();
        let outcome = self.swipe.finish(velocity_x, self.options.is_rtl);
        let mv = match outcome {
            SwipeOutcome::Next => self.navigation.next(),
            SwipeOutcome::Previous => self.navigation.previous(),
            SwipeOutcome::Cancel => None,
        };
        if mv.is_some() {
            self.begin_move(mv, from, now);
            return outcome;
        }
        if from != 0.0 {
            self.last_step = 0;
            self.transition.start(from, now);
        }
        SwipeOutcome::Cancel
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_active()
    }

    fn swipe_index_offset(&self) -> f32 {
        if self.options.is_rtl {
            -self.swipe.offset()
        } else {
            self.swipe.offset()
        }
    }

    pub fn slide_clicked(&mut self, index: usize) {
        emit(&mut self.callbacks.on_click, index);
    }

    pub fn thumbnail_clicked(&mut self, index: usize, now: Instant) {
        emit(&mut self.callbacks.on_thumbnail_click, index);
        self.hover = None;
        self.go_to(index as isize, now);
    }

    pub fn bullet_clicked(&mut self, index: usize, now: Instant) {
        emit(&mut self.callbacks.on_bullet_click, index);
        self.go_to(index as isize, now);
    }

    /// Reports which thumbnail the pointer rests on, if any.
    pub fn thumbnail_hovered(&mut self, index: Option<usize>, now: Instant) {
        if !self.options.slide_on_thumbnail_over {
            return;
        }
        match (index, self.hover) {
            (Some(idx), Some((current, _))) if idx == current => {}
            (Some(idx), _) => self.hover = Some((idx, now)),
            (None, _) => self.hover = None,
        }
    }

    // Frame clock

    /// Advances timers. Returns how soon the widget should repaint.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        self.finish_transition(now);

        if self.autoplay.poll(now) && !self.swipe.is_active() {
            if !self.navigation.is_infinite() && !self.navigation.can_go_next() {
                self.pause();
            } else {
                self.next(now);
            }
        }

        if let Some((index, since)) = self.hover {
            if now.saturating_duration_since(since) >= THUMBNAIL_HOVER_DELAY {
                self.hover = None;
                self.go_to(index as isize, now);
            }
        }

        let mut wake: Option<Duration> = None;
        let mut consider = |d: Option<Duration>| {
            if let Some(d) = d {
                wake = Some(wake.map_or(d, |w| w.min(d)));
            }
        };
        if self.transition.is_running()
            || self.swipe.is_active()
            || self.fullscreen.is_awaiting_viewport()
        {
            consider(Some(Duration::ZERO));
        }
        consider(self.autoplay.remaining(now));
        consider(self.hover.map(|(_, since)| {
            (since + THUMBNAIL_HOVER_DELAY).saturating_duration_since(now)
        }));
        wake
    }

    // Layout

    fn live_offset(&self, now: Instant) -> f32 {
        if self.swipe.is_active() {
            self.swipe_index_offset()
        } else {
            self.transition.offset(now)
        }
    }

    /// Horizontal position of slide `index` in percent of the gallery
    /// width, mirrored for RTL. The current slide at rest sits at 0.
    pub fn slide_position(&self, index: usize, now: Instant) -> f32 {
        // long jumps scroll the strip in index order
        let wrap = self.navigation.is_infinite()
            && !(self.transition.is_running() && self.last_step.abs() > 1);
        let pos = base_position(
            index,
            self.navigation.current_index(),
            self.navigation.total(),
            wrap,
        ) + self.live_offset(now);
        if self.options.is_rtl {
            -pos
        } else {
            pos
        }
    }

    /// Slides overlapping the viewport, with their positions.
    pub fn visible_slides(&self, now: Instant) -> Vec<(usize, f32)> {
        (0..self.total())
            .map(|i| (i, self.slide_position(i, now)))
            .filter(|(_, pos)| pos.abs() < 100.0)
            .collect()
    }

    /// Current slide and its neighbours: the slides worth decoding ahead.
    pub fn preload_window(&self) -> Vec<usize> {
        self.navigation.visible_window()
    }

    pub fn should_load_slide(&self, index: usize) -> bool {
        self.lazy.should_load(index)
    }

    /// `"3 / 10"` style counter.
    pub fn index_label(&self) -> String {
        if self.total() == 0 {
            return String::new();
        }
        format!(
            "{}{}{}",
            self.current_index() + 1,
            self.options.index_separator,
            self.total()
        )
    }

    // Images

    /// Source to draw for `source`, after any error fallback.
    pub fn effective_source<'a>(&'a self, source: &'a str) -> &'a str {
        self.fallbacks
            .get(source)
            .map(String::as_str)
            .unwrap_or(source)
    }

    pub fn image_loaded(&mut self, index: usize) {
        emit(&mut self.callbacks.on_image_load, index);
    }

    /// Records a failed image. Returns the fallback source to request when
    /// one is configured and the failing source is not already it.
    pub fn image_failed(
        &mut self,
        index: usize,
        kind: ImageKind,
        source: &str,
        error: &LoadError,
    ) -> Option<String> {
        let callback = match kind {
            ImageKind::Slide => self.callbacks.on_image_error.as_mut(),
            ImageKind::Thumbnail => self.callbacks.on_thumbnail_error.as_mut(),
        };
        if let Some(cb) = callback {
            cb(index, error);
        }
        let fallback = self.options.error_image.clone()?;
        if fallback == source || self.fallbacks.contains_key(source) {
            return None;
        }
        self.fallbacks
            .insert(source.to_string(), fallback.clone());
        Some(fallback)
    }
}

impl Drop for GalleryState {
    fn drop(&mut self) {
        self.unmount();
    }
}
