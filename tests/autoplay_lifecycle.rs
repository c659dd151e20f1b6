use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use image_gallery::{GalleryCallbacks, GalleryOptions, GalleryState};

fn options() -> GalleryOptions {
    GalleryOptions {
        slide_interval: Duration::from_secs(2),
        slide_duration: Duration::from_millis(200),
        ..GalleryOptions::default()
    }
}

#[test]
fn starting_twice_keeps_one_timer() {
    let t0 = Instant::now();
    let plays = Rc::new(RefCell::new(0));
    let p = plays.clone();
    let callbacks = GalleryCallbacks {
        on_play: Some(Box::new(move |_| *p.borrow_mut() += 1)),
        ..GalleryCallbacks::default()
    };
    let mut g = GalleryState::new(4, options()).with_callbacks(callbacks);
    g.mount(t0);
    g.play(t0);
    let handle = g.autoplay_handle();
    g.play(t0 + Duration::from_millis(500));
    assert_eq!(g.autoplay_handle(), handle);
    assert_eq!(*plays.borrow(), 1);

    // one advance per period
    g.tick(t0 + Duration::from_secs(2));
    g.tick(t0 + Duration::from_millis(2100));
    assert_eq!(g.current_index(), 1);
}

#[test]
fn unmount_leaves_no_pending_tick() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(4, options());
    g.mount(t0);
    g.play(t0);
    g.unmount();
    assert!(!g.is_playing());
    assert_eq!(g.autoplay_handle(), None);
    assert_eq!(g.tick(t0 + Duration::from_secs(10)), None);
    assert_eq!(g.current_index(), 0);
}

#[test]
fn autoplay_option_starts_on_mount() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(
        3,
        GalleryOptions {
            autoplay: true,
            ..options()
        },
    );
    assert!(!g.is_playing());
    g.mount(t0);
    assert!(g.is_playing());
    assert_eq!(g.tick(t0), Some(Duration::from_secs(2)));
}

#[test]
fn period_never_shorter_than_the_animation() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(
        3,
        GalleryOptions {
            slide_interval: Duration::from_millis(100),
            slide_duration: Duration::from_millis(400),
            ..GalleryOptions::default()
        },
    );
    g.mount(t0);
    g.play(t0);
    g.tick(t0 + Duration::from_millis(300));
    assert_eq!(g.current_index(), 0);
    g.tick(t0 + Duration::from_millis(400));
    assert_eq!(g.current_index(), 1);
}
