use std::time::{Duration, Instant};

use image_gallery::{GalleryOptions, GalleryState};

fn instant_options(infinite: bool) -> GalleryOptions {
    GalleryOptions {
        infinite,
        slide_duration: Duration::ZERO,
        ..GalleryOptions::default()
    }
}

#[test]
fn next_then_previous_returns_home() {
    let t0 = Instant::now();
    for total in 2..6 {
        for start in 0..total {
            for infinite in [true, false] {
                let mut g = GalleryState::new(
                    total,
                    GalleryOptions {
                        start_index: start,
                        ..instant_options(infinite)
                    },
                );
                if g.next(t0) {
                    assert!(g.previous(t0));
                }
                assert_eq!(g.current_index(), start, "total {total} start {start}");
            }
        }
    }
}

#[test]
fn total_nexts_wrap_back_to_start() {
    let t0 = Instant::now();
    for total in 1..8 {
        for start in 0..total {
            let mut g = GalleryState::new(
                total,
                GalleryOptions {
                    start_index: start,
                    ..instant_options(true)
                },
            );
            for _ in 0..total {
                g.next(t0);
            }
            assert_eq!(g.current_index(), start, "total {total} start {start}");
        }
    }
}

#[test]
fn total_nexts_wrap_back_while_animating() {
    let t0 = Instant::now();
    for total in 2..6 {
        for start in 0..total {
            let mut g = GalleryState::new(
                total,
                GalleryOptions {
                    start_index: start,
                    slide_duration: Duration::from_millis(400),
                    ..GalleryOptions::default()
                },
            );
            g.mount(t0);
            for step in 0..total {
                assert!(g.next(t0 + Duration::from_millis(10 * step as u64)));
            }
            assert_eq!(g.current_index(), start, "total {total} start {start}");
            g.tick(t0 + Duration::from_secs(1));
            assert_eq!(g.slide_position(start, t0 + Duration::from_secs(1)), 0.0);
        }
    }
}

#[test]
fn finite_gallery_stops_at_both_ends() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(3, instant_options(false));
    assert!(!g.can_go_previous());
    assert!(!g.previous(t0));
    assert!(g.next(t0));
    assert!(g.next(t0));
    assert!(!g.can_go_next());
    assert!(!g.next(t0));
    assert_eq!(g.current_index(), 2);
}

#[test]
fn out_of_range_jumps_wrap_to_the_other_end() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(4, instant_options(false));
    assert!(g.go_to(-1, t0));
    assert_eq!(g.current_index(), 3);
    assert!(g.go_to(4, t0));
    assert_eq!(g.current_index(), 0);
    assert!(!g.go_to(0, t0));
}

#[test]
fn single_item_never_moves() {
    let g = GalleryState::new(1, instant_options(true));
    assert!(!g.can_go_next());
    assert!(!g.can_go_previous());
    assert_eq!(g.current_index(), 0);
}

#[test]
fn current_slide_rests_at_origin() {
    let t0 = Instant::now();
    let mut g = GalleryState::new(5, instant_options(true));
    g.mount(t0);
    g.go_to(3, t0);
    assert_eq!(g.slide_position(3, t0), 0.0);
    assert_eq!(g.slide_position(4, t0), 100.0);
    assert_eq!(g.slide_position(2, t0), -100.0);
}
