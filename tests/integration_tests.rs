//! Integration tests for scrollstory
//!
//! These tests drive the pieces the way an embedding front end would: a
//! reader scrolling through chapters with cells fanning out to view
//! listeners, layout and formatting feeding annotation strings, and
//! scroll/resize handlers wrapped in the timing utilities.

use parking_lot::Mutex;
use scrollstory::StoryState;
use scrollstory::format::{format_with_units_default, sum};
use scrollstory::geometry::{SpiralConfig, spiral_positions, translate_centered};
use scrollstory::timing::{Debouncer, ThrottleOptions, Throttler, on_interval};
use scrollstory::utils::IdGenerator;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_story_navigation_fans_out_to_views() {
    init_tracing();
    let state = StoryState::new();
    let render_log = Rc::new(RefCell::new(Vec::new()));

    // Two "view components" watching different cells.
    let log = Rc::clone(&render_log);
    let nav = state
        .chapter_index
        .subscribe(move |i| log.borrow_mut().push(format!("nav -> {i}")));
    let log = Rc::clone(&render_log);
    let _body = state.chapter.subscribe(move |c| {
        let title = c.get("title").and_then(|t| t.as_str()).unwrap_or("?");
        log.borrow_mut().push(format!("body -> {title}"));
    });

    // The app advances a chapter: index first, then content.
    state.chapter_index.set(1);
    let mut chapter = serde_json::Map::new();
    chapter.insert("title".into(), json!("Trenches"));
    chapter.insert("sections".into(), json!(["hadal", "abyssal"]));
    state.chapter.set(chapter);

    assert_eq!(
        *render_log.borrow(),
        vec!["nav -> 1".to_string(), "body -> Trenches".to_string()]
    );

    // Unsubscribed views stop rendering.
    nav.unsubscribe();
    state.chapter_index.set(2);
    assert_eq!(render_log.borrow().len(), 2);
}

#[test]
fn test_panel_lifecycle_with_generated_ids() {
    let state = StoryState::new();
    let ids = IdGenerator::new();

    // Each opened aside gets a unique key.
    state.asides.update(|mut asides| {
        asides.insert(ids.next_id().to_string(), json!({ "text": "context" }));
        asides.insert(ids.next_id().to_string(), json!({ "text": "more" }));
        asides
    });
    assert!(state.asides.get().contains_key("1"));
    assert!(state.asides.get().contains_key("2"));

    state.panel2.set(Some(json!({ "aside": "1" })));
    assert!(state.panel2.get().is_some());
}

#[test]
fn test_spiral_layout_to_transform_strings() {
    // A beeswarm-style layout: spiral positions rendered as element styles.
    let points = spiral_positions(20, SpiralConfig::default());
    assert_eq!(points.len(), 20);

    let styles: Vec<String> = points
        .iter()
        .map(|p| translate_centered(p.x, p.y))
        .collect();
    for (style, point) in styles.iter().zip(&points) {
        assert!(style.starts_with("transform: translate(calc(-50% + "));
        assert!(style.contains(&format!("{}px", point.x)));
    }
}

#[test]
fn test_dataset_totals_render_as_prose() {
    let populations = [1_400_000_000.0, 330_000_000.0, 67_000_000.0];
    let total = sum(&populations);
    assert_eq!(format_with_units_default(total), "1.8 billion");
    assert_eq!(format_with_units_default(populations[2]), "67.0 million");
}

#[tokio::test(start_paused = true)]
async fn test_debounced_resize_handler_end_to_end() {
    init_tracing();
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&sizes);
    let on_resize = Debouncer::new(
        move |(w, h): (f64, f64)| sink.lock().push((w, h)),
        Duration::from_millis(250),
    );

    // A flurry of resize events; only the settled size is handled.
    on_resize.call((800.0, 600.0));
    on_resize.call((810.0, 600.0));
    on_resize.call((1024.0, 768.0));
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(*sizes.lock(), vec![(1024.0, 768.0)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttled_scroll_progress_end_to_end() {
    init_tracing();
    let progress = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&progress);
    let on_scroll = Throttler::new(
        move |offset: f64| {
            sink.lock().push(offset);
            offset
        },
        Duration::from_millis(100),
        ThrottleOptions::default(),
    );

    // Scroll events every 10ms for half a window.
    for i in 0..5 {
        on_scroll.call(f64::from(i) * 100.0);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Leading edge plus one trailing run with the newest offset.
    assert_eq!(*progress.lock(), vec![0.0, 400.0]);
}

#[tokio::test(start_paused = true)]
async fn test_interval_is_scope_bound() {
    init_tracing();
    let ticks = Arc::new(Mutex::new(0_u32));

    {
        let count = Arc::clone(&ticks);
        let _playhead = on_interval(move || *count.lock() += 1, Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(175)).await;
        // Handle dropped here: scope exit releases the timer.
    }
    // Yield so the abort lands before time moves again.
    tokio::task::yield_now().await;
    let ticks_in_scope = *ticks.lock();
    assert_eq!(ticks_in_scope, 3);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(*ticks.lock(), ticks_in_scope);
}
