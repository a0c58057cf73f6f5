//! Tests for the bar module functionality.
//!
//! This file covers value clamping, event-driven redraws, the refresh timer
//! lifecycle and the trail animation clock.

use rand::Rng;
use rainbar::progress::paint_trail;
use rainbar::{BarState, Error, ProgressBarBuilder, RefreshMethod};
use std::time::Duration;

mod common;
use common::helpers::*;

const PERIOD: Duration = Duration::from_millis(100);

#[test]
fn test_update_clamps_to_max() {
    let (bar, _capture) = create_event_bar(100);
    let mut rng = rand::rng();
    for _ in 0..200 {
        let value = rng.random_range(0..=1_000u64);
        bar.update(value).unwrap();
        assert_eq!(bar.value(), value.min(100));
    }
}

#[test]
fn test_event_mode_renders_after_every_update() {
    let (bar, capture) = create_event_bar(100);
    let values = [10u64, 10, 35, 99, 100, 250];
    for (i, value) in values.iter().enumerate() {
        bar.update(*value).unwrap();
        assert_frames(&capture, i + 1, 0);
    }
    // Event mode never stops on its own.
    assert_eq!(bar.state(), BarState::Idle);
}

#[test]
fn test_event_mode_half_way_line() {
    let (bar, capture) = create_event_bar(100);
    bar.update(50).unwrap();

    let line = capture.last_frame().expect("a frame");
    assert!(line.contains(TEST_NAME));
    assert!(line.ends_with("50%"));
    assert_eq!(count_glyphs(&line), expected_trail_len(50, 100));
}

#[test]
fn test_interval_mode_update_does_not_render() {
    let (bar, capture) = create_interval_bar(100);
    bar.update(30).unwrap();
    bar.update(60).unwrap();
    assert_frames(&capture, 0, 0);
}

#[test]
fn test_interval_mode_max_without_timer_is_noop() {
    let (bar, capture) = create_interval_bar(100);
    bar.update(100).unwrap();
    assert_eq!(bar.value(), 100);
    assert_eq!(bar.state(), BarState::Idle);
    assert_frames(&capture, 0, 0);
}

#[test]
fn test_trail_offset_increments_per_render() {
    let (bar, capture) = create_event_bar(100);
    for expected in 1..=10u64 {
        bar.update(100).unwrap();
        assert_eq!(bar.trail_offset(), expected);
    }
    assert_eq!(capture.frames().len(), 10);
}

#[test]
fn test_trail_colors_scroll_between_frames() {
    let (bar, capture) = create_test_bar(100, RefreshMethod::Event, create_colored_style());
    bar.update(100).unwrap();
    bar.update(100).unwrap();

    let frames = capture.frames();
    let len = expected_trail_len(100, 100);
    let style = create_colored_style();
    assert!(frames[0].contains(&paint_trail(len, 0, &style)));
    assert!(frames[1].contains(&paint_trail(len, 1, &style)));
    assert_ne!(frames[0], frames[1]);
}

#[test]
fn test_line_advances_animation() {
    let (bar, capture) = create_event_bar(100);
    let line = bar.line();
    assert!(line.starts_with(TEST_NAME));
    assert_eq!(bar.trail_offset(), 1);
    assert_frames(&capture, 0, 0);
}

#[test]
fn test_switch_refresh_method_mid_flight() {
    let (bar, capture) = create_interval_bar(100);
    bar.update(10).unwrap();
    bar.set_refresh_method(RefreshMethod::Event);
    bar.update(20).unwrap();
    assert_eq!(bar.refresh_method(), RefreshMethod::Event);
    assert_frames(&capture, 1, 0);
}

#[test]
fn test_stop_without_timer_is_noop() {
    let (bar, capture) = create_interval_bar(100);
    bar.stop().unwrap();
    bar.stop().unwrap();
    assert_eq!(bar.state(), BarState::Idle);
    assert_frames(&capture, 0, 0);
}

#[test]
fn test_start_requires_runtime() {
    let (bar, _capture) = create_interval_bar(100);
    assert!(matches!(bar.start(PERIOD), Err(Error::NoRuntime)));
}

#[tokio::test(start_paused = true)]
async fn test_timer_renders_every_tick() {
    let (bar, capture) = create_interval_bar(100);
    bar.start(PERIOD).unwrap();
    assert_eq!(bar.state(), BarState::Running);
    assert_frames(&capture, 0, 0);

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_frames(&capture, 3, 0);
    assert_eq!(bar.trail_offset(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_reaching_max_stops_timer() {
    let (bar, capture) = create_interval_bar(100);
    bar.start(PERIOD).unwrap();

    bar.update(40).unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_frames(&capture, 1, 0);

    bar.update(100).unwrap();
    assert_eq!(bar.state(), BarState::Stopped);
    assert_frames(&capture, 2, 1);
    assert!(capture.last_frame().unwrap().ends_with("100%"));
    assert!(capture.output().ends_with('\n'));

    // No tick may render after the final frame.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_frames(&capture, 2, 1);
}

#[tokio::test(start_paused = true)]
async fn test_overshoot_stops_timer() {
    let (bar, capture) = create_interval_bar(100);
    bar.start(PERIOD).unwrap();
    bar.update(1_000).unwrap();
    assert_eq!(bar.value(), 100);
    assert_eq!(bar.state(), BarState::Stopped);
    assert_frames(&capture, 1, 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_replaces_timer() {
    let (bar, capture) = create_interval_bar(100);
    bar.start(PERIOD).unwrap();
    bar.start(PERIOD).unwrap();

    // Restarting stops the first timer, which draws its final frame.
    assert_frames(&capture, 1, 1);
    assert_eq!(bar.state(), BarState::Running);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_frames(&capture, 3, 1);

    bar.stop().unwrap();
    assert_frames(&capture, 4, 2);
    bar.stop().unwrap();
    assert_frames(&capture, 4, 2);
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_stop_keeps_progress() {
    let (bar, capture) = create_interval_bar(100);
    bar.start(PERIOD).unwrap();
    bar.update(30).unwrap();
    bar.stop().unwrap();
    assert_eq!(bar.state(), BarState::Stopped);
    let offset = bar.trail_offset();

    bar.start(PERIOD).unwrap();
    assert_eq!(bar.state(), BarState::Running);
    assert_eq!(bar.value(), 30);
    assert_eq!(bar.trail_offset(), offset);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_frames(&capture, 2, 1);
    assert!(capture.last_frame().unwrap().ends_with("30%"));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_bar_ends_timer() {
    let capture = create_capture_writer();
    let bar = ProgressBarBuilder::new(TEST_NAME, 100)
        .style(create_plain_style())
        .writer(capture.clone())
        .build();
    bar.start(PERIOD).unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    drop(bar);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_frames(&capture, 1, 0);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_state() {
    let (bar, capture) = create_interval_bar(100);
    let handle = bar.clone();
    bar.start(PERIOD).unwrap();
    handle.update(100).unwrap();
    assert_eq!(bar.state(), BarState::Stopped);
    assert_frames(&capture, 1, 1);
}
