use vodgrab_core::{format_clock, percent_complete, render_bar, BAR_WIDTH};

#[test]
fn short_durations_render_minutes_and_seconds() {
    assert_eq!(format_clock(65.0), "01:05");
    assert_eq!(format_clock(0.0), "00:00");
    assert_eq!(format_clock(59.9), "00:59");
}

#[test]
fn hour_component_is_unpadded() {
    assert_eq!(format_clock(3661.0), "1:01:01");
    assert_eq!(format_clock(3600.0), "1:00:00");
    assert_eq!(format_clock(36_000.0), "10:00:00");
}

#[test]
fn negative_seconds_clamp_to_zero() {
    assert_eq!(format_clock(-3.0), "00:00");
}

#[test]
fn halfway_sample_is_fifty_percent() {
    // 750_000_000 µs of output against a 1500 s stream.
    let percent = percent_complete(750.0, 1500.0);
    assert_eq!(percent, 50.0);
}

#[test]
fn percent_is_capped_at_one_hundred() {
    assert_eq!(percent_complete(2000.0, 1500.0), 100.0);
}

#[test]
fn bar_with_known_total_shows_eta() {
    let line = render_bar(50.0, 750.0, Some(1500.0));
    assert!(line.contains(&"█".repeat(BAR_WIDTH / 2)), "line: {line}");
    assert!(line.contains(" 50.0%"), "line: {line}");
    assert!(line.contains("12:30 / 25:00"), "line: {line}");
    assert!(line.contains("ETA 12:30"), "line: {line}");
}

#[test]
fn bar_without_total_shows_elapsed_only() {
    let line = render_bar(0.0, 42.0, None);
    assert!(line.ends_with("00:42"), "line: {line}");
    assert!(!line.contains("ETA"), "line: {line}");
}

#[test]
fn eta_never_goes_negative() {
    let line = render_bar(100.0, 1600.0, Some(1500.0));
    assert!(line.contains("ETA 00:00"), "line: {line}");
}
