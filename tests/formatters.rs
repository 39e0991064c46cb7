use chrono::{Duration, Local, TimeZone, Utc};
use headlines_cli::ui::formatters::*;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn ago(delta: Duration) -> String {
    (now() - delta).to_rfc3339()
}

// --- format_relative_time ---

#[test]
fn test_relative_time_thirty_minutes() {
    assert_eq!(format_relative_time_at(&ago(Duration::minutes(30)), now()), "Just now");
}

#[test]
fn test_relative_time_one_hour_singular() {
    assert_eq!(format_relative_time_at(&ago(Duration::minutes(61)), now()), "1 hour ago");
}

#[test]
fn test_relative_time_three_hours() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(3)), now()), "3 hours ago");
}

#[test]
fn test_relative_time_twenty_three_hours() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(23)), now()), "23 hours ago");
}

#[test]
fn test_relative_time_thirty_hours() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(30)), now()), "1 day ago");
}

#[test]
fn test_relative_time_fifty_hours() {
    assert_eq!(format_relative_time_at(&ago(Duration::hours(50)), now()), "2 days ago");
}

#[test]
fn test_relative_time_future_is_just_now() {
    let ts = (now() + Duration::hours(3)).to_rfc3339();
    assert_eq!(format_relative_time_at(&ts, now()), "Just now");
}

#[test]
fn test_relative_time_honours_offset() {
    // 12:00 at +02:00 is 10:00 UTC, two hours before now()
    assert_eq!(
        format_relative_time_at("2024-05-10T12:00:00+02:00", now()),
        "2 hours ago"
    );
}

#[test]
fn test_relative_time_newsapi_format() {
    assert_eq!(format_relative_time_at("2024-05-09T12:00:00Z", now()), "1 day ago");
}

#[test]
fn test_relative_time_unparseable() {
    assert_eq!(format_relative_time_at("not a date", now()), "");
    assert_eq!(format_relative_time_at("", now()), "");
}

#[test]
fn test_parse_date_only_is_local_midnight() {
    let expected = Local
        .with_ymd_and_hms(2024, 5, 9, 0, 0, 0)
        .earliest()
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(parse_timestamp("2024-05-09"), Some(expected));
}

#[test]
fn test_relative_time_date_only() {
    let midnight = Local
        .with_ymd_and_hms(2024, 5, 9, 0, 0, 0)
        .earliest()
        .unwrap()
        .with_timezone(&Utc);
    let now = midnight + Duration::hours(50);
    assert_eq!(format_relative_time_at("2024-05-09", now), "2 days ago");
}

#[test]
fn test_relative_time_uses_wall_clock() {
    let ts = (Utc::now() - Duration::hours(5)).to_rfc3339();
    assert_eq!(format_relative_time(&ts), "5 hours ago");
}

// --- slice_title ---

fn words(n: usize) -> String {
    (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_slice_title_fifteen_words() {
    assert_eq!(slice_title(&words(15)), words(10));
}

#[test]
fn test_slice_title_short_unchanged() {
    assert_eq!(slice_title("Apple ships a new phone"), "Apple ships a new phone");
    assert_eq!(slice_title(&words(10)), words(10));
}

#[test]
fn test_slice_title_collapses_whitespace() {
    assert_eq!(slice_title("Apple   ships\ta  phone"), "Apple ships a phone");
}

#[test]
fn test_slice_title_ignores_leading_whitespace() {
    assert_eq!(slice_title(&format!("   {}", words(12))), words(10));
}

#[test]
fn test_slice_title_no_ellipsis_under_hundred_words() {
    let sliced = slice_title(&words(99));
    assert_eq!(sliced, words(10));
    assert!(!sliced.ends_with("..."));
}

#[test]
fn test_slice_title_ellipsis_at_hundred_words() {
    assert_eq!(slice_title(&words(100)), format!("{}...", words(10)));
}

// --- truncate_str ---

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate_str("Hello", 10), "Hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate_str("Hello", 5), "Hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate_str("Hello World", 8), "Hello...");
}

// --- format_published_local ---

#[test]
fn test_published_local_formats_valid_timestamp() {
    let label = format_published_local("2024-05-09T12:00:00Z");
    assert!(label.contains("2024"), "got {label:?}");
}

#[test]
fn test_published_local_invalid_is_empty() {
    assert_eq!(format_published_local("yesterday-ish"), "");
}
