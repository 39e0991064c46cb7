mod common;

use common::make_article;
use headlines_cli::api::Article;
use headlines_cli::app::{MIN_TITLE_CHARS, filter_headlines, is_headline};

const TS: &str = "2024-05-09T12:00:00Z";

fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title()).collect()
}

#[test]
fn test_filter_drops_missing_title() {
    let mut untitled = make_article("placeholder value", "A", "S", TS);
    untitled.title = None;
    assert!(!is_headline(&untitled));
    assert!(filter_headlines(vec![untitled]).is_empty());
}

#[test]
fn test_filter_drops_short_and_boundary_titles() {
    let articles = vec![
        make_article("", "A", "S", TS),
        make_article("Short", "A", "S", TS),
        make_article(&"x".repeat(MIN_TITLE_CHARS), "A", "S", TS),
    ];
    assert!(filter_headlines(articles).is_empty());
}

#[test]
fn test_filter_keeps_titles_over_limit() {
    let title = "x".repeat(MIN_TITLE_CHARS + 1);
    let kept = filter_headlines(vec![make_article(&title, "A", "S", TS)]);
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_filter_preserves_relative_order() {
    let articles = vec![
        make_article("Third story of the morning", "A", "S", TS),
        make_article("tiny", "A", "S", TS),
        make_article("First story of the morning", "A", "S", TS),
        make_article("also tiny", "A", "S", TS),
        make_article("Second story of the morning", "A", "S", TS),
    ];
    let kept = filter_headlines(articles);
    assert_eq!(
        titles(&kept),
        vec![
            "Third story of the morning",
            "First story of the morning",
            "Second story of the morning",
        ]
    );
}

#[test]
fn test_filter_does_not_check_other_fields() {
    let mut article = make_article("A perfectly long headline", "A", "S", TS);
    article.author = None;
    article.url = None;
    article.published_at = None;
    assert!(is_headline(&article));
}

#[test]
fn test_filter_empty_input() {
    assert!(filter_headlines(Vec::new()).is_empty());
}
