#![allow(dead_code)]

use headlines_cli::api::{Article, Source};
use headlines_cli::app::App;
use headlines_cli::config::Config;
use serde_json::{Value, json};

pub fn make_article(title: &str, author: &str, source: &str, published_at: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: Some(source.to_string()),
        },
        author: Some(author.to_string()),
        title: Some(title.to_string()),
        description: Some(format!("About: {}", title)),
        url: Some(format!("https://example.com/{}", title.len())),
        url_to_image: None,
        published_at: Some(published_at.to_string()),
        content: Some("Body text [+120 chars]".to_string()),
    }
}

/// Twenty articles in API shape; numbers 4, 9 and 15 have titles of 15
/// characters or fewer.
pub fn canned_response() -> Value {
    let articles: Vec<Value> = (0..20)
        .map(|i| {
            let title = match i {
                4 => "Short title".to_string(),
                9 => "Exactly fifteen".to_string(),
                15 => "Tiny".to_string(),
                _ => format!("Apple headline number {} makes the news", i),
            };
            json!({
                "source": { "id": null, "name": format!("Publisher {}", i) },
                "author": format!("Reporter {}", i),
                "title": title,
                "description": "A description",
                "url": format!("https://news.example.com/{}", i),
                "urlToImage": if i % 2 == 0 { Value::Null } else { json!(format!("https://img.example.com/{}.jpg", i)) },
                "publishedAt": "2024-05-09T12:00:00Z",
                "content": "Content [+2000 chars]"
            })
        })
        .collect();

    json!({ "status": "ok", "totalResults": 20, "articles": articles })
}

// Creates a freshly mounted App (no file I/O).
pub fn test_app() -> App {
    App::with_config(Config::default())
}
