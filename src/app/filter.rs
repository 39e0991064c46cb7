use crate::api::Article;

/// Titles this short or shorter are not shown in the feed. Length is in
/// UTF-16 code units, so an emoji counts as two.
pub const MIN_TITLE_CHARS: usize = 15;

pub fn is_headline(article: &Article) -> bool {
    article
        .title
        .as_deref()
        .is_some_and(|t| t.encode_utf16().count() > MIN_TITLE_CHARS)
}

/// Keep the articles worth listing, in their original order.
pub fn filter_headlines(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(is_headline).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn boundary_is_exclusive() {
        assert!(!is_headline(&titled("exactly 15 char")));
        assert!(is_headline(&titled("exactly 16 chars")));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 15 characters, 17 bytes
        assert!(!is_headline(&titled("Zürich möbel 12")));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // 8 characters, 16 UTF-16 units
        assert!(is_headline(&titled("🍎🍎🍎🍎🍎🍎🍎🍎")));
        // 7 characters, 14 units
        assert!(!is_headline(&titled("🍎🍎🍎🍎🍎🍎🍎")));
    }
}
