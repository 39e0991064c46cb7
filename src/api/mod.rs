pub mod news;

pub use news::{Article, HeadlineQuery, NewsClient, Source};
