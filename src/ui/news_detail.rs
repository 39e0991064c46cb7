use super::formatters::*;
use crate::api::Article;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Wrap text to lines of at most `width` characters, breaking at word boundaries.
pub(super) fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn section_heading(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

fn labelled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(value),
    ])
}

fn detail_lines(article: &Article, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    for line in word_wrap(article.title(), width) {
        lines.push(Line::from(Span::styled(
            line,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(Span::styled(
        truncate_str(article.image_url(), width),
        Style::default().fg(Color::Blue),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(section_heading("Summary"));
    for line in word_wrap(article.description.as_deref().unwrap_or(""), width) {
        lines.push(Line::from(line));
    }
    lines.push(Line::from(""));

    lines.push(section_heading("Full Article"));
    for line in word_wrap(article.content.as_deref().unwrap_or(""), width) {
        lines.push(Line::from(line));
    }
    lines.push(Line::from(""));

    lines.push(labelled("Author :", article.author().to_string()));
    lines.push(labelled(
        "Published At :",
        format_published_local(article.published_at()),
    ));

    if let Some(url) = &article.url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            truncate_str(url, width),
            Style::default().fg(Color::Blue),
        )));
    }

    lines
}

/// Render the detail screen, clamping `scroll` to the content height.
pub fn draw_news_detail(frame: &mut Frame, area: Rect, article: &Article, scroll: &mut usize) {
    let block = Block::default()
        .title(format!(" {} ", article.source_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let body_area = block.inner(area);
    frame.render_widget(block, area);

    let all_lines = detail_lines(article, body_area.width as usize);
    let body_height = body_area.height as usize;
    let max_scroll = all_lines.len().saturating_sub(body_height);
    *scroll = (*scroll).min(max_scroll);

    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(*scroll)
        .take(body_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), body_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_wrap_breaks_on_width() {
        assert_eq!(
            word_wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn word_wrap_keeps_blank_paragraphs() {
        assert_eq!(word_wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn word_wrap_zero_width() {
        assert!(word_wrap("anything", 0).is_empty());
    }

    #[test]
    fn detail_shows_placeholder_image_when_missing() {
        let article = Article {
            title: Some("Something happened somewhere today".to_string()),
            ..Default::default()
        };
        let text: Vec<String> = detail_lines(&article, 200)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l == crate::api::news::PLACEHOLDER_IMAGE_URL));
    }
}
