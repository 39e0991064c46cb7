use super::formatters::*;
use super::tables::{ColumnDef, column_constraints, header_row, visible_columns};
use crate::api::Article;
use crate::app::{App, LoadState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

/// Placeholder cards shown while the fetch is pending.
const SKELETON_CARDS: usize = 5;

const NEWS_COLUMNS: &[ColumnDef] = &[
    ColumnDef { name: "Headline", width: 40, priority: 1 },
    ColumnDef { name: "Source",   width: 20, priority: 2 },
];

fn headline_row(i: usize, article: &Article, vis: &[usize], selected: usize) -> Row<'static> {
    let is_selected = i == selected;
    let text_style = if is_selected {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };

    let byline = format!(
        "{} • {}",
        article.author(),
        format_relative_time(article.published_at())
    );

    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| match col {
            0 => Cell::from(Text::from(vec![
                Line::from(Span::styled(
                    slice_title(article.title()),
                    text_style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(byline.clone(), Style::default().fg(Color::DarkGray))),
            ])),
            1 => Cell::from(truncate_str(article.source_name(), 18)).style(text_style),
            _ => Cell::from(""),
        })
        .collect();

    let row_style = if is_selected {
        Style::default().bg(Color::Rgb(40, 60, 100))
    } else {
        Style::default()
    };
    Row::new(cells).height(2).bottom_margin(1).style(row_style)
}

fn draw_skeleton(frame: &mut Frame, area: Rect, app: &App, block: Block) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for card in 0..SKELETON_CARDS {
        let tick = app.tick + card * 3;
        let style = Style::default().fg(Color::DarkGray);
        lines.push(Line::from(Span::styled(skeleton_bar(width, tick), style)));
        lines.push(Line::from(Span::styled(skeleton_bar(width * 2 / 3, tick), style)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_headlines(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.load_state {
        LoadState::Loading => " Today's Headlines [Loading...] ".to_string(),
        LoadState::Loaded => format!(" Today's Headlines ({} articles) ", app.headlines.len()),
        LoadState::Failed(_) => " Today's Headlines ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    match &app.load_state {
        LoadState::Loading => draw_skeleton(frame, area, app, block),
        LoadState::Failed(msg) => {
            let error = Paragraph::new(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(error, area);
        }
        LoadState::Loaded => {
            let available_width = area.width.saturating_sub(2);
            let vis = visible_columns(NEWS_COLUMNS, available_width);
            let header = header_row(NEWS_COLUMNS, &vis, Color::Blue);

            let rows: Vec<Row> = app
                .headlines
                .iter()
                .enumerate()
                .map(|(i, article)| headline_row(i, article, &vis, app.selected_index))
                .collect();

            let constraints = column_constraints(NEWS_COLUMNS, &vis, 0, available_width);
            let table = Table::new(rows, constraints).header(header).block(block);

            let mut state = TableState::default();
            state.select(Some(app.selected_index));
            frame.render_stateful_widget(table, area, &mut state);
        }
    }
}
