pub mod formatters;
mod modals;
mod news;
mod news_detail;
mod tables;

use crate::app::{App, InputMode, LoadState, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match &app.screen {
        Screen::Headlines => news::draw_headlines(frame, chunks[1], app),
        Screen::Details(article) => {
            news_detail::draw_news_detail(frame, chunks[1], article, &mut app.detail_scroll)
        }
    }

    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.load_state.is_loading() {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", chrono::Local::now().format("%H:%M:%S"))
    };

    let view_indicator = match &app.screen {
        Screen::Headlines => "Today's Headlines".to_string(),
        Screen::Details(article) => truncate_view_title(article.source_name()),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" News ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(view_indicator, Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::styled(" ", Style::default()),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn truncate_view_title(name: &str) -> String {
    if name.is_empty() {
        "Article".to_string()
    } else {
        formatters::truncate_str(name, 40)
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = match (&app.screen, &app.load_state) {
                (Screen::Headlines, LoadState::Loading) => " [?] Help [q] Quit ",
                (Screen::Headlines, _) => {
                    " [Enter] Read [o] Open [s] Share [r] Reload [↑↓] Nav [?] Help [q] Quit "
                }
                (Screen::Details(_), _) => " [o] Open [s] Share [↑↓] Scroll [Esc] Back [?] Help [q] Quit ",
            };
            if let Some(msg) = &app.status_message {
                Line::from(vec![
                    Span::styled(msg, Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
