use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use headlines_cli::api::{Article, NewsClient};
use headlines_cli::app::{App, InputMode, Screen};
use headlines_cli::ui;
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type FetchResult = Result<Vec<Article>>;

#[derive(Parser)]
#[command(name = "headlines-cli")]
#[command(about = "Terminal UI for today's news headlines", long_about = None)]
struct Cli {
    /// Search term for the headline query
    #[arg(short, long)]
    query: Option<String>,

    /// Number of articles to request
    #[arg(short, long)]
    page_size: Option<u32>,

    /// Write logs here instead of the default data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new()?;
    if let Some(query) = cli.query {
        app.config.news.query = query;
    }
    if let Some(page_size) = cli.page_size {
        app.config.news.page_size = page_size;
    }
    if let Some(path) = cli.log_file {
        app.config.log_file = Some(path);
    }

    init_tracing(&app.config.log_path()?)?;
    info!(query = %app.config.news.query, page_size = app.config.news.page_size, "headlines-cli starting");

    let client = NewsClient::new(&app.config.news)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "Exited with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Run the screen's one fetch off the UI loop and deliver its result.
fn spawn_fetch(client: &NewsClient, tx: &mpsc::Sender<FetchResult>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_headlines().await;
        let _ = tx.send(result).await;
    });
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: &NewsClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<FetchResult>(1);
    spawn_fetch(client, &tx);

    loop {
        while let Ok(result) = rx.try_recv() {
            app.finish_load(result);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // 100ms keeps the loading placeholders moving
        if !event::poll(Duration::from_millis(100))? {
            app.on_tick();
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
            InputMode::Normal => match (matches!(app.screen, Screen::Details(_)), key.code) {
                (_, KeyCode::Char('q')) => return Ok(()),
                (_, KeyCode::Char('?')) => app.show_help(),
                (_, KeyCode::Char('o')) => app.open_focused_in_browser(),
                (_, KeyCode::Char('s')) => app.share_focused(),
                (false, KeyCode::Up | KeyCode::Char('k')) => app.move_up(),
                (false, KeyCode::Down | KeyCode::Char('j')) => app.move_down(),
                (false, KeyCode::Enter) => app.open_details(),
                (false, KeyCode::Char('r')) => {
                    if app.remount() {
                        spawn_fetch(client, &tx);
                    }
                }
                (true, KeyCode::Up | KeyCode::Char('k')) => app.scroll_detail_up(),
                (true, KeyCode::Down | KeyCode::Char('j')) => app.scroll_detail_down(),
                (true, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')) => {
                    app.close_details()
                }
                _ => {}
            },
        }
    }
}
