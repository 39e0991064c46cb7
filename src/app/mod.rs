mod details;
mod filter;
mod news;

pub use details::{share_message, share_uri};
pub use filter::{MIN_TITLE_CHARS, filter_headlines, is_headline};
pub use news::LoadState;

use crate::api::Article;
use crate::config::Config;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Which of the two screens is showing. `Details` owns the article it was
/// opened with, so it never needs the feed again.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Headlines,
    Details(Box<Article>),
}

pub struct App {
    pub config: Config,
    pub load_state: LoadState,
    pub headlines: Vec<Article>,
    pub selected_index: usize,
    pub screen: Screen,
    pub detail_scroll: usize,
    pub input_mode: InputMode,
    pub status_message: Option<String>,
    pub tick: usize,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// A freshly mounted Headlines screen; the fetch is expected to be in
    /// flight as soon as this exists.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            load_state: LoadState::Loading,
            headlines: Vec::new(),
            selected_index: 0,
            screen: Screen::Headlines,
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            status_message: None,
            tick: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.headlines.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.headlines.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
