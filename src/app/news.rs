use anyhow::Result;
use tracing::{debug, info, warn};

use super::filter::filter_headlines;
use super::{App, Screen};
use crate::api::Article;

/// Lifecycle of one Headlines screen instance. Moves out of `Loading`
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl App {
    /// Apply the result of the screen's fetch. Completions arriving after the
    /// state has left `Loading` are dropped.
    pub fn finish_load(&mut self, result: Result<Vec<Article>>) {
        if !self.load_state.is_loading() {
            debug!(state = ?self.load_state, "Ignoring late headline completion");
            return;
        }

        match result {
            Ok(articles) => {
                let fetched = articles.len();
                self.headlines = filter_headlines(articles);
                info!(fetched, shown = self.headlines.len(), "Headlines loaded");
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Headline fetch failed");
                self.headlines.clear();
                self.load_state = LoadState::Failed(format!("Error: {}", e));
            }
        }
        self.selected_index = 0;
    }

    /// Throw away the current screen instance and start a new one in
    /// `Loading`. Refused while a fetch is still in flight; the caller must
    /// issue the new fetch when this returns true.
    pub fn remount(&mut self) -> bool {
        if self.load_state.is_loading() {
            return false;
        }
        self.load_state = LoadState::Loading;
        self.headlines.clear();
        self.selected_index = 0;
        self.screen = Screen::Headlines;
        self.detail_scroll = 0;
        self.status_message = None;
        info!("Headlines screen remounted");
        true
    }
}
