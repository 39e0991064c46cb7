use tracing::{info, warn};

use super::{App, Screen};
use crate::api::Article;
use crate::ui::formatters::slice_title;

/// Text handed to the share target.
pub fn share_message(title: &str, url: &str) -> String {
    format!("{}\n\nRead more: {}", title, url)
}

/// `mailto:` URI carrying the share message, for the system's mail handler.
pub fn share_uri(title: &str, message: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(title),
        urlencoding::encode(message)
    )
}

impl App {
    pub fn open_details(&mut self) {
        if let Some(article) = self.selected_article().cloned() {
            info!(title = article.title(), "Opening article details");
            self.screen = Screen::Details(Box::new(article));
            self.detail_scroll = 0;
        }
    }

    pub fn close_details(&mut self) {
        self.screen = Screen::Headlines;
        self.detail_scroll = 0;
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        // Clamped against the rendered height on the next draw
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    /// Article under the cursor, or the one shown on the detail screen.
    pub fn focused_article(&self) -> Option<&Article> {
        match &self.screen {
            Screen::Details(article) => Some(article.as_ref()),
            Screen::Headlines => self.selected_article(),
        }
    }

    /// Share message for the focused article. Cards share their shortened
    /// title, the detail screen shares the full one.
    pub fn pending_share(&self) -> Option<(String, String)> {
        let article = self.focused_article()?;
        let title = match self.screen {
            Screen::Details(_) => article.title().to_string(),
            Screen::Headlines => slice_title(article.title()),
        };
        let message = share_message(&title, article.url.as_deref().unwrap_or(""));
        Some((title, message))
    }

    pub fn share_focused(&mut self) {
        let Some((title, message)) = self.pending_share() else {
            return;
        };
        match open::that(share_uri(&title, &message)) {
            Ok(()) => {
                info!(title = %title, "Handed article to share target");
                self.status_message = Some("Shared.".to_string());
            }
            // Share failures are only logged
            Err(e) => warn!(error = %e, "Error sharing"),
        }
    }

    pub fn open_focused_in_browser(&mut self) {
        let Some(url) = self.focused_article().and_then(|a| a.url.clone()) else {
            self.status_message = Some("No link for this article.".to_string());
            return;
        };
        match open::that(&url) {
            Ok(()) => {
                info!(%url, "Opened article in browser");
                self.status_message = Some("Opened in browser.".to_string());
            }
            Err(e) => {
                warn!(error = %e, %url, "Could not open browser");
                self.status_message = Some(format!("Could not open browser: {}", e));
            }
        }
    }
}
