use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Number of words kept when shortening a headline for the feed.
pub const TITLE_WORD_LIMIT: usize = 10;

/// Word count above which a shortened headline gets "...". It does not
/// match `TITLE_WORD_LIMIT`, so titles of 11 to 99 words are cut without
/// any marker. Kept as the feed has always behaved.
pub const ELLIPSIS_WORD_THRESHOLD: usize = 99;

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len.saturating_sub(3))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

/// Shorten a headline to its first `TITLE_WORD_LIMIT` words.
pub fn slice_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    let mut result = words
        .iter()
        .take(TITLE_WORD_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > ELLIPSIS_WORD_THRESHOLD {
        result.push_str("...");
    }
    result
}

/// Parse an API timestamp. Offsets are honoured; a bare date-time is taken
/// as local time and a bare date as local midnight.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(ts, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn format_relative_time(published_at: &str) -> String {
    format_relative_time_at(published_at, Utc::now())
}

pub fn format_relative_time_at(published_at: &str, now: DateTime<Utc>) -> String {
    let Some(published) = parse_timestamp(published_at) else {
        return String::new();
    };
    let hours = (now - published).num_hours();

    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }

    let days = hours / 24;
    format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
}

/// Full publish date in the local timezone, for the detail screen.
pub fn format_published_local(published_at: &str) -> String {
    parse_timestamp(published_at)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%d %b %Y, %H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}

/// One row of a loading card: a dim bar with a brighter band sweeping
/// across it as `tick` advances.
pub fn skeleton_bar(width: usize, tick: usize) -> String {
    const BAND: usize = 6;
    if width == 0 {
        return String::new();
    }
    let head = tick % (width + BAND);
    (0..width)
        .map(|i| {
            if i + BAND > head && i <= head {
                '▒'
            } else {
                '░'
            }
        })
        .collect()
}
