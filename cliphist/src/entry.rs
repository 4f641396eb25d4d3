use chrono::{DateTime, Local};
use compact_str::CompactString;

/// Label format used when a timestamp is shown next to an entry
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One retained clipboard text. Immutable once created: promotion replaces
/// the entry with a fresh one instead of touching this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    content: CompactString,
    created_at: Option<DateTime<Local>>,
}

impl HistoryEntry {
    pub fn new(content: impl Into<CompactString>, created_at: Option<DateTime<Local>>) -> Self {
        Self {
            content: content.into(),
            created_at,
        }
    }

    /// The dedup key, stored verbatim
    #[inline]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    #[inline]
    pub fn created_at(&self) -> Option<DateTime<Local>> {
        self.created_at
    }

    /// Exact byte equality against `content`
    #[inline]
    pub fn matches(&self, content: &str) -> bool {
        self.content.as_str() == content
    }

    pub(crate) fn into_content(self) -> CompactString {
        self.content
    }

    pub fn display_timestamp(&self) -> Option<CompactString> {
        self.created_at
            .map(|ts| compact_str::format_compact!("{}", ts.format(TIMESTAMP_FORMAT)))
    }

    /// Single-line rendering of the content, at most `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> CompactString {
        preview(&self.content, max_chars)
    }
}

/// Flatten line breaks and tabs into spaces and cut `text` to at most
/// `max_chars` characters, the last one becoming `…` when something was cut.
pub fn preview(text: &str, max_chars: usize) -> CompactString {
    if max_chars == 0 {
        return CompactString::const_new("");
    }

    let mut out = CompactString::with_capacity(text.len().min(max_chars * 4));
    let mut chars = text.chars().map(|c| match c {
        '\n' | '\r' | '\t' => ' ',
        other => other,
    });

    for _ in 0..max_chars.saturating_sub(1) {
        match chars.next() {
            Some(c) => out.push(c),
            None => return out,
        }
    }

    match (chars.next(), chars.next()) {
        (None, _) => {}
        (Some(last), None) => out.push(last),
        (Some(_), Some(_)) => out.push('…'),
    }
    out
}
