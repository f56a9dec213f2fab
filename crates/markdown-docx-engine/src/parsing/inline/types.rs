/// The inline style of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any recognized delimiter pair.
    Plain,
    /// Text that was wrapped in `**`.
    Bold,
    /// Text that was wrapped in single backticks.
    InlineCode,
}

/// A contiguous run of text sharing one inline style.
///
/// Spans own their text with the markdown delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Plain,
            text: text.into(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Bold,
            text: text.into(),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::InlineCode,
            text: text.into(),
        }
    }
}

/// Concatenates span texts, ignoring styles.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
