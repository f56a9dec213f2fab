use crate::parsing::lines::LineRef;

use super::kinds::CodeFence;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Which block it belongs to is
/// decided by the builder and the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Index of the line in the source sequence.
    pub index: usize,
    /// The line exactly as read.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Whether the line toggles a fenced code block.
    pub is_fence: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();
        LineClass {
            index: lr.index,
            raw: lr.text,
            trimmed,
            is_blank: trimmed.is_empty(),
            is_fence: CodeFence::is_fence(trimmed),
        }
    }
}
