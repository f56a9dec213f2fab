use serde::{Deserialize, Serialize};

use crate::document::{Inches, Pt, RunFont};

/// Fonts and layout constants used when emitting a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Default font of every run.
    pub body_font: RunFont,
    /// Font of fenced code block runs.
    pub code_block_font: RunFont,
    /// Left indent of fenced code block paragraphs.
    pub code_block_indent: Inches,
    /// Font of inline code spans.
    pub inline_code_font: RunFont,
    /// Character repeated to draw a horizontal rule.
    pub rule_char: char,
    /// Number of `rule_char` in a horizontal rule.
    pub rule_width: usize,
}

impl StyleSheet {
    /// The text of one horizontal rule paragraph.
    pub fn rule_text(&self) -> String {
        std::iter::repeat_n(self.rule_char, self.rule_width).collect()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            body_font: RunFont::new("Calibri", Pt(11.0)),
            code_block_font: RunFont::new("Consolas", Pt(9.0)),
            code_block_indent: Inches(0.25),
            inline_code_font: RunFont::new("Consolas", Pt(10.0)),
            rule_char: '─',
            rule_width: 50,
        }
    }
}
