//! # Document Model
//!
//! An in-memory word-processor document: headings, styled paragraphs and
//! tables, in body order. The emitter builds it; the `docx` writer persists
//! it.

pub mod style;
pub mod table;

use std::path::Path;

pub use style::{BorderStyle, Inches, ParagraphStyle, Pt, RunFont};
pub use table::{Cell, Table};

use crate::io::ConvertError;

/// A run of text with uniform character formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    text: String,
    bold: bool,
    font: Option<RunFont>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            font: None,
        }
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    /// Overrides the document's default font for this run.
    pub fn set_font(&mut self, font: RunFont) -> &mut Self {
        self.font = Some(font);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn font(&self) -> Option<&RunFont> {
        self.font.as_ref()
    }
}

/// A paragraph: a style, an optional left indent and ordered runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    style: ParagraphStyle,
    left_indent: Option<Inches>,
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            style,
            left_indent: None,
            runs: vec![],
        }
    }

    /// Appends a plain run and returns it for formatting.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    pub fn set_left_indent(&mut self, indent: Inches) -> &mut Self {
        self.left_indent = Some(indent);
        self
    }

    pub fn style(&self) -> ParagraphStyle {
        self.style
    }

    pub fn left_indent(&self) -> Option<Inches> {
        self.left_indent
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.runs.iter_mut()
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// One top-level element of the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    /// Level 0 is the title; 1..=3 are headings 1 to 3.
    Heading { level: u8, text: String },
    Paragraph(Paragraph),
    Table(Table),
}

/// A word-processor document under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    defaults: RunFont,
    body: Vec<BodyItem>,
}

impl Document {
    /// Creates an empty document whose runs default to `defaults`.
    pub fn new(defaults: RunFont) -> Self {
        Self {
            defaults,
            body: vec![],
        }
    }

    pub fn defaults(&self) -> &RunFont {
        &self.defaults
    }

    pub fn body(&self) -> &[BodyItem] {
        &self.body
    }

    /// Appends a heading; levels above 3 are clamped.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.body.push(BodyItem::Heading {
            level: level.min(3),
            text: text.into(),
        });
    }

    /// Appends an empty paragraph and returns it for adding runs.
    pub fn add_paragraph(&mut self, style: ParagraphStyle) -> &mut Paragraph {
        self.body.push(BodyItem::Paragraph(Paragraph::new(style)));
        match self.body.last_mut() {
            Some(BodyItem::Paragraph(p)) => p,
            _ => unreachable!("paragraph was just pushed"),
        }
    }

    /// Appends a `rows` x `cols` table of empty cells and returns it.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        self.body.push(BodyItem::Table(Table::new(rows, cols)));
        match self.body.last_mut() {
            Some(BodyItem::Table(t)) => t,
            _ => unreachable!("table was just pushed"),
        }
    }

    /// Writes the document as a `.docx` file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        crate::docx::write(self, path)
    }
}
