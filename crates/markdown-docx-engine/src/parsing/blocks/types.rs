use crate::parsing::inline::Span;

/// One structural element of the document, produced by block classification.
///
/// Blank lines and fence delimiter lines never become records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRecord {
    /// A `#`-prefixed heading. Level 0 is the document title, 1..=3 are
    /// headings 1 to 3.
    Heading { level: u8, text: String },
    /// A `---` line.
    HorizontalRule,
    /// The body of a fenced code block, lines joined with `\n`.
    CodeBlock { text: String },
    /// A pipe table. Every row has the header's column count; row 0 is the
    /// header.
    Table { rows: Vec<Vec<String>> },
    /// A `**Label:** value` line, rendered as one paragraph.
    MetadataLine { spans: Vec<Span> },
    /// A `- ` list item.
    BulletItem { spans: Vec<Span> },
    /// A `1. ` list item.
    NumberedItem { spans: Vec<Span> },
    /// Any other non-blank line.
    Paragraph { spans: Vec<Span> },
}

impl BlockRecord {
    /// Short stable name of the variant, used in snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockRecord::Heading { .. } => "Heading",
            BlockRecord::HorizontalRule => "HorizontalRule",
            BlockRecord::CodeBlock { .. } => "CodeBlock",
            BlockRecord::Table { .. } => "Table",
            BlockRecord::MetadataLine { .. } => "MetadataLine",
            BlockRecord::BulletItem { .. } => "BulletItem",
            BlockRecord::NumberedItem { .. } => "NumberedItem",
            BlockRecord::Paragraph { .. } => "Paragraph",
        }
    }
}
