/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other rule
/// matches. They are the only blocks whose text may contain code spans.
pub struct Paragraph;

impl Paragraph {
    pub const ALLOWS_INLINE_CODE: bool = true;
}
