/// Code span inline type with owned delimiter constant.
///
/// Code spans are only recognized where the caller allows them (plain
/// paragraphs). The content must be non-empty and cannot contain a backtick.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
