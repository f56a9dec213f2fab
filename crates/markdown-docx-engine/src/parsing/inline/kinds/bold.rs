/// Bold inline type with owned delimiter constant.
///
/// `**text**` where `text` is non-empty and contains no `*`.
pub struct Bold;

impl Bold {
    /// The delimiter on both sides of bold text.
    pub const MARKER: &'static [u8; 2] = b"**";
    /// Byte that may not appear inside bold text.
    pub const STAR: u8 = b'*';
}
