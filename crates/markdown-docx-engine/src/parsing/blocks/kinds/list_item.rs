/// Bullet list item type (`- text`).
pub struct BulletItem;

impl BulletItem {
    pub const MARKER: &'static str = "- ";

    /// Returns the item text after the marker.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::MARKER)
    }
}

/// Numbered list item type (`12. text`).
pub struct NumberedItem;

impl NumberedItem {
    pub const DELIMITER: &'static str = ". ";

    /// Returns the item text after one or more ASCII digits and `. `.
    pub fn strip(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        trimmed[digits..].strip_prefix(Self::DELIMITER)
    }
}
