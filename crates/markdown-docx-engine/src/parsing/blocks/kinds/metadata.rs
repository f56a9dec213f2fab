/// Metadata line type: `**Label:** value` at the very start of the raw line.
pub struct MetadataLine;

impl MetadataLine {
    pub const OPEN: &'static str = "**";
    pub const LABEL_CLOSE: &'static str = ":**";

    /// Checked against the raw line, so leading indentation disqualifies it.
    pub fn matches(raw: &str) -> bool {
        raw.starts_with(Self::OPEN) && raw.contains(Self::LABEL_CLOSE)
    }
}
