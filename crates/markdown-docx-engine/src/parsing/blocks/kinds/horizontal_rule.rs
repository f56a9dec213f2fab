/// Horizontal rule type (`---` alone on a line).
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
