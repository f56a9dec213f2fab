/// Fenced code block type with owned delimiter constant.
///
/// Any line whose trimmed content starts with the marker toggles the fence,
/// so an info string such as ```` ```rust ```` opens a block and any fence
/// line closes it.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the trimmed line is a fence delimiter.
    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }
}
