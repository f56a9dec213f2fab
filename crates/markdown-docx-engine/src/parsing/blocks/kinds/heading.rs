/// ATX heading type with owned prefix table.
pub struct Heading;

impl Heading {
    /// Prefixes checked longest first, each with the level it produces.
    pub const PREFIXES: [(&'static str, u8); 4] =
        [("#### ", 3), ("### ", 2), ("## ", 1), ("# ", 0)];

    /// Returns the heading level and trimmed text if the trimmed line is a
    /// heading.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|(prefix, level)| {
            trimmed
                .strip_prefix(prefix)
                .map(|rest| (*level, rest.trim()))
        })
    }
}
