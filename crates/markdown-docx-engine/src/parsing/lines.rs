/// A reference to a single source line with its position in the line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 0-based index of this line.
    pub index: usize,
    /// The raw line text, without the `\n` terminator.
    pub text: &'a str,
}

/// Splits the whole input on `\n`.
///
/// A trailing newline yields a final empty line and a lone `\r` is kept as
/// part of the line text, matching a plain newline split.
pub fn split_lines(input: &str) -> Vec<&str> {
    input.split('\n').collect()
}
