/// Pipe table block type with owned delimiter constant.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether a line anchors a table: it contains a pipe and its trimmed
    /// form starts with one.
    pub fn opens(raw: &str, trimmed: &str) -> bool {
        raw.contains(Self::PIPE) && trimmed.starts_with(Self::PIPE)
    }

    /// Whether a trimmed row is a header separator such as `|---|:--:|`.
    ///
    /// Requires outer pipes around at least one character, all of which are
    /// `-`, `:`, `|` or whitespace.
    pub fn is_separator(trimmed: &str) -> bool {
        let Some(inner) = trimmed
            .strip_prefix(Self::PIPE)
            .and_then(|s| s.strip_suffix(Self::PIPE))
        else {
            return false;
        };
        !inner.is_empty()
            && inner
                .chars()
                .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
    }

    /// Splits a trimmed `| a | b |` row into trimmed cells.
    ///
    /// The pieces before the first and after the last pipe are dropped, so a
    /// lone `|` has no cells and `||` has one empty cell.
    pub fn split_cells(trimmed: &str) -> Vec<String> {
        let pieces: Vec<&str> = trimmed.split(Self::PIPE).collect();
        if pieces.len() < 2 {
            return vec![];
        }
        pieces[1..pieces.len() - 1]
            .iter()
            .map(|c| c.trim().to_string())
            .collect()
    }
}

/// Parses a pipe table starting at `start`.
///
/// Consumes lines for as long as they contain a pipe. Only trimmed lines that
/// both start and end with a pipe become rows; other pipe-containing lines
/// are consumed without contributing. Separator rows are consumed and
/// dropped.
///
/// Rows are padded with empty cells or truncated to the header's width.
///
/// # Returns
/// The rows (header first) and the index of the first line past the table.
pub fn parse_table(lines: &[&str], start: usize) -> (Vec<Vec<String>>, usize) {
    let mut rows: Vec<Vec<String>> = vec![];
    let mut i = start;

    while i < lines.len() && lines[i].contains(Table::PIPE) {
        let line = lines[i].trim();
        let is_row = line.starts_with(Table::PIPE) && line.ends_with(Table::PIPE);
        if is_row && !Table::is_separator(line) {
            rows.push(Table::split_cells(line));
        }
        i += 1;
    }

    (normalize_width(rows), i)
}

/// Pads or truncates every row to the header row's column count.
fn normalize_width(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let Some(width) = rows.first().map(Vec::len) else {
        return rows;
    };
    for row in rows.iter_mut().skip(1) {
        row.resize(width, String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_separator_and_data_row() {
        let lines = ["| A | B |", "|---|---|", "| 1 | 2 |"];
        let (rows, next) = parse_table(&lines, 0);
        assert_eq!(rows, vec![row(&["A", "B"]), row(&["1", "2"])]);
        assert_eq!(next, 3);
    }

    #[test]
    fn stops_at_first_line_without_pipe() {
        let lines = ["intro", "| A |", "| 1 |", "", "after"];
        let (rows, next) = parse_table(&lines, 1);
        assert_eq!(rows, vec![row(&["A"]), row(&["1"])]);
        assert_eq!(next, 3);
    }

    #[test]
    fn misshapen_pipe_lines_are_consumed_without_rows() {
        let lines = ["| A | B |", "a | b", "| 1 | 2 |", "tail"];
        let (rows, next) = parse_table(&lines, 0);
        assert_eq!(rows, vec![row(&["A", "B"]), row(&["1", "2"])]);
        assert_eq!(next, 3);
    }

    #[test]
    fn separator_only_table_is_empty() {
        let lines = ["|---|---|", "| :-: |"];
        let (rows, next) = parse_table(&lines, 0);
        assert!(rows.is_empty());
        assert_eq!(next, 2);
    }

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let lines = ["| A | B | C |", "| 1 |"];
        let (rows, _) = parse_table(&lines, 0);
        assert_eq!(rows[1], row(&["1", "", ""]));
    }

    #[test]
    fn long_rows_are_truncated_to_header_width() {
        let lines = ["| A | B |", "| 1 | 2 | 3 | 4 |"];
        let (rows, _) = parse_table(&lines, 0);
        assert_eq!(rows[1], row(&["1", "2"]));
    }

    #[test]
    fn cells_are_trimmed_and_may_be_empty() {
        let lines = ["|  x  ||   y|"];
        let (rows, _) = parse_table(&lines, 0);
        assert_eq!(rows, vec![row(&["x", "", "y"])]);
    }

    #[test]
    fn indented_rows_are_accepted() {
        let lines = ["   | A |   ", "\t| 1 |"];
        let (rows, next) = parse_table(&lines, 0);
        assert_eq!(rows, vec![row(&["A"]), row(&["1"])]);
        assert_eq!(next, 2);
    }

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :--- | ---: |", true)]
    #[case("|-|", true)]
    #[case("| |", true)]
    #[case("||", false)]
    #[case("|", false)]
    #[case("| - a |", false)]
    #[case("---", false)]
    fn separator_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table::is_separator(line), expected);
    }

    #[rstest]
    #[case("|", vec![])]
    #[case("||", vec![""])]
    #[case("| a |", vec!["a"])]
    #[case("| a | b |", vec!["a", "b"])]
    fn cell_splitting(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(Table::split_cells(line), row(&expected));
    }

    #[test]
    fn opens_requires_leading_pipe_after_trim() {
        assert!(Table::opens("  | a |", "| a |"));
        assert!(!Table::opens("a | b", "a | b"));
        assert!(!Table::opens("plain", "plain"));
    }
}
