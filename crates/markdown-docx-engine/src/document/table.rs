use super::{BorderStyle, Paragraph, ParagraphStyle, Run};

/// A table cell holding one or more paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    paragraphs: Vec<Paragraph>,
}

impl Cell {
    fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new(ParagraphStyle::Normal)],
        }
    }

    /// Replaces the cell content with a single plain run.
    pub fn set_text(&mut self, text: &str) {
        let mut p = Paragraph::new(ParagraphStyle::Normal);
        p.add_run(text);
        self.paragraphs = vec![p];
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Iterates every run of every paragraph in the cell.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.paragraphs.iter_mut().flat_map(|p| p.runs_mut())
    }

    /// Text of the cell, paragraphs joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A fixed-size grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    borders: Option<BorderStyle>,
}

impl Table {
    /// Creates an empty `rows` x `cols` table; every cell holds one empty
    /// paragraph.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| Cell::new()).collect(),
            borders: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (`row`, `col`), or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mutable access to the cell at (`row`, `col`).
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Applies one border style to the outer edges and inner grid lines.
    pub fn set_borders(&mut self, style: BorderStyle) {
        self.borders = Some(style);
    }

    pub fn borders(&self) -> Option<&BorderStyle> {
        self.borders.as_ref()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }
}
