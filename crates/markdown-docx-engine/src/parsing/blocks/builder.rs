use crate::parsing::lines::LineRef;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    rules,
    types::BlockRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState<'a> {
    Normal,
    InCodeBlock { body: Vec<&'a str> },
}

/// Single forward pass over the source lines producing [`BlockRecord`]s.
///
/// Code fences toggle between `Normal` and `InCodeBlock`. While inside a
/// code block every line is buffered verbatim; outside, blank lines are
/// skipped and each other line is handed to the first matching rule in
/// [`rules::RULES`].
pub struct BlockBuilder<'a> {
    lines: &'a [&'a str],
    pos: usize,
    state: ScanState<'a>,
    out: Vec<BlockRecord>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            pos: 0,
            state: ScanState::Normal,
            out: vec![],
        }
    }

    /// Runs the scan to the end of input and returns the records in source
    /// order.
    pub fn run(mut self) -> Vec<BlockRecord> {
        let classifier = MarkdownLineClassifier;
        while self.pos < self.lines.len() {
            let lr = LineRef {
                index: self.pos,
                text: self.lines[self.pos],
            };
            let lc = classifier.classify(&lr);
            self.push(&lc);
        }
        self.finish()
    }

    fn push(&mut self, c: &LineClass<'a>) {
        if c.is_fence {
            self.toggle_fence();
            self.pos += 1;
            return;
        }

        if let ScanState::InCodeBlock { body } = &mut self.state {
            body.push(c.raw);
            self.pos += 1;
            return;
        }

        if c.is_blank {
            self.pos += 1;
            return;
        }

        let rule = rules::select(c);
        let produced = (rule.produce)(self.lines, c);
        self.out.extend(produced.record);
        // Every rule consumes at least the current line.
        self.pos = produced.next.max(self.pos + 1);
    }

    fn toggle_fence(&mut self) {
        match std::mem::replace(&mut self.state, ScanState::Normal) {
            ScanState::Normal => {
                self.state = ScanState::InCodeBlock { body: vec![] };
            }
            ScanState::InCodeBlock { body } => self.flush_code(body),
        }
    }

    fn flush_code(&mut self, body: Vec<&str>) {
        self.out.push(BlockRecord::CodeBlock {
            text: body.join("\n"),
        });
    }

    fn finish(mut self) -> Vec<BlockRecord> {
        // EOF flush: an unterminated fence still yields its body.
        if let ScanState::InCodeBlock { body } =
            std::mem::replace(&mut self.state, ScanState::Normal)
        {
            log::debug!("code block still open at end of input, flushing");
            self.flush_code(body);
        }
        self.out
    }
}
