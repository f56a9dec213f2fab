pub mod blocks;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockRecord};
use lines::split_lines;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockRecord>,
}

/// Parses a whole markdown document into block records, in source order.
///
/// Never fails: malformed constructs degrade to plain text, empty tables
/// are dropped and an unterminated code block is flushed at end of input.
pub fn parse_document(input: &str) -> ParsedDoc {
    let lines = split_lines(input);
    let blocks = BlockBuilder::new(&lines).run();
    log::debug!("parsed {} lines into {} blocks", lines.len(), blocks.len());
    ParsedDoc { blocks }
}
