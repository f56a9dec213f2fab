use crate::parsing::inline::tokenize;

use super::{
    classify::LineClass,
    kinds::{
        BulletItem, Heading, HorizontalRule, MetadataLine, NumberedItem, Paragraph, Table,
        parse_table,
    },
    types::BlockRecord,
};

/// Identifies a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    HorizontalRule,
    Heading,
    Table,
    MetadataLine,
    BulletItem,
    NumberedItem,
    Paragraph,
}

/// What a rule's producer yields for the line it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Produced {
    /// The record, or `None` when the consumed lines yield nothing
    /// (an empty table).
    pub record: Option<BlockRecord>,
    /// Index of the first line not consumed.
    pub next: usize,
}

/// A (predicate, producer) pair for one block kind.
///
/// `matches` only sees the current non-blank line; `produce` may consume
/// further lines and reports where scanning resumes.
pub struct Rule {
    pub kind: RuleKind,
    pub matches: fn(&LineClass<'_>) -> bool,
    pub produce: fn(&[&str], &LineClass<'_>) -> Produced,
}

/// Classification rules in priority order; the first match wins.
///
/// Fence toggling and blank-line skipping happen before this table is
/// consulted. The last rule always matches.
pub static RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::HorizontalRule,
        matches: is_horizontal_rule,
        produce: produce_horizontal_rule,
    },
    Rule {
        kind: RuleKind::Heading,
        matches: is_heading,
        produce: produce_heading,
    },
    Rule {
        kind: RuleKind::Table,
        matches: is_table,
        produce: produce_table,
    },
    Rule {
        kind: RuleKind::MetadataLine,
        matches: is_metadata_line,
        produce: produce_metadata_line,
    },
    Rule {
        kind: RuleKind::BulletItem,
        matches: is_bullet_item,
        produce: produce_bullet_item,
    },
    Rule {
        kind: RuleKind::NumberedItem,
        matches: is_numbered_item,
        produce: produce_numbered_item,
    },
    Rule {
        kind: RuleKind::Paragraph,
        matches: is_paragraph,
        produce: produce_paragraph,
    },
];

/// Returns the first rule in [`RULES`] matching the line.
pub fn select(line: &LineClass<'_>) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .unwrap_or(&RULES[RULES.len() - 1])
}

fn single(line: &LineClass<'_>, record: BlockRecord) -> Produced {
    Produced {
        record: Some(record),
        next: line.index + 1,
    }
}

fn is_horizontal_rule(line: &LineClass<'_>) -> bool {
    HorizontalRule::matches(line.trimmed)
}

fn produce_horizontal_rule(_: &[&str], line: &LineClass<'_>) -> Produced {
    single(line, BlockRecord::HorizontalRule)
}

fn is_heading(line: &LineClass<'_>) -> bool {
    Heading::parse(line.trimmed).is_some()
}

fn produce_heading(_: &[&str], line: &LineClass<'_>) -> Produced {
    let (level, text) = Heading::parse(line.trimmed).unwrap_or((0, line.trimmed));
    single(
        line,
        BlockRecord::Heading {
            level,
            text: text.to_string(),
        },
    )
}

fn is_table(line: &LineClass<'_>) -> bool {
    Table::opens(line.raw, line.trimmed)
}

fn produce_table(lines: &[&str], line: &LineClass<'_>) -> Produced {
    let (rows, next) = parse_table(lines, line.index);
    let has_columns = rows.first().is_some_and(|header| !header.is_empty());
    if !has_columns {
        log::debug!("skipping empty table at lines {}..{}", line.index + 1, next);
        return Produced { record: None, next };
    }
    Produced {
        record: Some(BlockRecord::Table { rows }),
        next,
    }
}

fn is_metadata_line(line: &LineClass<'_>) -> bool {
    MetadataLine::matches(line.raw)
}

fn produce_metadata_line(_: &[&str], line: &LineClass<'_>) -> Produced {
    single(
        line,
        BlockRecord::MetadataLine {
            spans: tokenize(line.raw, false),
        },
    )
}

fn is_bullet_item(line: &LineClass<'_>) -> bool {
    BulletItem::strip(line.trimmed).is_some()
}

fn produce_bullet_item(_: &[&str], line: &LineClass<'_>) -> Produced {
    let text = BulletItem::strip(line.trimmed).unwrap_or(line.trimmed);
    single(
        line,
        BlockRecord::BulletItem {
            spans: tokenize(text, false),
        },
    )
}

fn is_numbered_item(line: &LineClass<'_>) -> bool {
    NumberedItem::strip(line.trimmed).is_some()
}

fn produce_numbered_item(_: &[&str], line: &LineClass<'_>) -> Produced {
    let text = NumberedItem::strip(line.trimmed).unwrap_or(line.trimmed);
    single(
        line,
        BlockRecord::NumberedItem {
            spans: tokenize(text, false),
        },
    )
}

fn is_paragraph(_: &LineClass<'_>) -> bool {
    true
}

fn produce_paragraph(_: &[&str], line: &LineClass<'_>) -> Produced {
    single(
        line,
        BlockRecord::Paragraph {
            spans: tokenize(line.trimmed, Paragraph::ALLOWS_INLINE_CODE),
        },
    )
}
