//! # Document Emission
//!
//! Turns block records into document model calls, one record at a time and
//! in order. The emitter keeps no state between records.

use crate::{
    document::{BorderStyle, Document, Paragraph, ParagraphStyle},
    models::StyleSheet,
    parsing::{
        blocks::BlockRecord,
        inline::{Span, SpanKind},
    },
};

/// Appends every record to `doc`.
pub fn emit(records: &[BlockRecord], doc: &mut Document, styles: &StyleSheet) {
    for record in records {
        emit_record(record, doc, styles);
    }
}

/// Builds a fresh document for `records` using the style sheet's body font.
pub fn build_document(records: &[BlockRecord], styles: &StyleSheet) -> Document {
    let mut doc = Document::new(styles.body_font.clone());
    emit(records, &mut doc, styles);
    doc
}

fn emit_record(record: &BlockRecord, doc: &mut Document, styles: &StyleSheet) {
    match record {
        BlockRecord::Heading { level, text } => doc.add_heading(text.as_str(), *level),
        BlockRecord::HorizontalRule => {
            doc.add_paragraph(ParagraphStyle::Normal).add_run(styles.rule_text());
        }
        BlockRecord::CodeBlock { text } => {
            let p = doc.add_paragraph(ParagraphStyle::Normal);
            p.add_run(text.as_str()).set_font(styles.code_block_font.clone());
            p.set_left_indent(styles.code_block_indent);
        }
        BlockRecord::Table { rows } => emit_table(rows, doc),
        BlockRecord::MetadataLine { spans } | BlockRecord::Paragraph { spans } => {
            add_spans(doc.add_paragraph(ParagraphStyle::Normal), spans, styles);
        }
        BlockRecord::BulletItem { spans } => {
            add_spans(doc.add_paragraph(ParagraphStyle::ListBullet), spans, styles);
        }
        BlockRecord::NumberedItem { spans } => {
            add_spans(doc.add_paragraph(ParagraphStyle::ListNumber), spans, styles);
        }
    }
}

/// One run per span; empty plain spans add nothing.
fn add_spans(p: &mut Paragraph, spans: &[Span], styles: &StyleSheet) {
    for span in spans {
        match span.kind {
            SpanKind::Plain if span.text.is_empty() => {}
            SpanKind::Plain => {
                p.add_run(span.text.as_str());
            }
            SpanKind::Bold => {
                p.add_run(span.text.as_str()).set_bold(true);
            }
            SpanKind::InlineCode => {
                p.add_run(span.text.as_str()).set_font(styles.inline_code_font.clone());
            }
        }
    }
}

fn emit_table(rows: &[Vec<String>], doc: &mut Document) {
    let cols = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || cols == 0 {
        log::debug!("not emitting table with {} rows and {cols} columns", rows.len());
        return;
    }

    let table = doc.add_table(rows.len(), cols);
    table.set_borders(BorderStyle::SINGLE);

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, text) in row.iter().enumerate() {
            let Some(cell) = table.cell_mut(row_idx, col_idx) else {
                continue;
            };
            cell.set_text(text);
            if row_idx == 0 {
                for run in cell.runs_mut() {
                    run.set_bold(true);
                }
            }
        }
    }

    // Spacing after the table
    doc.add_paragraph(ParagraphStyle::Normal);
}
