//! # Docx Writer
//!
//! Serializes a [`Document`] into WordprocessingML and packs it, together
//! with the fixed package parts, into a deflated zip archive.

mod parts;

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{
    document::{BodyItem, BorderStyle, Cell, Document, Paragraph, Run, RunFont, Table},
    io::ConvertError,
};

/// Heading style ids by level; level 0 is the document title.
const HEADING_STYLES: [&str; 4] = ["Title", "Heading1", "Heading2", "Heading3"];

/// Writes `doc` to `path` as a `.docx` package, creating parent directories.
pub fn write(doc: &Document, path: &Path) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let opt = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", opt)?;
    zip.write_all(parts::CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", opt)?;
    zip.write_all(parts::PACKAGE_RELS.as_bytes())?;

    zip.start_file("word/document.xml", opt)?;
    zip.write_all(render_document_xml(doc).as_bytes())?;

    zip.start_file("word/styles.xml", opt)?;
    zip.write_all(render_styles_xml(doc.defaults()).as_bytes())?;

    zip.start_file("word/numbering.xml", opt)?;
    zip.write_all(parts::NUMBERING.as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", opt)?;
    zip.write_all(parts::DOCUMENT_RELS.as_bytes())?;

    zip.finish()?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Renders `word/document.xml`.
pub fn render_document_xml(doc: &Document) -> String {
    let mut body = String::new();
    for item in doc.body() {
        match item {
            BodyItem::Heading { level, text } => write_heading(&mut body, *level, text),
            BodyItem::Paragraph(p) => write_paragraph(&mut body, p),
            BodyItem::Table(t) => write_table(&mut body, t),
        }
    }
    format!("{}{body}{}", parts::DOCUMENT_OPEN, parts::DOCUMENT_CLOSE)
}

/// Renders `word/styles.xml` with `defaults` as the document-wide run font.
pub fn render_styles_xml(defaults: &RunFont) -> String {
    let family = encode_double_quoted_attribute(&defaults.family);
    let size = defaults.size.half_points();
    let doc_defaults = format!(
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{family}" w:eastAsia="{family}" w:hAnsi="{family}" w:cs="{family}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#
    );
    parts::STYLES_TEMPLATE.replace("{defaults}", &doc_defaults)
}

fn write_heading(out: &mut String, level: u8, text: &str) {
    let style = HEADING_STYLES[usize::from(level.min(3))];
    out.push_str(&format!(r#"<w:p><w:pPr><w:pStyle w:val="{style}"/></w:pPr>"#));
    write_run(out, &Run::new(text));
    out.push_str("</w:p>");
}

fn write_paragraph(out: &mut String, p: &Paragraph) {
    out.push_str("<w:p>");
    let style = p.style().style_id();
    let indent = p.left_indent();
    if style.is_some() || indent.is_some() {
        out.push_str("<w:pPr>");
        if let Some(style) = style {
            out.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
        }
        if let Some(indent) = indent {
            out.push_str(&format!(r#"<w:ind w:left="{}"/>"#, indent.twips()));
        }
        out.push_str("</w:pPr>");
    }
    for run in p.runs() {
        write_run(out, run);
    }
    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    out.push_str("<w:r>");
    if run.is_bold() || run.font().is_some() {
        out.push_str("<w:rPr>");
        if let Some(font) = run.font() {
            let family = encode_double_quoted_attribute(&font.family);
            out.push_str(&format!(
                r#"<w:rFonts w:ascii="{family}" w:hAnsi="{family}" w:cs="{family}"/>"#
            ));
        }
        if run.is_bold() {
            out.push_str("<w:b/>");
        }
        if let Some(font) = run.font() {
            let size = font.size.half_points();
            out.push_str(&format!(r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#));
        }
        out.push_str("</w:rPr>");
    }
    write_run_text(out, run.text());
    out.push_str("</w:r>");
}

/// Newlines become `w:br` and tabs `w:tab`, as a word processor expects.
fn write_run_text(out: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                out.push_str("<w:tab/>");
            }
            if !piece.is_empty() {
                out.push_str(r#"<w:t xml:space="preserve">"#);
                out.push_str(&encode_text(&strip_control_chars(piece)));
                out.push_str("</w:t>");
            }
        }
    }
}

/// Drops C0 control characters, which XML 1.0 does not allow in text.
/// Tabs, newlines and carriage returns are handled by the caller.
fn strip_control_chars(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| c.is_ascii_control() && c != '\x7f') {
        log::debug!("dropping control characters from run text");
        Cow::Owned(
            text.chars()
                .filter(|c| !c.is_ascii_control() || *c == '\x7f')
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

fn write_table(out: &mut String, t: &Table) {
    let col_width = parts::TEXT_WIDTH_TWIPS / u32::try_from(t.cols().max(1)).unwrap_or(1);

    out.push_str(r#"<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/>"#);
    if let Some(borders) = t.borders() {
        write_borders(out, borders);
    }
    out.push_str(r#"<w:tblLook w:val="04A0"/></w:tblPr><w:tblGrid>"#);
    for _ in 0..t.cols() {
        out.push_str(&format!(r#"<w:gridCol w:w="{col_width}"/>"#));
    }
    out.push_str("</w:tblGrid>");

    for row in 0..t.rows() {
        out.push_str("<w:tr>");
        for cell in t.row(row) {
            write_cell(out, cell, col_width);
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
}

fn write_borders(out: &mut String, b: &BorderStyle) {
    out.push_str("<w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        out.push_str(&format!(
            r#"<w:{edge} w:val="{}" w:sz="{}" w:space="0" w:color="{}"/>"#,
            b.kind, b.size, b.color
        ));
    }
    out.push_str("</w:tblBorders>");
}

fn write_cell(out: &mut String, cell: &Cell, width: u32) {
    out.push_str(&format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/></w:tcPr>"#
    ));
    // A cell must hold at least one paragraph.
    if cell.paragraphs().is_empty() {
        out.push_str("<w:p/>");
    }
    for p in cell.paragraphs() {
        write_paragraph(out, p);
    }
    out.push_str("</w:tc>");
}
