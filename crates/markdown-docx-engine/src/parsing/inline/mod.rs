//! # Inline Parsing
//!
//! Cursor-based splitting of one line of text into styled spans.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind` (Plain, Bold, InlineCode)
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Allowance
//!
//! Code spans are only recognized when the caller asks for them. Block
//! classification asks for them in plain paragraphs and nowhere else, so a
//! backtick in a list item or metadata line stays literal.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind, plain_text};
