//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Bold`**: `MARKER = b"**"`, content may not contain `*`
//! - **`CodeSpan`**: `TICK = b'\`'`, content may not contain a backtick
//!
//! The parser reads these constants; it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;

pub use bold::Bold;
pub use code_span::CodeSpan;
