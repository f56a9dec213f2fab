//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over the source lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (raw and trimmed text, blank status, fence detection)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the code fence state
//!    and dispatches every other non-blank line through the ordered rule table
//!
//! ## Modules
//!
//! - **`types`**: `BlockRecord`, the tagged block variants handed to the emitter
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, Table, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`rules`**: `RULES`, the (predicate, producer) pairs in priority order
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every non-blank, non-fence line lands in exactly one record
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A table consumes the maximal run of pipe-containing lines from its anchor

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod rules;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use rules::{RULES, Rule, RuleKind};
pub use types::BlockRecord;
