pub mod code_fence;
pub mod heading;
pub mod horizontal_rule;
pub mod list_item;
pub mod metadata;
pub mod paragraph;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use list_item::{BulletItem, NumberedItem};
pub use metadata::MetadataLine;
pub use paragraph::Paragraph;
pub use table::{Table, parse_table};
