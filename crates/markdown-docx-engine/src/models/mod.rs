pub mod conversion_job;
pub mod style_sheet;

pub use conversion_job::ConversionJob;
pub use style_sheet::StyleSheet;
