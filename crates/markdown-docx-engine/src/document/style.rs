use serde::{Deserialize, Serialize};

/// A font size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Pt {
    /// Size in half-points, the unit WordprocessingML uses for `w:sz`.
    pub fn half_points(self) -> u32 {
        (self.0 * 2.0).round().max(0.0) as u32
    }
}

/// A length in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f32);

impl Inches {
    /// Length in twentieths of a point.
    pub fn twips(self) -> u32 {
        (self.0 * 1440.0).round().max(0.0) as u32
    }
}

/// Font family and size applied to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFont {
    pub family: String,
    pub size: Pt,
}

impl RunFont {
    pub fn new(family: impl Into<String>, size: Pt) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Named paragraph styles available to the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    Normal,
    ListBullet,
    ListNumber,
}

impl ParagraphStyle {
    /// The style id written into `w:pStyle`; `None` for the default style.
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::ListBullet => Some("ListBullet"),
            ParagraphStyle::ListNumber => Some("ListNumber"),
        }
    }
}

/// Line style for table borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderStyle {
    /// OOXML border type, e.g. `single`.
    pub kind: &'static str,
    /// Width in eighths of a point.
    pub size: u8,
    /// Hex RGB colour without `#`.
    pub color: &'static str,
}

impl BorderStyle {
    /// Thin single black line on every edge.
    pub const SINGLE: BorderStyle = BorderStyle {
        kind: "single",
        size: 4,
        color: "000000",
    };
}
