//! Color statistics over pixel regions

/// Average color extraction
pub mod color;
/// Nearest tile lookup by average color
pub mod matching;
