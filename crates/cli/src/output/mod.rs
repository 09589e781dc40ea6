//! Output formatting for scan reports.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Also list inputs without a match.
    pub show_misses: bool,
}
