//! Error types for page window configuration

/// Result type alias for page window operations
pub type Result<T> = std::result::Result<T, PageWindowError>;

/// Errors raised while building a page window configuration
///
/// The windowing algorithm itself never fails: out-of-range indices are
/// clamped into `[0, last_page_index]` instead. Only configuration is validated.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PageWindowError {
	/// The number of visible page buttons must be odd and greater than zero
	#[error("visible page count must be an odd number greater than zero, got {0}")]
	InvalidVisibleCount(usize),

	/// The gap control label is empty or whitespace only
	#[error("gap label must not be empty")]
	EmptyGapLabel,

	/// The configuration document could not be parsed
	#[error("invalid page window configuration: {0}")]
	Config(#[from] toml::de::Error),
}
