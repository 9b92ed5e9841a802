//! Window configuration
//!
//! [`WindowConfig`] controls how many numbered page buttons are shown at once
//! and which label the gap controls carry. It can be built in code or read
//! from a TOML document:
//!
//! ```
//! use page_window_core::config::WindowConfig;
//!
//! let config = WindowConfig::from_toml_str(
//! 	r#"
//! 	visible_count = 5
//! 	gap_label = "…"
//! 	"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.visible_count(), 5);
//! assert_eq!(config.increment(), 2);
//! assert_eq!(config.middle_offset(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PageWindowError, Result};

/// Number of page buttons shown when nothing else is configured
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

/// Label rendered on gap controls when nothing else is configured
pub const DEFAULT_GAP_LABEL: &str = "...";

/// Validated window configuration
///
/// `visible_count` is always odd and at least 1, so the current page can sit
/// in the middle of the window with the same number of buttons on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindowConfig")]
pub struct WindowConfig {
	visible_count: usize,
	gap_label: String,
}

impl WindowConfig {
	/// Creates a configuration showing `visible_count` page buttons
	///
	/// # Errors
	///
	/// Returns [`PageWindowError::InvalidVisibleCount`] when `visible_count`
	/// is zero or even.
	///
	/// # Examples
	///
	/// ```
	/// use page_window_core::config::WindowConfig;
	///
	/// assert!(WindowConfig::new(7).is_ok());
	/// assert!(WindowConfig::new(4).is_err());
	/// ```
	pub fn new(visible_count: usize) -> Result<Self> {
		validate_visible_count(visible_count)?;
		Ok(Self {
			visible_count,
			gap_label: DEFAULT_GAP_LABEL.to_string(),
		})
	}

	/// Replaces the label used by gap controls
	///
	/// # Errors
	///
	/// Returns [`PageWindowError::EmptyGapLabel`] for a blank label.
	pub fn with_gap_label(mut self, label: impl Into<String>) -> Result<Self> {
		let label = label.into();
		validate_gap_label(&label)?;
		self.gap_label = label;
		Ok(self)
	}

	/// Parses a configuration from a TOML document
	///
	/// Missing keys fall back to [`DEFAULT_VISIBLE_COUNT`] and
	/// [`DEFAULT_GAP_LABEL`]; present keys go through the same validation as
	/// [`WindowConfig::new`].
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Maximum number of numbered page buttons shown at once
	pub fn visible_count(&self) -> usize {
		self.visible_count
	}

	/// Label rendered on gap controls
	pub fn gap_label(&self) -> &str {
		&self.gap_label
	}

	/// Buttons on each side of a centered current page: `(visible_count - 1) / 2`
	pub fn increment(&self) -> usize {
		(self.visible_count - 1) / 2
	}

	/// `(visible_count + 1) / 2`, the distance used to detect the window edges
	pub fn middle_offset(&self) -> usize {
		(self.visible_count + 1) / 2
	}
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			visible_count: DEFAULT_VISIBLE_COUNT,
			gap_label: DEFAULT_GAP_LABEL.to_string(),
		}
	}
}

/// Unvalidated shape of the configuration document
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWindowConfig {
	#[serde(default = "default_visible_count")]
	visible_count: usize,
	#[serde(default = "default_gap_label")]
	gap_label: String,
}

impl TryFrom<RawWindowConfig> for WindowConfig {
	type Error = PageWindowError;

	fn try_from(raw: RawWindowConfig) -> Result<Self> {
		WindowConfig::new(raw.visible_count)?.with_gap_label(raw.gap_label)
	}
}

fn default_visible_count() -> usize {
	DEFAULT_VISIBLE_COUNT
}

fn default_gap_label() -> String {
	DEFAULT_GAP_LABEL.to_string()
}

fn validate_visible_count(visible_count: usize) -> Result<()> {
	if visible_count == 0 || visible_count % 2 == 0 {
		return Err(PageWindowError::InvalidVisibleCount(visible_count));
	}
	Ok(())
}

fn validate_gap_label(label: &str) -> Result<()> {
	if label.trim().is_empty() {
		return Err(PageWindowError::EmptyGapLabel);
	}
	Ok(())
}
