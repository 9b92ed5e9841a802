//! Visible window computation
//!
//! A [`Window`] is the inclusive range of page indices rendered as numbered
//! buttons. Its position depends on where the current page sits relative to
//! both ends of the page list:
//!
//! | Situation | Window |
//! |-----------|--------|
//! | every page fits | `0..=last` |
//! | current page near the end | last `visible_count` pages |
//! | room on both sides | centered on the current page |
//! | current page near the start | first `visible_count` pages |

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;

/// Inclusive, zero-based range of page indices shown as numbered buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
	/// First page index shown
	pub range_start: usize,
	/// Last page index shown
	pub range_end: usize,
}

impl Window {
	/// Creates a window covering `range_start..=range_end`
	pub const fn new(range_start: usize, range_end: usize) -> Self {
		Self {
			range_start,
			range_end,
		}
	}

	/// Window shown before any page state has been observed
	pub fn initial(config: &WindowConfig) -> Self {
		Self::new(0, config.visible_count() - 1)
	}

	/// Number of page indices covered by the window
	pub fn width(&self) -> usize {
		self.range_end - self.range_start + 1
	}

	/// Whether `page_index` falls inside the window
	pub fn contains(&self, page_index: usize) -> bool {
		self.indices().contains(&page_index)
	}

	/// Page indices covered by the window
	pub fn indices(&self) -> RangeInclusive<usize> {
		self.range_start..=self.range_end
	}
}

/// Computes the window of page indices to display
///
/// The branches are evaluated in order and the first match wins. Note that
/// the centering branch tests `current_page_index >= middle_offset` rather
/// than `>= increment`; when the current page equals `increment` the leading
/// branch produces the same range, so the result is still centered.
///
/// # Examples
///
/// ```
/// use page_window_core::config::WindowConfig;
/// use page_window_core::window::{Window, compute_window};
///
/// let config = WindowConfig::default();
/// assert_eq!(compute_window(10, 9, 0, &config), Window::new(0, 2));
/// assert_eq!(compute_window(10, 9, 5, &config), Window::new(4, 6));
/// assert_eq!(compute_window(10, 9, 9, &config), Window::new(7, 9));
/// ```
pub fn compute_window(
	number_of_pages: usize,
	last_page_index: usize,
	current_page_index: usize,
	config: &WindowConfig,
) -> Window {
	let visible_count = config.visible_count();
	let middle_offset = config.middle_offset();
	let increment = config.increment();

	if number_of_pages <= visible_count {
		Window::new(0, last_page_index)
	} else if current_page_index + middle_offset > last_page_index {
		Window::new(number_of_pages - visible_count, last_page_index)
	} else if current_page_index >= middle_offset {
		Window::new(
			current_page_index - increment,
			current_page_index + increment,
		)
	} else {
		Window::new(0, visible_count - 1)
	}
}
