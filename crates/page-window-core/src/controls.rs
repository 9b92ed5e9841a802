//! Control descriptors derived from a window
//!
//! The page window never touches a rendering tree. It produces an ordered list
//! of [`ControlDescriptor`]s that a renderer materializes left to right, before
//! the host's own "next page" control:
//!
//! ```text
//! [gap]  [5] [6*] [7]  [gap]
//! ```
//!
//! Re-renders are described by a [`ControlPatch`]: the full set of controls
//! inserted by the previous render is retracted before the new set goes in.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;
use crate::window::Window;

/// Side of the window a gap control sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapEdge {
	/// Before the first numbered button
	Leading,
	/// After the last numbered button
	Trailing,
}

/// A single control to render, in display order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlDescriptor {
	/// Numbered button jumping to one page
	Page {
		/// One-based page number shown on the button
		label: usize,
		/// Zero-based page index selected on activation
		target_index: usize,
		/// Whether this is the current page; active buttons are disabled
		is_active: bool,
	},
	/// Skip control jumping `visible_count` pages away from the current page
	Gap {
		/// Text shown on the control
		label: String,
		/// Zero-based page index selected on activation, clamped to the page range
		target_index: usize,
		/// Which side of the window the control sits on
		edge: GapEdge,
	},
}

impl ControlDescriptor {
	/// Page index selected when this control is activated
	pub fn target_index(&self) -> usize {
		match self {
			Self::Page { target_index, .. } | Self::Gap { target_index, .. } => *target_index,
		}
	}

	/// Whether this control represents the current page
	pub fn is_active(&self) -> bool {
		matches!(self, Self::Page { is_active: true, .. })
	}

	/// Whether activation is refused. Only the active page button is disabled.
	pub fn is_disabled(&self) -> bool {
		self.is_active()
	}

	/// Whether this is a gap control
	pub fn is_gap(&self) -> bool {
		matches!(self, Self::Gap { .. })
	}

	/// Text shown on the control
	pub fn label(&self) -> Cow<'_, str> {
		match self {
			Self::Page { label, .. } => Cow::Owned(label.to_string()),
			Self::Gap { label, .. } => Cow::Borrowed(label),
		}
	}
}

impl fmt::Display for ControlDescriptor {
	/// Active pages are wrapped in brackets: `... 5 [6] 7 ...`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_active() {
			write!(f, "[{}]", self.label())
		} else {
			f.write_str(&self.label())
		}
	}
}

/// Derives the ordered controls for a window
///
/// Calling this twice with the same inputs yields the same sequence. With zero
/// pages the sequence is empty.
///
/// # Examples
///
/// ```
/// use page_window_core::config::WindowConfig;
/// use page_window_core::controls::{build_controls, describe};
/// use page_window_core::window::Window;
///
/// let config = WindowConfig::default();
/// let controls = build_controls(&Window::new(4, 6), 10, 9, 5, &config);
/// assert_eq!(describe(&controls), "... 5 [6] 7 ...");
/// assert_eq!(controls[0].target_index(), 2);
/// assert_eq!(controls[4].target_index(), 8);
/// ```
pub fn build_controls(
	window: &Window,
	number_of_pages: usize,
	last_page_index: usize,
	current_page_index: usize,
	config: &WindowConfig,
) -> Vec<ControlDescriptor> {
	let visible_count = config.visible_count();
	let mut controls = Vec::with_capacity(visible_count + 2);

	if window.range_start != 0 {
		controls.push(ControlDescriptor::Gap {
			label: config.gap_label().to_string(),
			target_index: current_page_index.saturating_sub(visible_count),
			edge: GapEdge::Leading,
		});
	}

	controls.extend(
		window
			.indices()
			.take_while(|&index| index < number_of_pages)
			.map(|index| ControlDescriptor::Page {
				label: index + 1,
				target_index: index,
				is_active: index == current_page_index,
			}),
	);

	if window.range_end != last_page_index {
		let forward = current_page_index + visible_count;
		controls.push(ControlDescriptor::Gap {
			label: config.gap_label().to_string(),
			target_index: if forward >= number_of_pages {
				last_page_index
			} else {
				forward
			},
			edge: GapEdge::Trailing,
		});
	}

	controls
}

/// Space-separated text rendering of a control sequence, handy in logs
pub fn describe(controls: &[ControlDescriptor]) -> String {
	controls
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Change to the rendered controls produced by one recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPatch {
	/// Controls inserted by the previous render, to remove first
	pub retracted: Vec<ControlDescriptor>,
	/// Controls to insert, in display order
	pub inserted: Vec<ControlDescriptor>,
}

impl ControlPatch {
	/// Whether applying the patch leaves the rendered controls unchanged
	pub fn is_noop(&self) -> bool {
		self.retracted == self.inserted
	}
}
