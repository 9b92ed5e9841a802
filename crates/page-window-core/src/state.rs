//! Page state and page-change notifications

use serde::{Deserialize, Serialize};

/// Number of pages needed to show `total_items` items, `page_size` at a time
///
/// A zero page size yields zero pages, the same answer the host widget gives.
pub fn number_of_pages(total_items: usize, page_size: usize) -> usize {
	if page_size == 0 {
		0
	} else {
		total_items.div_ceil(page_size)
	}
}

/// Index of the last page, or `0` when there are no pages
pub fn last_page_index(number_of_pages: usize) -> usize {
	number_of_pages.saturating_sub(1)
}

/// Page-change notification published by the host widget
///
/// Delivered whenever the page index or the page size changes, including
/// changes requested by the page window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageEvent {
	/// Zero-based index of the newly selected page
	pub page_index: usize,
	/// Number of items per page
	pub page_size: usize,
	/// Total number of items in the paginated list
	pub total_items: usize,
	/// Page index selected before this change
	pub previous_page_index: usize,
}

/// Last page state accepted by the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
	/// Total number of items in the paginated list
	pub total_items: usize,
	/// Zero-based index of the current page
	pub page_index: usize,
	/// Number of items per page
	pub page_size: usize,
	/// Page index selected before the current one
	pub previous_page_index: usize,
}

impl PageState {
	/// Number of pages for the recorded item count and page size
	pub fn number_of_pages(&self) -> usize {
		number_of_pages(self.total_items, self.page_size)
	}

	/// Index of the last page, `0` when there are no pages
	pub fn last_page_index(&self) -> usize {
		last_page_index(self.number_of_pages())
	}

	/// Whether the current page index lies inside `[0, last_page_index]`
	pub fn is_consistent(&self) -> bool {
		self.page_index <= self.last_page_index()
	}

	/// Returns the state with the current page clamped into `[0, last_page_index]`
	pub fn clamped(mut self) -> Self {
		self.page_index = self.page_index.min(self.last_page_index());
		self
	}
}

impl From<PageEvent> for PageState {
	fn from(event: PageEvent) -> Self {
		Self {
			total_items: event.total_items,
			page_index: event.page_index,
			page_size: event.page_size,
			previous_page_index: event.previous_page_index,
		}
	}
}
