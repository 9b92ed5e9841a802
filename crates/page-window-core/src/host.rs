//! Host paginator contract and an in-memory host
//!
//! The page window attaches to a host pagination widget that owns the page
//! state. The host exposes its cursor, a "first page" command, and a FIFO
//! stream of [`PageEvent`]s that the page window drains one at a time.

use std::collections::VecDeque;

use crate::state::{PageEvent, last_page_index, number_of_pages};

/// Pagination widget the page window attaches to
pub trait PaginatorHost {
	/// Number of pages for the current item count and page size
	fn number_of_pages(&self) -> usize;

	/// Index of the last page, `0` when there are no pages
	fn last_page_index(&self) -> usize {
		last_page_index(self.number_of_pages())
	}

	/// Zero-based index of the current page
	fn page_index(&self) -> usize;

	/// Moves the cursor without publishing a notification
	fn set_page_index(&mut self, page_index: usize);

	/// Number of items per page
	fn page_size(&self) -> usize;

	/// Total number of items in the paginated list
	fn total_items(&self) -> usize;

	/// Moves to the first page, publishing a notification if the cursor moved
	fn first_page(&mut self);

	/// Publishes a page-change notification
	fn emit(&mut self, event: PageEvent);

	/// Takes the oldest pending page-change notification
	fn next_event(&mut self) -> Option<PageEvent>;

	/// Current state as a notification, with no page change implied
	fn snapshot(&self) -> PageEvent {
		PageEvent {
			page_index: self.page_index(),
			page_size: self.page_size(),
			total_items: self.total_items(),
			previous_page_index: self.page_index(),
		}
	}
}

/// In-memory pagination widget
///
/// Queues a [`PageEvent`] for every navigation that moves the cursor or
/// changes the page size. Navigation that would not move the cursor is
/// ignored and queues nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryPaginator {
	length: usize,
	page_index: usize,
	page_size: usize,
	pending: VecDeque<PageEvent>,
}

impl MemoryPaginator {
	/// Creates a paginator over `length` items on its first page
	pub fn new(length: usize, page_size: usize) -> Self {
		Self {
			length,
			page_index: 0,
			page_size,
			pending: VecDeque::new(),
		}
	}

	/// Starts the paginator on `page_index`, clamped to the last page
	pub fn with_page_index(mut self, page_index: usize) -> Self {
		self.page_index = page_index.min(PaginatorHost::last_page_index(&self));
		self
	}

	/// Total number of items
	pub fn length(&self) -> usize {
		self.length
	}

	/// Replaces the item count. No notification is published.
	pub fn set_length(&mut self, length: usize) {
		self.length = length;
	}

	/// Whether a page exists before the current one
	pub fn has_previous_page(&self) -> bool {
		self.page_index >= 1 && self.page_size != 0
	}

	/// Whether a page exists after the current one
	pub fn has_next_page(&self) -> bool {
		self.page_size != 0 && self.page_index < PaginatorHost::last_page_index(self)
	}

	/// Advances to the next page
	pub fn next_page(&mut self) {
		if !self.has_next_page() {
			return;
		}
		let previous = self.page_index;
		self.page_index += 1;
		self.queue_page_event(previous);
	}

	/// Steps back to the previous page
	pub fn previous_page(&mut self) {
		if !self.has_previous_page() {
			return;
		}
		let previous = self.page_index;
		self.page_index -= 1;
		self.queue_page_event(previous);
	}

	/// Jumps to the last page
	pub fn last_page(&mut self) {
		if !self.has_next_page() {
			return;
		}
		let previous = self.page_index;
		self.page_index = PaginatorHost::last_page_index(self);
		self.queue_page_event(previous);
	}

	/// Changes the page size, keeping the first item of the current page visible
	///
	/// Setting the current page size again changes nothing and queues nothing.
	pub fn set_page_size(&mut self, page_size: usize) {
		if page_size == self.page_size {
			return;
		}
		let start_index = self.page_index * self.page_size;
		let previous = self.page_index;
		self.page_index = start_index.checked_div(page_size).unwrap_or(0);
		self.page_size = page_size;
		self.queue_page_event(previous);
	}

	/// Number of notifications waiting to be drained
	pub fn pending_events(&self) -> usize {
		self.pending.len()
	}

	fn queue_page_event(&mut self, previous_page_index: usize) {
		let event = PageEvent {
			page_index: self.page_index,
			page_size: self.page_size,
			total_items: self.length,
			previous_page_index,
		};
		self.pending.push_back(event);
	}
}

impl PaginatorHost for MemoryPaginator {
	fn number_of_pages(&self) -> usize {
		number_of_pages(self.length, self.page_size)
	}

	fn page_index(&self) -> usize {
		self.page_index
	}

	fn set_page_index(&mut self, page_index: usize) {
		self.page_index = page_index;
	}

	fn page_size(&self) -> usize {
		self.page_size
	}

	fn total_items(&self) -> usize {
		self.length
	}

	fn first_page(&mut self) {
		if !self.has_previous_page() {
			return;
		}
		let previous = self.page_index;
		self.page_index = 0;
		self.queue_page_event(previous);
	}

	fn emit(&mut self, event: PageEvent) {
		self.pending.push_back(event);
	}

	fn next_event(&mut self) -> Option<PageEvent> {
		self.pending.pop_front()
	}
}
