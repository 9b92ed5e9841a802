//! Page window calculator
//!
//! [`PageWindow`] listens to a host paginator and keeps a bounded, sliding set
//! of numbered page controls in sync with the host's current page.
//!
//! ## Event Flow
//!
//! ```text
//! host notification ──► handle_event ──► compute_window ──► build_controls ──► ControlPatch
//!        ▲                                                                         │
//!        └───────────────────── activate ◄──── renderer click ◄────────────────────┘
//! ```
//!
//! Every transition is synchronous. Notifications published while another one
//! is being handled (a first-page request, an activation) are queued by the
//! host and processed by [`PageWindow::pump`] in arrival order.
//!
//! ## Example
//!
//! ```
//! use page_window_core::config::WindowConfig;
//! use page_window_core::controls::describe;
//! use page_window_core::host::MemoryPaginator;
//! use page_window_core::paginator::PageWindow;
//!
//! let mut host = MemoryPaginator::new(100, 10);
//! let mut page_window = PageWindow::new(WindowConfig::default());
//! page_window.attach(&host);
//! assert_eq!(describe(page_window.controls()), "[1] 2 3 ...");
//!
//! page_window.activate(&mut host, 5);
//! page_window.pump(&mut host);
//! assert_eq!(describe(page_window.controls()), "... 5 [6] 7 ...");
//! ```

use tracing::{debug, info, warn};

use crate::config::WindowConfig;
use crate::controls::{ControlDescriptor, ControlPatch, build_controls, describe};
use crate::host::PaginatorHost;
use crate::state::{PageEvent, PageState};
use crate::window::{Window, compute_window};

/// Sliding window of page-number controls attached to a host paginator
#[derive(Debug, Clone)]
pub struct PageWindow {
	config: WindowConfig,
	state: PageState,
	window: Window,
	controls: Vec<ControlDescriptor>,
}

impl PageWindow {
	/// Creates a detached page window showing the initial window
	pub fn new(config: WindowConfig) -> Self {
		let window = Window::initial(&config);
		Self {
			config,
			state: PageState::default(),
			window,
			controls: Vec::new(),
		}
	}

	/// Window configuration
	pub fn config(&self) -> &WindowConfig {
		&self.config
	}

	/// Last page state accepted from the host
	pub fn state(&self) -> &PageState {
		&self.state
	}

	/// Window currently shown
	pub fn window(&self) -> Window {
		self.window
	}

	/// Controls currently rendered, in display order
	pub fn controls(&self) -> &[ControlDescriptor] {
		&self.controls
	}

	/// Reads the host's state and renders the first set of controls
	pub fn attach<H: PaginatorHost>(&mut self, host: &H) -> ControlPatch {
		self.accept(host.snapshot())
	}

	/// Handles one page-change notification from the host
	///
	/// When the page size changed while the window was away from the first
	/// page, the incoming page index is overridden with `0` and the host is
	/// asked to go to its first page. The host answers with a notification of
	/// its own, handled by a later call.
	pub fn handle_event<H: PaginatorHost>(
		&mut self,
		host: &mut H,
		event: PageEvent,
	) -> ControlPatch {
		let mut event = event;
		if event.page_size != self.state.page_size && self.state.page_index != 0 {
			info!(
				previous_page_size = self.state.page_size,
				page_size = event.page_size,
				previous_page_index = self.state.page_index,
				"page size changed, returning to first page"
			);
			event.page_index = 0;
			host.first_page();
		}
		self.accept(event)
	}

	/// Drains and handles every pending host notification
	///
	/// Returns one patch per notification, in the order they must be applied.
	pub fn pump<H: PaginatorHost>(&mut self, host: &mut H) -> Vec<ControlPatch> {
		let mut patches = Vec::new();
		while let Some(event) = host.next_event() {
			patches.push(self.handle_event(host, event));
		}
		patches
	}

	/// Selects `target_index` on the host and publishes the change
	///
	/// Targets past the last page select the last page. The page window itself
	/// is updated when the published notification is handled, see
	/// [`PageWindow::pump`].
	pub fn activate<H: PaginatorHost>(&self, host: &mut H, target_index: usize) {
		let target_index = target_index.min(host.last_page_index());
		let previous_page_index = host.page_index();
		host.set_page_index(target_index);
		host.emit(PageEvent {
			page_index: target_index,
			page_size: host.page_size(),
			total_items: host.total_items(),
			previous_page_index,
		});
	}

	/// Activates a rendered control
	///
	/// Returns `false` without touching the host when the control is disabled.
	pub fn activate_control<H: PaginatorHost>(
		&self,
		host: &mut H,
		control: &ControlDescriptor,
	) -> bool {
		if control.is_disabled() {
			return false;
		}
		self.activate(host, control.target_index());
		true
	}

	fn accept(&mut self, event: PageEvent) -> ControlPatch {
		let state = PageState::from(event);
		if !state.is_consistent() {
			warn!(
				page_index = state.page_index,
				last_page_index = state.last_page_index(),
				"page index out of range, clamping"
			);
		}
		self.state = state.clamped();
		self.recompute()
	}

	fn recompute(&mut self) -> ControlPatch {
		let number_of_pages = self.state.number_of_pages();
		let last_page_index = self.state.last_page_index();
		let current = self.state.page_index;

		self.window = compute_window(number_of_pages, last_page_index, current, &self.config);
		let inserted = build_controls(
			&self.window,
			number_of_pages,
			last_page_index,
			current,
			&self.config,
		);
		let retracted = std::mem::replace(&mut self.controls, inserted.clone());

		debug!(
			page_index = current,
			range_start = self.window.range_start,
			range_end = self.window.range_end,
			controls = %describe(&inserted),
			"page window recomputed"
		);

		ControlPatch {
			retracted,
			inserted,
		}
	}
}

impl Default for PageWindow {
	fn default() -> Self {
		Self::new(WindowConfig::default())
	}
}
