//! # Page Window
//!
//! A bounded, sliding window of page-number controls for paginated lists.
//!
//! A paginator over a long list cannot show one button per page. Page Window
//! shows a fixed, odd number of numbered buttons around the current page and
//! adds "gap" controls that skip `visible_count` pages toward either end:
//!
//! ```text
//! [1] 2 3 ...          first page
//! ... 5 [6] 7 ...      somewhere in the middle
//! ... 8 9 [10]         last page
//! ```
//!
//! ## Core Principles
//!
//! - **Pure data out**: the algorithm produces [`ControlDescriptor`]s, never DOM nodes
//! - **Host-driven**: the host paginator owns the page state and notifies the window
//! - **Synchronous**: every notification is handled to completion before the next one
//!
//! ## Quick Example
//!
//! ```rust
//! use page_window::prelude::*;
//!
//! let mut host = MemoryPaginator::new(100, 10);
//! let mut page_window = PageWindow::new(WindowConfig::default());
//! page_window.attach(&host);
//!
//! // A renderer forwards clicks back into the window.
//! let gap = page_window.controls().last().cloned().unwrap();
//! page_window.activate_control(&mut host, &gap);
//! page_window.pump(&mut host);
//!
//! assert_eq!(describe(page_window.controls()), "... 3 [4] 5 ...");
//! ```
//!
//! ## Modules
//!
//! - [`config`] - window size and gap label, in code or from TOML
//! - [`window`] - which page indices get numbered buttons
//! - [`controls`] - ordered control descriptors and render patches
//! - [`host`] - the host paginator contract and an in-memory host
//! - [`paginator`] - the page window that ties them together

pub use page_window_core::{config, controls, error, host, paginator, state, window};

pub use page_window_core::{
	ControlDescriptor, ControlPatch, GapEdge, MemoryPaginator, PageEvent, PageState, PageWindow,
	PageWindowError, PaginatorHost, Result, Window, WindowConfig, build_controls, compute_window,
	describe,
};

/// Commonly used types
pub mod prelude {
	pub use page_window_core::{
		ControlDescriptor, ControlPatch, GapEdge, MemoryPaginator, PageEvent, PageWindow,
		PaginatorHost, Window, WindowConfig, describe,
	};
}
