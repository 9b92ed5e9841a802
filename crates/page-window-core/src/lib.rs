//! Sliding page-number window for paginators
//!
//! This crate decides which page-number controls a paginator shows. Instead of
//! one button per page, it renders a bounded window of numbered buttons around
//! the current page plus at most two "gap" controls that skip ahead or back.
//!
//! # Features
//!
//! - **Window computation**: [`compute_window`] places the window at the start,
//!   the end, or centered on the current page
//! - **Control descriptors**: [`build_controls`] turns a window into plain data
//!   ([`ControlDescriptor`]) for any renderer
//! - **Host integration**: [`PageWindow`] follows a [`PaginatorHost`]'s
//!   page-change notifications and forwards control activations back to it
//! - **Configuration**: [`WindowConfig`] in code or from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[PaginatorHost] -->|PageEvent| B[PageWindow]
//!     B --> C[compute_window]
//!     C --> D[build_controls]
//!     D -->|ControlPatch| E[Renderer]
//!     E -->|activate| A
//! ```
//!
//! # Example
//!
//! ```rust
//! use page_window_core::{PageWindow, WindowConfig, MemoryPaginator, describe};
//!
//! let host = MemoryPaginator::new(95, 10).with_page_index(9);
//! let mut page_window = PageWindow::new(WindowConfig::default());
//! page_window.attach(&host);
//!
//! assert_eq!(describe(page_window.controls()), "... 8 9 [10]");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controls;
pub mod error;
pub mod host;
pub mod paginator;
pub mod state;
pub mod window;

// Re-exports for convenience
pub use config::WindowConfig;
pub use controls::{ControlDescriptor, ControlPatch, GapEdge, build_controls, describe};
pub use error::{PageWindowError, Result};
pub use host::{MemoryPaginator, PaginatorHost};
pub use paginator::PageWindow;
pub use state::{PageEvent, PageState};
pub use window::{Window, compute_window};
