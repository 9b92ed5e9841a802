//! Property-based tests for window computation and control derivation
//!
//! Uses proptest to verify:
//! 1. Windows stay inside the page range and never exceed `visible_count`
//! 2. Windows are centered whenever the current page has room on both sides
//! 3. Gap targets are clamped into the page range
//! 4. Control derivation is idempotent and marks exactly the current page active

use page_window_core::{ControlDescriptor, GapEdge, WindowConfig, build_controls, compute_window};
use proptest::prelude::*;

fn scenario() -> impl Strategy<Value = (usize, usize, usize)> {
	(0usize..6, 0usize..80).prop_flat_map(|(k, pages)| {
		let visible_count = 2 * k + 1;
		(Just(visible_count), Just(pages), 0..pages.max(1))
	})
}

fn last_index(pages: usize) -> usize {
	pages.saturating_sub(1)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(256))]

	/// Property: the window is inside `[0, last]` and no wider than allowed
	#[test]
	fn test_window_bounds((visible_count, pages, current) in scenario()) {
		let config = WindowConfig::new(visible_count).unwrap();
		let last = last_index(pages);
		let window = compute_window(pages, last, current, &config);

		prop_assert!(window.range_start <= window.range_end);
		prop_assert!(window.range_end <= last);
		if pages <= visible_count {
			prop_assert_eq!(window.range_start, 0);
			prop_assert_eq!(window.range_end, last);
		} else {
			prop_assert_eq!(window.width(), visible_count);
		}
	}

	/// Property: with room on both sides the current page is the midpoint
	#[test]
	fn test_window_centered((visible_count, pages, current) in scenario()) {
		let config = WindowConfig::new(visible_count).unwrap();
		let last = last_index(pages);
		prop_assume!(pages > 0);
		prop_assume!(current >= config.increment());
		prop_assume!(current + config.middle_offset() <= last);

		let window = compute_window(pages, last, current, &config);
		prop_assert_eq!(window.width(), visible_count);
		prop_assert_eq!(window.range_start + config.increment(), current);
		prop_assert_eq!(window.range_end - config.increment(), current);
	}

	/// Property: gap targets never leave the page range
	#[test]
	fn test_gap_targets_clamped((visible_count, pages, current) in scenario()) {
		let config = WindowConfig::new(visible_count).unwrap();
		let last = last_index(pages);
		let window = compute_window(pages, last, current, &config);
		let controls = build_controls(&window, pages, last, current, &config);

		for control in &controls {
			prop_assert!(control.target_index() <= last);
		}

		let gaps: Vec<_> = controls.iter().filter(|c| c.is_gap()).collect();
		prop_assert!(gaps.len() <= 2);
		if pages <= visible_count {
			prop_assert!(gaps.is_empty());
		}
	}

	/// Property: rendering is idempotent and ordered gap, pages, gap
	#[test]
	fn test_controls_shape((visible_count, pages, current) in scenario()) {
		let config = WindowConfig::new(visible_count).unwrap();
		let last = last_index(pages);
		let window = compute_window(pages, last, current, &config);
		let controls = build_controls(&window, pages, last, current, &config);

		prop_assert_eq!(&controls, &build_controls(&window, pages, last, current, &config));

		let page_targets: Vec<_> = controls
			.iter()
			.filter_map(|control| match control {
				ControlDescriptor::Page { label, target_index, .. } => {
					Some((*label, *target_index))
				}
				ControlDescriptor::Gap { .. } => None,
			})
			.collect();
		let expected: Vec<_> = if pages == 0 {
			Vec::new()
		} else {
			window.indices().map(|index| (index + 1, index)).collect()
		};
		prop_assert_eq!(page_targets, expected);

		let active = controls.iter().filter(|c| c.is_active()).count();
		prop_assert_eq!(active, usize::from(pages > 0));

		if let Some(ControlDescriptor::Gap { edge, .. }) = controls.first() {
			prop_assert_eq!(*edge, GapEdge::Leading);
			prop_assert!(window.range_start != 0);
		}
		if let Some(ControlDescriptor::Gap { edge, .. }) = controls.last() {
			prop_assert_eq!(*edge, GapEdge::Trailing);
			prop_assert!(window.range_end != last);
		}
	}
}
