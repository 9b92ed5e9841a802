//! Log output of the page window, captured with a tracing layer

use std::sync::{Arc, Mutex};

use page_window_core::{MemoryPaginator, PageEvent, PageWindow};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a Vec<String>
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(
		&self,
		event: &tracing::Event<'_>,
		_ctx: tracing_subscriber::layer::Context<'_, S>,
	) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(
				&mut self,
				field: &tracing::field::Field,
				value: &dyn std::fmt::Debug,
			) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		let mut logs = self.logs.lock().unwrap();
		logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}

#[rstest]
fn test_page_window_logs_reset_clamp_and_recompute() {
	// Arrange
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let _guard = tracing_subscriber::registry().with(capture).set_default();

	let mut host = MemoryPaginator::new(100, 10).with_page_index(5);
	let mut page_window = PageWindow::default();
	page_window.attach(&host);

	// Act
	host.set_page_size(20);
	page_window.pump(&mut host);
	page_window.handle_event(
		&mut host,
		PageEvent {
			page_index: 40,
			page_size: 20,
			total_items: 100,
			previous_page_index: 0,
		},
	);

	// Assert
	let captured = logs.lock().unwrap();
	let has = |level: &str, text: &str| {
		captured
			.iter()
			.any(|log| log.contains(level) && log.contains(text))
	};
	assert!(
		has("INFO", "page size changed, returning to first page"),
		"Expected reset log, but got: {:?}",
		*captured
	);
	assert!(
		has("WARN", "page index out of range, clamping"),
		"Expected clamp warning, but got: {:?}",
		*captured
	);
	assert!(
		has("DEBUG", "page window recomputed"),
		"Expected recompute log, but got: {:?}",
		*captured
	);
}
