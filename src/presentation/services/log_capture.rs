use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOG_SENDER: std::sync::OnceLock<Sender<String>> = std::sync::OnceLock::new();

pub fn init_log_capture() -> Receiver<String> {
    let (tx, rx) = channel();
    if LOG_SENDER.set(tx.clone()).is_err() {
        tracing::warn!("Log capture already initialized");
        return rx;
    }

    let capture_layer = CaptureLayer { sender: tx };

    #[cfg(any(debug_assertions, feature = "verbose-logging"))]
    let filter = LevelFilter::TRACE;

    #[cfg(not(any(debug_assertions, feature = "verbose-logging")))]
    let filter = LevelFilter::DEBUG;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(capture_layer)
        .init();

    rx
}

struct CaptureLayer {
    sender: Sender<String>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("recipe_page") {
            return;
        }

        let level = *metadata.level();

        let mut visitor = LogVisitor {
            message: String::new(),
        };

        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let _ = self.sender.send(format!("[{}] {}", level, visitor.message));
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}
