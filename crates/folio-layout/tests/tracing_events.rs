//! Structured log events emitted by the grid (requires `--features tracing`).

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use folio_layout::{GridCell, GridConfig, MediaDescriptor, MediaGrid, Rect};
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Default)]
struct Captured {
    messages: Vec<String>,
    spans: Vec<String>,
}

struct CaptureLayer {
    state: Arc<Mutex<Captured>>,
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" && self.0.is_none() {
            self.0 = Some(format!("{value:?}").trim_matches('"').to_string());
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::Id,
        _ctx: Context<'_, S>,
    ) {
        self.state
            .lock()
            .expect("capture lock")
            .spans
            .push(attrs.metadata().name().to_string());
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.state
                .lock()
                .expect("capture lock")
                .messages
                .push(message);
        }
    }
}

fn capture(f: impl FnOnce()) -> Captured {
    let state = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        state: state.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let mut guard = state.lock().expect("capture lock");
    std::mem::take(&mut *guard)
}

#[test]
fn insert_and_focus_are_logged() {
    let captured = capture(|| {
        let mut grid = MediaGrid::new(GridConfig::default()).expect("valid config");
        grid.insert(MediaDescriptor::image("a.png", "A"));
        grid.insert(MediaDescriptor::image("", "rejected"));
        grid.pointer_enter(GridCell::new(0, 0));
        grid.pointer_leave(GridCell::new(1, 1));
        grid.pointer_leave(GridCell::new(0, 0));
    });

    for expected in [
        "grid.insert",
        "grid.insert.rejected",
        "focus.enter",
        "focus.leave.stale",
        "focus.leave",
    ] {
        assert!(
            captured.messages.iter().any(|m| m == expected),
            "missing {expected} in {:?}",
            captured.messages
        );
    }
    assert!(captured.spans.iter().any(|s| s == "partition.solve"));
}

#[test]
fn overflow_insert_warns() {
    let captured = capture(|| {
        let tiles = (0..10).map(|i| MediaDescriptor::image(format!("{i}.png"), ""));
        let _ = MediaGrid::new(GridConfig::default().with_tiles(tiles)).expect("valid config");
    });
    assert_eq!(
        captured
            .messages
            .iter()
            .filter(|m| *m == "grid.insert.overflow")
            .count(),
        1
    );
}

#[test]
fn render_reports_timing() {
    let captured = capture(|| {
        let tiles = (0..3).map(|i| MediaDescriptor::image(format!("{i}.png"), ""));
        let grid = MediaGrid::new(GridConfig::default().with_tiles(tiles)).expect("valid config");
        assert_eq!(grid.render(Rect::from_size(128, 68)).len(), 3);
    });
    assert!(captured.messages.iter().any(|m| m == "grid.render"));
}
