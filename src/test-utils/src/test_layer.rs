// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber, field};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// Captures the events emitted while it is installed as the default subscriber.
///
/// Each event is recorded as its level followed by its fields, for example
/// `DEBUG message=unknown value code=7`. Spans are ignored.
///
/// # Example
/// ```
/// # use google_cloud_test_utils::test_layer::CaptureEvents;
/// let capture = CaptureEvents::new();
/// let _guard = capture.install();
/// tracing::warn!(code = 42, "unexpected code");
/// assert!(capture.contains("unexpected code"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureEvents {
    captured: Arc<Mutex<Vec<String>>>,
}

impl CaptureEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a registry with this layer as the thread's default subscriber.
    ///
    /// The events are captured until the returned guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    /// The events captured so far.
    pub fn events(&self) -> Vec<String> {
        self.captured.lock().expect("never poisoned").clone()
    }

    /// Returns true if any captured event contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.events().iter().any(|e| e.contains(text))
    }
}

impl<S: Subscriber> Layer<S> for CaptureEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = event.metadata().level().to_string();
        event.record(&mut EventVisitor(&mut line));
        self.captured.lock().expect("never poisoned").push(line);
    }
}

struct EventVisitor<'a>(&'a mut String);

impl field::Visit for EventVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.push_str(&format!(" {}={value}", field.name()));
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.push_str(&format!(" {}={value:?}", field.name()));
    }
}
