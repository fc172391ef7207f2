//! Record every degradation in a request: component, failure mode, fallback used, timestamp.

use chrono::Utc;
use gurukul_core::models::DegradationEvent;

/// Collects the degradations of one request. Lives only as long as the request.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<DegradationEvent>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degradation and emit the matching log event.
    pub fn record(&mut self, component: &str, failure: &str, fallback_used: &str) {
        crate::tracing_setup::events::degradation_triggered(component, failure, fallback_used);
        self.events.push(DegradationEvent {
            component: component.to_string(),
            failure: failure.to_string(),
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    pub fn is_degraded(&self) -> bool {
        !self.events.is_empty()
    }

    /// Consume the tracker, yielding the events for response metadata.
    pub fn into_events(self) -> Vec<DegradationEvent> {
        self.events
    }
}
