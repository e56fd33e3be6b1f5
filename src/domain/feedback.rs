/// Haptic feedback capability
///
/// The tracker pulses when glasses are added or removed. The counter logic
/// never depends on this; tools receive it as an injected capability.

use std::sync::Mutex;

/// Something that can produce a short haptic pulse
pub trait Feedback {
    fn pulse(&self, duration_ms: u64);
}

/// Feedback for hosts without a vibration motor: the pulse is only logged
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn pulse(&self, duration_ms: u64) {
        tracing::debug!("Feedback pulse: {}ms", duration_ms);
    }
}

/// Feedback that remembers every pulse (useful for testing)
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pulses: Mutex<Vec<u64>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations of all pulses so far, oldest first
    pub fn pulses(&self) -> Vec<u64> {
        self.pulses.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Feedback for RecordingFeedback {
    fn pulse(&self, duration_ms: u64) {
        if let Ok(mut pulses) = self.pulses.lock() {
            pulses.push(duration_ms);
        }
    }
}
