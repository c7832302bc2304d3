//! Input gating

use crate::display::DisplaySink;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds the conversation's single in-flight slot and keeps input disabled.
///
/// Input is re-enabled and the slot released when the gate is dropped.
pub struct InputGate<'a> {
    in_flight: &'a AtomicBool,
    sink: &'a dyn DisplaySink,
}

impl<'a> InputGate<'a> {
    /// `None` when another message already holds the slot
    pub fn acquire(in_flight: &'a AtomicBool, sink: &'a dyn DisplaySink) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        sink.set_input_enabled(false);
        Some(Self { in_flight, sink })
    }
}

impl Drop for InputGate<'_> {
    fn drop(&mut self) {
        self.sink.set_input_enabled(true);
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingSink;

    #[test]
    fn test_gate_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);
        let sink = RecordingSink::new();

        let gate = InputGate::acquire(&flag, &sink).unwrap();
        assert!(!sink.input_enabled());
        assert!(InputGate::acquire(&flag, &sink).is_none());

        drop(gate);
        assert!(sink.input_enabled());
        assert!(InputGate::acquire(&flag, &sink).is_some());
    }
}
