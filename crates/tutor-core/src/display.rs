//! Display intents emitted by the chat session
//!
//! The session never renders anything itself. It tells a [`DisplaySink`] to
//! append turns, to show, update or remove a working indicator, and to enable
//! or disable input. Front-ends implement the sink.

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Identifies one working indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndicatorHandle(Uuid);

impl IndicatorHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IndicatorHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// What the working indicator currently says
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Thinking,
    RetryingIn(Duration),
}

impl fmt::Display for IndicatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thinking => write!(f, "Thinking..."),
            Self::RetryingIn(delay) => {
                write!(f, "Rate limited. Retrying in {}s...", delay.as_secs())
            }
        }
    }
}

/// Receiver of display intents
pub trait DisplaySink: Send + Sync {
    fn append_turn(&self, text: &str, role: TurnRole);
    fn show_working_indicator(&self) -> IndicatorHandle;
    fn update_working_indicator(&self, handle: IndicatorHandle, status: IndicatorStatus);
    fn remove_working_indicator(&self, handle: IndicatorHandle);
    fn set_input_enabled(&self, enabled: bool);
}

/// Scoped working indicator, removed when dropped
pub struct WorkingIndicator<'a> {
    sink: &'a dyn DisplaySink,
    handle: Option<IndicatorHandle>,
}

impl<'a> WorkingIndicator<'a> {
    pub fn show(sink: &'a dyn DisplaySink) -> Self {
        let handle = sink.show_working_indicator();
        Self {
            sink,
            handle: Some(handle),
        }
    }

    pub fn update(&self, status: IndicatorStatus) {
        if let Some(handle) = self.handle {
            self.sink.update_working_indicator(handle, status);
        }
    }

    pub fn remove(mut self) {
        self.take_and_remove();
    }

    fn take_and_remove(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.remove_working_indicator(handle);
        }
    }
}

impl Drop for WorkingIndicator<'_> {
    fn drop(&mut self) {
        self.take_and_remove();
    }
}

/// One recorded display intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DisplayEvent {
    Turn { role: TurnRole, text: String },
    IndicatorShown { handle: IndicatorHandle },
    IndicatorUpdated {
        handle: IndicatorHandle,
        status: IndicatorStatus,
    },
    IndicatorRemoved { handle: IndicatorHandle },
    InputEnabled { enabled: bool },
}

/// Sink that keeps every intent in memory, for headless front-ends and tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().clone()
    }

    /// Turns in order of appearance
    pub fn turns(&self) -> Vec<(TurnRole, String)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::Turn { role, text } => Some((*role, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Text of the most recent assistant turn
    pub fn last_reply(&self) -> Option<String> {
        self.turns()
            .into_iter()
            .rev()
            .find(|(role, _)| *role == TurnRole::Assistant)
            .map(|(_, text)| text)
    }

    /// Every status the indicator was updated to
    pub fn indicator_updates(&self) -> Vec<IndicatorStatus> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::IndicatorUpdated { status, .. } => Some(*status),
                _ => None,
            })
            .collect()
    }

    /// Indicators shown but not removed yet
    pub fn visible_indicators(&self) -> usize {
        self.events.lock().iter().fold(0usize, |open, event| match event {
            DisplayEvent::IndicatorShown { .. } => open + 1,
            DisplayEvent::IndicatorRemoved { .. } => open.saturating_sub(1),
            _ => open,
        })
    }

    /// Last input state set, `true` when never touched
    pub fn input_enabled(&self) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                DisplayEvent::InputEnabled { enabled } => Some(*enabled),
                _ => None,
            })
            .unwrap_or(true)
    }

    fn push(&self, event: DisplayEvent) {
        self.events.lock().push(event);
    }
}

impl DisplaySink for RecordingSink {
    fn append_turn(&self, text: &str, role: TurnRole) {
        self.push(DisplayEvent::Turn {
            role,
            text: text.to_string(),
        });
    }

    fn show_working_indicator(&self) -> IndicatorHandle {
        let handle = IndicatorHandle::new();
        self.push(DisplayEvent::IndicatorShown { handle });
        handle
    }

    fn update_working_indicator(&self, handle: IndicatorHandle, status: IndicatorStatus) {
        self.push(DisplayEvent::IndicatorUpdated { handle, status });
    }

    fn remove_working_indicator(&self, handle: IndicatorHandle) {
        self.push(DisplayEvent::IndicatorRemoved { handle });
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.push(DisplayEvent::InputEnabled { enabled });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(IndicatorStatus::Thinking.to_string(), "Thinking...");
        assert_eq!(
            IndicatorStatus::RetryingIn(Duration::from_secs(10)).to_string(),
            "Rate limited. Retrying in 10s..."
        );
    }

    #[test]
    fn test_indicator_removed_on_drop() {
        let sink = RecordingSink::new();
        {
            let indicator = WorkingIndicator::show(&sink);
            indicator.update(IndicatorStatus::Thinking);
            assert_eq!(sink.visible_indicators(), 1);
        }
        assert_eq!(sink.visible_indicators(), 0);
    }

    #[test]
    fn test_explicit_remove_happens_once() {
        let sink = RecordingSink::new();
        let indicator = WorkingIndicator::show(&sink);
        indicator.remove();

        let removals = sink
            .events()
            .iter()
            .filter(|e| matches!(e, DisplayEvent::IndicatorRemoved { .. }))
            .count();
        assert_eq!(removals, 1);
    }

    #[test]
    fn test_recording_sink_turns() {
        let sink = RecordingSink::new();
        sink.append_turn("hi", TurnRole::User);
        sink.append_turn("Hello!", TurnRole::Assistant);
        assert_eq!(sink.turns().len(), 2);
        assert_eq!(sink.last_reply().as_deref(), Some("Hello!"));
        assert!(sink.input_enabled());

        sink.set_input_enabled(false);
        assert!(!sink.input_enabled());
    }

    #[test]
    fn test_events_serialize_tagged() {
        let event = DisplayEvent::Turn {
            role: TurnRole::Assistant,
            text: "ok".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "turn");
        assert_eq!(json["role"], "assistant");
    }
}
