use std::sync::Mutex;

use shared::services::session_events::SessionEvents;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PromptOpened,
    PromptClosed,
    Renewed(String),
    Ended,
}

/// Records every notification so scenarios can assert on exact sequences.
#[derive(Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, wanted: &SessionEvent) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| *event == wanted)
            .count()
    }

    fn record(&self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionEvents for RecordingEvents {
    fn renewal_prompt_opened(&self) {
        self.record(SessionEvent::PromptOpened);
    }

    fn renewal_prompt_closed(&self) {
        self.record(SessionEvent::PromptClosed);
    }

    fn session_renewed(&self, token: &str) {
        self.record(SessionEvent::Renewed(token.to_string()));
    }

    fn session_ended(&self) {
        self.record(SessionEvent::Ended);
    }
}
