//! Transient Status Messages
//!
//! The outcome line shown under the form. Every message clears itself after
//! a delay, but only if no newer message replaced it in the meantime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class for the status element
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusLine {
    /// Replace the current message; returns the ticket to expire it with
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> u64 {
        self.generation += 1;
        self.current = Some(StatusMessage { text: text.into(), kind });
        self.generation
    }

    /// Clear the message shown under `ticket`, if it is still the current one
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> String {
        self.current.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }

    pub fn class(&self) -> String {
        match &self.current {
            Some(message) => format!("status-message {}", message.kind.class()),
            None => "status-message".to_string(),
        }
    }
}
