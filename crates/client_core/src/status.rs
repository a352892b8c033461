#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// A single transient status line. Showing a message replaces whatever was there.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) {
        self.current = Some(StatusMessage {
            text: text.into(),
            severity,
        });
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_replaces_previous_one() {
        let mut line = StatusLine::default();
        line.show("first", Severity::Error);
        line.show("second", Severity::Info);
        assert_eq!(line.current(), Some(&StatusMessage::info("second")));
    }

    #[test]
    fn hide_clears_message() {
        let mut line = StatusLine::default();
        line.show("Not your turn", Severity::Error);
        line.hide();
        assert_eq!(line.current(), None);
    }
}
