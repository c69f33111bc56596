/// Outbound message routed through the puppet transport. Sender and
/// recipient are contact ids; both are filled in by the dispatcher right
/// before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    text: String,
    from: Option<String>,
    to: Option<String>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn set_from(&mut self, id: impl Into<String>) {
        self.from = Some(id.into());
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn set_to(&mut self, id: impl Into<String>) {
        self.to = Some(id.into());
    }
}
