/// Mutable state owned by a [`FormScreen`](crate::screen::FormScreen).
///
/// `messages` only grows during a session; `pending_count` counts accepted
/// submits, including those whose append has not fired yet, so it can run
/// ahead of `messages.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub pending_count: u32,
    pub messages: Vec<String>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted submit and return its 1-based index.
    pub fn accept_submit(&mut self) -> u32 {
        self.pending_count = self.pending_count.saturating_add(1);
        self.pending_count
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}
