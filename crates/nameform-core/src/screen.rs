use std::time::{Duration, Instant};

use crate::render::{render, MessageCard};
use crate::snapshot::Snapshot;
use crate::state::ScreenState;
use crate::timer::DeferredQueue;

/// Message appended, without delay, when the submitted input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a name.";

/// Delay added per accepted submit: the k-th accepted submit waits k steps.
pub const DEFAULT_DELAY_STEP: Duration = Duration::from_millis(1000);

/// Where a live screen sits in its lifecycle.
///
/// A screen that has not been created yet does not exist as a value, and
/// [`FormScreen::destroy`] consumes the screen, so only the two live phases
/// are represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    /// A snapshot has been taken and the screen is waiting to be restored
    /// or destroyed.
    Suspended,
}

/// What a call to [`FormScreen::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was blank; [`EMPTY_INPUT_MESSAGE`] was appended right away.
    Rejected,
    /// The input was accepted as the `index`-th submit and its message comes
    /// due at `due`.
    Scheduled {
        index: u32,
        delay: Duration,
        due: Instant,
    },
    /// The screen is suspended and took no action.
    Ignored,
}

/// Format the message appended when an accepted submit comes due.
pub fn format_message(name: &str, delay: Duration) -> String {
    format!(
        "The name is {} and delay was {} milliseconds",
        name,
        delay.as_millis()
    )
}

/// The form screen: input handling, deferred appends, and lifecycle hooks.
///
/// All methods run on the single UI loop. Time is passed in rather than
/// read, so the loop decides when deferred appends fire via
/// [`advance`](FormScreen::advance).
pub struct FormScreen {
    state: ScreenState,
    lifecycle: Lifecycle,
    delay_step: Duration,
    pending: DeferredQueue<String>,
    cards: Vec<MessageCard>,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::create(DEFAULT_DELAY_STEP)
    }
}

impl FormScreen {
    /// Create an active screen with empty state.
    pub fn create(delay_step: Duration) -> Self {
        tracing::debug!(delay_step_ms = delay_step.as_millis() as u64, "form screen created");
        Self {
            state: ScreenState::new(),
            lifecycle: Lifecycle::Active,
            delay_step,
            pending: DeferredQueue::new(),
            cards: Vec::new(),
        }
    }

    /// Delay applied to the `index`-th accepted submit.
    pub fn delay_for(&self, index: u32) -> Duration {
        self.delay_step.saturating_mul(index)
    }

    /// Handle activation of the action control with `raw_input`.
    ///
    /// Never blocks: an accepted submit only schedules its message.
    pub fn submit(&mut self, raw_input: &str, now: Instant) -> SubmitOutcome {
        if self.lifecycle != Lifecycle::Active {
            tracing::debug!("submit ignored while screen is suspended");
            return SubmitOutcome::Ignored;
        }

        let name = raw_input.trim();
        if name.is_empty() {
            self.append(EMPTY_INPUT_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }

        let index = self.state.accept_submit();
        let delay = self.delay_for(index);
        let due = now + delay;
        self.pending.schedule(due, format_message(name, delay));

        tracing::info!(
            index,
            delay_ms = delay.as_millis() as u64,
            "name accepted; message scheduled"
        );

        SubmitOutcome::Scheduled { index, delay, due }
    }

    /// Fire every deferred append due at or before `now`.
    ///
    /// Returns the number of messages appended. Appends that come due while
    /// the screen is suspended are dropped: the snapshot has already been
    /// taken and would not include them.
    pub fn advance(&mut self, now: Instant) -> usize {
        let due = self.pending.pop_due(now);
        if due.is_empty() {
            return 0;
        }

        if self.lifecycle == Lifecycle::Suspended {
            tracing::debug!(dropped = due.len(), "deferred appends landed while suspended");
            return 0;
        }

        let appended = due.len();
        for message in due {
            self.append(message);
        }
        appended
    }

    /// Earliest instant at which a deferred append comes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.next_due()
    }

    /// Capture the persisted subset of state ahead of teardown.
    pub fn save_snapshot(&mut self) -> Snapshot {
        self.lifecycle = Lifecycle::Suspended;
        tracing::debug!(messages = self.state.messages.len(), "snapshot saved");
        Snapshot {
            messages: self.state.messages.clone(),
        }
    }

    /// Replace the message list with `saved` and re-render.
    ///
    /// The accepted-submit counter is not part of the snapshot and keeps its
    /// current value, which for a freshly created screen is zero.
    pub fn restore_snapshot(&mut self, saved: Snapshot) {
        self.state.messages = saved.messages;
        self.lifecycle = Lifecycle::Active;
        self.rerender();
        tracing::debug!(messages = self.state.messages.len(), "snapshot restored");
    }

    /// End this screen. Returns how many deferred appends were still pending.
    pub fn destroy(mut self) -> usize {
        let dropped = self.pending.clear();
        if dropped > 0 {
            tracing::info!(dropped, "screen destroyed with appends still pending");
        }
        dropped
    }

    pub fn messages(&self) -> &[String] {
        &self.state.messages
    }

    /// Cards produced by the most recent render.
    pub fn cards(&self) -> &[MessageCard] {
        &self.cards
    }

    pub fn pending_count(&self) -> u32 {
        self.state.pending_count
    }

    /// Accepted submits whose message has not been appended yet.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn append(&mut self, message: String) {
        self.state.push_message(message);
        self.rerender();
    }

    fn rerender(&mut self) {
        self.cards = render(&self.state.messages);
    }
}
