use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Event {
    Tick { now: Instant },
    Key(crossterm::event::KeyEvent),
    Resize { cols: u16, rows: u16 },
    /// The action control was activated with the given raw input.
    Submit { input: String },
    /// Tear the screen down and build it again from its snapshot.
    Recreate,
    Quit,
}
