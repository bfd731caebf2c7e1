use std::collections::VecDeque;

use crate::event::Event;

/// Queue between terminal input and the form screen.
///
/// Each loop iteration publishes a `Tick` (which fires due appends) and any
/// key or resize events read from the terminal. Key handling may publish
/// `Submit`, `Recreate` or `Quit` in turn, so the app keeps draining until
/// the queue is empty. Events come out in the order they went in.
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn publish(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Take everything queued so far.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn submits_drain_in_the_order_they_were_made() {
        let mut bus = EventBus::new();
        for name in ["Alice", "", "Bob"] {
            bus.publish(Event::Submit { input: name.into() });
        }
        let inputs: Vec<String> = bus
            .drain()
            .into_iter()
            .filter_map(|ev| match ev {
                Event::Submit { input } => Some(input),
                _ => None,
            })
            .collect();
        assert_eq!(inputs, vec!["Alice", "", "Bob"]);
    }

    #[test]
    fn tick_then_recreate_then_quit() {
        let mut bus = EventBus::default();
        bus.publish(Event::Tick {
            now: Instant::now(),
        });
        bus.publish(Event::Recreate);
        bus.publish(Event::Quit);
        let events = bus.drain();
        assert!(matches!(events[0], Event::Tick { .. }));
        assert!(matches!(events[1], Event::Recreate));
        assert!(matches!(events[2], Event::Quit));
    }

    #[test]
    fn drain_leaves_queue_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain().is_empty());
        bus.publish(Event::Resize { cols: 80, rows: 24 });
        assert!(bus.has_pending());
        assert_eq!(bus.drain().len(), 1);
        assert!(!bus.has_pending());
    }
}
