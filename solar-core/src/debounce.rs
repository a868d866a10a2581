//! Coalescing of bursts of input into one action.
//!
//! Each keystroke schedules a ticket; after the quiet window the caller asks
//! whether its ticket is still the latest. Only the last ticket of a burst
//! fires. Callers doing async work on a ticket check it again with
//! [`Debouncer::is_current`] before applying the result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u32,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTicket<T> {
    generation: u64,
    pub value: T,
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            generation: 0,
        }
    }

    /// How long the caller should wait before calling [`Debouncer::fire`].
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Supersede every outstanding ticket and issue a new one.
    pub fn schedule<T>(&mut self, value: T) -> DebounceTicket<T> {
        self.generation += 1;
        DebounceTicket {
            generation: self.generation,
            value,
        }
    }

    /// Supersede every outstanding ticket without issuing a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Whether nothing was scheduled or cancelled since `ticket` was issued.
    pub fn is_current<T>(&self, ticket: &DebounceTicket<T>) -> bool {
        ticket.generation == self.generation
    }

    /// The ticket's value if nothing was scheduled or cancelled since.
    pub fn fire<T>(&self, ticket: DebounceTicket<T>) -> Option<T> {
        self.is_current(&ticket).then_some(ticket.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUGGESTION_DEBOUNCE_MS;

    #[test]
    fn burst_within_window_fires_once_with_last_value() {
        let mut debouncer = Debouncer::new(SUGGESTION_DEBOUNCE_MS);
        let mut sent = Vec::new();

        let first = debouncer.schedule("Bangk".to_string());
        let second = debouncer.schedule("Bangkok".to_string());

        // Both timers elapse in order.
        for ticket in [first, second] {
            if let Some(query) = debouncer.fire(ticket) {
                sent.push(query);
            }
        }
        assert_eq!(sent, ["Bangkok"]);
    }

    #[test]
    fn separate_bursts_each_fire() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.schedule(1);
        assert_eq!(debouncer.fire(first), Some(1));
        let second = debouncer.schedule(2);
        assert_eq!(debouncer.fire(second), Some(2));
    }

    #[test]
    fn cancel_suppresses_pending_ticket() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.schedule("Ch");
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.window_ms(), 300);
    }

    #[test]
    fn ticket_superseded_while_in_flight_is_rejected() {
        let mut debouncer = Debouncer::new(SUGGESTION_DEBOUNCE_MS);

        // "Bang" fires and its request goes out.
        let bang = debouncer.schedule("Bang");
        assert!(debouncer.is_current(&bang));

        // More typing before the response comes back.
        let bangkok = debouncer.schedule("Bangkok");
        assert!(!debouncer.is_current(&bang), "stale suggestions must be dropped");
        assert!(debouncer.is_current(&bangkok));

        // Picking a suggestion supersedes the newer request too.
        debouncer.cancel();
        assert!(!debouncer.is_current(&bangkok));
    }
}
