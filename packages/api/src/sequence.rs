//! Monotonic request tickets.
//!
//! Async fetches cannot be cancelled once issued, and responses may land out of
//! order. Each fetch takes a [`Ticket`] from a [`Sequencer`]; when its response
//! arrives it is applied only if no newer ticket has been issued since. The
//! latest *issued* request wins, not the latest to arrive.

/// Opaque handle for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// Invalidate outstanding tickets without starting a new request.
    pub fn invalidate(&mut self) {
        self.issue();
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = Sequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate() {
        let mut seq = Sequencer::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }
}
