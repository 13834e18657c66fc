//! Ordering guard for overlapping availability queries.
//!
//! Every query takes a ticket before it is sent. When the response comes
//! back it is applied only if no newer query has been issued since, so a
//! slow early response can never overwrite the list of a later one.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding every earlier one
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    /// True while no newer ticket has been issued
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest.get()
    }

    /// Hand `value` back only if `ticket` is still current
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("dropping response for superseded request {:?}", ticket);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));
        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let sequencer = RequestSequencer::new();
        let slow = sequencer.issue();
        let fast = sequencer.issue();

        // the later request resolves first and is applied
        assert_eq!(sequencer.accept(fast, "fast"), Some("fast"));
        // the earlier one arrives afterwards and is discarded
        assert_eq!(sequencer.accept(slow, "slow"), None);
    }

    #[test]
    fn test_clones_share_counter() {
        let sequencer = RequestSequencer::new();
        let handle = sequencer.clone();
        let ticket = sequencer.issue();
        handle.issue();
        assert!(!sequencer.is_current(ticket));
    }
}
