/// Handle for one deferred layout measurement.
///
/// Only the ticket from the most recent [`MeasurementScheduler::schedule`]
/// call is accepted; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementTicket {
    generation: u64,
}

impl MeasurementTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks the latest requested layout measurement.
#[derive(Debug, Default)]
pub struct MeasurementScheduler {
    generation: u64,
    pending: Option<MeasurementTicket>,
}

impl MeasurementScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a measurement, superseding any pending one
    pub fn schedule(&mut self) -> MeasurementTicket {
        self.generation += 1;
        let ticket = MeasurementTicket {
            generation: self.generation,
        };
        self.pending = Some(ticket);
        ticket
    }

    pub fn pending(&self) -> Option<MeasurementTicket> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes `ticket` if it is still the current one
    pub fn complete(&mut self, ticket: MeasurementTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut scheduler = MeasurementScheduler::new();
        let first = scheduler.schedule();
        let second = scheduler.schedule();

        assert!(!scheduler.complete(first));
        assert!(scheduler.is_pending());
        assert!(scheduler.complete(second));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut scheduler = MeasurementScheduler::new();
        let ticket = scheduler.schedule();
        assert!(scheduler.complete(ticket));
        assert!(!scheduler.complete(ticket));
    }
}
