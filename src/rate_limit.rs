/// Leading-edge throttle: the first call in a window runs, the rest are dropped.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            blocked_until: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.blocked_until {
            if now_ms < until {
                return false;
            }
        }

        self.blocked_until = Some(now_ms + self.limit_ms);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce. Every `schedule` supersedes the pending ticket; only the
/// newest ticket fires.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: f64,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        DebounceTicket(self.generation)
    }

    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if !self.pending || ticket.0 != self.generation {
            return false;
        }

        self.pending = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(16.0);

        assert!(throttle.admit(0.0));
        assert!(!throttle.admit(5.0));
        assert!(!throttle.admit(15.9));
        assert!(throttle.admit(16.0));
        assert!(!throttle.admit(20.0));
    }

    #[test]
    fn debounce_fires_only_latest_ticket() {
        let mut debounce = Debounce::new(250.0);

        let first = debounce.schedule();
        let second = debounce.schedule();

        assert!(!debounce.fire(first));
        assert!(debounce.fire(second));
        assert!(!debounce.fire(second), "a ticket fires once");
    }

    #[test]
    fn debounce_rearms_after_firing() {
        let mut debounce = Debounce::new(250.0);

        let ticket = debounce.schedule();
        assert!(debounce.fire(ticket));

        let next = debounce.schedule();
        assert!(debounce.fire(next));
    }
}
