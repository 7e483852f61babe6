use std::time::{Duration, Instant};

/// Outcome of running a changed search query through the gate
#[derive(Debug, PartialEq, Eq)]
pub enum QueryDecision {
    /// The query should trigger a suggestion lookup
    Admit,
    /// The query is too short, any shown suggestions should be cleared
    Clear,
    /// The query should be ignored for now
    Skip,
}

/// Gate deciding whether a changed search query should trigger a new
/// suggestion lookup against the place search endpoint.
///
/// A query is admitted when it has reached the minimum length, differs from
/// the previously admitted query and the minimum interval since the last
/// admitted lookup has elapsed. Queries below the minimum length reset the
/// gate so that retyping the same text is admitted again.
pub struct QueryGate {
    min_len: usize,
    min_interval: Duration,
    last_query: Option<String>,
    last_admitted: Option<Instant>,
}

impl QueryGate {
    /// Returns a new QueryGate
    ///
    /// # Arguments
    ///
    /// * 'min_len' - minimum query length before any lookup is made
    /// * 'min_interval' - minimum time between two admitted lookups
    pub fn new(min_len: usize, min_interval: Duration) -> QueryGate {
        QueryGate {
            min_len,
            min_interval,
            last_query: None,
            last_admitted: None,
        }
    }

    /// Decides what to do with a changed query
    ///
    /// # Arguments
    ///
    /// * 'query' - the current content of the search input
    /// * 'now' - the time of the change
    pub fn decide(&mut self, query: &str, now: Instant) -> QueryDecision {
        if query.chars().count() < self.min_len {
            self.last_query = None;
            return QueryDecision::Clear;
        }

        if self.last_query.as_deref() == Some(query) {
            return QueryDecision::Skip;
        }

        if self
            .last_admitted
            .is_some_and(|t| now.duration_since(t) < self.min_interval)
        {
            return QueryDecision::Skip;
        }

        self.last_query = Some(query.to_string());
        self.last_admitted = Some(now);

        QueryDecision::Admit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> QueryGate {
        QueryGate::new(3, Duration::from_millis(300))
    }

    #[test]
    fn test_short_query_clears() {
        let mut gate = gate();
        assert_eq!(gate.decide("lo", Instant::now()), QueryDecision::Clear);
    }

    #[test]
    fn test_first_long_query_is_admitted() {
        let mut gate = gate();
        assert_eq!(gate.decide("lon", Instant::now()), QueryDecision::Admit);
    }

    #[test]
    fn test_repeated_query_is_skipped() {
        let mut gate = gate();
        let now = Instant::now();
        assert_eq!(gate.decide("london", now), QueryDecision::Admit);
        assert_eq!(
            gate.decide("london", now + Duration::from_secs(1)),
            QueryDecision::Skip
        );
    }

    #[test]
    fn test_query_within_interval_is_skipped() {
        let mut gate = gate();
        let now = Instant::now();
        assert_eq!(gate.decide("lon", now), QueryDecision::Admit);
        assert_eq!(
            gate.decide("lond", now + Duration::from_millis(100)),
            QueryDecision::Skip
        );
        assert_eq!(
            gate.decide("lond", now + Duration::from_millis(400)),
            QueryDecision::Admit
        );
    }

    #[test]
    fn test_clearing_resets_the_gate() {
        let mut gate = gate();
        let now = Instant::now();
        assert_eq!(gate.decide("lon", now), QueryDecision::Admit);
        assert_eq!(gate.decide("lo", now + Duration::from_secs(1)), QueryDecision::Clear);
        assert_eq!(
            gate.decide("lon", now + Duration::from_secs(2)),
            QueryDecision::Admit
        );
    }
}
