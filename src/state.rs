/// Container for the user driven dashboard state: which place the forecast
/// is shown for, whether a place change is in flight, and the latest
/// suggestion list together with the query it was produced for.
///
/// All mutation goes through the methods below. A suggestion list is only
/// stored if the query it answers is still the latest one, so a slow lookup
/// can never overwrite the result of a newer query.
pub struct DashboardState {
    place: String,
    loading: bool,
    suggestions: Vec<String>,
    pending_query: Option<String>,
}

impl DashboardState {
    /// Returns a new DashboardState for the given start place
    ///
    /// # Arguments
    ///
    /// * 'place' - the place to show a forecast for on startup
    pub fn new(place: &str) -> DashboardState {
        DashboardState {
            place: place.to_string(),
            loading: false,
            suggestions: Vec::new(),
            pending_query: None,
        }
    }

    /// Returns the currently selected place
    pub fn place(&self) -> &str {
        &self.place
    }

    /// Returns true while a place change is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current suggestion list
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Marks a place change as in flight
    pub fn begin_place_change(&mut self) {
        self.loading = true;
    }

    /// Abandons an in flight place change, leaving the place untouched
    pub fn cancel_place_change(&mut self) {
        self.loading = false;
    }

    /// Commits a new place and clears the transient search state
    ///
    /// # Arguments
    ///
    /// * 'place' - the new place
    pub fn commit_place(&mut self, place: &str) {
        self.place = place.to_string();
        self.loading = false;
        self.suggestions.clear();
        self.pending_query = None;
    }

    /// Registers the query a suggestion lookup is about to be made for
    ///
    /// # Arguments
    ///
    /// * 'query' - the query sent to the place search endpoint
    pub fn begin_suggestion_lookup(&mut self, query: &str) {
        self.pending_query = Some(query.to_string());
    }

    /// Stores a suggestion list if the query it answers is still the latest
    /// one, and returns whether it was applied
    ///
    /// # Arguments
    ///
    /// * 'query' - the query the names were produced for
    /// * 'names' - the suggested place names
    pub fn apply_suggestions(&mut self, query: &str, names: Vec<String>) -> bool {
        if self.pending_query.as_deref() == Some(query) {
            self.suggestions = names;
            true
        } else {
            false
        }
    }

    /// Clears the suggestion list and any pending query
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.pending_query = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_place_clears_search_state() {
        let mut state = DashboardState::new("Bogor");
        state.begin_place_change();
        state.begin_suggestion_lookup("lon");
        state.apply_suggestions("lon", vec!["London".to_string()]);

        state.commit_place("London");

        assert_eq!(state.place(), "London");
        assert!(!state.is_loading());
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn test_stale_suggestions_are_not_applied() {
        let mut state = DashboardState::new("Bogor");
        state.begin_suggestion_lookup("lon");
        state.begin_suggestion_lookup("lond");

        let applied = state.apply_suggestions("lon", vec!["London".to_string()]);

        assert!(!applied);
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn test_cancel_keeps_place() {
        let mut state = DashboardState::new("Bogor");
        state.begin_place_change();
        state.cancel_place_change();

        assert_eq!(state.place(), "Bogor");
        assert!(!state.is_loading());
    }
}
