use shared::domain::Doctor;

/// Result of one keystroke in the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUpdate {
    pub results: Vec<Doctor>,
    pub query: String,
}

/// Free-text name search over the full roster.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records the new text and filters `roster` against it. Called on every
    /// edit; there is no debouncing.
    pub fn input(&mut self, roster: &[Doctor], text: &str) -> SearchUpdate {
        self.query = text.to_string();
        let results = search(roster, text);
        tracing::debug!(query = text, matches = results.len(), "search recomputed");
        SearchUpdate {
            results,
            query: self.query.clone(),
        }
    }
}

/// Doctors whose name contains `query`, ignoring case, in roster order.
/// An empty query matches everyone.
pub fn search(roster: &[Doctor], query: &str) -> Vec<Doctor> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|doctor| name_matches(doctor, &needle))
        .cloned()
        .collect()
}

pub(crate) fn name_matches(doctor: &Doctor, lowered_query: &str) -> bool {
    lowered_query.is_empty() || doctor.name.to_lowercase().contains(lowered_query)
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
