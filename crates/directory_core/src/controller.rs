//! Page controller: owns the roster, the displayed subset and the page query.

use shared::domain::{ConsultationMode, Doctor, SortKey};
use tracing::{debug, error, info};
use url::Url;

use crate::{
    error::DirectoryError,
    filter_panel::{apply_selection, FilterPanel, FilterUpdate, Selection},
    query::{self, QueryParams, QueryPatch},
    search::{search, SearchFilter, SearchUpdate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No roster yet.
    Loading,
    /// Roster present (empty after a failed fetch).
    Ready,
}

pub struct PageController {
    state: PageState,
    fetch_requested: bool,
    load_failed: bool,
    roster: Vec<Doctor>,
    filtered: Vec<Doctor>,
    query: QueryParams,
    search: SearchFilter,
    panel: FilterPanel,
}

impl PageController {
    pub fn new(query: QueryParams) -> Self {
        let search = SearchFilter::new(query.get(query::SEARCH).unwrap_or_default());
        let panel = FilterPanel::from_params(&query);
        Self {
            state: PageState::Loading,
            fetch_requested: false,
            load_failed: false,
            roster: Vec::new(),
            filtered: Vec::new(),
            query,
            search,
            panel,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn roster(&self) -> &[Doctor] {
        &self.roster
    }

    pub fn filtered(&self) -> &[Doctor] {
        &self.filtered
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn search_text(&self) -> &str {
        self.search.query()
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    /// Shareable link: `base` with the current query.
    pub fn page_url(&self, base: &Url) -> Url {
        self.query.apply_to_url(base)
    }

    /// True the first time only; the roster is fetched once per page.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_requested {
            return false;
        }
        self.fetch_requested = true;
        true
    }

    /// Stores the roster and derives the first view from the page query.
    pub fn roster_loaded(&mut self, roster: Vec<Doctor>) {
        info!(doctors = roster.len(), "roster ready");
        self.roster = roster;
        self.state = PageState::Ready;
        self.filtered = initial_view(&self.roster, &self.query);

        // The panel recomputes on the new roster. Its result ignores the
        // search text, so only its parameters are taken here.
        if let Some(update) = self.panel.set_roster(self.roster.clone()) {
            let patch = mirror_panel_filters(update.filters);
            self.query.patch(&patch);
        }
    }

    pub fn roster_failed(&mut self, err: &DirectoryError) {
        error!(error = %err, "error fetching doctors");
        self.load_failed = true;
        self.state = PageState::Ready;
    }

    pub fn search_input(&mut self, text: &str) {
        let SearchUpdate { results, query } = self.search.input(&self.roster, text);
        let patch = if query.is_empty() {
            QueryPatch::new().remove(query::SEARCH)
        } else {
            QueryPatch::new().scalar(query::SEARCH, query)
        };
        self.apply_update(results, &patch);
    }

    pub fn select_mode(&mut self, mode: Option<ConsultationMode>) -> bool {
        let update = self.panel.set_mode(mode);
        self.apply_panel_update(update)
    }

    pub fn toggle_specialty(&mut self, specialty: &str) -> bool {
        let update = self.panel.toggle_specialty(specialty);
        self.apply_panel_update(update)
    }

    pub fn select_sort(&mut self, sort: Option<SortKey>) -> bool {
        let update = self.panel.set_sort(sort);
        self.apply_panel_update(update)
    }

    /// Replaces the displayed subset wholesale and merges `patch` into the
    /// page query.
    pub fn apply_update(&mut self, results: Vec<Doctor>, patch: &QueryPatch) {
        debug!(results = results.len(), patch = ?patch, "applying filter update");
        self.filtered = results;
        self.query.patch(patch);
    }

    fn apply_panel_update(&mut self, update: Option<FilterUpdate>) -> bool {
        match update {
            Some(FilterUpdate { results, filters }) => {
                let patch = mirror_panel_filters(filters);
                self.apply_update(results, &patch);
                true
            }
            None => false,
        }
    }
}

/// Clears every panel-owned parameter before applying the active ones, so a
/// deselected filter drops out of the page query.
fn mirror_panel_filters(active: QueryPatch) -> QueryPatch {
    QueryPatch::new()
        .remove(query::MODE)
        .remove(query::SPECIALTIES)
        .remove(query::SORT)
        .merge(active)
}

/// The view a shared link reproduces: name search, then mode and specialty
/// filters, then sort.
pub fn initial_view(roster: &[Doctor], params: &QueryParams) -> Vec<Doctor> {
    let matched = search(roster, params.get(query::SEARCH).unwrap_or_default());
    apply_selection(&matched, &Selection::from_params(params))
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
