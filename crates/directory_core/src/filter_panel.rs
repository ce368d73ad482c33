//! Consultation mode, specialty, and sort selection over the roster.

use std::{cmp::Ordering, collections::BTreeSet};

use shared::domain::{ConsultationMode, Doctor, SortKey};

use crate::query::{self, QueryParams, QueryPatch};

/// The panel's current choices. `None` and empty mean "not filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub mode: Option<ConsultationMode>,
    /// Required specialties in the order they were picked.
    pub specialties: Vec<String>,
    pub sort: Option<SortKey>,
}

impl Selection {
    /// Reads `mode`, `specialties` and `sort` from the page query. Unknown
    /// mode or sort values are ignored.
    pub fn from_params(params: &QueryParams) -> Self {
        let mode = params
            .get(query::MODE)
            .and_then(|raw| match ConsultationMode::from_param(raw) {
                Ok(mode) => mode,
                Err(err) => {
                    tracing::warn!(%err, "ignoring mode parameter");
                    None
                }
            });
        let sort = params
            .get(query::SORT)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| match raw.parse::<SortKey>() {
                Ok(sort) => Some(sort),
                Err(err) => {
                    tracing::warn!(%err, "ignoring sort parameter");
                    None
                }
            });

        let mut specialties = Vec::new();
        for name in params.get_list(query::SPECIALTIES) {
            if !specialties.contains(&name) {
                specialties.push(name);
            }
        }

        Self {
            mode,
            specialties,
            sort,
        }
    }

    /// Parameters for the active choices only.
    pub fn active_params(&self) -> QueryPatch {
        let mut patch = QueryPatch::new();
        if let Some(mode) = self.mode {
            patch = patch.scalar(query::MODE, mode.label());
        }
        if !self.specialties.is_empty() {
            patch = patch.list(query::SPECIALTIES, self.specialties.clone());
        }
        if let Some(sort) = self.sort {
            patch = patch.scalar(query::SORT, sort.as_param());
        }
        patch
    }

    pub fn is_default(&self) -> bool {
        self == &Selection::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterUpdate {
    pub results: Vec<Doctor>,
    /// Only the active filters; inactive ones are not mentioned.
    pub filters: QueryPatch,
}

#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    roster: Vec<Doctor>,
    specialties: Vec<String>,
    selection: Selection,
}

impl FilterPanel {
    /// Seeds the selection from the page query. The query is only read here.
    pub fn from_params(params: &QueryParams) -> Self {
        Self::with_selection(Selection::from_params(params))
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self {
            roster: Vec::new(),
            specialties: Vec::new(),
            selection,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> Option<ConsultationMode> {
        self.selection.mode
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.selection.sort
    }

    pub fn is_selected(&self, specialty: &str) -> bool {
        self.selection.specialties.iter().any(|s| s == specialty)
    }

    /// Distinct specialty names across the roster, sorted.
    pub fn available_specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn set_roster(&mut self, roster: Vec<Doctor>) -> Option<FilterUpdate> {
        self.specialties = distinct_specialties(&roster);
        self.roster = roster;
        self.recompute()
    }

    pub fn set_mode(&mut self, mode: Option<ConsultationMode>) -> Option<FilterUpdate> {
        self.selection.mode = mode;
        self.recompute()
    }

    /// Adds `specialty` if unselected, removes it otherwise.
    pub fn toggle_specialty(&mut self, specialty: &str) -> Option<FilterUpdate> {
        let selected = &mut self.selection.specialties;
        match selected.iter().position(|s| s == specialty) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(specialty.to_string()),
        }
        self.recompute()
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) -> Option<FilterUpdate> {
        self.selection.sort = sort;
        self.recompute()
    }

    /// Filters and sorts the roster. Returns `None` while the roster is empty
    /// so nothing is emitted before data has loaded.
    pub fn recompute(&self) -> Option<FilterUpdate> {
        if self.roster.is_empty() {
            return None;
        }

        let results = apply_selection(&self.roster, &self.selection);
        tracing::debug!(
            roster = self.roster.len(),
            results = results.len(),
            "filter panel recomputed"
        );
        Some(FilterUpdate {
            results,
            filters: self.selection.active_params(),
        })
    }
}

pub fn distinct_specialties(roster: &[Doctor]) -> Vec<String> {
    roster
        .iter()
        .flat_map(|doctor| doctor.speciality_names())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Mode filter, then specialty filter, then sort.
pub fn apply_selection(roster: &[Doctor], selection: &Selection) -> Vec<Doctor> {
    let mut results: Vec<Doctor> = roster
        .iter()
        .filter(|doctor| matches_mode(doctor, selection.mode))
        .filter(|doctor| has_all_specialties(doctor, &selection.specialties))
        .cloned()
        .collect();
    if let Some(sort) = selection.sort {
        sort_doctors(&mut results, sort);
    }
    results
}

pub fn matches_mode(doctor: &Doctor, mode: Option<ConsultationMode>) -> bool {
    match mode {
        Some(mode) => doctor.mode.as_deref() == Some(mode.label()),
        None => true,
    }
}

pub fn has_all_specialties(doctor: &Doctor, required: &[String]) -> bool {
    required.iter().all(|name| doctor.has_speciality(name))
}

/// Stable sort: fees ascending, experience descending. Records without a
/// numeric value tie with each other and go last either way.
pub fn sort_doctors(doctors: &mut [Doctor], sort: SortKey) {
    match sort {
        SortKey::Fees => {
            doctors.sort_by(|a, b| compare_known_first(a.fee_amount(), b.fee_amount(), false))
        }
        SortKey::Experience => doctors.sort_by(|a, b| {
            compare_known_first(a.experience_years(), b.experience_years(), true)
        }),
    }
}

fn compare_known_first(a: Option<u64>, b: Option<u64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "tests/filter_panel_tests.rs"]
mod tests;
