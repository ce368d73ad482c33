//! Side panel with the consultation mode, specialty and sort controls.

use directory_core::PageController;
use eframe::egui;
use shared::domain::{ConsultationMode, SortKey};

pub fn show(ui: &mut egui::Ui, page: &mut PageController) {
    ui.heading("Mode of consultation");
    let current_mode = page.panel().mode();
    for mode in ConsultationMode::ALL {
        if ui.radio(current_mode == Some(mode), mode.label()).clicked() {
            page.select_mode(Some(mode));
        }
    }
    if ui.radio(current_mode.is_none(), "All").clicked() {
        page.select_mode(None);
    }

    ui.separator();
    ui.heading("Specialities");
    let specialties = page.panel().available_specialties().to_vec();
    if specialties.is_empty() {
        ui.weak("No specialities yet");
    }
    for specialty in specialties {
        let mut checked = page.panel().is_selected(&specialty);
        if ui.checkbox(&mut checked, &specialty).changed() {
            page.toggle_specialty(&specialty);
        }
    }

    ui.separator();
    ui.heading("Sort by");
    let current_sort = page.panel().sort();
    for sort in [SortKey::Fees, SortKey::Experience] {
        if ui.radio(current_sort == Some(sort), sort.label()).clicked() {
            page.select_sort(Some(sort));
        }
    }
    if ui.radio(current_sort.is_none(), "Unsorted").clicked() {
        page.select_sort(None);
    }
}
