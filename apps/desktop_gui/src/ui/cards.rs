//! Doctor cards for the central list.

use std::collections::HashMap;

use directory_core::render::{CardView, ListView, EMPTY_LIST_MESSAGE};
use eframe::egui;
use shared::domain::Doctor;

use crate::ui::app::PhotoState;

const PHOTO_SIZE: f32 = 72.0;

pub(crate) fn show_list(ui: &mut egui::Ui, doctors: &[Doctor], photos: &HashMap<String, PhotoState>) {
    match ListView::from_doctors(doctors) {
        ListView::Empty => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| ui.label(EMPTY_LIST_MESSAGE));
        }
        ListView::Cards(cards) => {
            for card in &cards {
                show_card(ui, card, photos.get(&card.photo));
                ui.add_space(8.0);
            }
        }
    }
}

fn show_card(ui: &mut egui::Ui, card: &CardView, photo: Option<&PhotoState>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                show_photo(ui, photo);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&card.name).strong().size(16.0));
                    ui.label(&card.specialties);
                    ui.label(&card.experience);
                    if let Some(clinic) = &card.clinic {
                        ui.label(&clinic.name);
                        if let Some(locality) = &clinic.locality {
                            ui.weak(locality);
                        }
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&card.fees).strong());
                        // Booking is not wired to anything.
                        let _ = ui.button("Book Appointment");
                    });
                });
            });
        });
}

fn show_photo(ui: &mut egui::Ui, photo: Option<&PhotoState>) {
    let size = egui::vec2(PHOTO_SIZE, PHOTO_SIZE);
    match photo {
        Some(PhotoState::Ready(texture)) => {
            ui.add(egui::Image::new(texture).fit_to_exact_size(size));
        }
        Some(PhotoState::Loading) => {
            ui.add_sized(size, egui::Spinner::new());
        }
        Some(PhotoState::Failed) | None => {
            ui.add_sized(size, egui::Label::new("No photo"));
        }
    }
}
