use std::collections::HashMap;

use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use directory_core::{
    config::Settings, query::QueryParams, DirectoryError, PageController, PageState,
    RosterLocation,
};
use eframe::egui;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_backend_command, try_queue_command, QueueOutcome};
use crate::ui::{cards, filters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Page address without a query.
    pub base_url: Url,
    /// Filters restored from the launch URL.
    pub query: QueryParams,
    pub roster: RosterLocation,
}

impl StartupConfig {
    /// A launch URL, when given, supplies both the page address and the
    /// initial filters; otherwise the configured page URL does.
    pub fn resolve(settings: &Settings, launch_url: Option<&str>) -> Result<Self, DirectoryError> {
        let page_url = match launch_url {
            Some(raw) => Url::parse(raw).map_err(|err| DirectoryError::invalid_url(raw, err))?,
            None => settings.page_url()?,
        };
        let query = QueryParams::from_url(&page_url);
        let mut base_url = page_url;
        base_url.set_query(None);

        Ok(Self {
            base_url,
            query,
            roster: settings.roster_location()?,
        })
    }
}

pub(crate) enum PhotoState {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    page: PageController,
    base_url: Url,
    roster_location: RosterLocation,

    search_input: String,
    photos: HashMap<String, PhotoState>,
    status: String,
}

impl DirectoryApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let page = PageController::new(startup.query);
        Self {
            cmd_tx,
            ui_rx,
            search_input: page.search_text().to_string(),
            page,
            base_url: startup.base_url,
            roster_location: startup.roster,
            photos: HashMap::new(),
            status: "Loading doctors...".to_string(),
        }
    }

    fn ensure_roster_requested(&mut self) {
        if self.page.begin_fetch() {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchRoster {
                    location: self.roster_location.clone(),
                },
                &mut self.status,
            );
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::RosterLoaded(roster) => {
                    self.page.roster_loaded(roster);
                    self.status = format!("{} doctors", self.page.roster().len());
                }
                UiEvent::RosterFailed(err) => {
                    self.page.roster_failed(&err);
                    self.status.clear();
                }
                UiEvent::PhotoLoaded { url, image } => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("doctor-photo:{url}"),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.photos.insert(url, PhotoState::Ready(texture));
                }
                UiEvent::PhotoFailed { url, .. } => {
                    self.photos.insert(url, PhotoState::Failed);
                }
            }
        }
    }

    fn request_visible_photos(&mut self) {
        let urls = self
            .page
            .filtered()
            .iter()
            .map(|doctor| doctor.photo.as_str());
        queue_photo_requests(&self.cmd_tx, &mut self.photos, urls);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Doctor Listing");
            ui.add_space(4.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search doctors...")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.page.search_input(&self.search_input);
            }

            let link = self.page.page_url(&self.base_url).to_string();
            ui.horizontal(|ui| {
                if ui.button("Copy link").clicked() {
                    let copied = Clipboard::new()
                        .and_then(|mut clipboard| clipboard.set_text(link.clone()));
                    match copied {
                        Ok(()) => self.status = "Link copied to clipboard".to_string(),
                        Err(err) => tracing::warn!("clipboard unavailable: {err}"),
                    }
                }
                ui.label(egui::RichText::new(&link).monospace().weak());
            });
            ui.add_space(4.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.page.state() == PageState::Loading {
                    ui.spinner();
                }
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} shown", self.page.filtered().len()));
                });
            });
        });
    }
}

/// Requests every photo not yet tracked. A photo is marked `Loading` only once
/// its command is queued; on a full queue the rest wait for a later frame.
fn queue_photo_requests<'a>(
    cmd_tx: &Sender<BackendCommand>,
    photos: &mut HashMap<String, PhotoState>,
    urls: impl IntoIterator<Item = &'a str>,
) {
    for url in urls {
        if url.is_empty() || photos.contains_key(url) {
            continue;
        }
        let cmd = BackendCommand::FetchPhoto {
            url: url.to_string(),
        };
        match try_queue_command(cmd_tx, cmd) {
            QueueOutcome::Queued => {
                photos.insert(url.to_string(), PhotoState::Loading);
            }
            QueueOutcome::Full => break,
            QueueOutcome::Disconnected => {
                photos.insert(url.to_string(), PhotoState::Failed);
            }
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_roster_requested();
        self.process_ui_events(ctx);
        self.request_visible_photos();

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);

        egui::SidePanel::left("filter_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| filters::show(ui, &mut self.page));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| cards::show_list(ui, self.page.filtered(), &self.photos));
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::path::PathBuf;

    #[test]
    fn launch_url_supplies_base_and_filters() {
        let startup = StartupConfig::resolve(
            &Settings::default(),
            Some("https://doctors.example.test/list?search=rao&sort=fees"),
        )
        .expect("resolve");

        assert_eq!(startup.base_url.as_str(), "https://doctors.example.test/list");
        assert_eq!(startup.query.get("search"), Some("rao"));
        assert_eq!(startup.query.get("sort"), Some("fees"));
    }

    #[test]
    fn configured_page_url_is_used_without_launch_url() {
        let settings = Settings {
            page_url: "http://localhost:3000/?mode=Video+Consultation".to_string(),
            roster_file: Some(PathBuf::from("roster.json")),
            ..Settings::default()
        };
        let startup = StartupConfig::resolve(&settings, None).expect("resolve");

        assert_eq!(startup.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(startup.query.get("mode"), Some("Video Consultation"));
        assert_eq!(startup.roster, RosterLocation::File(PathBuf::from("roster.json")));
    }

    #[test]
    fn invalid_launch_url_is_rejected() {
        let err = StartupConfig::resolve(&Settings::default(), Some("search=rao"))
            .expect_err("relative url");
        assert!(matches!(err, DirectoryError::InvalidUrl { .. }));
    }

    fn is_loading(photos: &HashMap<String, PhotoState>, url: &str) -> bool {
        matches!(photos.get(url), Some(PhotoState::Loading))
    }

    #[test]
    fn photos_beyond_queue_capacity_stay_untracked_for_retry() {
        let (tx, rx) = bounded(2);
        let mut photos = HashMap::new();

        queue_photo_requests(&tx, &mut photos, ["a.jpg", "", "b.jpg", "c.jpg"]);
        assert!(is_loading(&photos, "a.jpg"));
        assert!(is_loading(&photos, "b.jpg"));
        assert!(!photos.contains_key("c.jpg"));
        assert!(!photos.contains_key(""));

        rx.try_recv().expect("first command");
        queue_photo_requests(&tx, &mut photos, ["a.jpg", "b.jpg", "c.jpg"]);
        assert!(is_loading(&photos, "c.jpg"));
        assert_eq!(rx.len(), 2);
    }

    #[test]
    fn photos_fail_when_backend_is_gone() {
        let (tx, rx) = bounded(4);
        drop(rx);
        let mut photos = HashMap::new();

        queue_photo_requests(&tx, &mut photos, ["a.jpg"]);
        assert!(matches!(photos.get("a.jpg"), Some(PhotoState::Failed)));
    }
}
