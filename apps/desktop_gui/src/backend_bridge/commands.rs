//! Backend commands queued from UI to backend worker.

use directory_core::RosterLocation;

pub enum BackendCommand {
    FetchRoster { location: RosterLocation },
    FetchPhoto { url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchRoster { .. } => "fetch_roster",
            BackendCommand::FetchPhoto { .. } => "fetch_photo",
        }
    }
}
