//! Runtime bridge between UI command queue and backend event intake.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use directory_core::source::fetch_bytes;
use reqwest::Client as HttpClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{decode_photo, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = HttpClient::new();
            tracing::debug!("backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchRoster { location } => {
                        let source = location.into_source(http.clone());
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let event = match source.fetch().await {
                                Ok(roster) => UiEvent::RosterLoaded(roster),
                                Err(err) => UiEvent::RosterFailed(err),
                            };
                            deliver(&ui_tx, event).await;
                        });
                    }
                    BackendCommand::FetchPhoto { url } => {
                        let http = http.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            deliver(&ui_tx, load_photo(&http, url).await).await;
                        });
                    }
                }
            }
            tracing::debug!("backend command queue closed");
        });
    });
}

const DELIVERY_RETRY: Duration = Duration::from_millis(25);

/// Hands an event to the UI without blocking a runtime worker. A full queue is
/// retried until the UI drains it; only a closed UI drops the event.
async fn deliver(ui_tx: &Sender<UiEvent>, mut event: UiEvent) -> bool {
    loop {
        match ui_tx.try_send(event) {
            Ok(()) => return true,
            Err(TrySendError::Full(pending)) => {
                event = pending;
                tokio::time::sleep(DELIVERY_RETRY).await;
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("ui event queue closed; dropping backend event");
                return false;
            }
        }
    }
}

async fn load_photo(http: &HttpClient, url: String) -> UiEvent {
    let decoded = match fetch_bytes(http, &url).await {
        Ok(bytes) => decode_photo(&bytes),
        Err(err) => Err(err.to_string()),
    };
    match decoded {
        Ok(image) => UiEvent::PhotoLoaded { url, image },
        Err(reason) => {
            tracing::warn!(%url, %reason, "photo unavailable");
            UiEvent::PhotoFailed { url, reason }
        }
    }
}
