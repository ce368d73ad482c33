//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOutcome {
    Queued,
    Full,
    Disconnected,
}

/// Offers a command to the backend without blocking the UI thread.
pub fn try_queue_command(cmd_tx: &Sender<BackendCommand>, cmd: BackendCommand) -> QueueOutcome {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            QueueOutcome::Queued
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            QueueOutcome::Full
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            QueueOutcome::Disconnected
        }
    }
}

/// Queues a user-facing command, reporting a failure in the status line.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    match try_queue_command(cmd_tx, cmd) {
        QueueOutcome::Queued => true,
        QueueOutcome::Full => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        QueueOutcome::Disconnected => {
            *status = "Backend worker stopped; restart the app".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn photo(url: &str) -> BackendCommand {
        BackendCommand::FetchPhoto {
            url: url.to_string(),
        }
    }

    #[test]
    fn queues_command_without_touching_status() {
        let (tx, rx) = bounded(1);
        let mut status = "Loading doctors".to_string();
        assert!(dispatch_backend_command(
            &tx,
            photo("http://127.0.0.1/a.jpg"),
            &mut status
        ));
        assert_eq!(status, "Loading doctors");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchPhoto { .. })));
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();

        assert!(dispatch_backend_command(&tx, photo("a"), &mut status));
        assert!(!dispatch_backend_command(&tx, photo("b"), &mut status));
        assert!(status.contains("full"));

        drop(rx);
        assert!(!dispatch_backend_command(&tx, photo("c"), &mut status));
        assert!(status.contains("stopped"));
    }

    #[test]
    fn try_queue_reports_outcome() {
        let (tx, rx) = bounded(1);
        assert_eq!(try_queue_command(&tx, photo("a")), QueueOutcome::Queued);
        assert_eq!(try_queue_command(&tx, photo("b")), QueueOutcome::Full);
        drop(rx);
        assert_eq!(try_queue_command(&tx, photo("c")), QueueOutcome::Disconnected);
    }
}
