//! Command orchestration helpers from UI actions to backend command queue.

use client_core::TransportError;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Queues `cmd` for the backend worker. When it cannot be queued the
/// command's failure event is returned so the owning controller leaves its
/// pending state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Option<UiEvent> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            None
        }
        Err(TrySendError::Full(cmd)) => {
            *status = "UI command queue is full; please retry".to_string();
            tracing::warn!(command = cmd_name, "ui->backend queue full");
            Some(UiEvent::failure_for(
                &cmd,
                TransportError::Network("command queue full".to_string()),
            ))
        }
        Err(TrySendError::Disconnected(cmd)) => {
            *status = "Backend worker disconnected; restart the app".to_string();
            tracing::error!(command = cmd_name, "backend worker disconnected");
            Some(UiEvent::failure_for(
                &cmd,
                TransportError::Network("backend worker unavailable".to_string()),
            ))
        }
    }
}
