//! Worker thread executing backend commands off the UI thread.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};

use client_core::{ApiClient, ClientSettings, LegalBackend, TransportError, UploadFile};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the worker. Each command runs on its own task so a slow request
/// in one workflow never holds up another.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                fail_all(cmd_rx, ui_tx, format!("backend runtime unavailable: {err}"));
                return;
            }
        };

        let backend = match ApiClient::new(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                tracing::error!(
                    api_url = %settings.api_url,
                    error = %err,
                    "invalid backend configuration"
                );
                let _ = ui_tx.send(UiEvent::Info(format!("Backend unavailable: {err}")));
                fail_all(cmd_rx, ui_tx, err.to_string());
                return;
            }
        };
        let download_dir = Arc::new(settings.resolved_download_dir());
        tracing::info!(
            api_url = %backend.transport().base_url(),
            download_dir = %download_dir.display(),
            "backend worker ready"
        );
        let _ = ui_tx.send(UiEvent::Info("Backend worker ready".to_string()));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::info!(command = cmd.name(), "executing backend command");
                let backend = Arc::clone(&backend);
                let download_dir = Arc::clone(&download_dir);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute(backend.as_ref(), cmd, &download_dir).await;
                    if ui_tx.send(event).is_err() {
                        tracing::warn!("ui event queue closed; completion dropped");
                    }
                });
            }
            tracing::info!("command queue closed; backend worker stopping");
        });
    });
}

/// Without a usable backend every command still resolves, as a failure.
fn fail_all(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, reason: String) {
    while let Ok(cmd) = cmd_rx.recv() {
        let event = UiEvent::failure_for(&cmd, TransportError::Network(reason.clone()));
        if ui_tx.send(event).is_err() {
            return;
        }
    }
}

pub async fn execute<B>(backend: &B, cmd: BackendCommand, download_dir: &Path) -> UiEvent
where
    B: LegalBackend + ?Sized,
{
    match cmd {
        BackendCommand::Ask { question, language } => {
            UiEvent::Answered(backend.ask(&question, language).await)
        }
        BackendCommand::Classify { description } => {
            UiEvent::Classified(backend.classify(&description).await)
        }
        BackendCommand::DraftComplaint { form, language } => {
            UiEvent::DraftGenerated(backend.draft_complaint(&form, language).await)
        }
        BackendCommand::DownloadComplaintPdf { form, language } => {
            let target = download_dir.join(form.pdf_filename());
            if target.parent() != Some(download_dir) {
                return UiEvent::PdfSaved(Err(TransportError::Io(format!(
                    "{}: not a file inside {}",
                    target.display(),
                    download_dir.display()
                ))));
            }
            let saved = match backend.complaint_pdf(&form, language).await {
                Ok(bytes) => save_pdf(bytes, target).await,
                Err(err) => Err(err),
            };
            UiEvent::PdfSaved(saved)
        }
        BackendCommand::UploadDocument { path } => {
            let result = match UploadFile::from_path(&path).await {
                Ok(file) => backend.upload_document(file).await,
                Err(err) => Err(err),
            };
            UiEvent::DocumentUploaded(result)
        }
        BackendCommand::IndexAllDocuments => UiEvent::DocumentsIndexed(backend.index_all().await),
        BackendCommand::RefreshIndexStatus => {
            UiEvent::IndexStatusLoaded(backend.index_status().await)
        }
        BackendCommand::CheckHealth => UiEvent::HealthChecked(backend.health().await),
    }
}

/// Takes ownership of the body so the buffer is released once written.
async fn save_pdf(bytes: Vec<u8>, target: PathBuf) -> Result<PathBuf, TransportError> {
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| TransportError::Io(format!("{}: {err}", parent.display())))?;
    }
    tokio::fs::write(&target, &bytes)
        .await
        .map_err(|err| TransportError::Io(format!("{}: {err}", target.display())))?;
    tracing::debug!(bytes = bytes.len(), path = %target.display(), "pdf written");
    drop(bytes);
    Ok(target)
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
