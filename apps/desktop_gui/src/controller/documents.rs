//! Document upload, re-indexing and index status.

use std::path::PathBuf;

use client_core::TransportError;
use shared::{
    domain::{IndexStatus, Language, UploadOutcome},
    protocol::{DocumentIndexResponse, DocumentUploadResponse, IndexStatusResponse},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::lifecycle::RequestState;

#[derive(Debug, Default)]
pub struct DocumentController {
    status: Option<IndexStatus>,
    upload_state: RequestState,
    index_state: RequestState,
    refresh_state: RequestState,
    refresh_queued: bool,
    outcome: Option<UploadOutcome>,
}

impl DocumentController {
    pub fn status(&self) -> Option<&IndexStatus> {
        self.status.as_ref()
    }

    pub fn outcome(&self) -> Option<&UploadOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_state.is_pending()
    }

    pub fn is_indexing(&self) -> bool {
        self.index_state.is_pending()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_state.is_pending()
    }

    /// Initial status fetch when the panel is first shown.
    pub fn mount(&mut self) -> Option<BackendCommand> {
        self.refresh_status()
    }

    /// Requests made while a refresh is in flight collapse into one more
    /// refresh, issued from [`Self::apply_status`].
    pub fn refresh_status(&mut self) -> Option<BackendCommand> {
        if !self.refresh_state.try_begin() {
            tracing::debug!("status refresh queued behind in-flight refresh");
            self.refresh_queued = true;
            return None;
        }
        Some(BackendCommand::RefreshIndexStatus)
    }

    pub fn upload_file(&mut self, path: Option<PathBuf>) -> Option<BackendCommand> {
        let path = path?;
        if !self.upload_state.try_begin() {
            tracing::debug!(path = %path.display(), "upload ignored: upload already in flight");
            return None;
        }
        self.outcome = None;
        Some(BackendCommand::UploadDocument { path })
    }

    /// Drop target entry point. Only the first dropped file is uploaded.
    pub fn accept_dropped(&mut self, paths: &[PathBuf]) -> Option<BackendCommand> {
        if paths.len() > 1 {
            tracing::debug!(ignored = paths.len() - 1, "extra dropped files ignored");
        }
        self.upload_file(paths.first().cloned())
    }

    pub fn reindex_all(&mut self) -> Option<BackendCommand> {
        if !self.index_state.try_begin() {
            tracing::debug!("reindex ignored: indexing already in flight");
            return None;
        }
        self.outcome = None;
        Some(BackendCommand::IndexAllDocuments)
    }

    /// Returns the status refresh to dispatch after a successful upload.
    pub fn apply_upload(
        &mut self,
        result: Result<DocumentUploadResponse, TransportError>,
        language: Language,
    ) -> Option<BackendCommand> {
        if !self.upload_state.is_pending() {
            tracing::warn!("upload result received with no upload in flight; dropped");
            return None;
        }
        self.upload_state.finish(&result);

        match result {
            Ok(response) => {
                self.outcome = Some(UploadOutcome::success(format!(
                    "✅ {} ({} {})",
                    response.message,
                    response.chunks_created,
                    language.pick("chunks", "பகுதிகள்"),
                )));
                self.refresh_status()
            }
            Err(err) => {
                tracing::warn!(category = ?err.category(), "upload failed: {err}");
                let fallback = language.pick("Upload failed", "பதிவேற்றம் தோல்வியடைந்தது");
                self.outcome = Some(UploadOutcome::error(format!(
                    "❌ {}",
                    err.user_message(fallback)
                )));
                None
            }
        }
    }

    pub fn apply_index(
        &mut self,
        result: Result<DocumentIndexResponse, TransportError>,
        language: Language,
    ) -> Option<BackendCommand> {
        if !self.index_state.is_pending() {
            tracing::warn!("index result received with no indexing in flight; dropped");
            return None;
        }
        self.index_state.finish(&result);

        match result {
            Ok(response) => {
                self.outcome = Some(UploadOutcome::success(format!(
                    "✅ {}: {} {}, {} {}",
                    response.message,
                    response.documents_processed,
                    language.pick("docs", "ஆவணங்கள்"),
                    response.total_chunks,
                    language.pick("chunks", "பகுதிகள்"),
                )));
                self.refresh_status()
            }
            Err(err) => {
                tracing::warn!(category = ?err.category(), "reindex failed: {err}");
                let fallback = language.pick(
                    "Indexing failed",
                    "அட்டவணைப்படுத்தல் தோல்வியடைந்தது",
                );
                self.outcome = Some(UploadOutcome::error(format!(
                    "❌ {}",
                    err.user_message(fallback)
                )));
                None
            }
        }
    }

    /// Status refresh is best effort: a failure leaves the previous status
    /// on screen. Returns the queued refresh, if one was requested meanwhile.
    pub fn apply_status(
        &mut self,
        result: Result<IndexStatusResponse, TransportError>,
    ) -> Option<BackendCommand> {
        if !self.refresh_state.is_pending() {
            tracing::warn!("status received with no refresh in flight; dropped");
            return None;
        }
        self.refresh_state.finish(&result);

        match result {
            Ok(response) => self.status = Some(response.into()),
            Err(err) => tracing::debug!("status refresh failed, keeping previous status: {err}"),
        }

        if std::mem::take(&mut self.refresh_queued) {
            self.refresh_status()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/documents_tests.rs"]
mod tests;
