//! Complaint drafting and PDF export. Both actions share one form buffer but
//! keep separate in-flight guards.

use std::path::{Path, PathBuf};

use client_core::TransportError;
use shared::{
    domain::{ComplaintForm, Language},
    protocol::ComplaintDraftResponse,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::lifecycle::RequestState;

#[derive(Debug, Default)]
pub struct ComplaintController {
    pub form: ComplaintForm,
    draft: Option<String>,
    draft_state: RequestState,
    pdf_state: RequestState,
    error: Option<String>,
    saved_pdf: Option<PathBuf>,
}

impl ComplaintController {
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn saved_pdf(&self) -> Option<&Path> {
        self.saved_pdf.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.draft_state.is_pending()
    }

    pub fn is_downloading(&self) -> bool {
        self.pdf_state.is_pending()
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating() && self.form.is_submittable()
    }

    /// PDF export is offered once a draft has been generated.
    pub fn pdf_available(&self) -> bool {
        self.draft.is_some()
    }

    pub fn can_download(&self) -> bool {
        self.pdf_available() && !self.is_downloading() && self.form.is_submittable()
    }

    pub fn generate_draft(&mut self, language: Language) -> Option<BackendCommand> {
        if let Err(err) = self.form.validate() {
            tracing::debug!("draft refused: {err}");
            return None;
        }
        if !self.draft_state.try_begin() {
            tracing::debug!("draft ignored: generation already in flight");
            return None;
        }
        self.error = None;
        Some(BackendCommand::DraftComplaint {
            form: self.form.clone(),
            language,
        })
    }

    pub fn download_pdf(&mut self, language: Language) -> Option<BackendCommand> {
        if let Err(err) = self.form.validate() {
            tracing::debug!("pdf refused: {err}");
            return None;
        }
        if !self.pdf_state.try_begin() {
            tracing::debug!("pdf ignored: download already in flight");
            return None;
        }
        self.error = None;
        Some(BackendCommand::DownloadComplaintPdf {
            form: self.form.clone(),
            language,
        })
    }

    /// A failed generation keeps whatever draft was shown before.
    pub fn apply_draft(
        &mut self,
        result: Result<ComplaintDraftResponse, TransportError>,
        language: Language,
    ) {
        if !self.draft_state.is_pending() {
            tracing::warn!("draft received with no generation in flight; dropped");
            return;
        }
        self.draft_state.finish(&result);

        match result {
            Ok(response) => self.draft = Some(response.draft_text),
            Err(err) => {
                tracing::warn!(category = ?err.category(), "complaint draft failed: {err}");
                self.error = Some(
                    language
                        .pick(
                            "Error generating complaint. Please try again.",
                            "புகார் உருவாக்குவதில் பிழை. மீண்டும் முயற்சிக்கவும்.",
                        )
                        .to_string(),
                );
            }
        }
    }

    pub fn apply_pdf(&mut self, result: Result<PathBuf, TransportError>, language: Language) {
        if !self.pdf_state.is_pending() {
            tracing::warn!("pdf received with no download in flight; dropped");
            return;
        }
        self.pdf_state.finish(&result);

        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "complaint pdf saved");
                self.saved_pdf = Some(path);
            }
            Err(err) => {
                tracing::warn!(category = ?err.category(), "complaint pdf failed: {err}");
                self.error = Some(
                    language
                        .pick("Error downloading PDF.", "PDF பதிவிறக்கத்தில் பிழை.")
                        .to_string(),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/complaint_tests.rs"]
mod tests;
