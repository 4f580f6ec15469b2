//! Completion events flowing from the backend worker back to the UI.

use std::path::PathBuf;

use client_core::TransportError;
use shared::protocol::{
    ClassifyResponse, ComplaintDraftResponse, DocumentIndexResponse, DocumentUploadResponse,
    HealthResponse, IndexStatusResponse, QueryResponse,
};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Answered(Result<QueryResponse, TransportError>),
    Classified(Result<ClassifyResponse, TransportError>),
    DraftGenerated(Result<ComplaintDraftResponse, TransportError>),
    PdfSaved(Result<PathBuf, TransportError>),
    DocumentUploaded(Result<DocumentUploadResponse, TransportError>),
    DocumentsIndexed(Result<DocumentIndexResponse, TransportError>),
    IndexStatusLoaded(Result<IndexStatusResponse, TransportError>),
    HealthChecked(Result<HealthResponse, TransportError>),
}

impl UiEvent {
    /// The completion a command resolves to when it fails with `err`.
    pub fn failure_for(cmd: &BackendCommand, err: TransportError) -> Self {
        match cmd {
            BackendCommand::Ask { .. } => UiEvent::Answered(Err(err)),
            BackendCommand::Classify { .. } => UiEvent::Classified(Err(err)),
            BackendCommand::DraftComplaint { .. } => UiEvent::DraftGenerated(Err(err)),
            BackendCommand::DownloadComplaintPdf { .. } => UiEvent::PdfSaved(Err(err)),
            BackendCommand::UploadDocument { .. } => UiEvent::DocumentUploaded(Err(err)),
            BackendCommand::IndexAllDocuments => UiEvent::DocumentsIndexed(Err(err)),
            BackendCommand::RefreshIndexStatus => UiEvent::IndexStatusLoaded(Err(err)),
            BackendCommand::CheckHealth => UiEvent::HealthChecked(Err(err)),
        }
    }
}
