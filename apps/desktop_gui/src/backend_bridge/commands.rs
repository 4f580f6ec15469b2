//! Backend commands queued from UI to backend worker.

use shared::domain::{ComplaintForm, Language};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Ask {
        question: String,
        language: Option<Language>,
    },
    Classify {
        description: String,
    },
    DraftComplaint {
        form: ComplaintForm,
        language: Language,
    },
    DownloadComplaintPdf {
        form: ComplaintForm,
        language: Language,
    },
    UploadDocument {
        path: PathBuf,
    },
    IndexAllDocuments,
    RefreshIndexStatus,
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Ask { .. } => "ask",
            BackendCommand::Classify { .. } => "classify",
            BackendCommand::DraftComplaint { .. } => "draft_complaint",
            BackendCommand::DownloadComplaintPdf { .. } => "download_complaint_pdf",
            BackendCommand::UploadDocument { .. } => "upload_document",
            BackendCommand::IndexAllDocuments => "index_all_documents",
            BackendCommand::RefreshIndexStatus => "refresh_index_status",
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
