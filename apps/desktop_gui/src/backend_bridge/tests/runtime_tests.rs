use super::*;

use std::sync::Mutex;

use async_trait::async_trait;
use shared::{
    domain::{ComplaintForm, Language},
    protocol::{
        ClassifyResponse, ComplaintDraftResponse, DocumentIndexResponse, DocumentUploadResponse,
        HealthResponse, IndexStatusResponse, QueryResponse,
    },
};
use tempfile::TempDir;

#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<String>>,
    fail_pdf: bool,
}

impl FakeBackend {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls").push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls").clone()
    }
}

#[async_trait]
impl LegalBackend for FakeBackend {
    async fn ask(
        &self,
        question: &str,
        language: Option<Language>,
    ) -> Result<QueryResponse, TransportError> {
        self.record(format!("ask:{question}:{language:?}"));
        Ok(QueryResponse {
            answer: format!("answer to {question}"),
            sources: Vec::new(),
            category: Some("Civil".to_string()),
            detected_language: Some("en".to_string()),
        })
    }

    async fn classify(&self, description: &str) -> Result<ClassifyResponse, TransportError> {
        self.record(format!("classify:{description}"));
        Ok(ClassifyResponse {
            category: "Consumer".to_string(),
            confidence: None,
            explanation: "defective goods".to_string(),
            detected_language: None,
        })
    }

    async fn draft_complaint(
        &self,
        form: &ComplaintForm,
        language: Language,
    ) -> Result<ComplaintDraftResponse, TransportError> {
        self.record(format!("draft:{}:{}", form.complainant_name, language.code()));
        Ok(ComplaintDraftResponse {
            draft_text: "Dear Sir...".to_string(),
            language: Some(language.code().to_string()),
        })
    }

    async fn complaint_pdf(
        &self,
        form: &ComplaintForm,
        _language: Language,
    ) -> Result<Vec<u8>, TransportError> {
        self.record(format!("pdf:{}", form.complainant_name));
        if self.fail_pdf {
            return Err(TransportError::Status {
                status: 500,
                detail: None,
            });
        }
        Ok(b"%PDF-1.4 fake".to_vec())
    }

    async fn upload_document(
        &self,
        file: UploadFile,
    ) -> Result<DocumentUploadResponse, TransportError> {
        self.record(format!("upload:{}:{}", file.filename, file.bytes.len()));
        Ok(DocumentUploadResponse {
            message: format!("Uploaded {}", file.filename),
            filename: Some(file.filename),
            chunks_created: 4,
        })
    }

    async fn index_all(&self) -> Result<DocumentIndexResponse, TransportError> {
        self.record("index_all");
        Ok(DocumentIndexResponse {
            message: "done".to_string(),
            documents_processed: 2,
            total_chunks: 8,
        })
    }

    async fn index_status(&self) -> Result<IndexStatusResponse, TransportError> {
        self.record("status");
        Err(TransportError::Network("backend starting".to_string()))
    }

    async fn health(&self) -> Result<HealthResponse, TransportError> {
        self.record("health");
        Ok(HealthResponse {
            status: Some("healthy".to_string()),
            ..HealthResponse::default()
        })
    }
}

fn form(name: &str) -> ComplaintForm {
    ComplaintForm {
        complainant_name: name.to_string(),
        complainant_address: "Madurai".to_string(),
        opponent_name: "XYZ Builders".to_string(),
        issue_description: "Possession delayed".to_string(),
        location: "Madurai".to_string(),
        date: "2024-02-10".to_string(),
    }
}

#[tokio::test]
async fn ask_is_forwarded_without_language() {
    let backend = FakeBackend::default();
    let dir = TempDir::new().expect("temp dir");

    let event = execute(
        &backend,
        BackendCommand::Ask {
            question: "What is Section 498A of IPC?".to_string(),
            language: None,
        },
        dir.path(),
    )
    .await;

    match event {
        UiEvent::Answered(Ok(response)) => {
            assert_eq!(response.answer, "answer to What is Section 498A of IPC?")
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(backend.calls(), vec!["ask:What is Section 498A of IPC?:None"]);
}

#[tokio::test]
async fn pdf_is_written_under_complainant_name() {
    let backend = FakeBackend::default();
    let dir = TempDir::new().expect("temp dir");

    let event = execute(
        &backend,
        BackendCommand::DownloadComplaintPdf {
            form: form("Meena Devi"),
            language: Language::Ta,
        },
        dir.path(),
    )
    .await;

    let path = match event {
        UiEvent::PdfSaved(Ok(path)) => path,
        other => panic!("unexpected event: {other:?}"),
    };
    assert_eq!(path, dir.path().join("complaint_Meena_Devi.pdf"));
    let written = tokio::fs::read(&path).await.expect("pdf on disk");
    assert_eq!(written, b"%PDF-1.4 fake");
}

#[tokio::test]
async fn pdf_stays_in_download_dir_when_name_has_separators() {
    let backend = FakeBackend::default();
    let root = TempDir::new().expect("temp dir");
    let dir = root.path().join("downloads");

    let event = execute(
        &backend,
        BackendCommand::DownloadComplaintPdf {
            form: form("Ravi S/O Kumar"),
            language: Language::En,
        },
        &dir,
    )
    .await;

    let path = match event {
        UiEvent::PdfSaved(Ok(path)) => path,
        other => panic!("unexpected event: {other:?}"),
    };
    assert_eq!(path, dir.join("complaint_Ravi_S_O_Kumar.pdf"));
    assert_eq!(path.parent(), Some(dir.as_path()));
    assert!(!dir.join("complaint_Ravi_S").exists());
    let entries = std::fs::read_dir(&dir).expect("download dir").count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn pdf_failure_writes_nothing() {
    let backend = FakeBackend {
        fail_pdf: true,
        ..FakeBackend::default()
    };
    let dir = TempDir::new().expect("temp dir");

    let event = execute(
        &backend,
        BackendCommand::DownloadComplaintPdf {
            form: form("Meena Devi"),
            language: Language::En,
        },
        dir.path(),
    )
    .await;

    assert!(matches!(event, UiEvent::PdfSaved(Err(TransportError::Status { status: 500, .. }))));
    assert!(!dir.path().join("complaint_Meena_Devi.pdf").exists());
}

#[tokio::test]
async fn upload_reads_file_from_disk() {
    let backend = FakeBackend::default();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rent_act.txt");
    tokio::fs::write(&path, b"Tenancy Act text").await.expect("fixture");

    let event = execute(&backend, BackendCommand::UploadDocument { path }, dir.path()).await;

    match event {
        UiEvent::DocumentUploaded(Ok(response)) => assert_eq!(response.chunks_created, 4),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(backend.calls(), vec!["upload:rent_act.txt:16"]);
}

#[tokio::test]
async fn missing_upload_file_fails_locally() {
    let backend = FakeBackend::default();
    let dir = TempDir::new().expect("temp dir");

    let event = execute(
        &backend,
        BackendCommand::UploadDocument {
            path: dir.path().join("missing.pdf"),
        },
        dir.path(),
    )
    .await;

    assert!(matches!(event, UiEvent::DocumentUploaded(Err(TransportError::Io(_)))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn remaining_commands_map_to_their_events() {
    let backend = FakeBackend::default();
    let dir = TempDir::new().expect("temp dir");

    let classified = execute(
        &backend,
        BackendCommand::Classify {
            description: "broken phone".to_string(),
        },
        dir.path(),
    )
    .await;
    assert!(matches!(classified, UiEvent::Classified(Ok(_))));

    let drafted = execute(
        &backend,
        BackendCommand::DraftComplaint {
            form: form("Ravi"),
            language: Language::Ta,
        },
        dir.path(),
    )
    .await;
    assert!(matches!(drafted, UiEvent::DraftGenerated(Ok(_))));

    let indexed = execute(&backend, BackendCommand::IndexAllDocuments, dir.path()).await;
    assert!(matches!(indexed, UiEvent::DocumentsIndexed(Ok(_))));

    let status = execute(&backend, BackendCommand::RefreshIndexStatus, dir.path()).await;
    assert!(matches!(status, UiEvent::IndexStatusLoaded(Err(_))));

    let health = execute(&backend, BackendCommand::CheckHealth, dir.path()).await;
    assert!(matches!(health, UiEvent::HealthChecked(Ok(ref h)) if h.is_healthy()));

    assert_eq!(
        backend.calls(),
        vec![
            "classify:broken phone",
            "draft:Ravi:ta",
            "index_all",
            "status",
            "health"
        ]
    );
}
