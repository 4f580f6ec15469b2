use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{
    Citation, ClassificationResult, ComplaintForm, ConversationTurn, IndexStatus, Language,
};

pub const QUERY_PATH: &str = "/api/query/";
pub const CLASSIFY_PATH: &str = "/api/classify/";
pub const COMPLAINT_DRAFT_PATH: &str = "/api/complaint/draft";
pub const COMPLAINT_PDF_PATH: &str = "/api/complaint/pdf";
pub const DOCUMENT_UPLOAD_PATH: &str = "/api/documents/upload";
pub const DOCUMENT_INDEX_ALL_PATH: &str = "/api/documents/index-all";
pub const DOCUMENT_STATUS_PATH: &str = "/api/documents/status";
pub const HEALTH_PATH: &str = "/health";

/// Multipart field name the upload endpoint reads the document from.
pub const UPLOAD_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceChunk {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl From<SourceChunk> for Citation {
    fn from(value: SourceChunk) -> Self {
        Citation::new(value.source, value.text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceChunk>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub detected_language: Option<String>,
}

impl From<QueryResponse> for ConversationTurn {
    fn from(value: QueryResponse) -> Self {
        ConversationTurn::assistant(
            value.answer,
            value.sources.into_iter().map(Citation::from).collect(),
            value.category,
            value.detected_language,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub category: String,
    #[serde(default)]
    pub confidence: Option<String>,
    pub explanation: String,
    #[serde(default)]
    pub detected_language: Option<String>,
}

impl From<ClassifyResponse> for ClassificationResult {
    fn from(value: ClassifyResponse) -> Self {
        ClassificationResult {
            category: value.category,
            confidence: value.confidence,
            explanation: value.explanation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRequest {
    #[serde(flatten)]
    pub form: ComplaintForm,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintDraftResponse {
    pub draft_text: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
    pub chunks_created: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentIndexResponse {
    pub message: String,
    pub documents_processed: u64,
    pub total_chunks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStatusResponse {
    pub total_vectors: u64,
    #[serde(default)]
    pub documents_on_disk: Vec<String>,
    #[serde(default)]
    pub index_loaded: bool,
    #[serde(default)]
    pub total_metadata: Option<u64>,
}

impl From<IndexStatusResponse> for IndexStatus {
    fn from(value: IndexStatusResponse) -> Self {
        IndexStatus {
            total_vectors: value.total_vectors,
            documents_on_disk: value.documents_on_disk,
            index_loaded: value.index_loaded,
        }
    }
}

/// Health payload. Only `status` is interpreted; the rest is backend-defined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_deref(), Some("healthy") | Some("ok"))
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
