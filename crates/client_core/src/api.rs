use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use shared::{
    domain::{ComplaintForm, Language},
    protocol::{
        ClassifyRequest, ClassifyResponse, ComplaintDraftResponse, ComplaintRequest,
        DocumentIndexResponse, DocumentUploadResponse, HealthResponse, IndexStatusResponse,
        QueryRequest, QueryResponse, CLASSIFY_PATH, COMPLAINT_DRAFT_PATH, COMPLAINT_PDF_PATH,
        DOCUMENT_INDEX_ALL_PATH, DOCUMENT_STATUS_PATH, DOCUMENT_UPLOAD_PATH, HEALTH_PATH,
        QUERY_PATH,
    },
};

use crate::{
    config::ClientSettings,
    error::TransportError,
    transport::{RequestBody, RequestOptions, ResponseBody, Transport, UploadFile},
};

/// Operations the legal-assistance backend offers to the client.
#[async_trait]
pub trait LegalBackend: Send + Sync {
    async fn ask(
        &self,
        question: &str,
        language: Option<Language>,
    ) -> Result<QueryResponse, TransportError>;
    async fn classify(&self, description: &str) -> Result<ClassifyResponse, TransportError>;
    async fn draft_complaint(
        &self,
        form: &ComplaintForm,
        language: Language,
    ) -> Result<ComplaintDraftResponse, TransportError>;
    async fn complaint_pdf(
        &self,
        form: &ComplaintForm,
        language: Language,
    ) -> Result<Vec<u8>, TransportError>;
    async fn upload_document(
        &self,
        file: UploadFile,
    ) -> Result<DocumentUploadResponse, TransportError>;
    async fn index_all(&self) -> Result<DocumentIndexResponse, TransportError>;
    async fn index_status(&self) -> Result<IndexStatusResponse, TransportError>;
    async fn health(&self) -> Result<HealthResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
    upload_timeout: Duration,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, TransportError> {
        Ok(Self {
            transport: Transport::new(&settings.api_url, settings.request_timeout())?,
            upload_timeout: settings.upload_timeout(),
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
        options: RequestOptions,
    ) -> Result<ResponseBody, TransportError> {
        let value =
            serde_json::to_value(body).map_err(|err| TransportError::Decode(err.to_string()))?;
        self.transport
            .send(Method::POST, path, Some(RequestBody::Json(value)), options)
            .await
    }
}

#[async_trait]
impl LegalBackend for ApiClient {
    async fn ask(
        &self,
        question: &str,
        language: Option<Language>,
    ) -> Result<QueryResponse, TransportError> {
        let request = QueryRequest {
            question: question.to_string(),
            language,
        };
        self.post_json(QUERY_PATH, &request, RequestOptions::default())
            .await?
            .into_json()
    }

    async fn classify(&self, description: &str) -> Result<ClassifyResponse, TransportError> {
        let request = ClassifyRequest {
            description: description.to_string(),
        };
        self.post_json(CLASSIFY_PATH, &request, RequestOptions::default())
            .await?
            .into_json()
    }

    async fn draft_complaint(
        &self,
        form: &ComplaintForm,
        language: Language,
    ) -> Result<ComplaintDraftResponse, TransportError> {
        let request = ComplaintRequest {
            form: form.clone(),
            language,
        };
        self.post_json(COMPLAINT_DRAFT_PATH, &request, RequestOptions::default())
            .await?
            .into_json()
    }

    async fn complaint_pdf(
        &self,
        form: &ComplaintForm,
        language: Language,
    ) -> Result<Vec<u8>, TransportError> {
        let request = ComplaintRequest {
            form: form.clone(),
            language,
        };
        Ok(self
            .post_json(COMPLAINT_PDF_PATH, &request, RequestOptions::binary())
            .await?
            .into_bytes())
    }

    async fn upload_document(
        &self,
        file: UploadFile,
    ) -> Result<DocumentUploadResponse, TransportError> {
        self.transport
            .send(
                Method::POST,
                DOCUMENT_UPLOAD_PATH,
                Some(RequestBody::Multipart(file)),
                RequestOptions::default().with_timeout(self.upload_timeout),
            )
            .await?
            .into_json()
    }

    async fn index_all(&self) -> Result<DocumentIndexResponse, TransportError> {
        self.transport
            .send(
                Method::POST,
                DOCUMENT_INDEX_ALL_PATH,
                None,
                RequestOptions::default(),
            )
            .await?
            .into_json()
    }

    async fn index_status(&self) -> Result<IndexStatusResponse, TransportError> {
        self.transport
            .send(Method::GET, DOCUMENT_STATUS_PATH, None, RequestOptions::default())
            .await?
            .into_json()
    }

    async fn health(&self) -> Result<HealthResponse, TransportError> {
        self.transport
            .send(Method::GET, HEALTH_PATH, None, RequestOptions::default())
            .await?
            .into_json()
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
