//! The single point of contact with the legal-assistance backend.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    multipart::{Form, Part},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{error::BackendErrorBody, protocol::UPLOAD_FIELD_NAME};
use tracing::{debug, warn};
use url::Url;

use crate::error::TransportError;

const BINARY_ACCEPT: &str = "application/pdf, application/octet-stream";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the client-wide timeout for this call only.
    pub timeout: Option<Duration>,
    /// Return the raw body instead of decoding JSON.
    pub binary: bool,
}

impl RequestOptions {
    pub fn binary() -> Self {
        Self {
            timeout: None,
            binary: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime_type = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .to_string();
        Self {
            filename,
            mime_type,
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, TransportError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| TransportError::Io(format!("'{}' has no file name", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| TransportError::Io(format!("{}: {err}", path.display())))?;
        Ok(Self::new(filename, bytes))
    }

    fn into_form(self) -> Result<Form, TransportError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(&self.mime_type)
            .map_err(|err| TransportError::Io(format!("invalid mime type: {err}")))?;
        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Multipart(UploadFile),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Binary(Vec<u8>),
}

impl ResponseBody {
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        match self {
            ResponseBody::Json(value) => {
                serde_json::from_value(value).map_err(|err| TransportError::Decode(err.to_string()))
            }
            ResponseBody::Binary(bytes) => {
                serde_json::from_slice(&bytes)
                    .map_err(|err| TransportError::Decode(err.to_string()))
            }
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ResponseBody::Binary(bytes) => bytes,
            ResponseBody::Json(value) => value.to_string().into_bytes(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: Url,
}

impl Transport {
    pub fn new(base_url: &str, default_timeout: Duration) -> Result<Self, TransportError> {
        let base_url = normalize_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(default_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| TransportError::Network(format!("failed to build http client: {err}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| TransportError::InvalidUrl(format!("{path}: {err}")))
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ResponseBody, TransportError> {
        let url = self.endpoint(path)?;
        let started = Instant::now();

        let mut request = self.http.request(method.clone(), url);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        if options.binary {
            request = request.header(ACCEPT, BINARY_ACCEPT);
        }
        request = match body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Multipart(file)) => request.multipart(file.into_form()?),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let err = TransportError::from(err);
                let elapsed_ms = started.elapsed().as_millis() as u64;
                warn!(%method, path, elapsed_ms, error = %err, "backend request failed");
                return Err(err);
            }
        };

        let status = response.status();
        debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backend request completed"
        );

        if !status.is_success() {
            let raw = response.bytes().await.unwrap_or_default();
            let detail = BackendErrorBody::parse(&raw).and_then(|body| body.message());
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let raw = response.bytes().await?;
        if options.binary {
            return Ok(ResponseBody::Binary(raw.to_vec()));
        }
        if raw.is_empty() {
            return Ok(ResponseBody::Json(Value::Null));
        }
        serde_json::from_slice(&raw)
            .map(ResponseBody::Json)
            .map_err(|err| TransportError::Decode(err.to_string()))
    }
}

/// Parses the base url and makes sure it ends with `/` so endpoint paths
/// are appended to it rather than replacing its last segment.
fn normalize_base_url(raw: &str) -> Result<Url, TransportError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|err| TransportError::InvalidUrl(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
