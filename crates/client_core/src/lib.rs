//! HTTP client for the Needhi legal-assistance backend.

pub mod api;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{ApiClient, LegalBackend};
pub use config::{load_settings, ClientSettings};
pub use error::{ErrorCategory, TransportError};
pub use transport::{RequestBody, RequestOptions, ResponseBody, Transport, UploadFile};
