//! Legal issue classification.

use client_core::TransportError;
use shared::{
    domain::{category_style, CategoryStyle, ClassificationResult, Language},
    protocol::ClassifyResponse,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::lifecycle::RequestState;

#[derive(Debug, Default)]
pub struct ClassifyController {
    pub description: String,
    result: Option<ClassificationResult>,
    error: Option<String>,
    state: RequestState,
}

impl ClassifyController {
    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    /// Style for the current result; unknown categories get the neutral fallback.
    pub fn result_style(&self) -> Option<CategoryStyle> {
        self.result
            .as_ref()
            .map(|result| category_style(&result.category))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_classifying(&self) -> bool {
        self.state.is_pending()
    }

    pub fn can_classify(&self) -> bool {
        !self.is_classifying() && !self.description.trim().is_empty()
    }

    /// Previous result and error are cleared as soon as the request is dispatched.
    pub fn classify(&mut self) -> Option<BackendCommand> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        let description = description.to_string();
        if !self.state.try_begin() {
            tracing::debug!("classification ignored: request already in flight");
            return None;
        }

        self.result = None;
        self.error = None;
        Some(BackendCommand::Classify { description })
    }

    pub fn apply_result(
        &mut self,
        result: Result<ClassifyResponse, TransportError>,
        language: Language,
    ) {
        if !self.state.is_pending() {
            tracing::warn!("classification received with no request in flight; dropped");
            return;
        }
        self.state.finish(&result);

        match result {
            Ok(response) => self.result = Some(response.into()),
            Err(err) => {
                tracing::warn!(category = ?err.category(), "classification failed: {err}");
                self.error = Some(
                    language
                        .pick(
                            "Error classifying issue. Please try again.",
                            "வகைப்படுத்துவதில் பிழை. மீண்டும் முயற்சிக்கவும்.",
                        )
                        .to_string(),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
