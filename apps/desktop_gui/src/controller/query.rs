//! Question answering over the retrieval backend.

use client_core::TransportError;
use shared::{
    domain::{ConversationTurn, Language},
    protocol::QueryResponse,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::lifecycle::RequestState;

const SAMPLE_QUESTIONS_EN: [&str; 5] = [
    "What are my rights if my landlord refuses to return my security deposit?",
    "How do I file an FIR online in Tamil Nadu?",
    "What is Section 498A of IPC?",
    "Can a consumer file a complaint for a defective product?",
    "What are the grounds for divorce under Hindu Marriage Act?",
];

const SAMPLE_QUESTIONS_TA: [&str; 3] = [
    "என் வீட்டு உரிமையாளர் என் பாதுகாப்புத் தொகையை திருப்பி தர மறுத்தால் என் உரிமைகள் என்ன?",
    "தமிழ்நாட்டில் ஆன்லைனில் FIR எப்படி பதிவு செய்வது?",
    "IPC பிரிவு 498A என்றால் என்ன?",
];

pub fn sample_questions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &SAMPLE_QUESTIONS_EN,
        Language::Ta => &SAMPLE_QUESTIONS_TA,
    }
}

#[derive(Debug, Default)]
pub struct QueryController {
    pub input: String,
    transcript: Vec<ConversationTurn>,
    state: RequestState,
    scroll_pending: bool,
}

impl QueryController {
    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state.is_pending()
    }

    /// Sample questions are offered only before the first question.
    pub fn shows_samples(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn submit_input(&mut self) -> Option<BackendCommand> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Appends the user's turn right away and returns the request to send.
    /// Blank text or a question already in flight makes this a no-op.
    pub fn submit(&mut self, text: &str) -> Option<BackendCommand> {
        let question = text.trim();
        if question.is_empty() {
            return None;
        }
        if !self.state.try_begin() {
            tracing::debug!("question ignored: previous question still in flight");
            return None;
        }

        self.transcript.push(ConversationTurn::user(question));
        self.input.clear();
        self.scroll_pending = true;
        Some(BackendCommand::Ask {
            question: question.to_string(),
            language: None,
        })
    }

    pub fn apply_answer(
        &mut self,
        result: Result<QueryResponse, TransportError>,
        language: Language,
    ) {
        if !self.state.is_pending() {
            tracing::warn!("answer received with no question in flight; dropped");
            return;
        }
        self.state.finish(&result);

        let turn = match result {
            Ok(response) => ConversationTurn::from(response),
            Err(err) => {
                tracing::warn!(category = ?err.category(), "question failed: {err}");
                ConversationTurn::apology(language)
            }
        };
        self.transcript.push(turn);
        self.scroll_pending = true;
    }

    /// Returns `true` once after every transcript change.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
