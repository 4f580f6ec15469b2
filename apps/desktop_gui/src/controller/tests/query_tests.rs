use super::*;
use shared::domain::Role;
use shared::protocol::SourceChunk;

fn ipc_answer() -> QueryResponse {
    QueryResponse {
        answer: "Section 498A deals with cruelty by husband or relatives.".to_string(),
        sources: vec![SourceChunk {
            text: "Whoever, being the husband...".to_string(),
            source: Some("IPC".to_string()),
            score: Some(0.91),
        }],
        category: Some("Criminal".to_string()),
        detected_language: Some("en".to_string()),
    }
}

#[test]
fn submit_appends_user_turn_and_sends_without_language() {
    let mut query = QueryController::default();
    query.input = "  What is Section 498A of IPC?  ".to_string();

    let cmd = query.submit_input().expect("command");

    assert_eq!(
        cmd,
        BackendCommand::Ask {
            question: "What is Section 498A of IPC?".to_string(),
            language: None,
        }
    );
    assert_eq!(query.transcript().len(), 1);
    assert_eq!(query.transcript()[0].role, Role::User);
    assert_eq!(query.transcript()[0].content, "What is Section 498A of IPC?");
    assert!(query.input.is_empty());
    assert!(query.is_sending());
    assert!(!query.shows_samples());
}

#[test]
fn answer_is_appended_with_category_and_citation() {
    let mut query = QueryController::default();
    query.submit("What is Section 498A of IPC?").expect("command");

    query.apply_answer(Ok(ipc_answer()), Language::En);

    assert_eq!(query.state(), RequestState::Succeeded);
    let turns = query.transcript();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].category.as_deref(), Some("Criminal"));
    assert_eq!(turns[1].sources.len(), 1);
    assert_eq!(turns[1].sources[0].source_label, "IPC");
}

#[test]
fn blank_question_is_ignored() {
    let mut query = QueryController::default();
    query.input = "   ".to_string();
    assert!(query.submit_input().is_none());
    assert!(query.transcript().is_empty());
    assert_eq!(query.state(), RequestState::Idle);
}

#[test]
fn second_question_while_pending_is_a_no_op() {
    let mut query = QueryController::default();
    query.submit("first").expect("command");
    query.input = "second".to_string();

    assert!(query.submit_input().is_none());
    assert_eq!(query.transcript().len(), 1);
    assert_eq!(query.input, "second");
}

#[test]
fn failure_appends_apology_in_active_language() {
    let mut query = QueryController::default();
    query.submit("கேள்வி").expect("command");

    query.apply_answer(Err(TransportError::Timeout), Language::Ta);

    assert_eq!(query.state(), RequestState::Failed);
    let last = query.transcript().last().expect("turn");
    assert_eq!(last, &ConversationTurn::apology(Language::Ta));
    assert!(last.sources.is_empty());
    assert!(last.category.is_none());
    assert!(query.submit("again").is_some());
}

#[test]
fn stray_answer_without_pending_question_is_dropped() {
    let mut query = QueryController::default();
    query.apply_answer(Ok(ipc_answer()), Language::En);
    assert!(query.transcript().is_empty());
}

#[test]
fn sample_question_is_submitted_verbatim() {
    let mut query = QueryController::default();
    let sample = sample_questions(Language::En)[2];

    let cmd = query.submit(sample).expect("command");

    assert!(matches!(cmd, BackendCommand::Ask { ref question, .. } if question == sample));
    assert_eq!(sample_questions(Language::En).len(), 5);
    assert_eq!(sample_questions(Language::Ta).len(), 3);
}

#[test]
fn scroll_request_is_raised_once_per_change() {
    let mut query = QueryController::default();
    assert!(!query.take_scroll_request());
    query.submit("q").expect("command");
    assert!(query.take_scroll_request());
    assert!(!query.take_scroll_request());
    query.apply_answer(Err(TransportError::Timeout), Language::En);
    assert!(query.take_scroll_request());
}
