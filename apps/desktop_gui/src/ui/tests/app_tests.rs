use super::*;

use client_core::TransportError;
use crossbeam_channel::bounded;
use shared::protocol::{DocumentUploadResponse, HealthResponse, IndexStatusResponse};

fn app_with_queue(capacity: usize) -> (NeedhiApp, Receiver<BackendCommand>, Sender<UiEvent>) {
    let (cmd_tx, cmd_rx) = bounded(capacity);
    let (ui_tx, ui_rx) = bounded(capacity);
    let app = NeedhiApp::new(
        cmd_tx,
        ui_rx,
        StartupConfig {
            language: Language::En,
            api_url: "http://localhost:8000".to_string(),
        },
    );
    (app, cmd_rx, ui_tx)
}

fn drain(rx: &Receiver<BackendCommand>) -> Vec<BackendCommand> {
    rx.try_iter().collect()
}

#[test]
fn startup_checks_health_and_loads_index_status() {
    let (mut app, cmd_rx, _ui_tx) = app_with_queue(8);
    app.start();
    assert_eq!(
        drain(&cmd_rx),
        vec![BackendCommand::CheckHealth, BackendCommand::RefreshIndexStatus]
    );
}

#[test]
fn upload_success_dispatches_exactly_one_refresh() {
    let (mut app, cmd_rx, ui_tx) = app_with_queue(8);
    let upload = app
        .documents
        .upload_file(Some(PathBuf::from("ipc.pdf")))
        .expect("upload");
    app.dispatch(upload);
    assert_eq!(drain(&cmd_rx).len(), 1);

    ui_tx
        .send(UiEvent::DocumentUploaded(Ok(DocumentUploadResponse {
            message: "Uploaded ipc.pdf".to_string(),
            filename: None,
            chunks_created: 12,
        })))
        .expect("event");
    app.process_ui_events();

    assert_eq!(drain(&cmd_rx), vec![BackendCommand::RefreshIndexStatus]);

    ui_tx
        .send(UiEvent::IndexStatusLoaded(Ok(IndexStatusResponse {
            total_vectors: 12,
            documents_on_disk: vec!["ipc.pdf".to_string()],
            index_loaded: true,
            total_metadata: None,
        })))
        .expect("event");
    app.process_ui_events();

    assert!(drain(&cmd_rx).is_empty());
    assert_eq!(app.documents.status().expect("status").total_vectors, 12);
}

#[test]
fn failures_are_reported_in_language_active_at_completion() {
    let (mut app, _cmd_rx, ui_tx) = app_with_queue(8);
    let ask = app.query.submit("What is bail?").expect("ask");
    app.dispatch(ask);

    app.set_language(Language::Ta);
    ui_tx
        .send(UiEvent::Answered(Err(TransportError::Timeout)))
        .expect("event");
    app.process_ui_events();

    assert_eq!(
        app.query.transcript().last().expect("turn").content,
        "❌ பிழை ஏற்பட்டது. பின்னர் முயற்சிக்கவும்."
    );
}

#[test]
fn dead_worker_never_leaves_a_controller_pending() {
    let (mut app, cmd_rx, _ui_tx) = app_with_queue(8);
    drop(cmd_rx);

    let ask = app.query.submit("What is bail?").expect("ask");
    app.dispatch(ask);
    app.classify.description = "neighbour encroached my land".to_string();
    let classify = app.classify.classify().expect("classify");
    app.dispatch(classify);
    app.start();

    assert!(!app.anything_in_flight());
    assert_eq!(app.query.transcript().len(), 2);
    assert!(app.classify.error().is_some());
    assert_eq!(app.backend_healthy, Some(false));
    assert!(app.status.contains("disconnected"));
}

#[test]
fn health_event_updates_indicator() {
    let (mut app, _cmd_rx, ui_tx) = app_with_queue(8);
    ui_tx
        .send(UiEvent::HealthChecked(Ok(HealthResponse {
            status: Some("healthy".to_string()),
            ..HealthResponse::default()
        })))
        .expect("event");
    ui_tx
        .send(UiEvent::Info("Backend worker ready".to_string()))
        .expect("event");
    app.process_ui_events();

    assert_eq!(app.backend_healthy, Some(true));
    assert_eq!(app.status, "Backend worker ready");
}

#[test]
fn switching_language_keeps_controller_state() {
    let (mut app, _cmd_rx, _ui_tx) = app_with_queue(8);
    app.complaint.form.complainant_name = "Rajesh Kumar".to_string();
    app.active_tab = Tab::Complaint;

    app.set_language(Language::Ta);

    assert_eq!(app.language(), Language::Ta);
    assert_eq!(app.active_tab, Tab::Complaint);
    assert_eq!(app.complaint.form.complainant_name, "Rajesh Kumar");
}
