use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Language;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    classify::ClassifyController, complaint::ComplaintController, documents::DocumentController,
    events::UiEvent, orchestration::dispatch_backend_command, query::QueryController,
};
use crate::ui::{
    labels::{self, Tab},
    panels, theme, widgets,
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub language: Language,
    pub api_url: String,
}

/// Application shell. Owns the language mode and the four workflow
/// controllers, which live for the whole session.
pub struct NeedhiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    language: Language,
    active_tab: Tab,
    query: QueryController,
    classify: ClassifyController,
    complaint: ComplaintController,
    documents: DocumentController,
    backend_healthy: Option<bool>,
    api_url: String,
    status: String,
}

impl NeedhiApp {
    pub fn bootstrap(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        theme::apply_visuals(&cc.egui_ctx);
        theme::install_tamil_font(&cc.egui_ctx);
        let mut app = Self::new(cmd_tx, ui_rx, startup);
        app.start();
        app
    }

    fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            language: startup.language,
            active_tab: Tab::default(),
            query: QueryController::default(),
            classify: ClassifyController::default(),
            complaint: ComplaintController::default(),
            documents: DocumentController::default(),
            backend_healthy: None,
            api_url: startup.api_url,
            status: String::new(),
        }
    }

    /// Startup health probe plus the document panel's first status fetch.
    fn start(&mut self) {
        self.dispatch(BackendCommand::CheckHealth);
        if let Some(cmd) = self.documents.mount() {
            self.dispatch(cmd);
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Only the shell writes the language mode; controllers receive it per call.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(language = language.code(), "language mode changed");
            self.language = language;
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Some(event) = dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
            self.handle_event(event);
        }
    }

    fn dispatch_all(&mut self, commands: Vec<BackendCommand>) {
        for cmd in commands {
            self.dispatch(cmd);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Routes a completion to its controller using the language active now.
    fn handle_event(&mut self, event: UiEvent) {
        let language = self.language;
        let follow_up = match event {
            UiEvent::Info(message) => {
                self.status = message;
                None
            }
            UiEvent::Answered(result) => {
                self.query.apply_answer(result, language);
                None
            }
            UiEvent::Classified(result) => {
                self.classify.apply_result(result, language);
                None
            }
            UiEvent::DraftGenerated(result) => {
                self.complaint.apply_draft(result, language);
                None
            }
            UiEvent::PdfSaved(result) => {
                self.complaint.apply_pdf(result, language);
                None
            }
            UiEvent::DocumentUploaded(result) => self.documents.apply_upload(result, language),
            UiEvent::DocumentsIndexed(result) => self.documents.apply_index(result, language),
            UiEvent::IndexStatusLoaded(result) => self.documents.apply_status(result),
            UiEvent::HealthChecked(result) => {
                let healthy = match &result {
                    Ok(health) => health.is_healthy(),
                    Err(err) => {
                        tracing::warn!(api_url = %self.api_url, "health check failed: {err}");
                        false
                    }
                };
                self.backend_healthy = Some(healthy);
                None
            }
        };

        if let Some(cmd) = follow_up {
            self.dispatch(cmd);
        }
    }

    fn dropped_paths(ctx: &egui::Context) -> Vec<PathBuf> {
        ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        })
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("needhi_header")
            .frame(
                egui::Frame::new()
                    .fill(theme::BRAND)
                    .inner_margin(egui::Margin::symmetric(14, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("⚖️ {}", labels::APP_NAME))
                            .size(22.0)
                            .strong()
                            .color(theme::BRAND_ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(labels::subtitle(self.language))
                            .color(egui::Color32::WHITE),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for language in [Language::Ta, Language::En] {
                            let selected = self.language == language;
                            let button = egui::Button::new(
                                egui::RichText::new(labels::language_button(language)).strong(),
                            )
                            .selected(selected);
                            if ui.add(button).clicked() {
                                self.set_language(language);
                            }
                        }
                        ui.add_space(12.0);

                        let dot = match self.backend_healthy {
                            Some(true) => theme::SUCCESS,
                            Some(false) => theme::ERROR,
                            None => theme::MUTED,
                        };
                        let caption = labels::health_caption(self.backend_healthy, self.language);
                        if ui
                            .small_button("⟳")
                            .on_hover_text(&self.api_url)
                            .clicked()
                        {
                            self.backend_healthy = None;
                            self.dispatch(BackendCommand::CheckHealth);
                        }
                        ui.label(egui::RichText::new(caption).color(egui::Color32::WHITE));
                        widgets::status_dot(ui, dot);
                    });
                });
            });

        egui::TopBottomPanel::top("needhi_tabs")
            .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(10, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        ui.selectable_value(&mut self.active_tab, tab, tab.title(self.language));
                    }
                });
            });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("needhi_disclaimer")
            .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(12, 6)))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(labels::disclaimer(self.language))
                        .small()
                        .color(theme::MUTED),
                );
                if !self.status.is_empty() {
                    ui.label(egui::RichText::new(&self.status).small().weak());
                }
            });
    }

    fn show_active_tab(&mut self, ctx: &egui::Context) {
        let language = self.language;
        let mut commands = Vec::new();

        if self.active_tab == Tab::Upload {
            let dropped = Self::dropped_paths(ctx);
            if !dropped.is_empty() {
                commands.extend(self.documents.accept_dropped(&dropped));
            }
        }
        let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::Chat => panels::show_query(ui, &mut self.query, language, &mut commands),
            Tab::Classifier => {
                panels::show_classify(ui, &mut self.classify, language, &mut commands)
            }
            Tab::Complaint => {
                panels::show_complaint(ui, &mut self.complaint, language, &mut commands)
            }
            Tab::Upload => panels::show_documents(
                ui,
                &mut self.documents,
                language,
                hovering_files,
                &mut commands,
            ),
        });

        self.dispatch_all(commands);
    }

    fn anything_in_flight(&self) -> bool {
        self.query.is_sending()
            || self.classify.is_classifying()
            || self.complaint.is_generating()
            || self.complaint.is_downloading()
            || self.documents.is_uploading()
            || self.documents.is_indexing()
            || self.documents.is_refreshing()
    }
}

impl eframe::App for NeedhiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_active_tab(ctx);

        if self.anything_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
