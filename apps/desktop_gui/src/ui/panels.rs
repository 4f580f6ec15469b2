//! Tab bodies. Each panel renders one controller and pushes the commands
//! its widgets produced into `out`; the shell dispatches them.

use std::path::PathBuf;

use eframe::egui;
use shared::domain::{
    category_style, ConversationTurn, Language, OutcomeKind, Role, LEGAL_CATEGORIES,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    classify::ClassifyController,
    complaint::ComplaintController,
    documents::DocumentController,
    query::{sample_questions, QueryController},
};
use crate::ui::{theme, widgets};

const UPLOAD_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

pub fn show_query(
    ui: &mut egui::Ui,
    query: &mut QueryController,
    language: Language,
    out: &mut Vec<BackendCommand>,
) {
    egui::TopBottomPanel::bottom("query_input")
        .resizable(false)
        .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(4, 8)))
        .show_inside(ui, |ui| {
            let sending = query.is_sending();
            ui.horizontal(|ui| {
                let input_width = ui.available_width() - 120.0;
                let input = ui.add(
                    egui::TextEdit::singleline(&mut query.input)
                        .hint_text(language.pick(
                            "Type your legal question here...",
                            "உங்கள் சட்ட கேள்வியை இங்கே தட்டச்சு செய்யவும்...",
                        ))
                        .desired_width(input_width),
                );
                let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !sending && !query.input.trim().is_empty();
                let clicked =
                    widgets::action_button(ui, can_send, language.pick("Send ➤", "அனுப்பு ➤"));
                if entered || clicked {
                    out.extend(query.submit_input());
                    input.request_focus();
                }
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let scroll_to_latest = query.take_scroll_request();
        let mut chosen_sample = None;

        egui::ScrollArea::vertical()
            .id_salt("query_transcript")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if query.shows_samples() {
                    widgets::heading(
                        ui,
                        language.pick(
                            "Ask Your Legal Question",
                            "உங்கள் சட்ட கேள்வியை கேளுங்கள்",
                        ),
                    );
                    for sample in sample_questions(language) {
                        if ui.button(*sample).clicked() {
                            chosen_sample = Some(*sample);
                        }
                    }
                }

                for (index, turn) in query.transcript().iter().enumerate() {
                    show_turn(ui, index, turn, language);
                }

                if query.is_sending() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new(language.pick("Thinking...", "யோசிக்கிறது..."))
                                .color(theme::MUTED),
                        );
                    });
                }

                if scroll_to_latest {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });

        if let Some(sample) = chosen_sample {
            out.extend(query.submit(sample));
        }
    });
}

fn show_turn(ui: &mut egui::Ui, index: usize, turn: &ConversationTurn, language: Language) {
    let (fill, align) = match turn.role {
        Role::User => (theme::USER_BUBBLE, egui::Align::Max),
        Role::Assistant => (theme::ASSISTANT_BUBBLE, egui::Align::Min),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);

                if turn.role == Role::Assistant {
                    ui.horizontal(|ui| {
                        if let Some(category) = turn.category.as_deref() {
                            let style = category_style(category);
                            widgets::pill(
                                ui,
                                &format!("{} {category}", style.emoji),
                                theme::hex_color(style.color_hex),
                            );
                        }
                        if let Some(detected) = turn.detected_language.as_deref() {
                            ui.label(
                                egui::RichText::new(format!("🌐 {}", detected.to_uppercase()))
                                    .small()
                                    .color(theme::MUTED),
                            );
                        }
                    });
                }

                ui.label(&turn.content);

                if !turn.sources.is_empty() {
                    egui::CollapsingHeader::new(format!(
                        "📚 {} {}",
                        turn.sources.len(),
                        language.pick("Sources", "மூலங்கள்")
                    ))
                    .id_salt(("turn_sources", index))
                    .show(ui, |ui| {
                        for citation in &turn.sources {
                            ui.label(egui::RichText::new(&citation.source_label).strong());
                            ui.label(egui::RichText::new(&citation.excerpt).small());
                            ui.add_space(4.0);
                        }
                    });
                }
            });
    });
    ui.add_space(6.0);
}

pub fn show_classify(
    ui: &mut egui::Ui,
    classify: &mut ClassifyController,
    language: Language,
    out: &mut Vec<BackendCommand>,
) {
    widgets::heading(
        ui,
        language.pick("Legal Issue Classifier", "சட்ட சிக்கல் வகைப்படுத்தி"),
    );
    ui.label(language.pick(
        "Describe your legal issue",
        "உங்கள் சட்ட சிக்கலை விவரிக்கவும்",
    ));
    ui.add(
        egui::TextEdit::multiline(&mut classify.description)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    let caption = if classify.is_classifying() {
        language.pick("⏳ Analyzing...", "⏳ பகுப்பாய்வு...")
    } else {
        language.pick("🏷️ Classify Issue", "🏷️ வகைப்படுத்து")
    };
    if widgets::action_button(ui, classify.can_classify(), caption) {
        out.extend(classify.classify());
    }

    if let Some(error) = classify.error() {
        widgets::error_line(ui, error);
    }

    if let (Some(result), Some(style)) = (classify.result(), classify.result_style()) {
        ui.add_space(10.0);
        egui::Frame::NONE
            .stroke(egui::Stroke::new(1.5, theme::hex_color(style.color_hex)))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    widgets::pill(
                        ui,
                        &format!("{} {}", style.emoji, result.category),
                        theme::hex_color(style.color_hex),
                    );
                    if let Some(confidence) = result.confidence.as_deref() {
                        ui.label(
                            egui::RichText::new(format!(
                                "{}: {confidence}",
                                language.pick("Confidence", "நம்பிக்கை")
                            ))
                            .color(theme::MUTED),
                        );
                    }
                });
                ui.add_space(4.0);
                ui.label(&result.explanation);
            });
    }

    ui.add_space(14.0);
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        for style in LEGAL_CATEGORIES {
            widgets::pill(
                ui,
                &format!("{} {}", style.emoji, style.key),
                theme::hex_color(style.color_hex),
            );
        }
    });
}

fn form_field(ui: &mut egui::Ui, label: &str, value: &mut String, multiline: bool) {
    ui.label(egui::RichText::new(label).strong());
    let editor = if multiline {
        egui::TextEdit::multiline(value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(editor.desired_width(f32::INFINITY));
    ui.add_space(4.0);
}

pub fn show_complaint(
    ui: &mut egui::Ui,
    complaint: &mut ComplaintController,
    language: Language,
    out: &mut Vec<BackendCommand>,
) {
    widgets::heading(
        ui,
        language.pick("Legal Complaint Drafter", "சட்ட புகார் வரைவாளர்"),
    );

    ui.columns(2, |columns| {
        let form_ui = &mut columns[0];
        egui::ScrollArea::vertical()
            .id_salt("complaint_form")
            .show(form_ui, |ui| {
                let form = &mut complaint.form;
                form_field(
                    ui,
                    language.pick("Your Full Name", "உங்கள் முழு பெயர்"),
                    &mut form.complainant_name,
                    false,
                );
                form_field(
                    ui,
                    language.pick("Your Address", "உங்கள் முகவரி"),
                    &mut form.complainant_address,
                    false,
                );
                form_field(
                    ui,
                    language.pick("Opponent / Respondent Name", "எதிர்கட்சி பெயர்"),
                    &mut form.opponent_name,
                    false,
                );
                form_field(
                    ui,
                    language.pick("Issue Description", "சிக்கல் விவரம்"),
                    &mut form.issue_description,
                    true,
                );
                form_field(
                    ui,
                    language.pick("Incident Location", "சம்பவ இடம்"),
                    &mut form.location,
                    false,
                );
                form_field(
                    ui,
                    language.pick("Date of Incident", "சம்பவ தேதி"),
                    &mut form.date,
                    false,
                );

                ui.horizontal(|ui| {
                    let generate = if complaint.is_generating() {
                        language.pick("⏳ Generating...", "⏳ உருவாக்குகிறது...")
                    } else {
                        language.pick("📝 Generate Draft", "📝 வரைவு உருவாக்கு")
                    };
                    if widgets::action_button(ui, complaint.can_generate(), generate) {
                        out.extend(complaint.generate_draft(language));
                    }

                    if complaint.pdf_available() {
                        let download = if complaint.is_downloading() {
                            language.pick("⏳ Downloading...", "⏳ பதிவிறக்குகிறது...")
                        } else {
                            language.pick("📄 Download PDF", "📄 PDF பதிவிறக்கம்")
                        };
                        if widgets::action_button(ui, complaint.can_download(), download) {
                            out.extend(complaint.download_pdf(language));
                        }
                    }
                });

                if let Some(error) = complaint.error() {
                    widgets::error_line(ui, error);
                }
                if let Some(path) = complaint.saved_pdf() {
                    ui.label(
                        egui::RichText::new(format!(
                            "✅ {} {}",
                            language.pick("Saved to", "சேமிக்கப்பட்டது:"),
                            path.display()
                        ))
                        .color(theme::SUCCESS),
                    );
                }
            });

        let preview_ui = &mut columns[1];
        preview_ui.label(
            egui::RichText::new(language.pick("Complaint Preview", "புகார் முன்னோட்டம்"))
                .strong(),
        );
        egui::ScrollArea::vertical()
            .id_salt("complaint_preview")
            .show(preview_ui, |ui| match complaint.draft() {
                Some(draft) => {
                    let mut text = draft;
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Monospace),
                    );
                }
                None => {
                    ui.label(
                        egui::RichText::new(language.pick(
                            "Fill in the form and generate a draft to preview it here.",
                            "படிவத்தை நிரப்பி வரைவை உருவாக்கவும்.",
                        ))
                        .color(theme::MUTED),
                    );
                }
            });
    });
}

fn pick_upload_file() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().add_filter("Legal documents", &UPLOAD_EXTENSIONS);
    if let Some(dir) = dirs::document_dir().or_else(dirs::download_dir) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

pub fn show_documents(
    ui: &mut egui::Ui,
    documents: &mut DocumentController,
    language: Language,
    hovering_files: bool,
    out: &mut Vec<BackendCommand>,
) {
    widgets::heading(
        ui,
        language.pick("Upload Legal Documents", "சட்ட ஆவணங்களை பதிவேற்றம்"),
    );

    let zone_stroke = if hovering_files {
        egui::Stroke::new(2.0, theme::BRAND_ACCENT)
    } else {
        egui::Stroke::new(1.0, theme::MUTED)
    };
    egui::Frame::NONE
        .stroke(zone_stroke)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("📁").size(32.0));
                ui.label(
                    egui::RichText::new(language.pick(
                        "Drag & Drop Legal Documents Here",
                        "சட்ட ஆவணங்களை இங்கே இழுக்கவும்",
                    ))
                    .strong(),
                );
                ui.label(
                    egui::RichText::new(language.pick(
                        ".txt or .pdf files (IPC, CrPC, DV Act, Consumer Protection Act, etc.)",
                        ".txt அல்லது .pdf கோப்புகள் (IPC, CrPC, DV Act, போன்றவை)",
                    ))
                    .color(theme::MUTED),
                );
                if widgets::action_button(
                    ui,
                    !documents.is_uploading(),
                    language.pick("Browse…", "உலாவு…"),
                ) {
                    out.extend(documents.upload_file(pick_upload_file()));
                }
            });
        });

    if documents.is_uploading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(language.pick(
                "Uploading and indexing...",
                "பதிவேற்றம் மற்றும் அட்டவணைப்படுத்துதல்...",
            ));
        });
    }

    if let Some(outcome) = documents.outcome() {
        let color = match outcome.kind {
            OutcomeKind::Success => theme::SUCCESS,
            OutcomeKind::Error => theme::ERROR,
        };
        ui.label(egui::RichText::new(&outcome.message).color(color));
    }

    ui.add_space(12.0);
    let reindex = if documents.is_indexing() {
        language.pick("⏳ Indexing...", "⏳ அட்டவணைப்படுத்துகிறது...")
    } else {
        language.pick(
            "🔄 Re-index All Documents",
            "🔄 அனைத்து ஆவணங்களையும் மீண்டும் அட்டவணைப்படுத்து",
        )
    };
    if widgets::action_button(ui, !documents.is_indexing(), reindex) {
        out.extend(documents.reindex_all());
    }

    if let Some(status) = documents.status() {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "📊 {}",
                language.pick("Index Status", "குறியீட்டு நிலை")
            ))
            .strong(),
        );
        egui::Grid::new("index_status_grid")
            .num_columns(3)
            .spacing([32.0, 4.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new(status.total_vectors.to_string()).size(18.0).strong());
                ui.label(
                    egui::RichText::new(status.documents_on_disk.len().to_string())
                        .size(18.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(if status.index_loaded { "✅" } else { "❌" }).size(18.0),
                );
                ui.end_row();
                ui.label(language.pick("Vectors", "வெக்டர்கள்"));
                ui.label(language.pick("Documents", "ஆவணங்கள்"));
                ui.label(language.pick("Index Ready", "குறியீடு தயார்"));
                ui.end_row();
            });
        if !status.documents_on_disk.is_empty() {
            ui.label(
                egui::RichText::new(format!(
                    "{}: {}",
                    language.pick("Files", "கோப்புகள்"),
                    status.documents_on_disk.join(", ")
                ))
                .small()
                .color(theme::MUTED),
            );
        }
    }
}
