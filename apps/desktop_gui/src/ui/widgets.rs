use eframe::egui;

use crate::ui::theme;

/// Rounded, filled label used for category and confidence badges.
pub fn pill(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE).strong());
        });
}

pub fn status_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.5, color);
}

pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(20.0)
            .strong()
            .color(theme::BRAND),
    );
    ui.add_space(6.0);
}

pub fn error_line(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(format!("⚠ {text}")).color(theme::ERROR));
}

/// Button that stays visible but inert while `enabled` is false.
pub fn action_button(ui: &mut egui::Ui, enabled: bool, text: &str) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).strong()).min_size(egui::vec2(140.0, 30.0)),
    )
    .clicked()
}
