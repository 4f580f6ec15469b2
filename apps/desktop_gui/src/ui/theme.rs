//! Colours, visuals and font setup.

use std::{path::PathBuf, sync::Arc};

use eframe::egui;

pub const TAMIL_FONT_ENV: &str = "NEEDHI_TAMIL_FONT";

const SYSTEM_TAMIL_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-tamil/Lohit-Tamil.ttf",
    "/Library/Fonts/NotoSansTamil-Regular.ttf",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\latha.ttf",
];

const TAMIL_FONT_KEY: &str = "needhi-tamil";

pub const BRAND: egui::Color32 = egui::Color32::from_rgb(26, 58, 92);
pub const BRAND_ACCENT: egui::Color32 = egui::Color32::from_rgb(212, 160, 23);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(39, 174, 96);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(192, 57, 43);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(120, 124, 134);
pub const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(225, 236, 248);
pub const ASSISTANT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(246, 246, 242);

/// Parses `#rrggbb`. Anything else renders as the neutral fallback grey.
pub fn hex_color(hex: &str) -> egui::Color32 {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return MUTED;
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => egui::Color32::from_rgb(r, g, b),
        _ => MUTED,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = BRAND;
    visuals.hyperlink_color = BRAND;
    let radius = egui::CornerRadius::same(6);
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    ctx.set_visuals(visuals);
}

fn tamil_font_candidates() -> Vec<PathBuf> {
    let configured = std::env::var(TAMIL_FONT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);
    configured
        .into_iter()
        .chain(SYSTEM_TAMIL_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// egui's bundled fonts carry no Tamil glyphs, so the first readable Tamil
/// font is appended as a fallback to every family.
pub fn install_tamil_font(ctx: &egui::Context) -> bool {
    for path in tamil_font_candidates() {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            TAMIL_FONT_KEY.to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(TAMIL_FONT_KEY.to_owned());
        }
        ctx.set_fonts(fonts);
        tracing::info!(path = %path.display(), "loaded Tamil font");
        return true;
    }
    tracing::warn!("no Tamil font found; set {TAMIL_FONT_ENV} to a .ttf path to render Tamil text");
    false
}
