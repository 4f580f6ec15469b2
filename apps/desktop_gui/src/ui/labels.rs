//! Shell-level text: product header, tab titles and the disclaimer footer.

use shared::domain::Language;

pub const APP_NAME: &str = "Needhi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chat,
    Classifier,
    Complaint,
    Upload,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Chat, Tab::Classifier, Tab::Complaint, Tab::Upload];

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Chat => "💬",
            Tab::Classifier => "🏷️",
            Tab::Complaint => "📝",
            Tab::Upload => "📄",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match self {
            Tab::Chat => language.pick("Ask Legal Question", "சட்ட கேள்வி"),
            Tab::Classifier => language.pick("Classify Issue", "வகைப்படுத்து"),
            Tab::Complaint => language.pick("Draft Complaint", "புகார் வரைவு"),
            Tab::Upload => language.pick("Upload Documents", "ஆவணங்கள்"),
        }
    }

    pub fn title(self, language: Language) -> String {
        format!("{} {}", self.icon(), self.label(language))
    }
}

pub fn subtitle(language: Language) -> &'static str {
    language.pick(
        "AI Legal Assistant — For Indian Citizens",
        "AI சட்ட உதவியாளர் — இந்திய குடிமக்களுக்கு",
    )
}

pub fn disclaimer(language: Language) -> &'static str {
    language.pick(
        "⚠️ This AI provides general legal information and is not a substitute for professional legal advice. Please consult a qualified lawyer for specific legal matters.",
        "⚠️ இந்த AI பொதுவான சட்ட தகவல்களை வழங்குகிறது, இது தொழில்முறை சட்ட ஆலோசனைக்கு மாற்றாக இல்லை. குறிப்பிட்ட சட்ட விஷயங்களுக்கு தகுதியான வழக்கறிஞரை அணுகவும்.",
    )
}

/// Caption for the language toggle button of `language`.
pub fn language_button(language: Language) -> &'static str {
    match language {
        Language::En => "EN",
        Language::Ta => "தமிழ்",
    }
}

pub fn health_caption(healthy: Option<bool>, language: Language) -> &'static str {
    match healthy {
        Some(true) => language.pick("Backend online", "சேவையகம் இயங்குகிறது"),
        Some(false) => language.pick("Backend unreachable", "சேவையகம் கிடைக்கவில்லை"),
        None => language.pick("Checking backend…", "சேவையகம் சரிபார்க்கப்படுகிறது…"),
    }
}
