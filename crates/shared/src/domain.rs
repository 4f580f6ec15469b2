use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, UnknownLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ta")]
    Ta,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }

    /// Selects the variant of a bilingual string for this mode.
    pub fn pick<'a>(self, en: &'a str, ta: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ta => ta,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Language::from_code(raw).ok_or_else(|| UnknownLanguage(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

pub const UNKNOWN_SOURCE_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub source_label: String,
    pub excerpt: String,
}

impl Citation {
    pub fn new(source_label: Option<String>, excerpt: impl Into<String>) -> Self {
        let source_label = source_label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_SOURCE_LABEL.to_string());
        Self {
            source_label,
            excerpt: excerpt.into(),
        }
    }
}

/// One entry of the question/answer transcript. Turns are never edited
/// after they are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub sources: Vec<Citation>,
    pub category: Option<String>,
    pub detected_language: Option<String>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            category: None,
            detected_language: None,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        sources: Vec<Citation>,
        category: Option<String>,
        detected_language: Option<String>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
            category,
            detected_language,
        }
    }

    pub fn apology(language: Language) -> Self {
        Self::assistant(
            language.pick(
                "❌ Sorry, an error occurred. Please try again later.",
                "❌ பிழை ஏற்பட்டது. பின்னர் முயற்சிக்கவும்.",
            ),
            Vec::new(),
            None,
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    #[serde(default)]
    pub confidence: Option<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub key: &'static str,
    pub emoji: &'static str,
    pub color_hex: &'static str,
}

pub const LEGAL_CATEGORIES: [CategoryStyle; 6] = [
    CategoryStyle {
        key: "Criminal",
        emoji: "🔴",
        color_hex: "#e74c3c",
    },
    CategoryStyle {
        key: "Civil",
        emoji: "🔵",
        color_hex: "#3498db",
    },
    CategoryStyle {
        key: "Family",
        emoji: "💜",
        color_hex: "#9b59b6",
    },
    CategoryStyle {
        key: "Consumer",
        emoji: "🟢",
        color_hex: "#27ae60",
    },
    CategoryStyle {
        key: "Land",
        emoji: "🟤",
        color_hex: "#8B4513",
    },
    CategoryStyle {
        key: "Welfare",
        emoji: "🟠",
        color_hex: "#f39c12",
    },
];

pub const FALLBACK_CATEGORY_STYLE: CategoryStyle = CategoryStyle {
    key: "",
    emoji: "⚪",
    color_hex: "#888888",
};

/// Looks up the badge style for a backend category. Categories the client
/// does not know get the neutral fallback.
pub fn category_style(category: &str) -> CategoryStyle {
    LEGAL_CATEGORIES
        .iter()
        .find(|style| style.key == category)
        .copied()
        .unwrap_or(FALLBACK_CATEGORY_STYLE)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintForm {
    pub complainant_name: String,
    pub complainant_address: String,
    pub opponent_name: String,
    pub issue_description: String,
    pub location: String,
    pub date: String,
}

impl ComplaintForm {
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("complainant_name", &self.complainant_name),
            ("complainant_address", &self.complainant_address),
            ("opponent_name", &self.opponent_name),
            ("issue_description", &self.issue_description),
            ("location", &self.location),
            ("date", &self.date),
        ]
    }

    pub fn validate(&self) -> Result<(), FormError> {
        match self
            .fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((name, _)) => Err(FormError::MissingField(name)),
            None => Ok(()),
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Every run of whitespace in the complainant's name becomes one `_`.
    /// Path separators and characters no filesystem accepts become `_` too,
    /// so the result is always a bare file name.
    pub fn pdf_filename(&self) -> String {
        let mut name = String::with_capacity(self.complainant_name.len());
        let mut in_whitespace = false;
        for ch in self.complainant_name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    name.push('_');
                }
                in_whitespace = true;
            } else {
                name.push(if is_unsafe_filename_char(ch) { '_' } else { ch });
                in_whitespace = false;
            }
        }
        format!("complaint_{name}.pdf")
    }
}

fn is_unsafe_filename_char(ch: char) -> bool {
    matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || ch.is_control()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStatus {
    pub total_vectors: u64,
    pub documents_on_disk: Vec<String>,
    pub index_loaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl UploadOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
