use serde::{Deserialize, Serialize};

/// Language of the surface form of an annotated word.
///
/// The language doubles as the key of the surface layer in the text
/// format (`{turkish=...}`, `{english=...}`, `{persian=...}`), so every
/// word carries exactly one language. Words decoded from a bare token
/// default to Turkish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Turkish,
    English,
    Persian,
}

impl Language {
    /// Layer key used for this language's surface layer.
    pub fn key(self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
            Language::Persian => "persian",
        }
    }

    /// Parse a surface-layer key. Keys are matched case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("turkish") {
            Some(Language::Turkish)
        } else if key.eq_ignore_ascii_case("english") {
            Some(Language::English)
        } else if key.eq_ignore_ascii_case("persian") {
            Some(Language::Persian)
        } else {
            None
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Turkish
    }
}
