use serde::{Deserialize, Serialize};

/// Sentiment polarity layer of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Parse a polarity layer value. `positive`/`pos` and
    /// `negative`/`neg` are recognized; anything else is neutral.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" | "pos" => Polarity::Positive,
            "negative" | "neg" => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }

    /// Canonical lowercase label used by the layer codec.
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Polarity::from_label("pos"), Polarity::Positive);
        assert_eq!(Polarity::from_label("Negative"), Polarity::Negative);
        assert_eq!(Polarity::from_label("whatever"), Polarity::Neutral);
    }
}
