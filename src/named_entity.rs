use serde::{Deserialize, Serialize};

/// Named entity class of a word.
///
/// `None` is an explicit annotation ("checked, not an entity") and is
/// distinct from the layer being absent altogether. The codec therefore
/// emits `{namedEntity=NONE}` whenever the layer is set, even to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedEntityType {
    None,
    Person,
    Location,
    Organization,
    Money,
    Time,
}

impl NamedEntityType {
    /// Parse a named-entity layer value, case-insensitively.
    /// Unrecognized labels map to `None`.
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "PERSON" => NamedEntityType::Person,
            "LOCATION" => NamedEntityType::Location,
            "ORGANIZATION" => NamedEntityType::Organization,
            "MONEY" => NamedEntityType::Money,
            "TIME" => NamedEntityType::Time,
            _ => NamedEntityType::None,
        }
    }

    /// Canonical uppercase label used by the layer codec.
    pub fn label(self) -> &'static str {
        match self {
            NamedEntityType::None => "NONE",
            NamedEntityType::Person => "PERSON",
            NamedEntityType::Location => "LOCATION",
            NamedEntityType::Organization => "ORGANIZATION",
            NamedEntityType::Money => "MONEY",
            NamedEntityType::Time => "TIME",
        }
    }
}

impl Default for NamedEntityType {
    fn default() -> Self {
        NamedEntityType::None
    }
}

impl std::fmt::Display for NamedEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(NamedEntityType::from_label("person"), NamedEntityType::Person);
        assert_eq!(NamedEntityType::from_label("MONEY"), NamedEntityType::Money);
        assert_eq!(NamedEntityType::from_label("gibberish"), NamedEntityType::None);
    }
}
