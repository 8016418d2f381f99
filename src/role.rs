use serde::{Deserialize, Serialize};

/// Role type marking a word as the predicate of its own frame.
pub const PREDICATE: &str = "PREDICATE";

/// A semantic role paired with an optional link to its governing frame.
///
/// The same shape covers both role schemes a word can carry: the
/// propbank argument layer (link = predicate id) and the framenet
/// frame-element layer (link = frame id). In the text format a role is
/// `TYPE` or `TYPE$linkId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    role_type: String,
    link_id: Option<String>,
}

impl Role {
    pub fn new(role_type: impl Into<String>, link_id: Option<String>) -> Self {
        Role {
            role_type: role_type.into(),
            link_id,
        }
    }

    /// Parse a role layer value. Everything after the first `$` is the
    /// link id.
    pub fn from_value(value: &str) -> Self {
        match value.find('$') {
            Some(at) => Role {
                role_type: value[..at].to_string(),
                link_id: Some(value[at + 1..].to_string()),
            },
            None => Role {
                role_type: value.to_string(),
                link_id: None,
            },
        }
    }

    pub fn role_type(&self) -> &str {
        &self.role_type
    }

    pub fn link_id(&self) -> Option<&str> {
        self.link_id.as_deref()
    }

    /// Whether this role marks the word as a predicate.
    pub fn is_predicate(&self) -> bool {
        self.role_type == PREDICATE
    }

    /// Same role type, linked to a different frame.
    pub fn relink(&self, link_id: impl Into<String>) -> Self {
        Role {
            role_type: self.role_type.clone(),
            link_id: Some(link_id.into()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.link_id {
            Some(id) => write!(f, "{}${}", self.role_type, id),
            None => f.write_str(&self.role_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let role = Role::from_value("ARG0$tur-01");
        assert_eq!(role.role_type(), "ARG0");
        assert_eq!(role.link_id(), Some("tur-01"));
        assert_eq!(role.to_string(), "ARG0$tur-01");

        let bare = Role::from_value("PREDICATE");
        assert!(bare.is_predicate());
        assert_eq!(bare.link_id(), None);
        assert_eq!(bare.to_string(), "PREDICATE");
    }
}
