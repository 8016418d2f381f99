use serde::{Deserialize, Serialize};

use crate::layer::LayerError;

/// Universal dependency layer: a 1-based head index into the owning
/// sentence and a relation label. Head 0 marks the sentence root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversalDependencyRelation {
    to: usize,
    relation: String,
}

impl UniversalDependencyRelation {
    pub fn new(to: usize, relation: impl Into<String>) -> Self {
        UniversalDependencyRelation {
            to,
            relation: relation.into(),
        }
    }

    /// Parse a `headIndex$relationLabel` layer value. A missing `$` or
    /// a non-numeric head index is a format error.
    pub fn from_value(value: &str) -> Result<Self, LayerError> {
        let at = value
            .find('$')
            .ok_or_else(|| LayerError::MalformedDependency(value.to_string()))?;
        let to = value[..at]
            .parse::<usize>()
            .map_err(|_| LayerError::InvalidHeadIndex(value.to_string()))?;
        Ok(UniversalDependencyRelation {
            to,
            relation: value[at + 1..].to_string(),
        })
    }

    /// 1-based index of the head word (0 = root).
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

impl std::fmt::Display for UniversalDependencyRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}${}", self.to, self.relation)
    }
}
