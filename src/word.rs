//! One token with its annotation layers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dependency::UniversalDependencyRelation;
use crate::language::Language;
use crate::layer::{self, LayerError, LayerKey};
use crate::morphology::{MetamorphicParse, MorphologicalParse};
use crate::named_entity::NamedEntityType;
use crate::polarity::Polarity;
use crate::role::Role;

/// A single word of a sentence together with its annotation layers.
///
/// Every layer is independently optional: `None` means the layer was
/// never annotated, which is different from an annotated "empty"
/// value such as [`NamedEntityType::None`]. Unset layers round-trip
/// through the text format as absent.
///
/// Layer values must not contain the delimiter characters `[`, `{`,
/// `}`, `]` — they would corrupt the encoded form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedWord {
    name: String,
    language: Language,
    parse: Option<MorphologicalParse>,
    metamorphic_parse: Option<MetamorphicParse>,
    semantic: Option<String>,
    named_entity: Option<NamedEntityType>,
    argument: Option<Role>,
    frame_element: Option<Role>,
    slot: Option<String>,
    polarity: Option<Polarity>,
    shallow_parse: Option<String>,
    ccg: Option<String>,
    pos_tag: Option<String>,
    universal_dependency: Option<UniversalDependencyRelation>,
}

impl AnnotatedWord {
    /// A bare word with no layers set.
    pub fn new(name: impl Into<String>) -> Self {
        AnnotatedWord {
            name: name.into(),
            language: Language::default(),
            parse: None,
            metamorphic_parse: None,
            semantic: None,
            named_entity: None,
            argument: None,
            frame_element: None,
            slot: None,
            polarity: None,
            shallow_parse: None,
            ccg: None,
            pos_tag: None,
            universal_dependency: None,
        }
    }

    /// Decode a word from its layer text. Equivalent to `str::parse`.
    pub fn decode(text: &str) -> Result<Self, LayerError> {
        layer::decode(text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn parse(&self) -> Option<&MorphologicalParse> {
        self.parse.as_ref()
    }

    pub fn set_parse(&mut self, parse: Option<MorphologicalParse>) {
        self.parse = parse;
    }

    pub fn metamorphic_parse(&self) -> Option<&MetamorphicParse> {
        self.metamorphic_parse.as_ref()
    }

    pub fn set_metamorphic_parse(&mut self, parse: Option<MetamorphicParse>) {
        self.metamorphic_parse = parse;
    }

    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }

    pub fn set_semantic(&mut self, semantic: Option<String>) {
        self.semantic = semantic;
    }

    pub fn named_entity(&self) -> Option<NamedEntityType> {
        self.named_entity
    }

    pub fn set_named_entity(&mut self, named_entity: Option<NamedEntityType>) {
        self.named_entity = named_entity;
    }

    pub fn argument(&self) -> Option<&Role> {
        self.argument.as_ref()
    }

    pub fn set_argument(&mut self, argument: Option<Role>) {
        self.argument = argument;
    }

    pub fn frame_element(&self) -> Option<&Role> {
        self.frame_element.as_ref()
    }

    pub fn set_frame_element(&mut self, frame_element: Option<Role>) {
        self.frame_element = frame_element;
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn set_slot(&mut self, slot: Option<String>) {
        self.slot = slot;
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    pub fn set_polarity(&mut self, polarity: Option<Polarity>) {
        self.polarity = polarity;
    }

    pub fn shallow_parse(&self) -> Option<&str> {
        self.shallow_parse.as_deref()
    }

    pub fn set_shallow_parse(&mut self, shallow_parse: Option<String>) {
        self.shallow_parse = shallow_parse;
    }

    pub fn ccg(&self) -> Option<&str> {
        self.ccg.as_deref()
    }

    pub fn set_ccg(&mut self, ccg: Option<String>) {
        self.ccg = ccg;
    }

    pub fn pos_tag(&self) -> Option<&str> {
        self.pos_tag.as_deref()
    }

    pub fn set_pos_tag(&mut self, pos_tag: Option<String>) {
        self.pos_tag = pos_tag;
    }

    pub fn universal_dependency(&self) -> Option<&UniversalDependencyRelation> {
        self.universal_dependency.as_ref()
    }

    pub fn set_universal_dependency(
        &mut self,
        universal_dependency: Option<UniversalDependencyRelation>,
    ) {
        self.universal_dependency = universal_dependency;
    }

    /// Textual value of a layer, if that layer is set. This is what the
    /// encoder writes after `key=`.
    pub fn layer_value(&self, key: LayerKey) -> Option<String> {
        match key {
            LayerKey::MorphologicalAnalysis => self.parse.as_ref().map(|p| p.to_string()),
            LayerKey::MetaMorphemes => self.metamorphic_parse.as_ref().map(|p| p.to_string()),
            LayerKey::Semantics => self.semantic.clone(),
            LayerKey::NamedEntity => self.named_entity.map(|n| n.label().to_string()),
            LayerKey::PropBank => self.argument.as_ref().map(|r| r.to_string()),
            LayerKey::FrameNet => self.frame_element.as_ref().map(|r| r.to_string()),
            LayerKey::Slot => self.slot.clone(),
            LayerKey::Polarity => self.polarity.map(|p| p.label().to_string()),
            LayerKey::ShallowParse => self.shallow_parse.clone(),
            LayerKey::Ccg => self.ccg.clone(),
            LayerKey::PosTag => self.pos_tag.clone(),
            LayerKey::UniversalDependency => {
                self.universal_dependency.as_ref().map(|d| d.to_string())
            }
        }
    }

    /// CoNLL-U row for this word (tab separated, no index column).
    ///
    /// Parsed words emit surface form, lemma, universal POS, `_`,
    /// pipe-joined features (or `_`), head index and lowercased
    /// relation (or `_ _` when the dependency is absent or its head
    /// points past the sentence), then `_ _`. Unparsed words emit the
    /// surface form twice followed by seven placeholders, so every row
    /// has the same nine fields.
    pub fn universal_dependency_format(&self, sentence_length: usize) -> String {
        match &self.parse {
            Some(parse) => {
                let universal_pos = parse.universal_dependency_pos();
                let features = parse.universal_dependency_features(universal_pos);
                let features = if features.is_empty() {
                    "_".to_string()
                } else {
                    features.join("|")
                };
                let dependency = match &self.universal_dependency {
                    Some(dep) if dep.to() <= sentence_length => {
                        format!("{}\t{}", dep.to(), dep.relation().to_lowercase())
                    }
                    _ => "_\t_".to_string(),
                };
                format!(
                    "{}\t{}\t{}\t_\t{}\t{}\t_\t_",
                    self.name,
                    parse.lemma(),
                    universal_pos,
                    features,
                    dependency
                )
            }
            None => format!("{}\t{}\t_\t_\t_\t_\t_\t_\t_", self.name, self.name),
        }
    }
}

impl FromStr for AnnotatedWord {
    type Err = LayerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        layer::decode(text)
    }
}

impl std::fmt::Display for AnnotatedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        layer::encode(self, f)
    }
}
