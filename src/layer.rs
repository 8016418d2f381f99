//! The layer text codec.
//!
//! A word and its annotation layers are stored as one compact text
//! chunk: `{key=value}` segments with the surface form keyed by the
//! language (`{turkish=Ali}{namedEntity=PERSON}...`). The format is
//! order-independent on decode, tolerant of any subset of layers, and
//! forward compatible: unknown keys are skipped so that files written
//! by newer tools still load.
//!
//! Encoding is canonical: the surface layer first, then every set
//! layer in a fixed order. `decode(encode(w)) == w` holds for every
//! word state reachable through the public mutators.

use thiserror::Error;

use crate::dependency::UniversalDependencyRelation;
use crate::language::Language;
use crate::morphology::{MetamorphicParse, MorphologicalParse};
use crate::named_entity::NamedEntityType;
use crate::polarity::Polarity;
use crate::role::Role;
use crate::word::AnnotatedWord;

/// Errors surfaced while decoding a word's layer text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    /// A `universalDependency` value without the `$` separator.
    #[error("malformed universal dependency value `{0}`: missing `$` separator")]
    MalformedDependency(String),
    /// A `universalDependency` head index that is not a number.
    #[error("invalid universal dependency head index in `{0}`")]
    InvalidHeadIndex(String),
}

/// Registry of known annotation layer keys.
///
/// Keys are matched case-insensitively; the surface-form keys
/// (`turkish`, `english`, `persian`) are handled through [`Language`]
/// and not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKey {
    MorphologicalAnalysis,
    MetaMorphemes,
    Semantics,
    NamedEntity,
    PropBank,
    FrameNet,
    Slot,
    Polarity,
    ShallowParse,
    Ccg,
    PosTag,
    UniversalDependency,
}

impl LayerKey {
    /// Match a key from the text format. Unknown keys return `None`
    /// and are ignored by the decoder.
    pub fn from_key(key: &str) -> Option<Self> {
        const REGISTRY: &[(&str, LayerKey)] = &[
            ("morphologicalAnalysis", LayerKey::MorphologicalAnalysis),
            ("metaMorphemes", LayerKey::MetaMorphemes),
            ("semantics", LayerKey::Semantics),
            ("namedEntity", LayerKey::NamedEntity),
            ("propBank", LayerKey::PropBank),
            ("frameNet", LayerKey::FrameNet),
            ("slot", LayerKey::Slot),
            ("polarity", LayerKey::Polarity),
            ("shallowParse", LayerKey::ShallowParse),
            ("ccg", LayerKey::Ccg),
            ("posTag", LayerKey::PosTag),
            ("universalDependency", LayerKey::UniversalDependency),
        ];
        REGISTRY
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, layer)| *layer)
    }

    /// Canonical key emitted by the encoder.
    pub fn canonical(self) -> &'static str {
        match self {
            LayerKey::MorphologicalAnalysis => "morphologicalAnalysis",
            LayerKey::MetaMorphemes => "metaMorphemes",
            LayerKey::Semantics => "semantics",
            LayerKey::NamedEntity => "namedEntity",
            LayerKey::PropBank => "propbank",
            LayerKey::FrameNet => "framenet",
            LayerKey::Slot => "slot",
            LayerKey::Polarity => "polarity",
            LayerKey::ShallowParse => "shallowParse",
            LayerKey::Ccg => "ccg",
            LayerKey::PosTag => "posTag",
            LayerKey::UniversalDependency => "universalDependency",
        }
    }
}

/// Canonical encode order. The surface layer always comes first and is
/// not part of this list.
pub(crate) const ENCODE_ORDER: &[LayerKey] = &[
    LayerKey::MorphologicalAnalysis,
    LayerKey::MetaMorphemes,
    LayerKey::Semantics,
    LayerKey::NamedEntity,
    LayerKey::PropBank,
    LayerKey::FrameNet,
    LayerKey::Slot,
    LayerKey::Polarity,
    LayerKey::ShallowParse,
    LayerKey::Ccg,
    LayerKey::PosTag,
    LayerKey::UniversalDependency,
];

/// Decode one word's layer text into an [`AnnotatedWord`].
///
/// Splits on the delimiter characters `[`, `{`, `}`, `]`; a fragment
/// without `=` is the bare surface form. Any subset and any order of
/// layers is accepted, including zero layers.
pub fn decode(text: &str) -> Result<AnnotatedWord, LayerError> {
    let mut word = AnnotatedWord::new("");
    for fragment in text.split(|c| matches!(c, '[' | '{' | '}' | ']')) {
        if fragment.is_empty() {
            continue;
        }
        let (key, value) = match fragment.find('=') {
            None => {
                word.set_name(fragment);
                continue;
            }
            Some(at) => (&fragment[..at], &fragment[at + 1..]),
        };
        if let Some(language) = Language::from_key(key) {
            word.set_name(value);
            word.set_language(language);
            continue;
        }
        match LayerKey::from_key(key) {
            Some(LayerKey::MorphologicalAnalysis) => {
                word.set_parse(Some(MorphologicalParse::new(value)));
            }
            Some(LayerKey::MetaMorphemes) => {
                word.set_metamorphic_parse(Some(MetamorphicParse::new(value)));
            }
            Some(LayerKey::Semantics) => {
                word.set_semantic(Some(value.to_string()));
            }
            Some(LayerKey::NamedEntity) => {
                word.set_named_entity(Some(NamedEntityType::from_label(value)));
            }
            Some(LayerKey::PropBank) => {
                word.set_argument(Some(Role::from_value(value)));
            }
            Some(LayerKey::FrameNet) => {
                word.set_frame_element(Some(Role::from_value(value)));
            }
            Some(LayerKey::Slot) => {
                word.set_slot(Some(value.to_string()));
            }
            Some(LayerKey::Polarity) => {
                word.set_polarity(Some(Polarity::from_label(value)));
            }
            Some(LayerKey::ShallowParse) => {
                word.set_shallow_parse(Some(value.to_string()));
            }
            Some(LayerKey::Ccg) => {
                word.set_ccg(Some(value.to_string()));
            }
            Some(LayerKey::PosTag) => {
                word.set_pos_tag(Some(value.to_string()));
            }
            Some(LayerKey::UniversalDependency) => {
                word.set_universal_dependency(Some(UniversalDependencyRelation::from_value(
                    value,
                )?));
            }
            // Forward compatibility: unknown layers are dropped, never fatal.
            None => {}
        }
    }
    Ok(word)
}

/// Encode a word back into layer text. Used by the word's `Display`.
pub(crate) fn encode(word: &AnnotatedWord, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{{}={}}}", word.language().key(), word.name())?;
    for key in ENCODE_ORDER {
        if let Some(value) = word.layer_value(*key) {
            write!(f, "{{{}={}}}", key.canonical(), value)?;
        }
    }
    Ok(())
}
