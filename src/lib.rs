//! Linguistically annotated sentences with a lossless text format.
//!
//! Every word of a sentence carries an independent set of optional
//! annotation layers (morphology, word sense, named entity, semantic
//! roles, dependencies, ...) stored as compact `{key=value}` chunks:
//!
//! ```
//! use annotated_sentence::AnnotatedSentence;
//!
//! let sentence = AnnotatedSentence::decode(
//!     "{turkish=Ali}{namedEntity=PERSON} {turkish=geldi}{namedEntity=NONE}",
//! )?;
//! assert_eq!(sentence.word_count(), 2);
//! assert_eq!(sentence.to_string(), sentence.to_string().parse::<AnnotatedSentence>()?.to_string());
//! # Ok::<(), annotated_sentence::LayerError>(())
//! ```
//!
//! The companion `annotated-auto` crate builds the rule-based
//! auto-annotation pipeline on top of this data model.

mod corpus;
mod dependency;
mod display;
mod language;
mod layer;
mod morphology;
mod named_entity;
mod polarity;
mod role;
mod sentence;
mod word;

pub use corpus::AnnotatedCorpus;
pub use dependency::UniversalDependencyRelation;
pub use display::SentenceDisplay;
pub use language::Language;
pub use layer::{decode, LayerError, LayerKey};
pub use morphology::{MetamorphicParse, MorphologicalParse, MorphologicalTag};
pub use named_entity::NamedEntityType;
pub use polarity::Polarity;
pub use role::{Role, PREDICATE};
pub use sentence::{AnnotatedPhrase, AnnotatedSentence, FrameLookup};
pub use word::AnnotatedWord;
