//! Rule-based auto-annotation on top of `annotated-sentence`.
//!
//! Each pipeline stage fills one missing annotation layer and never
//! overwrites a layer that is already set, so hand-corrected sentences
//! survive a re-run unchanged. External resources (the morphological
//! analyzer, gazetteers, the frame inventory) come in through traits.

mod analyzer;
mod argument;
mod disambiguation;
mod lexicon;
mod named_entity;
mod pipeline;
mod predicate;
mod semantic;
mod statistics;

pub use analyzer::{
    MorphologicalAnalyzer, ParseCandidate, ParseCandidateList, ROOT_SEPARATOR,
};
pub use argument::ArgumentAssigner;
pub use disambiguation::{CaseDisambiguator, DisambiguationCascade, ShortestParseDisambiguator};
pub use lexicon::turkish_lowercase;
pub use named_entity::{Gazetteer, HashSetGazetteer, NamedEntityRuleEngine};
pub use pipeline::{AnnotationPipeline, PipelineReport};
pub use predicate::{FramePredicateAssigner, PredicateAssigner};
pub use semantic::{SemanticAssigner, SenseInventory};
pub use statistics::{RootWordStatistics, SignatureRecord};

// Re-export from annotated-sentence for convenience
pub use annotated_sentence::FrameLookup;

#[cfg(test)]
mod tests {
    mod disambiguation;
    mod named_entity;
    mod pipeline;
    mod predicate_argument;
    mod semantic;
    mod support;
}
