//! The full annotation pipeline preset.

use annotated_sentence::{AnnotatedSentence, FrameLookup};
use log::debug;

use crate::analyzer::MorphologicalAnalyzer;
use crate::argument::ArgumentAssigner;
use crate::disambiguation::DisambiguationCascade;
use crate::named_entity::{Gazetteer, NamedEntityRuleEngine};
use crate::predicate::PredicateAssigner;
use crate::semantic::{SemanticAssigner, SenseInventory};
use crate::statistics::RootWordStatistics;

/// Which stages changed a sentence during one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub disambiguated: bool,
    pub senses_assigned: bool,
    pub entities_tagged: bool,
    pub predicates_marked: bool,
    pub arguments_assigned: bool,
}

impl PipelineReport {
    pub fn changed(&self) -> bool {
        self.disambiguated
            || self.senses_assigned
            || self.entities_tagged
            || self.predicates_marked
            || self.arguments_assigned
    }
}

/// Runs the stages in dependency order: disambiguation first (everything
/// downstream reads the parse layer), then senses (predicates read the
/// semantic layer), named entities, predicates, arguments.
///
/// Every stage only fills absent layers, so the pipeline is idempotent:
/// a second run over the same sentence reports no changes.
pub struct AnnotationPipeline<'a> {
    disambiguation: DisambiguationCascade<'a>,
    semantic: SemanticAssigner<'a>,
    named_entity: NamedEntityRuleEngine<'a>,
    predicate: PredicateAssigner<'a>,
    argument: ArgumentAssigner,
}

impl<'a> AnnotationPipeline<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        analyzer: &'a dyn MorphologicalAnalyzer,
        statistics: &'a RootWordStatistics,
        senses: &'a dyn SenseInventory,
        persons: &'a dyn Gazetteer,
        locations: &'a dyn Gazetteer,
        organizations: &'a dyn Gazetteer,
        frames: &'a dyn FrameLookup,
    ) -> Self {
        AnnotationPipeline {
            disambiguation: DisambiguationCascade::new(analyzer, statistics),
            semantic: SemanticAssigner::new(senses),
            named_entity: NamedEntityRuleEngine::new(persons, locations, organizations),
            predicate: PredicateAssigner::new(frames),
            argument: ArgumentAssigner::new(),
        }
    }

    /// Swap in a differently-configured cascade (threshold, case rules).
    pub fn with_disambiguation(mut self, cascade: DisambiguationCascade<'a>) -> Self {
        self.disambiguation = cascade;
        self
    }

    pub fn annotate(&self, sentence: &mut AnnotatedSentence) -> PipelineReport {
        let report = PipelineReport {
            disambiguated: self.disambiguation.disambiguate(sentence),
            senses_assigned: self.semantic.assign(sentence),
            entities_tagged: self.named_entity.annotate(sentence),
            predicates_marked: self.predicate.assign(sentence),
            arguments_assigned: self.argument.assign(sentence),
        };
        debug!("pipeline report: {:?}", report);
        report
    }
}
