//! The three-pass morphological disambiguation cascade.

use annotated_sentence::AnnotatedSentence;
use log::debug;

use crate::analyzer::{MorphologicalAnalyzer, ParseCandidate, ParseCandidateList};
use crate::statistics::RootWordStatistics;

/// Selects one analysis out of a same-root candidate set using
/// grammatical context. Returning `None` leaves the word unresolved.
pub trait CaseDisambiguator {
    fn disambiguate(&self, candidates: &ParseCandidateList) -> Option<ParseCandidate>;
}

/// Default case disambiguator: the candidate with the fewest morphemes,
/// first one on ties. Surface words tend to carry the shortest
/// derivation that explains them, which makes this a usable fallback
/// wherever no hand-written contextual rule applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestParseDisambiguator;

impl CaseDisambiguator for ShortestParseDisambiguator {
    fn disambiguate(&self, candidates: &ParseCandidateList) -> Option<ParseCandidate> {
        candidates
            .iter()
            .min_by_key(|candidate| candidate.metamorphic_parse().morpheme_count())
            .cloned()
    }
}

/// Fills missing morphological and metamorphic layers in three ordered
/// passes per sentence.
///
/// Pass 1 commits words with exactly one analyzer candidate. Pass 2
/// handles same-root ambiguity through the case disambiguator. Pass 3
/// handles root ambiguity through the root-word statistics, then
/// reduces to the winning root and reuses the case disambiguator.
/// Words that already carry a parse are skipped in every pass, so
/// running the cascade again changes nothing.
pub struct DisambiguationCascade<'a> {
    analyzer: &'a dyn MorphologicalAnalyzer,
    statistics: &'a RootWordStatistics,
    case: Box<dyn CaseDisambiguator>,
    threshold: f64,
}

impl<'a> DisambiguationCascade<'a> {
    pub fn new(analyzer: &'a dyn MorphologicalAnalyzer, statistics: &'a RootWordStatistics) -> Self {
        DisambiguationCascade {
            analyzer,
            statistics,
            case: Box::new(ShortestParseDisambiguator),
            threshold: 0.0,
        }
    }

    /// Minimum relative frequency a statistics root must exceed before
    /// pass 3 trusts it. The default of 0.0 accepts any signal.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_case_disambiguator(mut self, case: Box<dyn CaseDisambiguator>) -> Self {
        self.case = case;
        self
    }

    /// Run all three passes. Returns whether any word gained a parse.
    pub fn disambiguate(&self, sentence: &mut AnnotatedSentence) -> bool {
        let single = self.pass(sentence, |_, candidates| {
            if candidates.len() == 1 {
                candidates.clone().into_first()
            } else {
                None
            }
        });
        let same_root = self.pass(sentence, |this, candidates| {
            if candidates.is_root_ambiguous() {
                None
            } else {
                this.case.disambiguate(candidates)
            }
        });
        let by_statistics = self.pass(sentence, |this, candidates| {
            if !candidates.is_root_ambiguous() {
                return None;
            }
            let signature = candidates.root_signature();
            let root = this.statistics.best_root_word(&signature, this.threshold)?;
            this.case.disambiguate(&candidates.reduce_to_root(root))
        });
        debug!(
            "disambiguation: {} single, {} same-root, {} by statistics",
            single, same_root, by_statistics
        );
        single + same_root + by_statistics > 0
    }

    fn pass(
        &self,
        sentence: &mut AnnotatedSentence,
        select: impl Fn(&Self, &ParseCandidateList) -> Option<ParseCandidate>,
    ) -> usize {
        let mut resolved = 0;
        for index in 0..sentence.word_count() {
            let surface = {
                let word = match sentence.word(index) {
                    Some(word) => word,
                    None => continue,
                };
                if word.parse().is_some() {
                    continue;
                }
                word.name().to_string()
            };
            let candidates = self.analyzer.analyze(&surface);
            if candidates.is_empty() {
                continue;
            }
            if let Some(candidate) = select(self, &candidates) {
                let (parse, metamorphic) = candidate.into_parts();
                if let Some(word) = sentence.word_mut(index) {
                    word.set_parse(Some(parse));
                    word.set_metamorphic_parse(Some(metamorphic));
                    resolved += 1;
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_parse_prefers_fewest_morphemes() {
        let candidates = ParseCandidateList::new(vec![
            ParseCandidate::from_texts("yüz+NOUN+A3SG+P2SG+NOM", "yüz+Hn"),
            ParseCandidate::from_texts("yüz+NUM+CARD", "yüz"),
        ]);
        let chosen = ShortestParseDisambiguator.disambiguate(&candidates).unwrap();
        assert_eq!(chosen.parse().to_string(), "yüz+NUM+CARD");
    }
}
