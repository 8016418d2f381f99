//! Contract for the external morphological analyzer.
//!
//! The analyzer itself (a finite-state transducer in practice) is not
//! part of this crate. The pipeline only needs its output shape: for a
//! surface word, a list of candidate analyses, each pairing a
//! transition list with a morpheme segmentation.

use std::iter::FromIterator;

use annotated_sentence::{MetamorphicParse, MorphologicalParse};

/// Separator between distinct roots in an ambiguity signature. A
/// signature containing this marker means the candidate set spans more
/// than one root word.
pub const ROOT_SEPARATOR: char = '$';

/// An external analyzer producing candidate analyses for a surface word.
pub trait MorphologicalAnalyzer {
    /// All candidate analyses for `surface`. An unrecognized word
    /// yields an empty list, never an error.
    fn analyze(&self, surface: &str) -> ParseCandidateList;
}

/// One candidate analysis: a morphological parse and its matching
/// morpheme segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCandidate {
    parse: MorphologicalParse,
    metamorphic_parse: MetamorphicParse,
}

impl ParseCandidate {
    pub fn new(parse: MorphologicalParse, metamorphic_parse: MetamorphicParse) -> Self {
        ParseCandidate {
            parse,
            metamorphic_parse,
        }
    }

    /// Candidate built straight from the two layer texts.
    pub fn from_texts(transition_list: &str, segmentation: &str) -> Self {
        ParseCandidate {
            parse: MorphologicalParse::new(transition_list),
            metamorphic_parse: MetamorphicParse::new(segmentation),
        }
    }

    pub fn parse(&self) -> &MorphologicalParse {
        &self.parse
    }

    pub fn metamorphic_parse(&self) -> &MetamorphicParse {
        &self.metamorphic_parse
    }

    pub fn into_parts(self) -> (MorphologicalParse, MetamorphicParse) {
        (self.parse, self.metamorphic_parse)
    }
}

/// The full candidate set for one surface word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseCandidateList {
    candidates: Vec<ParseCandidate>,
}

impl ParseCandidateList {
    pub fn new(candidates: Vec<ParseCandidate>) -> Self {
        ParseCandidateList { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParseCandidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseCandidate> {
        self.candidates.iter()
    }

    pub fn into_first(self) -> Option<ParseCandidate> {
        self.candidates.into_iter().next()
    }

    /// Distinct candidate roots, sorted, joined with [`ROOT_SEPARATOR`].
    /// One root yields a marker-free signature; the signature is the
    /// lookup key of the root-word statistics.
    pub fn root_signature(&self) -> String {
        let mut roots: Vec<&str> = self
            .candidates
            .iter()
            .map(|candidate| candidate.parse().lemma())
            .collect();
        roots.sort_unstable();
        roots.dedup();
        roots.join(&ROOT_SEPARATOR.to_string())
    }

    /// Whether the candidates span more than one distinct root.
    pub fn is_root_ambiguous(&self) -> bool {
        self.root_signature().contains(ROOT_SEPARATOR)
    }

    /// The candidates whose root is exactly `root`, in original order.
    pub fn reduce_to_root(&self, root: &str) -> ParseCandidateList {
        ParseCandidateList {
            candidates: self
                .candidates
                .iter()
                .filter(|candidate| candidate.parse().lemma() == root)
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<ParseCandidate> for ParseCandidateList {
    fn from_iter<I: IntoIterator<Item = ParseCandidate>>(iter: I) -> Self {
        ParseCandidateList {
            candidates: iter.into_iter().collect(),
        }
    }
}
