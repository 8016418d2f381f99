use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

use crate::sentence::AnnotatedSentence;

/// An ordered, in-memory collection of sentences.
///
/// The corpus owns its sentences and keeps them in insertion order.
/// Reading and writing corpus files is left to the caller; this type
/// only models the loaded state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedCorpus {
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedCorpus {
    pub fn new() -> Self {
        AnnotatedCorpus::default()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentence(&self, index: usize) -> Option<&AnnotatedSentence> {
        self.sentences.get(index)
    }

    pub fn sentence_mut(&mut self, index: usize) -> Option<&mut AnnotatedSentence> {
        self.sentences.get_mut(index)
    }

    pub fn push_sentence(&mut self, sentence: AnnotatedSentence) {
        self.sentences.push(sentence);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedSentence> {
        self.sentences.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AnnotatedSentence> {
        self.sentences.iter_mut()
    }

    /// Total word count across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(AnnotatedSentence::word_count).sum()
    }

    /// Drop every word whose surface form is empty, then every sentence
    /// left without words. Empty surface forms appear in hand-edited
    /// corpus files and break the one-token-per-chunk assumption of the
    /// text format.
    pub fn prune_empty_words(&mut self) {
        for sentence in &mut self.sentences {
            let mut index = 0;
            while index < sentence.word_count() {
                let empty = sentence
                    .word(index)
                    .map_or(false, |word| word.name().is_empty());
                if empty {
                    sentence.remove_word(index);
                } else {
                    index += 1;
                }
            }
        }
        self.sentences.retain(|sentence| !sentence.is_empty());
    }
}

impl FromIterator<AnnotatedSentence> for AnnotatedCorpus {
    fn from_iter<I: IntoIterator<Item = AnnotatedSentence>>(iter: I) -> Self {
        AnnotatedCorpus {
            sentences: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnnotatedCorpus {
    type Item = &'a AnnotatedSentence;
    type IntoIter = std::slice::Iter<'a, AnnotatedSentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
