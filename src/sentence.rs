//! Ordered word sequences and the queries derived from them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layer::LayerError;
use crate::word::AnnotatedWord;

/// Lookup contract over an external frame inventory (propbank frameset
/// list or a framenet): "does a frame exist for this sense id".
pub trait FrameLookup {
    fn frame_exists(&self, sense: &str) -> bool;
}

/// An ordered sequence of [`AnnotatedWord`]s.
///
/// Word positions are 0-based in this API; the universal dependency
/// layer and the CoNLL-U export use 1-based indices. The optional
/// `source` is an identity handle of the originating resource — it is
/// used for provenance (e.g. root-word statistics), never for equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    words: Vec<AnnotatedWord>,
    source: Option<String>,
}

impl AnnotatedSentence {
    pub fn new() -> Self {
        AnnotatedSentence::default()
    }

    /// Decode a whitespace-separated run of layer-encoded words.
    pub fn decode(text: &str) -> Result<Self, LayerError> {
        let mut words = Vec::new();
        for token in text.split_whitespace() {
            words.push(AnnotatedWord::decode(token)?);
        }
        Ok(AnnotatedSentence {
            words,
            source: None,
        })
    }

    /// Decode, remembering where the sentence came from.
    pub fn decode_with_source(text: &str, source: impl Into<String>) -> Result<Self, LayerError> {
        let mut sentence = AnnotatedSentence::decode(text)?;
        sentence.source = Some(source.into());
        Ok(sentence)
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&AnnotatedWord> {
        self.words.get(index)
    }

    pub fn word_mut(&mut self, index: usize) -> Option<&mut AnnotatedWord> {
        self.words.get_mut(index)
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn push_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }

    /// Remove the word at `index`. Dependency heads of other words are
    /// left untouched; renumbering is the caller's concern.
    pub fn remove_word(&mut self, index: usize) -> AnnotatedWord {
        self.words.remove(index)
    }

    /// Contiguous runs of words sharing one shallow-parse tag.
    ///
    /// A new phrase starts at word 0 and whenever the previous word
    /// carried a tag that differs from the current word's tag. A
    /// previous word without a tag never forces a break, so a run of
    /// untagged words extends the phrase it started in. The final
    /// phrase is always flushed, which yields between 1 and N groups
    /// for an N-word sentence.
    pub fn shallow_parse_groups(&self) -> Vec<AnnotatedPhrase> {
        let mut groups: Vec<AnnotatedPhrase> = Vec::new();
        let mut current: Option<AnnotatedPhrase> = None;
        let mut previous: Option<&AnnotatedWord> = None;
        for (index, word) in self.words.iter().enumerate() {
            match previous {
                None => {
                    current = Some(AnnotatedPhrase::new(index, word.shallow_parse()));
                }
                Some(previous) => {
                    if previous.shallow_parse().is_some()
                        && previous.shallow_parse() != word.shallow_parse()
                    {
                        if let Some(finished) = current.take() {
                            groups.push(finished);
                        }
                        current = Some(AnnotatedPhrase::new(index, word.shallow_parse()));
                    }
                }
            }
            if let Some(current) = current.as_mut() {
                current.push_word(word.clone());
            }
            previous = Some(word);
        }
        if let Some(finished) = current {
            groups.push(finished);
        }
        groups
    }

    /// Whether any word carries the `PREDICATE` argument role.
    pub fn contains_predicate(&self) -> bool {
        self.words
            .iter()
            .any(|word| word.argument().map_or(false, |role| role.is_predicate()))
    }

    /// Relink every argument that points at `previous_id` to
    /// `current_id`. Returns whether anything changed.
    pub fn update_connected_predicate(&mut self, previous_id: &str, current_id: &str) -> bool {
        let mut modified = false;
        for word in &mut self.words {
            if let Some(role) = word.argument() {
                if role.link_id() == Some(previous_id) {
                    let relinked = role.relink(current_id);
                    word.set_argument(Some(relinked));
                    modified = true;
                }
            }
        }
        modified
    }

    /// Indices of the words that can act as predicates: verbs with a
    /// sense for which a frame exists.
    ///
    /// A closure step then promotes a word when its immediate follower
    /// is already a candidate and both share the same sense id; run for
    /// two passes it absorbs multi-word predicate expressions of up to
    /// three words.
    pub fn predicate_candidates(&self, frames: &dyn FrameLookup) -> Vec<usize> {
        let mut candidates: Vec<usize> = Vec::new();
        for (index, word) in self.words.iter().enumerate() {
            let is_verb = word.parse().map_or(false, |parse| parse.is_verb());
            if is_verb {
                if let Some(sense) = word.semantic() {
                    if frames.frame_exists(sense) {
                        candidates.push(index);
                    }
                }
            }
        }
        for pass in 0..2 {
            for index in 0..self.words.len().saturating_sub(pass + 1) {
                if candidates.contains(&index) || !candidates.contains(&(index + 1)) {
                    continue;
                }
                let sense = self.words[index].semantic();
                if sense.is_some() && sense == self.words[index + 1].semantic() {
                    candidates.push(index);
                }
            }
        }
        candidates
    }

    /// Surface form of the verb nearest to `index`, searching backward
    /// and forward and preferring the preceding verb on ties. A word
    /// counts as a verb when both its root POS and its final POS are
    /// verbal.
    pub fn predicate_at(&self, index: usize) -> Option<&str> {
        if index >= self.words.len() {
            return None;
        }
        let is_full_verb = |word: &AnnotatedWord| {
            word.parse().map_or(false, |parse| {
                parse.root_pos() == Some("VERB") && parse.pos() == Some("VERB")
            })
        };
        let backward = (0..=index)
            .rev()
            .find(|&i| is_full_verb(&self.words[i]))
            .map(|i| (index - i, i));
        let forward = (index..self.words.len())
            .find(|&i| is_full_verb(&self.words[i]))
            .map(|i| (i - index, i));
        let best = match (backward, forward) {
            (Some((back_distance, back)), Some((forward_distance, forward))) => {
                if forward_distance < back_distance {
                    Some(forward)
                } else {
                    Some(back)
                }
            }
            (Some((_, back)), None) => Some(back),
            (None, Some((_, forward))) => Some(forward),
            (None, None) => None,
        };
        best.map(|i| self.words[i].name())
    }

    /// Space-joined stems: the lemma where a parse exists, the surface
    /// form otherwise.
    pub fn to_stems(&self) -> String {
        self.words
            .iter()
            .map(|word| match word.parse() {
                Some(parse) => parse.lemma(),
                None => word.name(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// CoNLL-U rows for the whole sentence, newline-joined.
    pub fn universal_dependency_format(&self) -> String {
        let length = self.words.len();
        self.words
            .iter()
            .map(|word| word.universal_dependency_format(length))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for AnnotatedSentence {
    type Err = LayerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        AnnotatedSentence::decode(text)
    }
}

impl std::fmt::Display for AnnotatedSentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// A contiguous sub-run of a sentence sharing one shallow-parse or
/// named-entity tag. Phrases are derived on demand and never persisted
/// on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPhrase {
    word_index: usize,
    tag: Option<String>,
    words: Vec<AnnotatedWord>,
}

impl AnnotatedPhrase {
    pub fn new(word_index: usize, tag: Option<&str>) -> Self {
        AnnotatedPhrase {
            word_index,
            tag: tag.map(str::to_string),
            words: Vec::new(),
        }
    }

    /// Index of the phrase's first word in the originating sentence.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn push_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }
}
