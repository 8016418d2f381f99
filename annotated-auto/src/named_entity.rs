//! Rule-based named-entity detection.

use std::collections::HashSet;

use annotated_sentence::{
    AnnotatedSentence, AnnotatedWord, MorphologicalTag, NamedEntityType,
};
use log::debug;

use crate::lexicon;

/// A name list consulted by the detectors. Implementations decide
/// normalization; queries arrive already lowercased.
pub trait Gazetteer {
    fn contains(&self, entry: &str) -> bool;
}

/// A gazetteer over an owned set of lowercased entries.
#[derive(Debug, Clone, Default)]
pub struct HashSetGazetteer {
    entries: HashSet<String>,
}

impl HashSetGazetteer {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        HashSetGazetteer {
            entries: entries
                .into_iter()
                .map(|entry| lexicon::turkish_lowercase(entry.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Gazetteer for HashSetGazetteer {
    fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }
}

/// Runs the five entity detectors in fixed order: person, location,
/// organization, money, time.
///
/// Detectors only look at words that carry a morphological parse, and
/// never touch a word whose named-entity layer is already set. An
/// explicit NONE therefore pins a word as "not an entity".
pub struct NamedEntityRuleEngine<'a> {
    persons: &'a dyn Gazetteer,
    locations: &'a dyn Gazetteer,
    organizations: &'a dyn Gazetteer,
}

impl<'a> NamedEntityRuleEngine<'a> {
    pub fn new(
        persons: &'a dyn Gazetteer,
        locations: &'a dyn Gazetteer,
        organizations: &'a dyn Gazetteer,
    ) -> Self {
        NamedEntityRuleEngine {
            persons,
            locations,
            organizations,
        }
    }

    /// Run every detector. Returns whether any layer was filled.
    pub fn annotate(&self, sentence: &mut AnnotatedSentence) -> bool {
        let persons = self.detect_persons(sentence);
        let locations = self.detect_locations(sentence);
        let organizations = self.detect_organizations(sentence);
        let money = self.detect_money(sentence);
        let time = self.detect_time(sentence);
        debug!(
            "named entities: {} person, {} location, {} organization, {} money, {} time",
            persons, locations, organizations, money, time
        );
        persons + locations + organizations + money + time > 0
    }

    fn detect_persons(&self, sentence: &mut AnnotatedSentence) -> usize {
        let mut tagged = 0;
        for index in 0..sentence.word_count() {
            let word = &sentence.words()[index];
            if !eligible(word) {
                continue;
            }
            if lexicon::is_honorific(word.name()) || gazetteer_hit(word, self.persons) {
                set(sentence, index, NamedEntityType::Person);
                tagged += 1;
            }
        }
        tagged
    }

    fn detect_locations(&self, sentence: &mut AnnotatedSentence) -> usize {
        let mut tagged = 0;
        for index in 0..sentence.word_count() {
            let word = &sentence.words()[index];
            if eligible(word) && gazetteer_hit(word, self.locations) {
                set(sentence, index, NamedEntityType::Location);
                tagged += 1;
            }
        }
        tagged
    }

    fn detect_organizations(&self, sentence: &mut AnnotatedSentence) -> usize {
        let mut tagged = 0;
        for index in 0..sentence.word_count() {
            let word = &sentence.words()[index];
            if !eligible(word) {
                continue;
            }
            if lexicon::is_organization_suffix(word.name())
                || gazetteer_hit(word, self.organizations)
            {
                set(sentence, index, NamedEntityType::Organization);
                tagged += 1;
            }
        }
        tagged
    }

    /// A money expression tags itself and then walks backward over the
    /// contiguous numeric run that spells the amount ("3 milyon 100 bin
    /// dolar"), stopping at the first word that is neither numeric nor
    /// the literal "amerikan".
    fn detect_money(&self, sentence: &mut AnnotatedSentence) -> usize {
        let mut tagged = 0;
        for index in 0..sentence.word_count() {
            let word = &sentence.words()[index];
            if !eligible(word) || !lexicon::is_money_expression(word.name()) {
                continue;
            }
            set(sentence, index, NamedEntityType::Money);
            tagged += 1;
            let mut back = index;
            while back > 0 {
                back -= 1;
                let previous = &sentence.words()[back];
                let numeric = previous.parse().map_or(false, |parse| {
                    parse.contains_tag(MorphologicalTag::Real)
                        || parse.contains_tag(MorphologicalTag::Cardinal)
                        || parse.contains_tag(MorphologicalTag::Number)
                });
                if !numeric && lexicon::turkish_lowercase(previous.name()) != "amerikan" {
                    break;
                }
                if previous.named_entity().is_none() {
                    set(sentence, back, NamedEntityType::Money);
                    tagged += 1;
                }
            }
        }
        tagged
    }

    /// A time expression tags itself and, when directly preceded by a
    /// cardinal number ("17:30" after "saat" style constructs aside,
    /// "1996 Ocak" keeps the year), the preceding word too.
    fn detect_time(&self, sentence: &mut AnnotatedSentence) -> usize {
        let mut tagged = 0;
        for index in 0..sentence.word_count() {
            let word = &sentence.words()[index];
            if !eligible(word) || !lexicon::is_time_expression(word.name()) {
                continue;
            }
            set(sentence, index, NamedEntityType::Time);
            tagged += 1;
            if index > 0 {
                let previous = &sentence.words()[index - 1];
                let cardinal = previous
                    .parse()
                    .map_or(false, |parse| parse.contains_tag(MorphologicalTag::Cardinal));
                if cardinal && previous.named_entity().is_none() {
                    set(sentence, index - 1, NamedEntityType::Time);
                    tagged += 1;
                }
            }
        }
        tagged
    }
}

/// Detectors require a parse and an untouched entity layer.
fn eligible(word: &AnnotatedWord) -> bool {
    word.parse().is_some() && word.named_entity().is_none()
}

/// Gazetteer membership for the word itself or, for inflected proper
/// nouns like "Ankara'ya", the part before the apostrophe. Only words
/// the parse tags as proper nouns qualify.
fn gazetteer_hit(word: &AnnotatedWord, gazetteer: &dyn Gazetteer) -> bool {
    let proper = word
        .parse()
        .map_or(false, |parse| parse.contains_tag(MorphologicalTag::ProperNoun));
    if !proper {
        return false;
    }
    let lower = lexicon::turkish_lowercase(word.name());
    if gazetteer.contains(&lower) {
        return true;
    }
    match lower.find('\'') {
        Some(at) => gazetteer.contains(&lower[..at]),
        None => false,
    }
}

fn set(sentence: &mut AnnotatedSentence, index: usize, entity: NamedEntityType) {
    if let Some(word) = sentence.word_mut(index) {
        word.set_named_entity(Some(entity));
    }
}
