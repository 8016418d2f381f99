//! Sense labeling for words with a single possible sense.

use annotated_sentence::AnnotatedSentence;
use log::debug;

/// Lookup contract over an external sense inventory (a wordnet): all
/// sense ids a root word can carry.
pub trait SenseInventory {
    fn senses(&self, root: &str) -> Vec<String>;
}

/// Fills the semantic layer of every word whose root has exactly one
/// sense in the inventory. Genuinely ambiguous words are left for
/// hand annotation.
pub struct SemanticAssigner<'a> {
    inventory: &'a dyn SenseInventory,
}

impl<'a> SemanticAssigner<'a> {
    pub fn new(inventory: &'a dyn SenseInventory) -> Self {
        SemanticAssigner { inventory }
    }

    /// Returns whether any sense was assigned. Words without a parse or
    /// with a sense already set are skipped.
    pub fn assign(&self, sentence: &mut AnnotatedSentence) -> bool {
        let mut assigned = 0;
        for index in 0..sentence.word_count() {
            let root = {
                let word = &sentence.words()[index];
                if word.semantic().is_some() {
                    continue;
                }
                match word.parse() {
                    Some(parse) => parse.lemma().to_string(),
                    None => continue,
                }
            };
            let mut senses = self.inventory.senses(&root);
            if senses.len() != 1 {
                continue;
            }
            if let Some(word) = sentence.word_mut(index) {
                word.set_semantic(senses.pop());
                assigned += 1;
            }
        }
        debug!("senses: {} assigned", assigned);
        assigned > 0
    }
}
