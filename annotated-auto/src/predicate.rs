//! Predicate detection against a frame inventory.

use annotated_sentence::{AnnotatedSentence, FrameLookup, Role, PREDICATE};
use log::debug;

/// Marks predicate candidates in the propbank argument layer.
///
/// Candidates come from [`AnnotatedSentence::predicate_candidates`];
/// each one gets the `PREDICATE` role linked to its own sense id, so
/// the arguments assigned later can point back at it.
pub struct PredicateAssigner<'a> {
    frames: &'a dyn FrameLookup,
}

impl<'a> PredicateAssigner<'a> {
    pub fn new(frames: &'a dyn FrameLookup) -> Self {
        PredicateAssigner { frames }
    }

    /// Returns whether any word was marked.
    pub fn assign(&self, sentence: &mut AnnotatedSentence) -> bool {
        let candidates = sentence.predicate_candidates(self.frames);
        let mut marked = 0;
        for index in candidates {
            let sense = match sentence.word(index).and_then(|word| word.semantic()) {
                Some(sense) => sense.to_string(),
                None => continue,
            };
            if let Some(word) = sentence.word_mut(index) {
                if word.argument().is_none() {
                    word.set_argument(Some(Role::new(PREDICATE, Some(sense))));
                    marked += 1;
                }
            }
        }
        debug!("predicates: {} marked", marked);
        marked > 0
    }
}

/// Same candidate logic, filling the framenet frame-element layer.
pub struct FramePredicateAssigner<'a> {
    frames: &'a dyn FrameLookup,
}

impl<'a> FramePredicateAssigner<'a> {
    pub fn new(frames: &'a dyn FrameLookup) -> Self {
        FramePredicateAssigner { frames }
    }

    pub fn assign(&self, sentence: &mut AnnotatedSentence) -> bool {
        let candidates = sentence.predicate_candidates(self.frames);
        let mut marked = 0;
        for index in candidates {
            let sense = match sentence.word(index).and_then(|word| word.semantic()) {
                Some(sense) => sense.to_string(),
                None => continue,
            };
            if let Some(word) = sentence.word_mut(index) {
                if word.frame_element().is_none() {
                    word.set_frame_element(Some(Role::new(PREDICATE, Some(sense))));
                    marked += 1;
                }
            }
        }
        debug!("frame predicates: {} marked", marked);
        marked > 0
    }
}
