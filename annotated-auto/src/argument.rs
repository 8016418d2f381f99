//! Semantic-role assignment from shallow-parse tags.

use annotated_sentence::{AnnotatedSentence, MorphologicalTag, Role};
use log::debug;

/// Shallow-parse tag marking the grammatical subject.
const SUBJECT_TAG: &str = "ÖZNE";
/// Shallow-parse tag marking the grammatical object.
const OBJECT_TAG: &str = "NESNE";

/// Links subject and object chunks to the sentence's first predicate.
///
/// The subject becomes ARG0, or ARG1 when the predicate is passive
/// (the surface subject of a passive verb is the underlying object).
/// Objects become ARG1 regardless of voice. Words with other tags or
/// with an argument already set are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentAssigner;

impl ArgumentAssigner {
    pub fn new() -> Self {
        ArgumentAssigner
    }

    /// Returns whether any argument was assigned.
    pub fn assign(&self, sentence: &mut AnnotatedSentence) -> bool {
        let predicate = sentence.words().iter().enumerate().find(|(_, word)| {
            word.argument().map_or(false, |role| role.is_predicate())
        });
        let (predicate_index, link_id, passive) = match predicate {
            Some((index, word)) => {
                let link_id = word
                    .argument()
                    .and_then(|role| role.link_id())
                    .map(str::to_string);
                let passive = word
                    .parse()
                    .map_or(false, |parse| parse.contains_tag(MorphologicalTag::Passive));
                (index, link_id, passive)
            }
            None => return false,
        };
        let mut assigned = 0;
        for index in 0..sentence.word_count() {
            if index == predicate_index {
                continue;
            }
            let role_type = {
                let word = &sentence.words()[index];
                if word.argument().is_some() {
                    continue;
                }
                match word.shallow_parse() {
                    Some(SUBJECT_TAG) if passive => "ARG1",
                    Some(SUBJECT_TAG) => "ARG0",
                    Some(OBJECT_TAG) => "ARG1",
                    _ => continue,
                }
            };
            if let Some(word) = sentence.word_mut(index) {
                word.set_argument(Some(Role::new(role_type, link_id.clone())));
                assigned += 1;
            }
        }
        debug!("arguments: {} assigned", assigned);
        assigned > 0
    }
}
