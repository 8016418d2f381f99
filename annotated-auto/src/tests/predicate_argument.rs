use annotated_sentence::AnnotatedSentence;

use super::support::FixtureFrames;
use crate::{ArgumentAssigner, FramePredicateAssigner, PredicateAssigner};

#[test]
fn test_predicate_marked_with_sense_link() {
    let frames = FixtureFrames(vec!["TUR10-0305500"]);
    let assigner = PredicateAssigner::new(&frames);
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=Ali}{morphologicalAnalysis=ali+NOUN+PROP+A3SG+NOM} \
         {turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}{semantics=TUR10-0305500}",
    )
    .unwrap();
    assert!(assigner.assign(&mut sentence));
    let role = sentence.word(1).unwrap().argument().unwrap();
    assert!(role.is_predicate());
    assert_eq!(role.link_id(), Some("TUR10-0305500"));
    assert!(sentence.contains_predicate());
}

#[test]
fn test_verb_without_frame_is_not_marked() {
    let frames = FixtureFrames(vec![]);
    let assigner = PredicateAssigner::new(&frames);
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}{semantics=TUR10-0305500}",
    )
    .unwrap();
    assert!(!assigner.assign(&mut sentence));
    assert!(sentence.word(0).unwrap().argument().is_none());
}

#[test]
fn test_frame_predicate_fills_frame_element_layer() {
    let frames = FixtureFrames(vec!["TUR10-0305500"]);
    let assigner = FramePredicateAssigner::new(&frames);
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}{semantics=TUR10-0305500}",
    )
    .unwrap();
    assert!(assigner.assign(&mut sentence));
    let word = sentence.word(0).unwrap();
    assert!(word.frame_element().unwrap().is_predicate());
    assert!(word.argument().is_none());
}

#[test]
fn test_active_subject_becomes_arg0() {
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=Ali}{morphologicalAnalysis=ali+NOUN+PROP+A3SG+NOM}{shallowParse=ÖZNE} \
         {turkish=kitabı}{morphologicalAnalysis=kitap+NOUN+A3SG+ACC}{shallowParse=NESNE} \
         {turkish=okudu}{morphologicalAnalysis=oku+VERB+POS+PAST+A3SG}\
         {propbank=PREDICATE$TUR10-0587300}",
    )
    .unwrap();
    assert!(ArgumentAssigner::new().assign(&mut sentence));
    let subject = sentence.word(0).unwrap().argument().unwrap();
    assert_eq!(subject.role_type(), "ARG0");
    assert_eq!(subject.link_id(), Some("TUR10-0587300"));
    let object = sentence.word(1).unwrap().argument().unwrap();
    assert_eq!(object.role_type(), "ARG1");
}

#[test]
fn test_passive_subject_becomes_arg1() {
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=kitap}{morphologicalAnalysis=kitap+NOUN+A3SG+NOM}{shallowParse=ÖZNE} \
         {turkish=okundu}{morphologicalAnalysis=oku+VERB^DB+VERB+PASS+POS+PAST+A3SG}\
         {propbank=PREDICATE$TUR10-0587300}",
    )
    .unwrap();
    assert!(ArgumentAssigner::new().assign(&mut sentence));
    assert_eq!(
        sentence.word(0).unwrap().argument().unwrap().role_type(),
        "ARG1"
    );
}

#[test]
fn test_untagged_words_stay_unassigned() {
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=dün} \
         {turkish=geldi}{morphologicalAnalysis=gel+VERB+POS+PAST+A3SG}{propbank=PREDICATE$s1}",
    )
    .unwrap();
    assert!(!ArgumentAssigner::new().assign(&mut sentence));
    assert!(sentence.word(0).unwrap().argument().is_none());
}

#[test]
fn test_no_predicate_no_assignment() {
    let mut sentence =
        AnnotatedSentence::decode("{turkish=Ali}{shallowParse=ÖZNE}").unwrap();
    assert!(!ArgumentAssigner::new().assign(&mut sentence));
}
