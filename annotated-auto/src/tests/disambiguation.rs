use annotated_sentence::AnnotatedSentence;

use super::support::FixtureAnalyzer;
use crate::{DisambiguationCascade, RootWordStatistics};

fn analyzer() -> FixtureAnalyzer {
    FixtureAnalyzer::new()
        // unambiguous: one candidate
        .entry("geldi", "gel+VERB+POS+PAST+A3SG", "gel+DH")
        // same root, two analyses of different length
        .entry("evi", "ev+NOUN+A3SG+P3SG+NOM", "ev+SH")
        .entry("evi", "ev+NOUN+A3SG+ACC", "ev+yH")
        // two distinct roots
        .entry("yüzün", "yüz+NOUN+A3SG+P2SG+NOM", "yüz+Hn")
        .entry("yüzün", "yüzün+NOUN+A3SG+NOM", "yüzün")
}

#[test]
fn test_single_candidate_committed() {
    let mut sentence = AnnotatedSentence::decode("{turkish=geldi}").unwrap();
    let statistics = RootWordStatistics::new();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics);

    assert!(cascade.disambiguate(&mut sentence));
    let word = sentence.word(0).unwrap();
    assert_eq!(word.parse().unwrap().to_string(), "gel+VERB+POS+PAST+A3SG");
    assert_eq!(word.metamorphic_parse().unwrap().to_string(), "gel+DH");
}

#[test]
fn test_same_root_falls_to_case_disambiguator() {
    let mut sentence = AnnotatedSentence::decode("{turkish=evi}").unwrap();
    let statistics = RootWordStatistics::new();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics);

    assert!(cascade.disambiguate(&mut sentence));
    // both candidates have two morphemes, the first wins the tie
    assert_eq!(
        sentence.word(0).unwrap().parse().unwrap().to_string(),
        "ev+NOUN+A3SG+P3SG+NOM"
    );
}

#[test]
fn test_statistics_pick_majority_root() {
    let mut statistics = RootWordStatistics::new();
    for _ in 0..9 {
        statistics.add_observation("yüz$yüzün", "yüz", None);
    }
    statistics.add_observation("yüz$yüzün", "yüzün", None);

    let mut sentence = AnnotatedSentence::decode("{turkish=yüzün}").unwrap();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics).with_threshold(0.5);

    assert!(cascade.disambiguate(&mut sentence));
    assert_eq!(sentence.word(0).unwrap().parse().unwrap().lemma(), "yüz");
}

#[test]
fn test_statistics_below_threshold_leave_word_unanalyzed() {
    let mut statistics = RootWordStatistics::new();
    statistics.add_observation("yüz$yüzün", "yüz", None);
    statistics.add_observation("yüz$yüzün", "yüzün", None);

    let mut sentence = AnnotatedSentence::decode("{turkish=yüzün}").unwrap();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics).with_threshold(0.5);

    assert!(!cascade.disambiguate(&mut sentence));
    assert!(sentence.word(0).unwrap().parse().is_none());
}

#[test]
fn test_cascade_is_idempotent() {
    let mut sentence =
        AnnotatedSentence::decode("{turkish=geldi} {turkish=evi} {turkish=bilinmeyen}").unwrap();
    let statistics = RootWordStatistics::new();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics);

    assert!(cascade.disambiguate(&mut sentence));
    let after_first = sentence.clone();
    assert!(!cascade.disambiguate(&mut sentence));
    assert_eq!(sentence, after_first);
    // the word the analyzer does not know stays unanalyzed, silently
    assert!(sentence.word(2).unwrap().parse().is_none());
}

#[test]
fn test_existing_parse_is_never_replaced() {
    let mut sentence = AnnotatedSentence::decode(
        "{turkish=geldi}{morphologicalAnalysis=gelmek+VERB+POS+PAST+A3SG}",
    )
    .unwrap();
    let statistics = RootWordStatistics::new();
    let analyzer = analyzer();
    let cascade = DisambiguationCascade::new(&analyzer, &statistics);

    assert!(!cascade.disambiguate(&mut sentence));
    assert_eq!(sentence.word(0).unwrap().parse().unwrap().lemma(), "gelmek");
}
