use annotated_sentence::{AnnotatedCorpus, AnnotatedSentence, NamedEntityType, SentenceDisplay};

use super::support::{FixtureAnalyzer, FixtureFrames, FixtureSenses};
use crate::{AnnotationPipeline, HashSetGazetteer, MorphologicalAnalyzer, RootWordStatistics};

fn analyzer() -> FixtureAnalyzer {
    FixtureAnalyzer::new()
        .entry("Ali", "ali+NOUN+PROP+A3SG+NOM", "ali")
        .entry("100", "100+NUM+CARD", "100")
        .entry("TL", "tl+NOUN+A3SG+NOM", "tl")
        .entry("kazandı", "kazan+VERB+POS+PAST+A3SG", "kazan+DH")
}

#[test]
fn test_full_pipeline_fills_every_layer_once() {
    let analyzer = analyzer();
    let statistics = RootWordStatistics::new();
    let senses = FixtureSenses::new().entry("kazan", &["TUR10-0411930"]);
    let persons = HashSetGazetteer::new(["ali"]);
    let locations = HashSetGazetteer::new(std::iter::empty::<&str>());
    let organizations = HashSetGazetteer::new(std::iter::empty::<&str>());
    let frames = FixtureFrames(vec!["TUR10-0411930"]);
    let pipeline = AnnotationPipeline::new(
        &analyzer,
        &statistics,
        &senses,
        &persons,
        &locations,
        &organizations,
        &frames,
    );

    let mut sentence = AnnotatedSentence::decode(
        "{turkish=Ali}{shallowParse=ÖZNE} {turkish=100} {turkish=TL} \
         {turkish=kazandı}{shallowParse=YÜKLEM}",
    )
    .unwrap();

    let report = pipeline.annotate(&mut sentence);
    assert!(report.changed());
    assert!(report.disambiguated);
    assert!(report.senses_assigned);
    assert!(report.entities_tagged);
    assert!(report.predicates_marked);
    assert!(report.arguments_assigned);

    assert_eq!(
        sentence.word(3).unwrap().semantic(),
        Some("TUR10-0411930")
    );

    assert_eq!(
        sentence.word(0).unwrap().named_entity(),
        Some(NamedEntityType::Person)
    );
    assert_eq!(
        sentence.word(1).unwrap().named_entity(),
        Some(NamedEntityType::Money)
    );
    assert_eq!(
        sentence.word(2).unwrap().named_entity(),
        Some(NamedEntityType::Money)
    );
    assert!(sentence.word(3).unwrap().argument().unwrap().is_predicate());
    assert_eq!(
        sentence.word(0).unwrap().argument().unwrap().role_type(),
        "ARG0"
    );

    // a second run finds nothing left to fill
    let second = pipeline.annotate(&mut sentence);
    assert!(!second.changed());
}

#[test]
fn test_pipeline_render_after_annotation() {
    let analyzer = analyzer();
    let statistics = RootWordStatistics::new();
    let senses = FixtureSenses::new();
    let persons = HashSetGazetteer::new(["ali"]);
    let locations = HashSetGazetteer::new(std::iter::empty::<&str>());
    let organizations = HashSetGazetteer::new(std::iter::empty::<&str>());
    let frames = FixtureFrames(vec![]);
    let pipeline = AnnotationPipeline::new(
        &analyzer,
        &statistics,
        &senses,
        &persons,
        &locations,
        &organizations,
        &frames,
    );

    let mut sentence = AnnotatedSentence::decode("{turkish=Ali} {turkish=kazandı}").unwrap();
    pipeline.annotate(&mut sentence);

    let display = SentenceDisplay::new(&sentence)
        .with(annotated_sentence::LayerKey::NamedEntity)
        .with(annotated_sentence::LayerKey::MorphologicalAnalysis);
    insta::assert_snapshot!(display.to_string(), @r###"
    Ali  kazandı
    ╰namedEntity=PERSON
         ╰morphologicalAnalysis=kazan+VERB+POS+PAST+A3SG
    ╰morphologicalAnalysis=ali+NOUN+PROP+A3SG+NOM
    "###);
}

#[test]
fn test_statistics_collection_pass() {
    let analyzer = FixtureAnalyzer::new()
        .entry("yüzün", "yüz+NOUN+A3SG+P2SG+NOM", "yüz+Hn")
        .entry("yüzün", "yüzün+NOUN+A3SG+NOM", "yüzün");
    let mut corpus = AnnotatedCorpus::new();
    corpus.push_sentence(
        AnnotatedSentence::decode_with_source(
            "{turkish=yüzün}{morphologicalAnalysis=yüz+NOUN+A3SG+P2SG+NOM}",
            "treebank-1",
        )
        .unwrap(),
    );

    let mut statistics = RootWordStatistics::new();
    statistics.collect(&corpus, &analyzer);
    assert_eq!(statistics.best_root_word("yüz$yüzün", 0.0), Some("yüz"));
    assert_eq!(
        statistics.record("yüz$yüzün").unwrap().sources(),
        ["treebank-1"]
    );
    // the collection input itself is untouched
    assert_eq!(corpus.sentence(0).unwrap().word_count(), 1);
}
