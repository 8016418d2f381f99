//! Corpus-derived root frequencies for breaking root ambiguity.

use std::collections::BTreeMap;

use annotated_sentence::AnnotatedCorpus;
use serde::{Deserialize, Serialize};

use crate::analyzer::MorphologicalAnalyzer;

/// Observations for one ambiguity signature: how often each root was
/// the annotated one, and which sources the observations came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    counts: BTreeMap<String, u64>,
    sources: Vec<String>,
}

impl SignatureRecord {
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

/// Frequency table keyed by ambiguity signature.
///
/// Built in one pass over an annotated corpus, then treated as
/// read-only while the disambiguation cascade consults it. Maps are
/// ordered so that ties and serialized output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootWordStatistics {
    records: BTreeMap<String, SignatureRecord>,
}

impl RootWordStatistics {
    pub fn new() -> Self {
        RootWordStatistics::default()
    }

    pub fn signature_count(&self) -> usize {
        self.records.len()
    }

    pub fn record(&self, signature: &str) -> Option<&SignatureRecord> {
        self.records.get(signature)
    }

    /// Count one observation: under `signature`, the annotated root was
    /// `root`. The source identifier is kept for provenance only.
    pub fn add_observation(&mut self, signature: &str, root: &str, source: Option<&str>) {
        let record = self.records.entry(signature.to_string()).or_default();
        *record.counts.entry(root.to_string()).or_insert(0) += 1;
        if let Some(source) = source {
            if !record.sources.iter().any(|s| s == source) {
                record.sources.push(source.to_string());
            }
        }
    }

    /// One collection pass over a disambiguated corpus. Every word that
    /// carries a parse and whose analyzer candidate set is
    /// root-ambiguous contributes its annotated root.
    pub fn collect(&mut self, corpus: &AnnotatedCorpus, analyzer: &dyn MorphologicalAnalyzer) {
        for sentence in corpus {
            for word in sentence.words() {
                let parse = match word.parse() {
                    Some(parse) => parse,
                    None => continue,
                };
                let candidates = analyzer.analyze(word.name());
                if candidates.is_root_ambiguous() {
                    self.add_observation(
                        &candidates.root_signature(),
                        parse.lemma(),
                        sentence.source(),
                    );
                }
            }
        }
    }

    /// The most frequent root for `signature`, provided its share of
    /// the observations exceeds `threshold`. Ties go to the
    /// lexicographically smallest root.
    pub fn best_root_word(&self, signature: &str, threshold: f64) -> Option<&str> {
        let record = self.records.get(signature)?;
        let total: u64 = record.counts.values().sum();
        if total == 0 {
            return None;
        }
        let (best_root, best_count) = record
            .counts
            .iter()
            .max_by_key(|(root, count)| (*count, std::cmp::Reverse(root.as_str())))?;
        if *best_count as f64 / total as f64 > threshold {
            Some(best_root.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_root_word_threshold() {
        let mut statistics = RootWordStatistics::new();
        for _ in 0..9 {
            statistics.add_observation("yüz$yüzün", "yüz", Some("corpus-a"));
        }
        statistics.add_observation("yüz$yüzün", "yüzün", Some("corpus-b"));

        assert_eq!(statistics.best_root_word("yüz$yüzün", 0.5), Some("yüz"));
        assert_eq!(statistics.best_root_word("yüz$yüzün", 0.95), None);
        assert_eq!(statistics.best_root_word("göz$gözün", 0.0), None);
        assert_eq!(
            statistics.record("yüz$yüzün").unwrap().sources(),
            ["corpus-a", "corpus-b"]
        );
    }

    #[test]
    fn test_ties_break_to_smallest_root() {
        let mut statistics = RootWordStatistics::new();
        statistics.add_observation("al$alın", "alın", None);
        statistics.add_observation("al$alın", "al", None);
        assert_eq!(statistics.best_root_word("al$alın", 0.0), Some("al"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut statistics = RootWordStatistics::new();
        statistics.add_observation("yüz$yüzün", "yüz", Some("pilot"));
        let json = serde_json::to_string(&statistics).unwrap();
        let back: RootWordStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(statistics, back);
    }
}
