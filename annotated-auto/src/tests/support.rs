//! Shared fixtures for the pipeline tests.

use std::collections::HashMap;

use annotated_sentence::FrameLookup;

use crate::{MorphologicalAnalyzer, ParseCandidate, ParseCandidateList, SenseInventory};

/// A table-backed analyzer: surface word to candidate list.
#[derive(Default)]
pub struct FixtureAnalyzer {
    table: HashMap<String, Vec<ParseCandidate>>,
}

impl FixtureAnalyzer {
    pub fn new() -> Self {
        FixtureAnalyzer::default()
    }

    /// Register one candidate as `transition_list` / `segmentation`.
    pub fn entry(mut self, surface: &str, transition_list: &str, segmentation: &str) -> Self {
        self.table
            .entry(surface.to_string())
            .or_default()
            .push(ParseCandidate::from_texts(transition_list, segmentation));
        self
    }
}

impl MorphologicalAnalyzer for FixtureAnalyzer {
    fn analyze(&self, surface: &str) -> ParseCandidateList {
        ParseCandidateList::new(self.table.get(surface).cloned().unwrap_or_default())
    }
}

/// A frame inventory over a fixed sense list.
pub struct FixtureFrames(pub Vec<&'static str>);

impl FrameLookup for FixtureFrames {
    fn frame_exists(&self, sense: &str) -> bool {
        self.0.contains(&sense)
    }
}

/// A sense inventory: root word to sense ids.
#[derive(Default)]
pub struct FixtureSenses {
    table: HashMap<String, Vec<String>>,
}

impl FixtureSenses {
    pub fn new() -> Self {
        FixtureSenses::default()
    }

    pub fn entry(mut self, root: &str, senses: &[&str]) -> Self {
        self.table.insert(
            root.to_string(),
            senses.iter().map(|sense| sense.to_string()).collect(),
        );
        self
    }
}

impl SenseInventory for FixtureSenses {
    fn senses(&self, root: &str) -> Vec<String> {
        self.table.get(root).cloned().unwrap_or_default()
    }
}
