//! Morphological analysis layers.
//!
//! The morphological analyzer itself is an external collaborator; this
//! module only models its output. A `MorphologicalParse` is a
//! transition list such as `kitap+NOUN+A3SG+P3SG+ACC`, split into
//! inflectional groups at derivation boundaries (`^DB+`). A
//! `MetamorphicParse` is the matching surface segmentation into
//! morphemes (`kitab+H+HmHz`).

use serde::{Deserialize, Serialize};

/// Morphological feature tags the pipeline queries for.
///
/// Only the tags the rule engines look at are enumerated; everything
/// else stays an opaque string inside the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphologicalTag {
    ProperNoun,
    Cardinal,
    Real,
    Number,
    Passive,
}

impl MorphologicalTag {
    /// Tag symbol as it appears inside a transition list.
    pub fn symbol(self) -> &'static str {
        match self {
            MorphologicalTag::ProperNoun => "PROP",
            MorphologicalTag::Cardinal => "CARD",
            MorphologicalTag::Real => "REAL",
            MorphologicalTag::Number => "NUM",
            MorphologicalTag::Passive => "PASS",
        }
    }
}

/// A single selected morphological analysis of a word.
///
/// Equality and (de)serialization go through the transition-list text,
/// so a parse round-trips through the layer codec byte-exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MorphologicalParse {
    text: String,
    root: String,
    /// Tag strings per inflectional group; the root is not included in
    /// the first group.
    groups: Vec<Vec<String>>,
}

impl MorphologicalParse {
    pub fn new(transition_list: &str) -> Self {
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut root = String::new();
        for (index, group) in transition_list.split("^DB+").enumerate() {
            let mut tags: Vec<String> = group.split('+').map(str::to_string).collect();
            if index == 0 {
                root = if tags.is_empty() { String::new() } else { tags.remove(0) };
            }
            groups.push(tags);
        }
        MorphologicalParse {
            text: transition_list.to_string(),
            root,
            groups,
        }
    }

    /// Root word (lemma) of the analysis.
    pub fn lemma(&self) -> &str {
        &self.root
    }

    /// Part of speech of the whole analysis: the leading tag of the
    /// last inflectional group.
    pub fn pos(&self) -> Option<&str> {
        self.groups
            .last()
            .and_then(|group| group.first())
            .map(String::as_str)
    }

    /// Part of speech of the root: the leading tag of the first group.
    pub fn root_pos(&self) -> Option<&str> {
        self.groups
            .first()
            .and_then(|group| group.first())
            .map(String::as_str)
    }

    pub fn is_verb(&self) -> bool {
        self.pos() == Some("VERB")
    }

    /// Whether any inflectional group carries the given tag.
    pub fn contains_tag(&self, tag: MorphologicalTag) -> bool {
        let symbol = tag.symbol();
        self.groups
            .iter()
            .any(|group| group.iter().any(|t| t == symbol))
    }

    /// Universal POS tag for CoNLL-U export.
    pub fn universal_dependency_pos(&self) -> &'static str {
        if self.contains_tag(MorphologicalTag::ProperNoun) {
            return "PROPN";
        }
        match self.pos() {
            Some("NOUN") => "NOUN",
            Some("VERB") => "VERB",
            Some("ADJ") => "ADJ",
            Some("ADV") => "ADV",
            Some("PRON") => "PRON",
            Some("DET") => "DET",
            Some("NUM") => "NUM",
            Some("CONJ") => "CCONJ",
            Some("POSTP") => "ADP",
            Some("INTERJ") => "INTJ",
            Some("QUES") => "AUX",
            Some("PUNC") => "PUNCT",
            _ => "X",
        }
    }

    /// Universal features for CoNLL-U export, alphabetically sorted and
    /// deduplicated as the format requires.
    pub fn universal_dependency_features(&self, universal_pos: &str) -> Vec<String> {
        let mut features: Vec<String> = Vec::new();
        for group in &self.groups {
            for tag in group {
                match tag.as_str() {
                    "A1SG" => push_all(&mut features, &["Number=Sing", "Person=1"]),
                    "A2SG" => push_all(&mut features, &["Number=Sing", "Person=2"]),
                    "A3SG" => push_all(&mut features, &["Number=Sing", "Person=3"]),
                    "A1PL" => push_all(&mut features, &["Number=Plur", "Person=1"]),
                    "A2PL" => push_all(&mut features, &["Number=Plur", "Person=2"]),
                    "A3PL" => push_all(&mut features, &["Number=Plur", "Person=3"]),
                    "P1SG" => push_all(&mut features, &["Number[psor]=Sing", "Person[psor]=1"]),
                    "P2SG" => push_all(&mut features, &["Number[psor]=Sing", "Person[psor]=2"]),
                    "P3SG" => push_all(&mut features, &["Number[psor]=Sing", "Person[psor]=3"]),
                    "P1PL" => push_all(&mut features, &["Number[psor]=Plur", "Person[psor]=1"]),
                    "P2PL" => push_all(&mut features, &["Number[psor]=Plur", "Person[psor]=2"]),
                    "P3PL" => push_all(&mut features, &["Number[psor]=Plur", "Person[psor]=3"]),
                    "NOM" => push_all(&mut features, &["Case=Nom"]),
                    "ACC" => push_all(&mut features, &["Case=Acc"]),
                    "DAT" => push_all(&mut features, &["Case=Dat"]),
                    "LOC" => push_all(&mut features, &["Case=Loc"]),
                    "ABL" => push_all(&mut features, &["Case=Abl"]),
                    "GEN" => push_all(&mut features, &["Case=Gen"]),
                    "INS" => push_all(&mut features, &["Case=Ins"]),
                    "PASS" => push_all(&mut features, &["Voice=Pass"]),
                    "CAUS" => push_all(&mut features, &["Voice=Cau"]),
                    "NEG" if universal_pos == "VERB" => {
                        push_all(&mut features, &["Polarity=Neg"])
                    }
                    "POS" if universal_pos == "VERB" => {
                        push_all(&mut features, &["Polarity=Pos"])
                    }
                    "PAST" => push_all(&mut features, &["Tense=Past"]),
                    "NARR" => push_all(&mut features, &["Evident=Nfh", "Tense=Past"]),
                    "FUT" => push_all(&mut features, &["Tense=Fut"]),
                    "PRES" => push_all(&mut features, &["Tense=Pres"]),
                    "PROG1" | "PROG2" => push_all(&mut features, &["Aspect=Prog"]),
                    "AOR" => push_all(&mut features, &["Aspect=Hab"]),
                    "COND" => push_all(&mut features, &["Mood=Cnd"]),
                    "IMP" => push_all(&mut features, &["Mood=Imp"]),
                    "OPT" => push_all(&mut features, &["Mood=Opt"]),
                    _ => {}
                }
            }
        }
        features.sort();
        features.dedup();
        features
    }

    /// Full transition list as decoded.
    pub fn transition_list(&self) -> &str {
        &self.text
    }
}

fn push_all(features: &mut Vec<String>, values: &[&str]) {
    for value in values {
        features.push((*value).to_string());
    }
}

impl PartialEq for MorphologicalParse {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for MorphologicalParse {}

impl std::fmt::Display for MorphologicalParse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for MorphologicalParse {
    fn from(text: String) -> Self {
        MorphologicalParse::new(&text)
    }
}

impl From<MorphologicalParse> for String {
    fn from(parse: MorphologicalParse) -> Self {
        parse.text
    }
}

/// Morpheme-level segmentation paired with a morphological analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MetamorphicParse {
    morphemes: Vec<String>,
}

impl MetamorphicParse {
    pub fn new(segmentation: &str) -> Self {
        MetamorphicParse {
            morphemes: segmentation.split('+').map(str::to_string).collect(),
        }
    }

    pub fn morphemes(&self) -> &[String] {
        &self.morphemes
    }

    /// The root morpheme, i.e. the first segment.
    pub fn root_morpheme(&self) -> Option<&str> {
        self.morphemes.first().map(String::as_str)
    }

    pub fn morpheme_count(&self) -> usize {
        self.morphemes.len()
    }
}

impl PartialEq for MetamorphicParse {
    fn eq(&self, other: &Self) -> bool {
        self.morphemes == other.morphemes
    }
}

impl Eq for MetamorphicParse {}

impl std::fmt::Display for MetamorphicParse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.morphemes.join("+"))
    }
}

impl From<String> for MetamorphicParse {
    fn from(text: String) -> Self {
        MetamorphicParse::new(&text)
    }
}

impl From<MetamorphicParse> for String {
    fn from(parse: MetamorphicParse) -> Self {
        parse.morphemes.join("+")
    }
}
