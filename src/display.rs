use unicode_width::UnicodeWidthStr;

use crate::layer::LayerKey;
use crate::sentence::AnnotatedSentence;

/// Monospace rendering of a sentence and a chosen subset of its layers.
///
/// The surface forms go on one line, padded apart; every included layer
/// gets one marker line per annotated word, rightmost word first:
///
/// ```text
/// Ali  dün  geldi
///           ╰morphologicalAnalysis=gel+VERB+POS+PAST+A3SG
/// ╰namedEntity=PERSON
/// ```
///
/// Intended for snapshot tests and debugging, not for machine parsing.
pub struct SentenceDisplay<'a> {
    sentence: &'a AnnotatedSentence,
    include_keys: Vec<LayerKey>,
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a AnnotatedSentence) -> Self {
        SentenceDisplay {
            sentence,
            include_keys: Vec::new(),
        }
    }

    pub fn include(&mut self, key: LayerKey) {
        self.include_keys.push(key);
    }

    /// Takes self
    pub fn with(mut self, key: LayerKey) -> Self {
        self.include(key);
        self
    }
}

impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut word_start_display_col = Vec::new();
        // write opening display text
        let mut opening_line = String::new();
        for (index, word) in self.sentence.words().iter().enumerate() {
            if index > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            word_start_display_col.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(word.name());
        }
        f.write_str(&opening_line)?;

        for key in &self.include_keys {
            for (index, word) in self.sentence.words().iter().enumerate().rev() {
                if let Some(value) = word.layer_value(*key) {
                    f.write_str("\n")?;
                    for _ in 0..word_start_display_col[index] {
                        f.write_str(" ")?;
                    }
                    write!(f, "╰{}={}", key.canonical(), value)?;
                }
            }
        }
        Ok(())
    }
}
