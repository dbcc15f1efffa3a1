use rand::{
    seq::SliceRandom,
    Rng,
};
use serde::{
    Deserialize,
    Serialize,
};

pub const OPTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub translation: String,
    pub author: String,
    pub language: String,
}

/// The three language names offered for a quote, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet([String; OPTION_COUNT]);

impl OptionSet {
    pub fn new<R: Rng + ?Sized>(
        correct: impl Into<String>,
        distractors: [String; 2],
        rng: &mut R,
    ) -> Self {
        let [first, second] = distractors;
        let mut languages = [first, second, correct.into()];
        languages.shuffle(rng);
        Self(languages)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        OPTION_COUNT
    }

    pub fn position_of(&self, language: &str) -> Option<usize> {
        self.0.iter().position(|l| l == language)
    }

    pub fn is_correct(&self, index: usize, language: &str) -> bool {
        self.get(index).map_or(false, |option| option == language)
    }
}
