pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    Corpus,
    CorpusSource,
    LinguessError,
    OptionMark,
    OptionSet,
    Phase,
    QuizEvent,
    QuizSession,
    QuizState,
    QuoteRecord,
    QuoteSampler,
};
