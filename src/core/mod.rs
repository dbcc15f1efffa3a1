pub mod corpus;
pub mod errors;
pub mod models;
pub mod quiz;
pub mod sampler;

pub use corpus::{
    Corpus,
    CorpusSource,
};
pub use errors::LinguessError;
pub use models::{
    OptionSet,
    QuoteRecord,
};
pub use quiz::{
    OptionMark,
    Phase,
    QuizEvent,
    QuizSession,
    QuizState,
};
pub use sampler::{
    Draw,
    QuoteSampler,
};
