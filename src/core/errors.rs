use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinguessError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Quote corpus contains no quotes")]
    EmptyCorpus,

    #[error("Quote corpus needs at least 2 distinct languages, found {0}")]
    NotEnoughLanguages(usize),

    #[error("Option index {0} is out of range")]
    OptionOutOfRange(usize),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("LinguessError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LinguessError {
    fn from(error: std::io::Error) -> Self {
        LinguessError::Io(Box::new(error))
    }
}
