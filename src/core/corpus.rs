use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    errors::LinguessError,
    models::QuoteRecord,
};

const EMBEDDED_QUOTES: &str = include_str!("../../assets/quotes.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    Embedded,
    File(PathBuf),
}

impl CorpusSource {
    pub fn from_setting(path: Option<&Path>) -> Self {
        match path {
            Some(path) => CorpusSource::File(path.to_path_buf()),
            None => CorpusSource::Embedded,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Embedded => "built-in corpus".to_string(),
            CorpusSource::File(path) => path.display().to_string(),
        }
    }
}

/// Quote records plus the distinct languages they cover, in first-seen order.
#[derive(Debug, Clone)]
pub struct Corpus {
    quotes: Vec<QuoteRecord>,
    languages: Vec<String>,
}

impl Corpus {
    pub fn new(quotes: Vec<QuoteRecord>) -> Result<Self, LinguessError> {
        if quotes.is_empty() {
            return Err(LinguessError::EmptyCorpus);
        }

        let mut languages: Vec<String> = Vec::new();
        for record in &quotes {
            if !languages.contains(&record.language) {
                languages.push(record.language.clone());
            }
        }

        match languages.len() {
            0 | 1 => return Err(LinguessError::NotEnoughLanguages(languages.len())),
            2 => tracing::warn!(
                "Corpus only covers {} and {}; both distractors will repeat the same language",
                languages[0],
                languages[1]
            ),
            _ => {}
        }

        Ok(Self { quotes, languages })
    }

    pub fn from_json_str(text: &str) -> Result<Self, LinguessError> {
        let quotes: Vec<QuoteRecord> = serde_json::from_str(text)?;
        Self::new(quotes)
    }

    pub fn from_path(path: &Path) -> Result<Self, LinguessError> {
        let text = fs::read_to_string(path).map_err(|e| {
            LinguessError::FailedToLoadFile(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn embedded() -> Result<Self, LinguessError> {
        Self::from_json_str(EMBEDDED_QUOTES)
    }

    pub fn load(source: &CorpusSource) -> Result<Self, LinguessError> {
        let corpus = match source {
            CorpusSource::Embedded => Self::embedded()?,
            CorpusSource::File(path) => Self::from_path(path)?,
        };

        tracing::info!(
            "Loaded {} quotes in {} languages from {}",
            corpus.len(),
            corpus.languages.len(),
            source.describe()
        );
        Ok(corpus)
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Every distinct language except `language`.
    pub fn distractor_pool(&self, language: &str) -> Vec<&str> {
        self.languages.iter().map(String::as_str).filter(|l| *l != language).collect()
    }
}
