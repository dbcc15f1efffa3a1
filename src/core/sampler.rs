use rand::{
    rngs::StdRng,
    seq::IndexedRandom,
    Rng,
    SeedableRng,
};

use super::{
    corpus::Corpus,
    errors::LinguessError,
    models::{
        OptionSet,
        QuoteRecord,
    },
};

/// A quote together with the options offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub quote: QuoteRecord,
    pub options: OptionSet,
}

pub fn pick_quote<'a, R: Rng + ?Sized>(corpus: &'a Corpus, rng: &mut R) -> &'a QuoteRecord {
    // Corpus::new refuses empty input, so the range is never empty.
    let quotes = corpus.quotes();
    &quotes[rng.random_range(0..quotes.len())]
}

/// Two distractors sampled without replacement from the other languages, plus
/// the correct one, shuffled. A single other language fills both slots.
pub fn build_options<R: Rng + ?Sized>(
    corpus: &Corpus,
    quote: &QuoteRecord,
    rng: &mut R,
) -> Result<OptionSet, LinguessError> {
    let pool = corpus.distractor_pool(&quote.language);
    let picked: Vec<String> = pool.choose_multiple(rng, 2).map(|l| l.to_string()).collect();

    let distractors = match picked.as_slice() {
        [first, second] => [first.clone(), second.clone()],
        [only] => [only.clone(), only.clone()],
        _ => return Err(LinguessError::NotEnoughLanguages(corpus.languages().len())),
    };

    Ok(OptionSet::new(quote.language.clone(), distractors, rng))
}

pub struct QuoteSampler<R = StdRng> {
    corpus: Corpus,
    rng: R,
}

impl QuoteSampler<StdRng> {
    pub fn from_entropy(corpus: Corpus) -> Self {
        Self::new(corpus, StdRng::from_os_rng())
    }
}

impl<R: Rng> QuoteSampler<R> {
    pub fn new(corpus: Corpus, rng: R) -> Self {
        Self { corpus, rng }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn set_corpus(&mut self, corpus: Corpus) {
        self.corpus = corpus;
    }

    pub fn draw(&mut self) -> Result<Draw, LinguessError> {
        let quote = pick_quote(&self.corpus, &mut self.rng).clone();
        let options = build_options(&self.corpus, &quote, &mut self.rng)?;
        tracing::debug!("Drew a {} quote by {}", quote.language, quote.author);
        Ok(Draw { quote, options })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::{
        prelude::{
            any,
            prop,
        },
        prop_assert_eq,
        prop_assert_ne,
        prop_assume,
        proptest,
    };

    use super::*;

    fn record(language: &str) -> QuoteRecord {
        QuoteRecord {
            quote: format!("A quote in {}", language),
            translation: "A quote".to_string(),
            author: "Anon".to_string(),
            language: language.to_string(),
        }
    }

    fn corpus_of(languages: &[&str]) -> Corpus {
        Corpus::new(languages.iter().map(|l| record(l)).collect()).unwrap()
    }

    #[test]
    fn test_two_language_corpus_repeats_the_distractor() {
        let corpus = corpus_of(&["French", "Latin"]);
        let mut rng = StdRng::seed_from_u64(1);
        let options = build_options(&corpus, &record("French"), &mut rng).unwrap();

        assert_eq!(options.iter().filter(|l| *l == "French").count(), 1);
        assert_eq!(options.iter().filter(|l| *l == "Latin").count(), 2);
    }

    #[test]
    fn test_distractors_cover_every_other_language_over_many_draws() {
        let corpus = corpus_of(&["French", "Latin", "German", "Spanish", "Italian"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let options = build_options(&corpus, &record("French"), &mut rng).unwrap();
            seen.extend(options.iter().filter(|l| *l != "French").map(str::to_string));
        }

        let expected: HashSet<String> =
            ["Latin", "German", "Spanish", "Italian"].iter().map(|l| l.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_correct_option_moves_between_positions() {
        let corpus = corpus_of(&["French", "Latin", "German"]);
        let mut rng = StdRng::seed_from_u64(3);
        let positions: HashSet<usize> = (0..100)
            .filter_map(|_| {
                build_options(&corpus, &record("Latin"), &mut rng).unwrap().position_of("Latin")
            })
            .collect();

        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn test_sampler_draws_from_its_corpus() {
        let corpus = Corpus::embedded().unwrap();
        let mut sampler = QuoteSampler::new(corpus, StdRng::seed_from_u64(9));

        for _ in 0..20 {
            let draw = sampler.draw().unwrap();
            assert!(sampler.corpus().quotes().contains(&draw.quote));
            assert!(draw.options.position_of(&draw.quote.language).is_some());
        }
    }

    proptest! {
        #[test]
        fn prop_option_set_invariants(
            seed in any::<u64>(),
            languages in prop::collection::vec("[A-Z][a-z]{2,8}", 2..12),
        ) {
            let corpus = Corpus::new(languages.iter().map(|l| record(l)).collect());
            prop_assume!(corpus.is_ok());
            let corpus = corpus.unwrap();
            let mut sampler = QuoteSampler::new(corpus, StdRng::seed_from_u64(seed));
            let draw = sampler.draw().unwrap();
            let correct = draw.quote.language.as_str();

            prop_assert_eq!(draw.options.len(), 3);
            prop_assert_eq!(draw.options.iter().filter(|l| *l == correct).count(), 1);

            let distractors: Vec<&str> = draw.options.iter().filter(|l| *l != correct).collect();
            prop_assert_eq!(distractors.len(), 2);
            if sampler.corpus().languages().len() >= 3 {
                prop_assert_ne!(distractors[0], distractors[1]);
            }
        }
    }
}
