use rand::{
    rngs::StdRng,
    Rng,
};

use super::{
    corpus::Corpus,
    errors::LinguessError,
    models::{
        OptionSet,
        QuoteRecord,
    },
    sampler::{
        Draw,
        QuoteSampler,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    OptionPressed(usize),
    ToggleTranslation,
    NextQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Correct,
    Incorrect,
}

/// How an option button should be drawn. Only the selected option is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    quote: QuoteRecord,
    options: OptionSet,
    selected: Option<usize>,
    is_correct: bool,
    show_translation: bool,
}

impl QuizState {
    pub fn new(draw: Draw) -> Self {
        Self {
            quote: draw.quote,
            options: draw.options,
            selected: None,
            is_correct: false,
            show_translation: false,
        }
    }

    pub fn quote(&self) -> &QuoteRecord {
        &self.quote
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn show_translation(&self) -> bool {
        self.show_translation
    }

    pub fn phase(&self) -> Phase {
        match (self.selected, self.is_correct) {
            (None, _) => Phase::Unanswered,
            (Some(_), true) => Phase::Correct,
            (Some(_), false) => Phase::Incorrect,
        }
    }

    /// Records a guess. A correct guess reveals the translation, a wrong one hides it.
    pub fn select_option(&mut self, index: usize) -> Result<Phase, LinguessError> {
        if index >= self.options.len() {
            return Err(LinguessError::OptionOutOfRange(index));
        }

        self.selected = Some(index);
        self.is_correct = self.options.is_correct(index, &self.quote.language);
        self.show_translation = self.is_correct;
        Ok(self.phase())
    }

    /// Flips between the quote and its translation. Returns false outside the Correct phase.
    pub fn toggle_translation(&mut self) -> bool {
        if self.phase() != Phase::Correct {
            return false;
        }
        self.show_translation = !self.show_translation;
        true
    }

    pub fn reset(&mut self, draw: Draw) {
        *self = Self::new(draw);
    }

    pub fn displayed_text(&self) -> &str {
        if self.show_translation {
            &self.quote.translation
        } else {
            &self.quote.quote
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_translation {
            "Original"
        } else {
            "English"
        }
    }

    pub fn feedback(&self) -> Option<&'static str> {
        match self.phase() {
            Phase::Incorrect => Some("Try again"),
            _ => None,
        }
    }

    pub fn option_mark(&self, index: usize) -> OptionMark {
        match self.selected {
            Some(selected) if selected == index => {
                if self.is_correct {
                    OptionMark::Success
                } else {
                    OptionMark::Destructive
                }
            }
            _ => OptionMark::Neutral,
        }
    }
}

pub struct QuizSession<R = StdRng> {
    sampler: QuoteSampler<R>,
    state: QuizState,
}

impl QuizSession<StdRng> {
    pub fn from_corpus(corpus: Corpus) -> Result<Self, LinguessError> {
        Self::new(QuoteSampler::from_entropy(corpus))
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn new(mut sampler: QuoteSampler<R>) -> Result<Self, LinguessError> {
        let state = QuizState::new(sampler.draw()?);
        Ok(Self { sampler, state })
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn corpus(&self) -> &Corpus {
        self.sampler.corpus()
    }

    pub fn apply(&mut self, event: QuizEvent) -> Result<Phase, LinguessError> {
        match event {
            QuizEvent::OptionPressed(index) => {
                let phase = self.state.select_option(index)?;
                tracing::debug!("Option {} pressed, now {:?}", index, phase);
            }
            QuizEvent::ToggleTranslation => {
                if !self.state.toggle_translation() {
                    tracing::debug!("Ignored translation toggle in {:?}", self.state.phase());
                }
            }
            QuizEvent::NextQuote => self.next_quote()?,
        }

        Ok(self.state.phase())
    }

    pub fn next_quote(&mut self) -> Result<(), LinguessError> {
        let draw = self.sampler.draw()?;
        self.state.reset(draw);
        Ok(())
    }

    /// Swaps in a new corpus and starts over with a quote drawn from it.
    pub fn replace_corpus(&mut self, corpus: Corpus) -> Result<(), LinguessError> {
        self.sampler.set_corpus(corpus);
        self.next_quote()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn fixed_state() -> QuizState {
        let quote = QuoteRecord {
            quote: "Veni, vidi, vici.".to_string(),
            translation: "I came, I saw, I conquered.".to_string(),
            author: "Julius Caesar".to_string(),
            language: "Latin".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(5);
        let options =
            OptionSet::new("Latin", ["French".to_string(), "German".to_string()], &mut rng);
        QuizState::new(Draw { quote, options })
    }

    fn indices(state: &QuizState) -> (usize, usize) {
        let correct = state.options().position_of("Latin").unwrap();
        let wrong = (correct + 1) % 3;
        (correct, wrong)
    }

    #[test]
    fn test_fresh_state_is_unanswered() {
        let state = fixed_state();
        assert_eq!(state.phase(), Phase::Unanswered);
        assert_eq!(state.displayed_text(), "Veni, vidi, vici.");
        assert_eq!(state.toggle_label(), "English");
        assert_eq!(state.feedback(), None);
        assert!((0..3).all(|i| state.option_mark(i) == OptionMark::Neutral));
    }

    #[test]
    fn test_correct_guess_reveals_translation() {
        let mut state = fixed_state();
        let (correct, wrong) = indices(&state);

        assert_eq!(state.select_option(correct).unwrap(), Phase::Correct);
        assert!(state.show_translation());
        assert_eq!(state.displayed_text(), "I came, I saw, I conquered.");
        assert_eq!(state.toggle_label(), "Original");
        assert_eq!(state.option_mark(correct), OptionMark::Success);
        assert_eq!(state.option_mark(wrong), OptionMark::Neutral);
    }

    #[test]
    fn test_wrong_guess_asks_to_try_again() {
        let mut state = fixed_state();
        let (_, wrong) = indices(&state);

        assert_eq!(state.select_option(wrong).unwrap(), Phase::Incorrect);
        assert!(!state.show_translation());
        assert_eq!(state.feedback(), Some("Try again"));
        assert_eq!(state.option_mark(wrong), OptionMark::Destructive);
    }

    #[test]
    fn test_toggle_only_works_after_a_correct_guess() {
        let mut state = fixed_state();
        let (correct, wrong) = indices(&state);

        assert!(!state.toggle_translation());
        state.select_option(wrong).unwrap();
        assert!(!state.toggle_translation());
        assert!(!state.show_translation());

        state.select_option(correct).unwrap();
        assert!(state.toggle_translation());
        assert_eq!(state.displayed_text(), "Veni, vidi, vici.");
        assert!(state.toggle_translation());
        assert_eq!(state.displayed_text(), "I came, I saw, I conquered.");
    }

    #[test]
    fn test_reanswering_after_correct_hides_translation() {
        let mut state = fixed_state();
        let (correct, wrong) = indices(&state);

        state.select_option(correct).unwrap();
        assert_eq!(state.select_option(wrong).unwrap(), Phase::Incorrect);
        assert!(!state.show_translation());
        assert_eq!(state.option_mark(correct), OptionMark::Neutral);
    }

    #[test]
    fn test_out_of_range_option_leaves_state_untouched() {
        let mut state = fixed_state();
        let before = state.clone();

        assert!(matches!(state.select_option(3), Err(LinguessError::OptionOutOfRange(3))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_session_next_quote_resets_everything() {
        let corpus = Corpus::embedded().unwrap();
        let sampler = QuoteSampler::new(corpus, StdRng::seed_from_u64(11));
        let mut session = QuizSession::new(sampler).unwrap();

        let correct = session
            .state()
            .options()
            .position_of(&session.state().quote().language)
            .unwrap();
        assert_eq!(session.apply(QuizEvent::OptionPressed(correct)).unwrap(), Phase::Correct);
        assert_eq!(session.apply(QuizEvent::ToggleTranslation).unwrap(), Phase::Correct);
        assert!(!session.state().show_translation());

        assert_eq!(session.apply(QuizEvent::NextQuote).unwrap(), Phase::Unanswered);
        let state = session.state();
        assert_eq!(state.selected(), None);
        assert!(!state.is_correct());
        assert!(!state.show_translation());
        assert!(state.options().position_of(&state.quote().language).is_some());
    }

    #[test]
    fn test_replace_corpus_draws_from_the_new_corpus() {
        let sampler = QuoteSampler::new(Corpus::embedded().unwrap(), StdRng::seed_from_u64(2));
        let mut session = QuizSession::new(sampler).unwrap();

        let corpus = Corpus::from_json_str(
            r#"[
                {"quote":"Ahoj","translation":"Hello","author":"Anon","language":"Czech"},
                {"quote":"Hei","translation":"Hello","author":"Anon","language":"Finnish"}
            ]"#,
        )
        .unwrap();
        session.replace_corpus(corpus).unwrap();

        let language = session.state().quote().language.as_str();
        assert!(language == "Czech" || language == "Finnish");
        assert_eq!(session.corpus().len(), 2);
        assert_eq!(session.state().phase(), Phase::Unanswered);
    }
}
