use itertools::Itertools;

/// Number of wrong guesses a player gets before a round is lost.
pub const MAX_GUESSES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// Session-wide tally across rounds. `words_guessed + words_missed`
/// always equals `current_word_index` between rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub words_guessed: usize,
    pub words_missed: usize,
    pub current_word_index: usize,
}

/// State of the word currently being guessed.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub target_word: String,
    pub letters_guessed: Vec<char>,
    pub guesses_remaining: usize,
    pub outcome: RoundOutcome,
}

impl RoundState {
    fn new(target_word: String) -> Self {
        Self {
            target_word,
            letters_guessed: Vec::new(),
            guesses_remaining: MAX_GUESSES,
            outcome: RoundOutcome::InProgress,
        }
    }

    /// The target word with unguessed letters masked, e.g. "D _ G".
    pub fn revealed_pattern(&self) -> String {
        self.target_word
            .chars()
            .map(|c| {
                if self.letters_guessed.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .join(" ")
    }

    pub fn is_revealed(&self) -> bool {
        self.target_word
            .chars()
            .all(|c| self.letters_guessed.contains(&c))
    }

    /// Whether a previously submitted letter was a miss.
    pub fn is_miss(&self, letter: char) -> bool {
        !self.target_word.contains(letter.to_ascii_uppercase())
    }
}

/// Everything the presentation layer needs to render after one guess.
#[derive(Clone, Debug)]
pub struct GuessReport {
    pub outcome: RoundOutcome,
    pub revealed_pattern: String,
    pub guesses_remaining: usize,
    pub status_message: String,
    pub session_complete: bool,
}

/// The game engine: a session over a fixed word list, one round at a
/// time. The word list is immutable for the lifetime of the session.
#[derive(Debug)]
pub struct Game {
    words: Vec<String>,
    session: SessionState,
    round: Option<RoundState>,
    session_complete: bool,
}

impl Game {
    pub fn new(words: Vec<String>) -> Self {
        assert!(!words.is_empty(), "word list must not be empty");
        let mut game = Self {
            words,
            session: SessionState::default(),
            round: None,
            session_complete: false,
        };
        game.start_round();
        game
    }

    /// Begins a round for the word at `current_word_index`. Calling it
    /// twice for the same index simply restarts that word.
    pub fn start_round(&mut self) {
        assert!(
            self.session.current_word_index < self.words.len(),
            "start_round called with the word list exhausted; use advance_or_reset"
        );
        let word = self.words[self.session.current_word_index].clone();
        self.round = Some(RoundState::new(word));
    }

    /// Records one guessed letter and evaluates the round.
    ///
    /// Duplicate letters are a no-op: they never decrement
    /// `guesses_remaining` or grow `letters_guessed`. Non-alphabetic
    /// input should be filtered by [`crate::input::normalize_guess`]
    /// before it gets here; the engine ignores it defensively.
    ///
    /// Panics if no round is in progress — that is a presentation-layer
    /// bug, not a recoverable condition.
    pub fn submit_guess(&mut self, letter: char) -> GuessReport {
        let round = self
            .round
            .as_mut()
            .expect("submit_guess called with no round in progress");
        assert_eq!(
            round.outcome,
            RoundOutcome::InProgress,
            "submit_guess called after a terminal outcome; advance_or_reset first"
        );

        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() && !round.letters_guessed.contains(&letter) {
            round.letters_guessed.push(letter);
            if !round.target_word.contains(letter) {
                round.guesses_remaining = round.guesses_remaining.saturating_sub(1);
            }
            // Priority order: a fully revealed word wins even if the
            // final wrong-guess budget is untouched; only then do we
            // check for exhaustion.
            round.outcome = if round.is_revealed() {
                RoundOutcome::Won
            } else if round.guesses_remaining == 0 {
                RoundOutcome::Lost
            } else {
                RoundOutcome::InProgress
            };
        }

        let outcome = round.outcome;
        let report = GuessReport {
            outcome,
            revealed_pattern: round.revealed_pattern(),
            guesses_remaining: round.guesses_remaining,
            status_message: Self::status_message(round),
            session_complete: false,
        };

        if outcome != RoundOutcome::InProgress {
            match outcome {
                RoundOutcome::Won => self.session.words_guessed += 1,
                RoundOutcome::Lost => self.session.words_missed += 1,
                RoundOutcome::InProgress => unreachable!(),
            }
            self.session.current_word_index += 1;
            self.session_complete = self.session.current_word_index >= self.words.len();
        }

        GuessReport {
            session_complete: self.session_complete,
            ..report
        }
    }

    /// Moves to the next word after a terminal outcome, or restarts the
    /// whole session when every word has been played.
    pub fn advance_or_reset(&mut self) {
        if self.session_complete {
            self.session = SessionState::default();
            self.session_complete = false;
        }
        self.start_round();
    }

    fn status_message(round: &RoundState) -> String {
        let guesses = round.letters_guessed.len();
        match round.outcome {
            RoundOutcome::Won => format!(
                "You've Guessed It! It Took You {} {} to Uncover the Word.",
                guesses,
                guess_noun(guesses)
            ),
            RoundOutcome::Lost => "So Sorry. You're All Out of Guesses.".to_string(),
            RoundOutcome::InProgress => {
                format!("You've Made {} {}", guesses, guess_noun(guesses))
            }
        }
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn in_progress(&self) -> bool {
        matches!(
            self.round.as_ref().map(|r| r.outcome),
            Some(RoundOutcome::InProgress)
        )
    }

    pub fn session_complete(&self) -> bool {
        self.session_complete
    }

    pub fn words_guessed(&self) -> usize {
        self.session.words_guessed
    }

    pub fn words_missed(&self) -> usize {
        self.session.words_missed
    }

    pub fn words_remaining(&self) -> usize {
        self.words.len() - (self.session.words_guessed + self.session.words_missed)
    }

    pub fn current_word_index(&self) -> usize {
        self.session.current_word_index
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}

fn guess_noun(count: usize) -> &'static str {
    if count == 1 {
        "Guess"
    } else {
        "Guesses"
    }
}
