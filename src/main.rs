pub mod config;
pub mod engine;
pub mod input;
pub mod runtime;
pub mod ui;
pub mod words;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    engine::{Game, RoundOutcome},
    input::normalize_guess,
    runtime::{CrosstermEventSource, GameEvent, Runner},
    words::WordList,
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// How long the wrong-guess cue stays on screen before reverting,
/// in ticks (~1.5s at the default tick interval). Purely
/// presentational; the engine knows nothing about it.
const FLASH_TICKS: u8 = 15;

pub const WELCOME_MESSAGE: &str = "How Many Guesses to Uncover the Hidden Word?";

/// cozy word-guessing tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A cozy word-guessing TUI. One letter at a time, eight wrong guesses per word; win or wilt, then play the next word in the list."
)]
pub struct Cli {
    /// word list to play through
    #[clap(short = 'l', long, value_enum)]
    word_list: Option<WordListChoice>,

    /// play a custom comma-separated list of words instead
    #[clap(short = 'w', long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// shuffle the word list at session start
    #[clap(long)]
    shuffle: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum WordListChoice {
    Classic,
    Animals,
    Garden,
}

impl WordListChoice {
    fn as_list(&self) -> WordList {
        WordList::new(self.to_string().to_lowercase())
    }
}

/// Which half of the round/advance cycle the player is in. While a
/// terminal message is displayed the guess entry box is hidden and
/// only the advance prompt is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Guessing,
    RoundOver,
}

#[derive(Debug)]
pub struct App {
    pub game: Game,
    pub state: AppState,
    pub guess_buffer: String,
    pub status_message: String,
    pub flash_ticks: u8,
}

impl App {
    pub fn new(word_list: WordList) -> Self {
        Self {
            game: Game::new(word_list.words),
            state: AppState::Guessing,
            guess_buffer: String::new(),
            status_message: WELCOME_MESSAGE.to_string(),
            flash_ticks: 0,
        }
    }

    /// Counts the wrong-guess flash down. Returns true when the cue
    /// just reverted and the screen needs a redraw.
    pub fn on_tick(&mut self) -> bool {
        if self.flash_ticks > 0 {
            self.flash_ticks -= 1;
            self.flash_ticks == 0
        } else {
            false
        }
    }

    /// Submits whatever is in the entry box as a guess, if it
    /// normalizes to a letter.
    pub fn submit_buffer(&mut self) {
        let Some(letter) = normalize_guess(&self.guess_buffer) else {
            self.guess_buffer.clear();
            return;
        };
        self.guess_buffer.clear();

        let before = self
            .game
            .round()
            .map(|r| r.guesses_remaining)
            .unwrap_or_default();
        let report = self.game.submit_guess(letter);

        if report.guesses_remaining < before {
            self.flash_ticks = FLASH_TICKS;
        }
        // The terminal message persists on screen until the player
        // asks for the next word.
        self.status_message = report.status_message;
        if report.outcome != RoundOutcome::InProgress {
            self.state = AppState::RoundOver;
        }
    }

    /// Starts the next round (or a fresh session when every word has
    /// been played).
    pub fn next_word(&mut self) {
        self.game.advance_or_reset();
        self.state = AppState::Guessing;
        self.status_message = WELCOME_MESSAGE.to_string();
        self.guess_buffer.clear();
        self.flash_ticks = 0;
    }
}

/// CLI beats config; a custom word list beats both.
fn resolve_word_list(cli: &Cli, cfg: &Config) -> Result<WordList, Box<dyn Error>> {
    let mut list = if let Some(words) = &cli.words {
        WordList::from_custom(words)?
    } else if let Some(choice) = cli.word_list {
        choice.as_list()
    } else {
        let choice = WordListChoice::from_str(&cfg.word_list, true)
            .unwrap_or(WordListChoice::Classic);
        choice.as_list()
    };

    if cli.shuffle || cfg.shuffle {
        list.shuffle();
    }
    Ok(list)
}

/// Persists an explicitly chosen embedded list as the new default.
/// Custom word lists are one-offs and are never remembered.
fn remember_selection<S: ConfigStore>(store: &S, cli: &Cli, cfg: &Config) {
    if cli.words.is_some() {
        return;
    }
    if let Some(choice) = cli.word_list {
        let updated = Config {
            word_list: choice.to_string().to_lowercase(),
            ..cfg.clone()
        };
        if &updated != cfg {
            let _ = store.save(&updated);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let cfg = store.load();
    let word_list = resolve_word_list(&cli, &cfg)?;
    remember_selection(&store, &cli, &cfg);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(word_list);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new());

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {
                if app.on_tick() {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Key(key) => {
                if key.code == KeyCode::Esc
                    || (key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c'))
                {
                    break;
                }

                match app.state {
                    AppState::Guessing => match key.code {
                        KeyCode::Char(c) => {
                            app.guess_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.guess_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_buffer();
                        }
                        _ => {}
                    },
                    AppState::RoundOver => {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                            app.next_word();
                        }
                    }
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
