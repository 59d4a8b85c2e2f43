use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use petal::engine::{Game, RoundOutcome};
use petal::input::normalize_guess;
use petal::runtime::{GameEvent, Runner, TestEventSource};
use petal::words::WordList;

// Headless integration using the internal runtime + engine without a
// TTY: keystrokes flow through the same normalize-then-submit path the
// binary uses.

fn key(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn headless_round_completes_through_the_runner() {
    let list = WordList::from_custom(&["dog".to_string()]).unwrap();
    let mut game = Game::new(list.words);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::with_tick_interval(es, Duration::from_millis(5));

    for c in ['d', 'x', 'o', 'g'] {
        tx.send(key(c)).unwrap();
    }

    let mut outcome = RoundOutcome::InProgress;
    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(letter) = normalize_guess(&c.to_string()) {
                        outcome = game.submit_guess(letter).outcome;
                        if outcome != RoundOutcome::InProgress {
                            break;
                        }
                    }
                }
            }
            GameEvent::Tick | GameEvent::Resize => {}
        }
    }

    assert_eq!(outcome, RoundOutcome::Won);
    assert_eq!(game.words_guessed(), 1);
    assert!(game.session_complete());
}

#[test]
fn headless_ticks_never_touch_engine_state() {
    let list = WordList::from_custom(&["cat".to_string()]).unwrap();
    let mut game = Game::new(list.words);
    game.submit_guess('x');

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::with_tick_interval(es, Duration::from_millis(1));

    // With no key events queued, every step is a tick. The round must
    // look exactly the same afterwards.
    for _ in 0..20u32 {
        assert!(matches!(runner.step(), GameEvent::Tick));
    }

    let round = game.round().unwrap();
    assert_eq!(round.letters_guessed, vec!['X']);
    assert!(game.in_progress());
}

#[test]
fn headless_embedded_list_plays_in_order() {
    let list = WordList::new("classic".to_string());
    let mut game = Game::new(list.words.clone());

    assert_eq!(game.round().unwrap().target_word, list.words[0]);

    // Win the first word by guessing its distinct letters.
    let letters: Vec<char> = list.words[0].chars().collect();
    let mut last = RoundOutcome::InProgress;
    for c in letters {
        last = game.submit_guess(c).outcome;
    }
    assert_eq!(last, RoundOutcome::Won);

    game.advance_or_reset();
    assert_eq!(game.round().unwrap().target_word, list.words[1]);
}
