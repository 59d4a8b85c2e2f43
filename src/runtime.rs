use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// How long the game loop sleeps before waking up on its own. Ticks
/// exist to drive the wrong-guess flash countdown; the engine never
/// sees them.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// One step's worth of input for the game loop.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Where the game loop gets its input. The binary reads the terminal;
/// tests feed a channel.
pub trait EventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Terminal-backed source: a reader thread translates crossterm
/// events into [`GameEvent`]s.
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || pump_terminal_events(tx));
        Self { rx }
    }
}

/// Key releases are dropped so one keypress cannot land in the entry
/// box twice on platforms that report both edges.
fn pump_terminal_events(tx: Sender<GameEvent>) {
    loop {
        let translated = match event::read() {
            Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                Some(GameEvent::Key(key))
            }
            Ok(CtEvent::Resize(_, _)) => Some(GameEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };
        if let Some(ev) = translated {
            if tx.send(ev).is_err() {
                break;
            }
        }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Scripted event source for headless tests.
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Pulls one event per step, substituting [`GameEvent::Tick`] whenever
/// the player has been idle for a full interval. petal has exactly one
/// timer, so the interval is a plain duration rather than anything
/// pluggable.
pub struct Runner<E: EventSource> {
    event_source: E,
    tick_interval: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self::with_tick_interval(event_source, DEFAULT_TICK_INTERVAL)
    }

    /// Mostly for tests, which want a much shorter idle timeout.
    pub fn with_tick_interval(event_source: E, tick_interval: Duration) -> Self {
        Self {
            event_source,
            tick_interval,
        }
    }

    pub fn step(&self) -> GameEvent {
        match self.event_source.recv_timeout(self.tick_interval) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                GameEvent::Tick
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn short_runner(rx: Receiver<GameEvent>) -> Runner<TestEventSource> {
        Runner::with_tick_interval(TestEventSource::new(rx), Duration::from_millis(1))
    }

    #[test]
    fn idle_step_yields_a_tick() {
        let (_tx, rx) = mpsc::channel();
        let runner = short_runner(rx);

        assert!(matches!(runner.step(), GameEvent::Tick));
    }

    #[test]
    fn queued_events_come_back_in_order() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        tx.send(GameEvent::Resize).unwrap();
        let runner = short_runner(rx);

        match runner.step() {
            GameEvent::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("expected the key event first, got {other:?}"),
        }
        assert!(matches!(runner.step(), GameEvent::Resize));
    }

    #[test]
    fn hung_up_source_degrades_to_ticks() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let runner = short_runner(rx);

        // A disconnected source must not wedge the loop; the app keeps
        // ticking and the player can still quit.
        assert!(matches!(runner.step(), GameEvent::Tick));
        assert!(matches!(runner.step(), GameEvent::Tick));
    }

    #[test]
    fn default_runner_uses_the_standard_interval() {
        assert_eq!(DEFAULT_TICK_INTERVAL, Duration::from_millis(100));
    }
}
