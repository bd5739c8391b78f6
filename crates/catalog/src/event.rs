//! Terminal input thread.
//!
//! Key presses and resizes are forwarded as they arrive. A `Tick` is sent each
//! time `tick_rate` elapses, however much input is coming in.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tracing::warn;

#[derive(Debug)]
pub enum Event {
    /// Store refresh check.
    Tick,
    Key(KeyEvent),
    Resize,
}

/// Owns the receiving end of the input thread's channel. The thread exits
/// once the handler is dropped.
pub struct EventHandler {
    events: Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, events) = mpsc::channel();
        thread::spawn(move || poll_terminal(&tx, tick_rate));
        Self { events }
    }

    /// Blocks until the next event. Fails once the input thread is gone.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.events.recv()
    }
}

/// Only key presses are forwarded; release and repeat reports are dropped.
fn translate(evt: CrosstermEvent) -> Option<Event> {
    match evt {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

fn poll_terminal(tx: &Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match event::poll(timeout) {
            Ok(true) => {
                if let Some(ev) = event::read().ok().and_then(translate)
                    && tx.send(ev).is_err()
                {
                    return;
                }
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "terminal poll failed, stopping input thread");
                return;
            }
        }
        if last_tick.elapsed() >= tick_rate {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
