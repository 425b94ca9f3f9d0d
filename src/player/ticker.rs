use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Cancelled,
}

/// The delay between ticks. A message on `cancel` ends the wait at once.
pub struct Ticker {
    interval: Duration,
    cancel: Receiver<()>,
}

impl Ticker {
    pub fn new(interval: Duration, cancel: Receiver<()>) -> Self {
        Ticker { interval, cancel }
    }

    pub fn wait(&self) -> Tick {
        match self.cancel.recv_timeout(self.interval) {
            Ok(()) => Tick::Cancelled,
            Err(RecvTimeoutError::Timeout) => Tick::Continue,
            // Nobody left to cancel us; keep the pace.
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(self.interval);
                Tick::Continue
            }
        }
    }
}
