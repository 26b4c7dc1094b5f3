//! Progress indicator shown while probes run.
//!
//! The spinner lives on its own thread and owns its progress bar. The only
//! traffic between it and the caller is a stop request and a stop
//! acknowledgement, so nothing it draws can land after the caller moves on.
//!
//! While a spinner runs its bar is published in [`ACTIVE`], and
//! [`SpinnerWriter`] prints log lines above it instead of over it.

use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Slot holding the bar of the running spinner, if any.
pub struct ActiveBar(Mutex<Option<ProgressBar>>);

impl ActiveBar {
    pub const fn new() -> Self {
        Self(Mutex::new(None))
    }

    fn set(&self, pb: Option<ProgressBar>) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = pb;
        }
    }

    fn current(&self) -> Option<ProgressBar> {
        self.0
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .filter(|pb| !pb.is_finished())
    }
}

pub static ACTIVE: ActiveBar = ActiveBar::new();

/// Log sink that prints above the running spinner, or to stderr when none runs.
pub struct SpinnerWriter {
    bar: Option<ProgressBar>,
}

impl SpinnerWriter {
    pub fn new() -> Self {
        Self::over(&ACTIVE)
    }

    fn over(slot: &ActiveBar) -> Self {
        Self {
            bar: slot.current(),
        }
    }
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.bar {
            Some(pb) => {
                pb.println(String::from_utf8_lossy(buf).trim_end());
                Ok(buf.len())
            }
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.bar {
            Some(_) => Ok(()),
            None => io::stderr().flush(),
        }
    }
}

/// Running spinner. Dropping it stops the spinner and waits until its line is cleared.
pub struct Spinner {
    slot: &'static ActiveBar,
    stop_tx: Option<Sender<()>>,
    ack_rx: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: String) -> Self {
        Self::start_on(&ACTIVE, ProgressBar::new_spinner(), message)
    }

    fn start_on(slot: &'static ActiveBar, pb: ProgressBar, message: String) -> Self {
        slot.set(Some(pb.clone()));

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (ack_tx, ack_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(TICK_STRINGS);
            pb.set_style(style);
            pb.set_message(message.color(colors::SPINNER).to_string());

            loop {
                match stop_rx.recv_timeout(TICK) {
                    Err(RecvTimeoutError::Timeout) => pb.tick(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            pb.finish_and_clear();
            let _ = ack_tx.send(());
        });

        Self {
            slot,
            stop_tx: Some(stop_tx),
            ack_rx,
            handle: Some(handle),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.slot.set(None);
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
            let _ = self.ack_rx.recv();
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
