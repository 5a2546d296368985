use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::suggest::render::reveal::words_revealed;
use crate::suggest::{CareerClient, SuggestState, spawn_worker};

/// Application state
pub struct App {
    pub suggest: SuggestState,
    /// Delay between revealed words; zero shows text at once
    pub reveal_delay: Duration,
    /// Incremented on every render; drives the spinner
    pub frame_count: u64,
    pub results_scroll: u16,
    /// Largest useful scroll offset, known after the last render
    pub results_max_scroll: u16,
    pub should_quit: bool,
    worker: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new App instance from configuration
    ///
    /// No worker is running yet; see [`App::start_worker`].
    pub fn new(config: &Config) -> Self {
        Self {
            suggest: SuggestState::new(config.ui.overlap),
            reveal_delay: Duration::from_millis(config.ui.reveal_delay_ms),
            frame_count: 0,
            results_scroll: 0,
            results_max_scroll: 0,
            should_quit: false,
            worker: None,
        }
    }

    /// Spawn the request worker and connect it to the form
    pub fn start_worker(&mut self, client: CareerClient) -> std::io::Result<()> {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();

        let handle = spawn_worker(client, request_rx, response_tx)?;
        self.suggest.set_channels(request_tx, response_rx);
        self.worker = Some(handle);
        Ok(())
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How many words of each suggestion text are visible at `now`
    pub fn reveal_limit(&self, now: Instant) -> Option<usize> {
        let revealed_at = self.suggest.revealed_at()?;
        words_revealed(now.saturating_duration_since(revealed_at), self.reveal_delay)
    }

    /// Stop the worker thread and wait for it to exit
    pub fn shutdown(&mut self) {
        self.suggest.shutdown();
        if let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            log::warn!("Suggestion worker panicked during shutdown");
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
