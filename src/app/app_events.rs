use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::suggest::{handle_form_key, poll_response_channel};

/// How long to wait for terminal input before redrawing
const TICK_RATE: Duration = Duration::from_millis(16);

/// Rows moved by one PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

impl App {
    /// Handle events and update application state
    ///
    /// Waits up to one tick for terminal input so the spinner and the
    /// word reveal keep animating, then drains worker responses.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }

        self.poll_responses();
        Ok(())
    }

    /// Apply pending worker outcomes
    pub fn poll_responses(&mut self) {
        if poll_response_channel(&mut self.suggest) {
            self.results_scroll = 0;
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        let had_suggestions = !self.suggest.suggestions().is_empty();
        handle_form_key(key, &mut self.suggest);
        if had_suggestions && self.suggest.suggestions().is_empty() {
            self.results_scroll = 0;
        }
    }

    /// Handle keys that work regardless of form state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::PageDown => {
                self.results_scroll = self
                    .results_scroll
                    .saturating_add(PAGE_SCROLL)
                    .min(self.results_max_scroll);
                true
            }
            KeyCode::PageUp => {
                self.results_scroll = self.results_scroll.saturating_sub(PAGE_SCROLL);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
