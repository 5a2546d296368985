//! Suggestion form state
//!
//! Owns the four pieces of form state (interests text, suggestion list,
//! loading flag, error message) plus the channel handles used to talk to
//! the request worker. The rendering layer only reads through the
//! projections; `submit` and `reset` are the only commands.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, TextArea};

use super::client::SuggestError;
use super::suggestion::CareerSuggestion;
use crate::config::OverlapPolicy;

/// Shown when the interests box is empty or whitespace
pub const VALIDATION_MESSAGE: &str = "Please enter your interests.";

/// Shown for every request failure, whatever the cause
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to fetch career recommendations. Please try again later.";

const PLACEHOLDER: &str = "Enter your interests and current knowledge or constraints here...";

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    /// Fetch recommendations for the given interests text
    Fetch {
        interests: String,
        /// Tags the outcome so log lines can be correlated
        request_id: u64,
    },
    /// Stop the worker and drop any outstanding requests
    Shutdown,
}

/// Outcome messages received from the worker thread
#[derive(Debug)]
pub enum SuggestResponse {
    Suggestions {
        suggestions: Vec<CareerSuggestion>,
        request_id: u64,
    },
    Failed {
        error: SuggestError,
        request_id: u64,
    },
}

/// What a call to [`SuggestState::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request with this id was handed to the worker
    Dispatched(u64),
    /// Input was empty; the validation message is now set
    Rejected,
    /// A request is already loading and the overlap policy forbids another
    Blocked,
}

/// Suggestion form state
pub struct SuggestState {
    pub(super) textarea: TextArea<'static>,
    pub(super) suggestions: Vec<CareerSuggestion>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
    pub(super) overlap: OverlapPolicy,
    /// Incremented for every dispatched request
    pub(super) request_id: u64,
    /// Dispatched requests whose outcome has not been applied yet
    pub(super) in_flight: usize,
    /// When the current suggestion list arrived; drives the word reveal
    pub(super) revealed_at: Option<Instant>,
    pub(super) request_tx: Option<UnboundedSender<SuggestRequest>>,
    pub(super) response_rx: Option<Receiver<SuggestResponse>>,
}

impl SuggestState {
    pub fn new(overlap: OverlapPolicy) -> Self {
        Self {
            textarea: new_textarea(TextArea::default()),
            suggestions: Vec::new(),
            loading: false,
            error: None,
            overlap,
            request_id: 0,
            in_flight: 0,
            revealed_at: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Current interests text, lines joined with `\n`
    pub fn interests(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the interests text, leaving the cursor at the end
    pub fn set_interests(&mut self, text: &str) {
        self.textarea = new_textarea(TextArea::from(text.split('\n')));
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn suggestions(&self) -> &[CareerSuggestion] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message, empty when there is none
    pub fn error(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Whether the reset control is offered (suggestions shown, nothing loading)
    pub fn reset_available(&self) -> bool {
        !self.suggestions.is_empty() && !self.loading
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Submit the current interests
    ///
    /// Whitespace-only input sets the validation message and sends nothing.
    /// Otherwise exactly one request carrying the raw text goes to the worker.
    /// If the worker cannot be reached the request fails immediately.
    pub fn submit(&mut self) -> SubmitOutcome {
        let interests = self.interests();

        if interests.trim().is_empty() {
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }

        // Counts outstanding requests, so a reset while loading still blocks
        if self.in_flight > 0 && self.overlap == OverlapPolicy::BlockWhileLoading {
            log::debug!(
                "Ignoring submit while {} request(s) are in flight",
                self.in_flight
            );
            return SubmitOutcome::Blocked;
        }

        self.error = None;
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight += 1;
        let request_id = self.request_id;

        log::info!(
            "Submitting request {} ({} chars)",
            request_id,
            interests.chars().count()
        );

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(SuggestRequest::Fetch {
                interests,
                request_id,
            })
            .is_ok()
        });

        if !sent {
            self.apply_response(SuggestResponse::Failed {
                error: SuggestError::WorkerUnavailable,
                request_id,
            });
        }

        SubmitOutcome::Dispatched(request_id)
    }

    /// Return every piece of form state to its initial value
    ///
    /// Outstanding requests keep running; their outcomes still apply.
    pub fn reset(&mut self) {
        self.textarea = new_textarea(TextArea::default());
        self.suggestions.clear();
        self.loading = false;
        self.error = None;
        self.revealed_at = None;
    }

    /// Apply one worker outcome
    ///
    /// Outcomes are applied in arrival order, so with overlapping requests
    /// the last one to resolve wins.
    pub fn apply_response(&mut self, response: SuggestResponse) {
        match response {
            SuggestResponse::Suggestions {
                suggestions,
                request_id,
            } => {
                log::info!(
                    "Request {} returned {} suggestions",
                    request_id,
                    suggestions.len()
                );
                self.suggestions = suggestions;
                self.error = None;
                self.revealed_at = Some(Instant::now());
            }
            SuggestResponse::Failed { error, request_id } => {
                log::error!(
                    "Error fetching career recommendations (request {}): {}",
                    request_id,
                    error
                );
                self.error = Some(REQUEST_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Ask the worker to stop; outstanding requests are dropped
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.request_tx.take() {
            let _ = tx.send(SuggestRequest::Shutdown);
        }
        self.response_rx = None;
        self.in_flight = 0;
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}

/// Apply the form's block and placeholder styling to a text area
fn new_textarea(mut textarea: TextArea<'static>) -> TextArea<'static> {
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Interests ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
