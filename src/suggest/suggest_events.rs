//! Suggestion form event handling
//!
//! Key handling for the form and polling of the worker response channel.

use std::sync::mpsc::TryRecvError;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::client::SuggestError;
use super::suggest_state::{SuggestResponse, SuggestState};

/// Handle a key press aimed at the form
///
/// - Enter submits
/// - Alt+Enter / Shift+Enter insert a newline
/// - Ctrl+R resets, but only while the reset control is offered
/// - everything else edits the interests text
///
/// The form consumes every key it is given.
pub fn handle_form_key(key: KeyEvent, state: &mut SuggestState) {
    match key.code {
        KeyCode::Enter
            if key.modifiers.contains(KeyModifiers::ALT)
                || key.modifiers.contains(KeyModifiers::SHIFT) =>
        {
            state.textarea.insert_newline();
        }
        KeyCode::Enter => {
            state.submit();
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if state.reset_available() {
                state.reset();
            }
        }
        _ => {
            state.textarea.input(key);
        }
    }
}

/// Drain the worker response channel and apply every pending outcome
///
/// Returns true if at least one outcome changed the suggestion list.
pub fn poll_response_channel(state: &mut SuggestState) -> bool {
    let Some(rx) = state.response_rx.as_ref() else {
        return false;
    };

    let mut pending = Vec::new();
    let mut disconnected = false;
    loop {
        match rx.try_recv() {
            Ok(response) => pending.push(response),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                disconnected = true;
                break;
            }
        }
    }

    let mut suggestions_changed = false;
    for response in pending {
        suggestions_changed |= matches!(response, SuggestResponse::Suggestions { .. });
        state.apply_response(response);
    }

    if disconnected {
        state.response_rx = None;
        if state.loading {
            let request_id = state.request_id;
            state.apply_response(SuggestResponse::Failed {
                error: SuggestError::WorkerUnavailable,
                request_id,
            });
        }
        // No further outcomes can arrive
        state.in_flight = 0;
    }

    suggestions_changed
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
