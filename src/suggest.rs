//! Career suggestion form
//!
//! Holds the form controller, the HTTP client for the recommendation
//! endpoint, the background worker that runs requests off the UI thread,
//! and the rendering of the suggestion list.

pub mod client;
pub mod render;
pub mod suggest_events;
pub mod suggest_render;
pub mod suggest_state;
pub mod suggestion;
pub mod worker;

pub use client::{CareerClient, DEFAULT_ENDPOINT, SuggestError};
pub use suggest_events::{handle_form_key, poll_response_channel};
pub use suggest_state::{SubmitOutcome, SuggestRequest, SuggestResponse, SuggestState};
pub use suggestion::CareerSuggestion;
pub use worker::spawn_worker;
