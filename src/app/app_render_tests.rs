//! Tests for full-screen rendering

use std::time::Duration;

use super::*;
use crate::suggest::suggest_state::{REQUEST_FAILED_MESSAGE, VALIDATION_MESSAGE};
use crate::suggest::{CareerSuggestion, SuggestError, SuggestResponse};
use crate::test_utils::test_helpers::{render_to_string, test_app};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

fn render_app(app: &mut App) -> String {
    render_to_string(TEST_WIDTH, TEST_HEIGHT, |frame| app.render(frame))
}

fn show_suggestions(app: &mut App, suggestions: Vec<CareerSuggestion>) {
    app.suggest.apply_response(SuggestResponse::Suggestions {
        suggestions,
        request_id: 1,
    });
}

#[test]
fn test_initial_screen() {
    let mut app = test_app();

    let output = render_app(&mut app);

    assert!(output.contains(APP_TITLE));
    assert!(output.contains("Interests"));
    assert!(output.contains("Enter your interests and current knowledge"));
    assert!(output.contains("Enter: Get Career Suggestions"));
    assert!(!output.contains("Ctrl+R: Reset"));
}

#[test]
fn test_render_advances_frame_count() {
    let mut app = test_app();

    render_app(&mut app);
    render_app(&mut app);

    assert_eq!(app.frame_count, 2);
}

#[test]
fn test_validation_error_shown() {
    let mut app = test_app();
    app.suggest.submit();

    let output = render_app(&mut app);

    assert!(output.contains(VALIDATION_MESSAGE));
}

#[test]
fn test_request_failure_shown_with_previous_suggestions() {
    let mut app = test_app();
    app.reveal_delay = Duration::ZERO;
    show_suggestions(&mut app, vec![CareerSuggestion::new("Chef", "Cooks", "Food")]);
    app.suggest.apply_response(SuggestResponse::Failed {
        error: SuggestError::Network("connection refused".to_string()),
        request_id: 2,
    });

    let output = render_app(&mut app);

    assert!(output.contains(REQUEST_FAILED_MESSAGE));
    assert!(output.contains("Chef"));
    assert!(!output.contains("connection refused"));
}

#[test]
fn test_suggestions_offer_reset() {
    let mut app = test_app();
    app.reveal_delay = Duration::ZERO;
    show_suggestions(
        &mut app,
        vec![CareerSuggestion::new(
            "Genetic Counselor",
            "Guides patients through genetic test results",
            "Mixes biology with people skills",
        )],
    );

    let output = render_app(&mut app);

    assert!(output.contains("Genetic Counselor"));
    assert!(output.contains("Mixes biology with people skills"));
    assert!(output.contains("Ctrl+R: Reset"));
    assert!(!output.contains(REQUEST_FAILED_MESSAGE));
}

#[test]
fn test_loading_shows_spinner_without_reset() {
    let mut app = test_app();
    let (request_tx, _request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (_response_tx, response_rx) = std::sync::mpsc::channel();
    app.suggest.set_channels(request_tx, response_rx);
    show_suggestions(&mut app, vec![CareerSuggestion::new("Chef", "", "")]);
    app.suggest.set_interests("cooking");
    app.suggest.submit();

    let output = render_app(&mut app);

    assert!(app.suggest.is_loading());
    assert!(output.contains("Fetching career recommendations..."));
    assert!(!output.contains("Chef"));
    assert!(!output.contains("Ctrl+R: Reset"));
}

#[test]
fn test_scroll_clamped_after_render() {
    let mut app = test_app();
    app.reveal_delay = Duration::ZERO;
    show_suggestions(&mut app, vec![CareerSuggestion::new("Chef", "Cooks", "Food")]);
    app.results_scroll = 40;

    render_app(&mut app);

    assert_eq!(app.results_max_scroll, 0);
    assert_eq!(app.results_scroll, 0);
}

#[test]
fn test_failure_message_wraps_on_narrow_terminal() {
    let mut app = test_app();
    app.suggest.apply_response(SuggestResponse::Failed {
        error: SuggestError::Status { code: 500 },
        request_id: 1,
    });

    let output = render_to_string(30, TEST_HEIGHT, |frame| app.render(frame));

    let error_text: Vec<&str> = output
        .lines()
        .skip(1 + 5)
        .take(3)
        .map(str::trim)
        .collect();
    assert_eq!(error_text.join(" "), REQUEST_FAILED_MESSAGE);
}

#[test]
fn test_error_lines_empty_without_error() {
    let app = test_app();

    assert!(app.error_lines(80).is_empty());
}
