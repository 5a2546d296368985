//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::suggest::SuggestState;

const SUBMIT_HINT: &str = "Enter: Get Career Suggestions";
const NEWLINE_HINT: &str = "Alt+Enter: New Line";
const RESET_HINT: &str = "Ctrl+R: Reset";
const SCROLL_HINT: &str = "PgUp/PgDn: Scroll";
const QUIT_HINT: &str = "Esc: Quit";

/// Help text for the current form state
///
/// Reset is only offered while it would do something.
pub fn help_text(state: &SuggestState) -> String {
    let mut hints = vec![SUBMIT_HINT, NEWLINE_HINT];
    if state.reset_available() {
        hints.push(RESET_HINT);
        hints.push(SCROLL_HINT);
    }
    hints.push(QUIT_HINT);
    format!(" {}", hints.join(" | "))
}

/// Render the help line (bottom of screen)
pub fn render_line(state: &SuggestState, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(state)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::{CareerSuggestion, SuggestResponse};

    #[test]
    fn test_idle_help_hides_reset() {
        let state = SuggestState::default();

        insta::assert_snapshot!(
            help_text(&state),
            @" Enter: Get Career Suggestions | Alt+Enter: New Line | Esc: Quit"
        );
    }

    #[test]
    fn test_help_offers_reset_with_suggestions() {
        let mut state = SuggestState::default();
        state.apply_response(SuggestResponse::Suggestions {
            suggestions: vec![CareerSuggestion::new("Chef", "", "")],
            request_id: 1,
        });

        insta::assert_snapshot!(
            help_text(&state),
            @" Enter: Get Career Suggestions | Alt+Enter: New Line | Ctrl+R: Reset | PgUp/PgDn: Scroll | Esc: Quit"
        );
    }
}
