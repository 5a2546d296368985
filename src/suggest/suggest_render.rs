//! Suggestion area rendering
//!
//! Draws the loading spinner or the list of career suggestions. Display
//! priority is loading first, then the suggestion list; the error line is
//! drawn by the application layout above this area.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::render::reveal::revealed;
use super::render::spinner::spinner_glyph;
use super::render::text::wrap_text;
use super::suggest_state::SuggestState;
use super::suggestion::CareerSuggestion;

const LOADING_LABEL: &str = "Fetching career recommendations...";

/// Render the body area for the current form state
///
/// # Arguments
/// * `state` - Form state to draw
/// * `frame` - The frame to render to
/// * `area` - Area below the input box
/// * `frame_count` - Render frame counter, drives the spinner
/// * `reveal_limit` - Words to show per text, `None` for all
/// * `scroll` - Requested scroll offset into the suggestion list
///
/// # Returns
/// The maximum useful scroll offset for the current content
pub fn render_body(
    state: &SuggestState,
    frame: &mut Frame,
    area: Rect,
    frame_count: u64,
    reveal_limit: Option<usize>,
    scroll: u16,
) -> u16 {
    if state.is_loading() {
        render_spinner(frame, area, frame_count);
        return 0;
    }

    if state.suggestions().is_empty() {
        return 0;
    }

    render_suggestions(state.suggestions(), frame, area, reveal_limit, scroll)
}

/// Render a spinner centered in `area`
pub fn render_spinner(frame: &mut Frame, area: Rect, frame_count: u64) {
    let label = format!("{} {}", spinner_glyph(frame_count), LOADING_LABEL);
    let width = (UnicodeWidthStr::width(label.as_str()) as u16).min(area.width);

    let centered = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(1) / 2,
        width,
        height: area.height.min(1),
    };

    let spinner = Paragraph::new(label).style(Style::default().fg(Color::Blue));
    frame.render_widget(spinner, centered);
}

fn render_suggestions(
    suggestions: &[CareerSuggestion],
    frame: &mut Frame,
    area: Rect,
    reveal_limit: Option<usize>,
    scroll: u16,
) -> u16 {
    // Borders (2) and one column of padding each side
    let max_width = area.width.saturating_sub(4);
    let lines = build_suggestion_lines(suggestions, max_width, reveal_limit);

    let viewport = area.height.saturating_sub(2);
    let scroll_limit = max_scroll(lines.len(), viewport);
    let scroll = scroll.min(scroll_limit);

    let title = format!(" Career Suggestions ({}) ", suggestions.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), padded);

    scroll_limit
}

/// Largest scroll offset that still fills `viewport` rows
///
/// Line counts past `u16::MAX` saturate instead of wrapping.
pub fn max_scroll(line_count: usize, viewport: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport)
}

/// Build the styled lines for every suggestion
///
/// Each suggestion renders as its title, its description, then the
/// reason it was recommended, with a blank line between suggestions.
pub fn build_suggestion_lines(
    suggestions: &[CareerSuggestion],
    max_width: u16,
    reveal_limit: Option<usize>,
) -> Vec<Line<'static>> {
    let max_width = max_width as usize;
    let title_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
    let description_style = Style::default().fg(Color::Gray);
    let why_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines: Vec<Line<'static>> = Vec::new();

    for (i, suggestion) in suggestions.iter().enumerate() {
        for title_line in wrap_text(&suggestion.career_title, max_width) {
            lines.push(Line::from(Span::styled(title_line, title_style)));
        }

        let description = revealed(&suggestion.description, reveal_limit);
        if !description.is_empty() {
            for desc_line in wrap_text(description, max_width) {
                lines.push(Line::from(Span::styled(desc_line, description_style)));
            }
        }

        let why = revealed(&suggestion.why_recommended, reveal_limit);
        if !why.is_empty() {
            for why_line in wrap_text(why, max_width) {
                lines.push(Line::from(Span::styled(why_line, why_style)));
            }
        }

        // Blank line between suggestions (except after last)
        if i < suggestions.len() - 1 {
            lines.push(Line::from(""));
        }
    }

    lines
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
