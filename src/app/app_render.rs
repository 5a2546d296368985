use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app_state::App;
use crate::help::help_line_render;
use crate::suggest::render::text::wrap_text;
use crate::suggest::suggest_render;

pub const APP_TITLE: &str = "Career Suggestioner AI";

/// Input box height including borders
const INPUT_HEIGHT: u16 = 5;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        // Error rows only take space while there is an error
        let error_lines = self.error_lines(frame.area().width);
        let error_height = u16::try_from(error_lines.len()).unwrap_or(u16::MAX);
        let layout = Layout::vertical([
            Constraint::Length(1),            // Title
            Constraint::Length(INPUT_HEIGHT), // Interests input
            Constraint::Length(error_height), // Error message
            Constraint::Min(0),               // Suggestions / spinner
            Constraint::Length(1),            // Help line
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);
        frame.render_widget(self.suggest.textarea(), layout[1]);
        if !error_lines.is_empty() {
            render_error(error_lines, frame, layout[2]);
        }

        let reveal_limit = self.reveal_limit(Instant::now());
        self.results_max_scroll = suggest_render::render_body(
            &self.suggest,
            frame,
            layout[3],
            self.frame_count,
            reveal_limit,
            self.results_scroll,
        );
        self.results_scroll = self.results_scroll.min(self.results_max_scroll);

        help_line_render::render_line(&self.suggest, frame, layout[4]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, area);
    }

    /// Error message wrapped to `width`, one leading column of padding
    fn error_lines(&self, width: u16) -> Vec<String> {
        if !self.suggest.has_error() {
            return Vec::new();
        }
        wrap_text(self.suggest.error(), usize::from(width.saturating_sub(1)))
            .into_iter()
            .map(|line| format!(" {}", line))
            .collect()
    }
}

fn render_error(lines: Vec<String>, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let error = Paragraph::new(lines).style(Style::default().fg(Color::Red));
    frame.render_widget(error, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
