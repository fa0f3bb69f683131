//! Roster setup screen: add the party before the grid comes out.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::roster::{validate_name, Roster};

pub struct RosterSetupScreen {
    pub name_input: String,
    pub validation_error: Option<String>,
    pub selected_index: usize,
}

impl RosterSetupScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            validation_error: None,
            selected_index: 0,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, roster: &Roster) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Rules
                Constraint::Length(2), // Validation
                Constraint::Min(4),    // Player list
                Constraint::Length(3), // Controls
            ])
            .split(area);

        // Title
        let title = Paragraph::new("Mine Slap")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        // Input label
        let label = Paragraph::new("Player Name:");
        f.render_widget(label, chunks[2]);

        // Input field with cursor
        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 1,
        };

        let input_widget = Paragraph::new(format!("{}_", self.name_input))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        // Rules
        let rules = vec![
            Line::from("• 1-16 characters, unique"),
            Line::from("• Letters, numbers, spaces, hyphens, underscores"),
            Line::from(format!(
                "• {} to {} players",
                MIN_PLAYERS, MAX_PLAYERS
            )),
        ];
        let rules_widget = Paragraph::new(rules).style(Style::default().fg(Color::Gray));
        f.render_widget(rules_widget, chunks[4]);

        // Validation feedback
        let validation_text = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if !self.name_input.trim().is_empty() {
            Line::from(Span::styled(
                "✓ Name is valid",
                Style::default().fg(Color::Green),
            ))
        } else if roster.ready_to_start() {
            Line::from(Span::styled(
                "✓ Ready! Press Enter to start",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        let validation_widget = Paragraph::new(validation_text);
        f.render_widget(validation_widget, chunks[5]);

        // Player list
        self.draw_player_list(f, chunks[6], roster);

        // Controls
        let controls =
            Paragraph::new("[Enter] Add / Start    [Del] Remove    [↑↓] Select    [Esc] Quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    fn draw_player_list(&self, f: &mut Frame, area: Rect, roster: &Roster) {
        let mut lines = vec![Line::from(Span::styled(
            format!("Party ({}/{}):", roster.len(), MAX_PLAYERS),
            Style::default().fg(Color::DarkGray),
        ))];

        for (i, player) in roster.players.iter().enumerate() {
            let selected = i == self.selected_index;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}. {}", marker, i + 1, player.name),
                style,
            )));
        }

        if roster.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (nobody yet)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        f.render_widget(Paragraph::new(lines), area);
    }

    pub fn handle_char_input(&mut self, c: char, roster: &Roster) {
        self.name_input.push(c);
        self.validate(roster);
    }

    pub fn handle_backspace(&mut self, roster: &Roster) {
        if self.name_input.pop().is_some() {
            self.validate(roster);
        }
    }

    pub fn validate(&mut self, roster: &Roster) {
        let name = self.name_input.trim();
        self.validation_error = validate_name(name).err();
        if self.validation_error.is_none() && roster.contains_name(name) {
            self.validation_error = Some("Name is already taken".to_string());
        }
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }

    pub fn clear_input(&mut self) {
        self.name_input.clear();
        self.validation_error = None;
    }
}
