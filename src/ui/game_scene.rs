//! Game screen rendering: grid, scoreboard, table-talk feed, overlays.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::board::Cell;
use crate::constants::{GRID_CELLS, GRID_SIDE};
use crate::session::{GameSession, RoundPhase};

/// Render the whole game screen.
pub fn draw_game(frame: &mut Frame, session: &GameSession, elapsed_seconds: i64) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    // Feed strip at the bottom, grid + info panel above
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Grid + info
            Constraint::Length(7), // Table talk
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Grid area
            Constraint::Length(26), // Info panel
        ])
        .split(rows[0]);

    render_grid(frame, columns[0], session);
    render_info_panel(frame, columns[1], session, elapsed_seconds);
    render_feed(frame, rows[1], session);

    if session.round_over() {
        render_round_end_overlay(frame, columns[0], session);
    }
}

/// Render the 5x5 grid.
fn render_grid(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Minefield ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each cell is 2 chars wide, 1 char tall
    let grid_width = (GRID_SIDE * 2) as u16;
    let grid_height = GRID_SIDE as u16;

    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    let picking = session.phase == RoundPhase::AwaitingPick;

    for row in 0..GRID_SIDE {
        let mut spans = Vec::new();

        for col in 0..GRID_SIDE {
            let cell = &session.board.grid[row][col];
            let is_cursor = session.board.cursor == (row, col);

            let (text, color) = cell_display(cell);

            let mut style = Style::default().fg(color);
            if is_cursor && picking {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(text, style));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + row as u16, grid_width, 1),
        );
    }
}

/// Display text and color for a tile.
fn cell_display(cell: &Cell) -> (&'static str, Color) {
    if !cell.revealed {
        return ("# ", Color::Gray);
    }

    if cell.has_mine {
        ("* ", Color::Red)
    } else {
        (". ", Color::DarkGray)
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, elapsed_seconds: i64) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current_name = session
        .current()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".to_string());

    let picks_color = if session.picks_left <= 1 {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Mine Slap",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Up now: ", Style::default().fg(Color::DarkGray)),
            Span::styled(current_name, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Picks left: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.picks_left),
                Style::default().fg(picks_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Round: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.round_number),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Mines: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.board.mine_count),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Revealed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", session.board.revealed_count(), GRID_CELLS),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_elapsed(elapsed_seconds),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Scoreboard",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for (i, player) in session.roster.players.iter().enumerate() {
        let style = if i == session.current_player {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let slaps = if player.slap_count > 0 {
            Span::styled(
                format!(" 🤚{}", player.slap_count),
                Style::default().fg(Color::Red),
            )
        } else {
            Span::styled(" -".to_string(), Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", player.name), style),
            slaps,
        ]));
    }

    lines.push(Line::from(""));

    // Controls
    if session.phase == RoundPhase::AwaitingPick {
        lines.push(Line::from(Span::styled(
            "[Arrows] Move",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "[Enter] Reveal",
            Style::default().fg(Color::DarkGray),
        )));
        if session.rules.allow_early_end {
            lines.push(Line::from(Span::styled(
                "[E] Bank turn",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            "[Q] Roster",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the table-talk feed at the bottom.
fn render_feed(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Table Talk ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = session
        .feed
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let style = if entry.is_slap {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(entry.message.clone(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the round-end overlay.
fn render_round_end_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (title, detail, color) = match session.phase {
        RoundPhase::Slapped => {
            let name = session
                .slapped_player()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string());
            (
                "SLAP!",
                format!("{} hit a mine!", name),
                Color::Red,
            )
        }
        _ => {
            let name = session
                .current()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string());
            (
                "Turn cleared!",
                format!("{} made it through", name),
                Color::Green,
            )
        }
    };

    let width = 34;
    let height = 6;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "[Any key] Next round",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Format elapsed seconds as M:SS (or H:MM:SS past the hour).
fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
