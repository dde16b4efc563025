//! Terminal presentation: border, centered play field and status bar.

use super::canvas::Canvas;
use crate::core::constants::MAX_HEALTH;
use crate::game::{GameState, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " The Ninja ";
const BORDER_COLOR: Color = Color::LightYellow;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Smallest terminal that fits the canvas, its border and the status bar.
pub fn min_size(canvas: &Canvas) -> (u16, u16) {
    (canvas.cols() + 2, canvas.rows() + STATUS_BAR_HEIGHT + 2)
}

/// Draw a finished canvas plus chrome for the current phase.
pub fn draw(frame: &mut Frame, canvas: &Canvas, state: &GameState) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let (min_w, min_h) = min_size(canvas);
    if area.width < min_w || area.height < min_h {
        render_too_small(frame, area, min_w, min_h);
        return;
    }

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(canvas.rows()), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(inner);

    let field = centered(chunks[0], canvas.cols(), canvas.rows());
    frame.render_widget(Paragraph::new(canvas.lines()), field);

    let status = Paragraph::new(vec![status_line(state), controls_line(state.phase)])
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);
}

/// Hearts, score, best and speed while running; the final tally after.
fn status_line(state: &GameState) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    match state.phase {
        Phase::Playing => {
            let health = state.player.health.min(MAX_HEALTH) as usize;
            let hearts = format!(
                "{}{}",
                "♥".repeat(health),
                "♡".repeat(MAX_HEALTH as usize - health)
            );
            Line::from(vec![
                Span::styled(hearts, Style::default().fg(Color::LightRed)),
                Span::styled("  Score ", label),
                Span::styled(state.session.score.to_string(), Style::default().fg(Color::White)),
                Span::styled("  Best ", label),
                Span::styled(
                    state.displayed_high_score().to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled("  Speed ", label),
                Span::styled(
                    format!("{:.1}", state.session.speed),
                    Style::default().fg(Color::Green),
                ),
            ])
        }
        Phase::GameOver => {
            let best = state.displayed_high_score();
            let verdict = if state.session.score > 0 && state.session.score >= best {
                "New best!"
            } else {
                "Knocked out"
            };
            Line::from(vec![
                Span::styled(verdict, Style::default().fg(Color::Red)),
                Span::styled(
                    format!("  {} cleared, best {}", state.session.score, best),
                    label,
                ),
            ])
        }
    }
}

fn controls_line(phase: Phase) -> Line<'static> {
    let action = match phase {
        Phase::Playing => " Jump (twice in the air)",
        Phase::GameOver => " Run again",
    };
    Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::White)),
        Span::styled(action, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ])
}

fn render_too_small(frame: &mut Frame, area: Rect, min_w: u16, min_h: u16) {
    let text = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!(
            "Need {}x{}, have {}x{}",
            min_w, min_h, area.width, area.height
        )),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        Rect {
            y,
            height: area.height.min(2),
            ..area
        },
    );
}

/// A `width` x `height` rect centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
