//! Door game UI rendering.

use super::game_common::{create_game_layout, render_result_banner, render_status_bar};
use crate::app::App;
use crate::constants::{THEORETICAL_STAY_RATE, THEORETICAL_SWITCH_RATE};
use crate::game::{GamePhase, GameResult, MontyGame};
use crate::trial::{Door, DoorContent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the three doors, status bar and info panel.
pub fn render_doors(frame: &mut Frame, area: Rect, app: &App) {
    let game = &app.game;
    let layout = create_game_layout(frame, area, " Three Doors ", Color::Yellow, 9, 26);

    let door_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout.content);

    for door in Door::ALL {
        render_door(frame, door_chunks[door.index()], game, door);
    }

    if let (Some(result), Some(message)) = (game.game_result, result_message(game)) {
        render_result_banner(frame, layout.content, result, &message);
    }

    let (status, color) = status_text(game);
    render_status_bar(frame, layout.status_bar, &status, color, &controls(app));
    render_info_panel(frame, layout.info_panel, app);
}

fn render_door(frame: &mut Frame, area: Rect, game: &MontyGame, door: Door) {
    let state = game.door(door);
    let is_cursor = game.phase == GamePhase::Initial && game.cursor == door;
    let is_selected = game.selected() == Some(door);

    let border_color = if is_selected {
        Color::Cyan
    } else if is_cursor {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let mut title_style = Style::default().fg(border_color);
    if is_cursor || is_selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .title(Span::styled(format!(" {} ", door), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if state.is_open {
        match state.content {
            DoorContent::Prize => vec![
                Line::from(Span::styled("★", Style::default().fg(Color::LightBlue))),
                Line::from(Span::styled(
                    format!("{}!", state.content.name()),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
            DoorContent::Decoy => vec![
                Line::from(Span::styled("♞", Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    state.content.name(),
                    Style::default().fg(Color::Gray),
                )),
            ],
        }
    } else {
        let hint = match game.phase {
            GamePhase::Initial => "Choose me",
            _ => "Closed",
        };
        vec![
            Line::from(Span::styled("▐█▌", Style::default().fg(Color::Rgb(160, 110, 40)))),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ]
    };

    let y = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect::new(inner.x, y, inner.width, (lines.len() as u16).min(inner.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}

fn status_text(game: &MontyGame) -> (String, Color) {
    match game.phase {
        GamePhase::Initial => ("Pick a door!".to_string(), Color::Yellow),
        GamePhase::DoorPicked => match game.revealed {
            Some(revealed) => (
                format!(
                    "The host opened {}. Stick with your choice or switch?",
                    revealed
                ),
                Color::Yellow,
            ),
            None => ("Stick with your choice or switch?".to_string(), Color::Yellow),
        },
        GamePhase::Final => match game.game_result {
            Some(GameResult::Win) => ("You won!".to_string(), Color::Green),
            _ => ("You lost!".to_string(), Color::Red),
        },
    }
}

fn result_message(game: &MontyGame) -> Option<String> {
    let strategy = game.strategy?;
    Some(format!(
        "You chose to {}. The car was behind {}.",
        strategy.name().to_lowercase(),
        game.prize
    ))
}

fn controls(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.game.phase {
        GamePhase::Initial => vec![
            ("[←→]", "Move"),
            ("[Enter/1-3]", "Pick"),
            ("[Q]", "Quit"),
        ],
        GamePhase::DoorPicked => vec![("[S]", "Stick"), ("[W]", "Switch"), ("[Q]", "Quit")],
        GamePhase::Final if app.can_start_simulation() => {
            vec![("[R]", "Run Simulation"), ("[N]", "Play Again"), ("[Q]", "Quit")]
        }
        GamePhase::Final => vec![("[N]", "Play Again"), ("[Q]", "Quit")],
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Theory:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(" Stay   {:.2}%", THEORETICAL_STAY_RATE)),
        Line::from(format!(" Switch {:.2}%", THEORETICAL_SWITCH_RATE)),
        Line::from(""),
    ];

    if let Some(pick) = app.game.initial_pick {
        lines.push(Line::from(format!("First pick: {}", pick.number())));
    }
    if let Some(revealed) = app.game.revealed {
        lines.push(Line::from(format!("Opened:     {}", revealed.number())));
    }
    if let Some(choice) = app.game.final_choice {
        lines.push(Line::from(format!("Final:      {}", choice.number())));
    }

    if let Some(message) = app.simulation_message() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::LightBlue),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
