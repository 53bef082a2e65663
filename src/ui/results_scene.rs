//! Convergence chart and per-batch results.

use crate::constants::{THEORETICAL_STAY_RATE, THEORETICAL_SWITCH_RATE};
use crate::simulator::ConvergenceSeries;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

const STAY_COLOR: Color = Color::Rgb(136, 132, 216);
const SWITCH_COLOR: Color = Color::Rgb(130, 202, 157);

/// What to expect from a batch of at least this many games.
const CONVERGENCE_NOTES: [(u64, &str); 6] = [
    (0, "5-10: results vary widely"),
    (100, "100: patterns settle"),
    (1_000, "1000: within ±2% of theory"),
    (10_000, "10000: within ±1% of theory"),
    (50_000, "50000: very close to theory"),
    (1_000_000, "1M: 33.33% stay, 66.67% switch"),
];

/// Render the win-rate chart (left) and the batch table (right).
pub fn render_results(frame: &mut Frame, area: Rect, series: &ConvergenceSeries, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(CONVERGENCE_NOTES.len() as u16 + 2),
        ])
        .split(chunks[1]);

    render_chart(frame, chunks[0], series, message);
    render_table(frame, side[0], series);
    render_notes(frame, side[1], series);
}

/// Index of the note that applies to a batch of `batch_size` games.
fn note_index(batch_size: u64) -> usize {
    CONVERGENCE_NOTES
        .iter()
        .rposition(|(from, _)| batch_size >= *from)
        .unwrap_or(0)
}

fn render_notes(frame: &mut Frame, area: Rect, series: &ConvergenceSeries) {
    let current = series.iter().map(|s| s.batch_size).max().map(note_index);

    let lines: Vec<Line> = CONVERGENCE_NOTES
        .iter()
        .enumerate()
        .map(|(i, (_, note))| {
            let style = if current == Some(i) {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(*note, style))
        })
        .collect();

    let notes = Paragraph::new(lines).block(
        Block::default()
            .title(" Convergence ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(notes, area);
}

/// X axis is log10 of the batch size so 5 and 1,000,000 fit together.
fn log_games(batch_size: u64) -> f64 {
    (batch_size.max(1) as f64).log10()
}

fn render_chart(frame: &mut Frame, area: Rect, series: &ConvergenceSeries, message: &str) {
    let stay: Vec<(f64, f64)> = series
        .iter()
        .map(|s| (log_games(s.batch_size), s.stay_win_rate))
        .collect();
    let switch: Vec<(f64, f64)> = series
        .iter()
        .map(|s| (log_games(s.batch_size), s.switch_win_rate))
        .collect();

    let x_max = series
        .iter()
        .map(|s| log_games(s.batch_size))
        .fold(1.0_f64, f64::max)
        .ceil();
    let stay_theory = [(0.0, THEORETICAL_STAY_RATE), (x_max, THEORETICAL_STAY_RATE)];
    let switch_theory = [(0.0, THEORETICAL_SWITCH_RATE), (x_max, THEORETICAL_SWITCH_RATE)];

    let datasets = vec![
        Dataset::default()
            .name("Theory (switch)")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&switch_theory),
        Dataset::default()
            .name("Theory (stay)")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&stay_theory),
        Dataset::default()
            .name("Switch")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SWITCH_COLOR))
            .data(&switch),
        Dataset::default()
            .name("Stay")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(STAY_COLOR))
            .data(&stay),
    ];

    let x_labels: Vec<Span> = (0..=x_max as u32)
        .map(|p| Span::raw(format!("1e{}", p)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" Win Rate vs Games - {} ", message))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightBlue)),
        )
        .x_axis(
            Axis::default()
                .title("Number of Games")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Win Rate (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );

    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame, area: Rect, series: &ConvergenceSeries) {
    let header = Row::new(vec!["Games", "Stay", "Switch"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = series
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.batch_size.to_string()),
                Cell::from(format!("{:.1}%", s.stay_win_rate)).style(Style::default().fg(STAY_COLOR)),
                Cell::from(format!("{:.1}%", s.switch_win_rate))
                    .style(Style::default().fg(SWITCH_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_games() {
        assert_eq!(log_games(1), 0.0);
        assert!((log_games(1_000_000) - 6.0).abs() < 1e-9);
        assert_eq!(log_games(0), 0.0);
    }

    #[test]
    fn test_note_for_batch_size() {
        assert_eq!(note_index(5), 0);
        assert_eq!(note_index(10), 0);
        assert_eq!(note_index(100), 1);
        assert_eq!(note_index(3000), 2);
        assert_eq!(note_index(10_000), 3);
        assert_eq!(note_index(50_000), 4);
        assert_eq!(note_index(1_000_000), 5);
    }
}
