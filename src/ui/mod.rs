pub mod door_scene;
pub mod game_common;
pub mod results_scene;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI drawing function.
pub fn draw_app(frame: &mut Frame, app: &App) {
    let size = frame.size();

    let Some(run) = app.simulation.as_ref() else {
        door_scene::render_doors(frame, size, app);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(10)])
        .split(size);

    door_scene::render_doors(frame, chunks[0], app);
    let message = app.simulation_message().unwrap_or_default();
    results_scene::render_results(frame, chunks[1], &run.series, &message);
}
