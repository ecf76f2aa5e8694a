use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use marquee_core::{Movie, ViewContent, EMPTY_MESSAGE};

use super::App;

/// Render the movie list view.
///
/// The content area shows exactly one of the four renderings, in fixed
/// priority order: loading, error, the list, the empty-state message.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Content
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);

    match app.controller.state().view() {
        ViewContent::Loading => render_message(frame, "Loading...", Color::Cyan, chunks[1]),
        ViewContent::Error(message) => render_message(frame, message, Color::Red, chunks[1]),
        ViewContent::Empty => render_message(frame, EMPTY_MESSAGE, Color::Yellow, chunks[1]),
        ViewContent::List(movies) => render_table(frame, app, movies, chunks[1]),
    }

    render_help(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.controller.state().movies().len();
    let title = Paragraph::new(format!("Movie Catalog    {} movies", count))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_message(frame: &mut Frame, message: &str, color: Color, area: Rect) {
    let paragraph = Paragraph::new(format!("\n  {}", message))
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, app: &App, movies: &[Movie], area: Rect) {
    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Released"),
        Cell::from("Id"),
    ])
    .height(1);

    // Calculate visible range based on viewport
    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    let visible_start = app.list_offset;
    let visible_end = (visible_start + viewport_height).min(movies.len());

    // Only render visible movies
    let rows: Vec<Row> = movies
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, movie)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(movie.title.clone()),
                Cell::from(movie.release_date.clone()),
                Cell::from(movie.id.to_string()),
            ])
            .style(style)
        })
        .collect();

    let title = if movies.len() > viewport_height {
        format!(
            "Movies [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            movies.len()
        )
    } else {
        "Movies".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Length(12),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help =
        Paragraph::new("  \u{2191}/k Up  \u{2193}/j Down  Enter Details  r Refresh  q Quit")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
