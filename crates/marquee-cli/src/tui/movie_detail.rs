use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use marquee_core::Movie;

use super::App;

/// Render the detail view for the movie at the given index.
pub fn render(frame: &mut Frame, app: &App, movie_idx: usize) {
    let area = frame.area();

    let Some(movie) = app.controller.state().movies().get(movie_idx) else {
        let msg = Paragraph::new("Movie not found").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Movie header
            Constraint::Min(5),    // Opening text
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_header(frame, movie, movie_idx, chunks[0]);
    render_opening_text(frame, movie, chunks[1]);
    render_help(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, movie: &Movie, movie_idx: usize, area: Rect) {
    let released = if movie.release_date.is_empty() {
        "unreleased".to_string()
    } else {
        movie.release_date.clone()
    };
    let header = Paragraph::new(format!(
        "{}. {} \u{2014} {}",
        movie_idx + 1,
        movie.title,
        released
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_opening_text(frame: &mut Frame, movie: &Movie, area: Rect) {
    let text = if movie.opening_text.is_empty() {
        Line::from(Span::styled(
            "  No opening text.",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(movie.opening_text.as_str())
    };

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Opening Text"),
    );
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("  \u{2191}/k Prev  \u{2193}/j Next  b Back  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
