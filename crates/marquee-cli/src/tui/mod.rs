use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use marquee_api::{CatalogClient, Config, FetchController};

pub mod movie_detail;
pub mod movie_list;

/// How long to wait for a key event before repainting.
///
/// Keeps the loop responsive to fetch completions without busy-spinning.
const TICK: Duration = Duration::from_millis(100);

/// Which view the TUI is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    MovieList,
    /// Detail view for the movie at the given index.
    MovieDetail(usize),
}

/// Application state for the browse TUI.
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub controller: FetchController,
    pub selected: usize,
    pub list_offset: usize, // First visible movie in the list
    pub should_quit: bool,
}

impl App {
    /// Create a new `App` and start the initial fetch cycle.
    pub fn new(config: &Config) -> Result<Self> {
        let client = CatalogClient::new(&config.endpoint, config.timeout())?;
        let mut controller = FetchController::new(client);
        controller.trigger();

        Ok(Self {
            view: View::MovieList,
            controller,
            selected: 0,
            list_offset: 0,
            should_quit: false,
        })
    }

    fn movie_count(&self) -> usize {
        self.controller.state().movies().len()
    }

    /// Keep selection and view valid after the list changes under them.
    fn clamp_selection(&mut self) {
        let count = self.movie_count();
        if count == 0 {
            self.selected = 0;
            self.list_offset = 0;
            self.view = View::MovieList;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match &self.view {
            View::MovieList => self.handle_movie_list_key(key),
            View::MovieDetail(_) => self.handle_movie_detail_key(key),
        }
    }

    fn handle_movie_list_key(&mut self, key: KeyCode) {
        // Assume reasonable viewport height (will be refined in render)
        const VIEWPORT_HEIGHT: usize = 20;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                // Manual re-trigger; supersedes any fetch still in flight.
                self.controller.trigger();
                self.selected = 0;
                self.list_offset = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.movie_count() {
                    self.selected += 1;
                    // Scroll down if selection goes below visible area
                    if self.selected >= self.list_offset + VIEWPORT_HEIGHT {
                        self.list_offset = self.selected - VIEWPORT_HEIGHT + 1;
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    // Scroll up if selection goes above visible area
                    if self.selected < self.list_offset {
                        self.list_offset = self.selected;
                    }
                }
            }
            KeyCode::Enter => {
                if self.movie_count() > 0 {
                    self.view = View::MovieDetail(self.selected);
                }
            }
            _ => {}
        }
    }

    fn handle_movie_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => {
                self.view = View::MovieList;
            }
            KeyCode::Char('n' | 'j') | KeyCode::Down => {
                if let View::MovieDetail(idx) = self.view {
                    if idx + 1 < self.movie_count() {
                        self.view = View::MovieDetail(idx + 1);
                        self.selected = idx + 1;
                    }
                }
            }
            KeyCode::Char('p' | 'k') | KeyCode::Up => {
                if let View::MovieDetail(idx) = self.view {
                    if idx > 0 {
                        self.view = View::MovieDetail(idx - 1);
                        self.selected = idx - 1;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Run the browse TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the
/// terminal on exit (including on error).
pub async fn run_tui(config: &Config) -> Result<()> {
    let app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app);

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        if app.controller.poll() {
            app.clamp_selection();
        }

        terminal.draw(|frame| match &app.view {
            View::MovieList => movie_list::render(frame, &app),
            View::MovieDetail(idx) => movie_detail::render(frame, &app, *idx),
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
