use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::stdout,
    time::{Duration, Instant},
};

mod constants;
mod game;
mod input;
mod ui;

use constants::POLL_INTERVAL_MS;
use game::Game;
use input::{map_key, map_mouse};
use ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let mut last_frame = Instant::now();

    // Game loop
    loop {
        terminal.draw(|f| ui(f, &game))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            game.reset();
                        }
                    }
                    _ => {
                        if let Some(input_event) = map_key(code, kind) {
                            game.handle_input(input_event);
                        }
                    }
                },
                Event::Mouse(mouse_event) => {
                    if let Some(input_event) = map_mouse(mouse_event, game.state()) {
                        game.handle_input(input_event);
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        game.tick(now.duration_since(last_frame));
        last_frame = now;
    }

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
