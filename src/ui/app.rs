use crate::config::UiConfig;
use crate::game::{GameState, CELLS, SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    game: GameState,
    cursor: usize,
    should_quit: bool,
    ui: UiConfig,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        App {
            game: GameState::with_move_order(ui.ascending_moves),
            cursor: 4, // Start on the center square
            should_quit: false,
            ui,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(self.ui.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor % SIZE > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % SIZE < SIZE - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= SIZE {
                    self.cursor -= SIZE;
                }
            }
            KeyCode::Down => {
                if self.cursor + SIZE < CELLS {
                    self.cursor += SIZE;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let was_over = self.game.is_over();
                self.game.apply_move_mut(self.cursor);
                if !was_over && self.game.is_over() {
                    info!(step = self.game.current_step(), "game concluded");
                }
            }
            KeyCode::Char('s') => {
                self.game.toggle_sort_mut();
            }
            KeyCode::Char('r') => {
                self.game = GameState::with_move_order(self.game.ascending_moves());
                self.cursor = 4;
                info!("new game started");
            }
            // History never holds more than ten steps, so one digit
            // addresses any of them.
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(step) = c.to_digit(10) {
                    self.game.jump_to_mut(step as usize);
                }
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.cursor, &self.ui);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
